use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but its value cannot be used.
    ///
    /// Check the documentation or `.env.example` file for the expected format of
    /// each configuration variable.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// Value found in the environment
        value: String,
    },
}
