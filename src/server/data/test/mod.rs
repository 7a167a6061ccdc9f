mod people;
mod planet;
mod user;
