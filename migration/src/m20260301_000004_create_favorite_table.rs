use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(text(Favorite::TargetKind))
                    .col(integer(Favorite::TargetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_user_id")
                            .from(Favorite::Table, Favorite::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One favorite per (user, kind, target)
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_user_target")
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .col(Favorite::TargetKind)
                    .col(Favorite::TargetId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Favorite {
    Table,
    Id,
    UserId,
    TargetKind,
    TargetId,
}
