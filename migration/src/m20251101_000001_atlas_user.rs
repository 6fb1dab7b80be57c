use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AtlasUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AtlasUser::Id))
                    .col(string(AtlasUser::Name))
                    .col(string_uniq(AtlasUser::Email))
                    .col(string(AtlasUser::PasswordHash))
                    .col(timestamp(AtlasUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AtlasUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AtlasUser {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    CreatedAt,
}
