use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_atlas_user::AtlasUser;

static PK_FAVORITE: &str = "pk-atlas_favorite";
static FK_FAVORITE_USER_ID: &str = "fk-atlas_favorite-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AtlasFavorite::Table)
                    .if_not_exists()
                    .col(integer(AtlasFavorite::UserId))
                    .col(string_len(AtlasFavorite::CountryCode, 3))
                    .col(timestamp(AtlasFavorite::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name(PK_FAVORITE)
                            .col(AtlasFavorite::UserId)
                            .col(AtlasFavorite::CountryCode),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_USER_ID)
                            .from(AtlasFavorite::Table, AtlasFavorite::UserId)
                            .to(AtlasUser::Table, AtlasUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AtlasFavorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AtlasFavorite {
    Table,
    UserId,
    CountryCode,
    CreatedAt,
}
