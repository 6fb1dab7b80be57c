use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use entity::atlas_favorite::Column;

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a favorite, doing nothing if the pair already exists
    ///
    /// Returns the number of rows inserted, 0 when the favorite was already present.
    pub async fn insert(&self, user_id: i32, country_code: &str) -> Result<u64, DbErr> {
        let favorite = entity::atlas_favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            country_code: ActiveValue::Set(country_code.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::AtlasFavorite::insert(favorite)
            .on_conflict(
                OnConflict::columns([Column::UserId, Column::CountryCode])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32, country_code: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::AtlasFavorite::delete_by_id((user_id, country_code.to_string()))
            .exec(self.db)
            .await
    }

    /// Gets the country codes a user has favorited, sorted ascending
    pub async fn get_codes_by_user_id(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        entity::prelude::AtlasFavorite::find()
            .select_only()
            .column(Column::CountryCode)
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::CountryCode)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }
}
