use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite(&mut self) -> FavoriteFixtures<'_> {
        FavoriteFixtures { test: self }
    }
}

pub struct FavoriteFixtures<'a> {
    test: &'a mut TestContext,
}

impl FavoriteFixtures<'_> {
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        country_code: &str,
    ) -> Result<entity::atlas_favorite::Model, TestError> {
        Ok(
            entity::prelude::AtlasFavorite::insert(entity::atlas_favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                country_code: ActiveValue::Set(country_code.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
