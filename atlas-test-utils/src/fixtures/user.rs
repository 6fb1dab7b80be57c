use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn user(&mut self) -> UserFixtures<'_> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl UserFixtures<'_> {
    /// Inserts a user with a placeholder password hash.
    pub async fn insert_user(
        &self,
        name: &str,
        email: &str,
    ) -> Result<entity::atlas_user::Model, TestError> {
        Ok(
            entity::prelude::AtlasUser::insert(entity::atlas_user::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                email: ActiveValue::Set(email.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
