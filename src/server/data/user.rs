use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// Fails with a unique constraint violation if the email is already registered.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<entity::atlas_user::Model, DbErr> {
        let user = entity::atlas_user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::atlas_user::Model>, DbErr> {
        entity::prelude::AtlasUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Finds a user by email, which must already be normalized
    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::atlas_user::Model>, DbErr> {
        entity::prelude::AtlasUser::find()
            .filter(entity::atlas_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use atlas_test_utils::prelude::*;
        use sea_orm::SqlErr;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_atlas_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("Ada", "ada@example.com", "hash").await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.email, "ada@example.com");

            Ok(())
        }

        /// Expect a unique constraint violation when the email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_atlas_tables().build().await?;
            test.user().insert_user("Ada", "ada@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("Other", "ada@example.com", "hash").await;

            assert!(matches!(
                result.unwrap_err().sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ));

            Ok(())
        }

        /// Expect Error when required tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.create("Ada", "ada@example.com", "hash").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_id {
        use atlas_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Some when the user exists
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_atlas_tables().build().await?;
            let user_model = test.user().insert_user("Ada", "ada@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(user_model.id).await;

            assert!(matches!(result, Ok(Some(ref user)) if user.id == user_model.id));

            Ok(())
        }

        /// Expect None when the user does not exist
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_atlas_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_id(1).await;

            assert!(matches!(result, Ok(None)));

            Ok(())
        }
    }

    mod get_by_email {
        use atlas_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect the matching user when the email is registered
        #[tokio::test]
        async fn finds_user_by_email() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_atlas_tables().build().await?;
            test.user().insert_user("Ada", "ada@example.com").await?;
            test.user().insert_user("Grace", "grace@example.com").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_email("grace@example.com").await?;

            assert_eq!(result.map(|u| u.name), Some("Grace".to_string()));

            Ok(())
        }

        /// Expect None for an unknown email
        #[tokio::test]
        async fn returns_none_for_unknown_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_atlas_tables().build().await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get_by_email("nobody@example.com").await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}
