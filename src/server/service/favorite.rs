use sea_orm::DatabaseConnection;

use crate::{
    model::input::CountryCode,
    server::{data::favorite::FavoriteRepository, error::Error},
};

/// Per-user favorite countries.
///
/// Callers are expected to have resolved the user through the session first.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a country as favorite, a no-op if it already is
    ///
    /// # Arguments
    /// - `user_id` - ID of the logged in user
    /// - `code` - Validated country code
    ///
    /// # Returns
    /// - `Ok(())` - The country is a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(&self, user_id: i32, code: &CountryCode) -> Result<(), Error> {
        let inserted = FavoriteRepository::new(self.db)
            .insert(user_id, code.as_str())
            .await?;

        tracing::debug!(user_id, code = %code, inserted, "Added favorite");

        Ok(())
    }

    /// Unmarks a country, a no-op if it wasn't a favorite
    ///
    /// # Returns
    /// - `Ok(())` - The country is not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, code: &CountryCode) -> Result<(), Error> {
        let result = FavoriteRepository::new(self.db)
            .delete(user_id, code.as_str())
            .await?;

        tracing::debug!(
            user_id,
            code = %code,
            removed = result.rows_affected,
            "Removed favorite"
        );

        Ok(())
    }

    /// Lists the user's favorite country codes, sorted
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Codes in ascending order, empty when there are none
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn list_favorites(&self, user_id: i32) -> Result<Vec<String>, Error> {
        Ok(FavoriteRepository::new(self.db)
            .get_codes_by_user_id(user_id)
            .await?)
    }
}
