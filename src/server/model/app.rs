use sea_orm::DatabaseConnection;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub country_client: country_api::Client,
}

impl From<(DatabaseConnection, country_api::Client)> for AppState {
    fn from((db, country_client): (DatabaseConnection, country_api::Client)) -> Self {
        Self { db, country_client }
    }
}
