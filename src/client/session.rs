//! Login-scoped client state.
//!
//! A [`ClientSession`] exists only while a user is logged in. Creating one authenticates
//! and loads the user's favorites; [`ClientSession::logout`] consumes it and wipes the
//! local favorites cache.

use std::sync::Arc;

use crate::{
    client::{
        api::ApiClient,
        error::ClientError,
        favorites::FavoritesSync,
        storage::{self, KeyValueStore},
    },
    model::user::{LoginDto, RegisterDto, UserDto},
};

pub struct ClientSession {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    user: UserDto,
    favorites: FavoritesSync<ApiClient>,
}

impl ClientSession {
    /// Creates an account and logs it in.
    pub async fn register(
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
        payload: &RegisterDto,
    ) -> Result<Self, ClientError> {
        payload.validate()?;

        let user = api.register(payload).await?;

        Ok(Self::start(api, store, user).await)
    }

    pub async fn login(
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
        payload: &LoginDto,
    ) -> Result<Self, ClientError> {
        let user = api.login(payload).await?;

        Ok(Self::start(api, store, user).await)
    }

    /// Resumes the session of an existing cookie, `None` when the server doesn't know it.
    pub async fn restore(
        api: ApiClient,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Option<Self>, ClientError> {
        match api.current_user().await {
            Ok(user) => Ok(Some(Self::start(api, store, user).await)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn start(api: ApiClient, store: Arc<dyn KeyValueStore>, user: UserDto) -> Self {
        tracing::debug!("Starting session for user {}", user.id);

        let favorites = FavoritesSync::new(api.clone(), store.clone());

        // A failed load keeps the cached favorites until the next load
        if let Err(e) = favorites.load_favorites().await {
            tracing::warn!("Failed to load favorites for user {}: {e}", user.id);
        }

        Self {
            api,
            store,
            user,
            favorites,
        }
    }

    pub fn user(&self) -> &UserDto {
        &self.user
    }

    pub fn favorites(&self) -> &FavoritesSync<ApiClient> {
        &self.favorites
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Ends the session on the server and clears the local favorites cache.
    ///
    /// The cache is cleared even when the server call fails.
    pub async fn logout(self) -> Result<(), ClientError> {
        let result = self.api.logout().await;

        storage::clear_favorites(self.store.as_ref())?;

        result
    }
}
