//! HTTP client for the Atlas API.

use std::{future::Future, time::Duration};

use reqwest::{Method, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::error::{kind_for_status, ClientError},
    model::{
        api::{ErrorDto, MessageDto},
        country::{CountryDto, CountryLanguageQuery, CountryListQuery},
        favorite::FavoritesDto,
        input::{CountryCode, Language},
        user::{LoginDto, RegisterDto, UserDto},
    },
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Server side of the favorites cache.
pub trait FavoritesRemote: Send + Sync {
    /// Adds a favorite, returning the updated set.
    fn add(
        &self,
        code: &CountryCode,
    ) -> impl Future<Output = Result<Vec<CountryCode>, ClientError>> + Send;

    fn remove(&self, code: &CountryCode) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<CountryCode>, ClientError>> + Send;
}

/// Source of country detail records.
pub trait CountryFetcher: Send + Sync {
    fn fetch_country(
        &self,
        code: &CountryCode,
        language: Language,
    ) -> impl Future<Output = Result<CountryDto, ClientError>> + Send;
}

/// Client for the Atlas HTTP API.
///
/// Keeps the session cookie in its own cookie store. Clones share the store, so every
/// clone acts as the same logged in user.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:5100`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                url: base_url.to_string(),
                source,
            })?;

        Ok(Self {
            http,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn register(&self, payload: &RegisterDto) -> Result<UserDto, ClientError> {
        self.send_json(Method::POST, &["auth", "register"], Some(payload), None::<&()>)
            .await
    }

    pub async fn login(&self, payload: &LoginDto) -> Result<UserDto, ClientError> {
        self.send_json(Method::POST, &["auth", "login"], Some(payload), None::<&()>)
            .await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: MessageDto = self
            .send_json(Method::POST, &["auth", "logout"], None::<&()>, None::<&()>)
            .await?;

        Ok(())
    }

    /// The user bound to the session cookie
    pub async fn current_user(&self) -> Result<UserDto, ClientError> {
        self.send_json(Method::GET, &["auth", "user"], None::<&()>, None::<&()>)
            .await
    }

    pub async fn countries(
        &self,
        region: Option<&str>,
        name: Option<&str>,
        language: Language,
    ) -> Result<Vec<CountryDto>, ClientError> {
        let query = CountryListQuery {
            region: region.map(str::to_string),
            name: name.map(str::to_string),
            lang: Some(language.code().to_string()),
        };

        self.send_json(Method::GET, &["countries"], None::<&()>, Some(&query))
            .await
    }

    pub async fn country(
        &self,
        code: &CountryCode,
        language: Language,
    ) -> Result<CountryDto, ClientError> {
        let query = CountryLanguageQuery {
            lang: Some(language.code().to_string()),
        };

        self.send_json(
            Method::GET,
            &["countries", code.as_str()],
            None::<&()>,
            Some(&query),
        )
        .await
    }

    pub async fn favorites(&self) -> Result<Vec<CountryCode>, ClientError> {
        let dto: FavoritesDto = self
            .send_json(Method::GET, &["favorites"], None::<&()>, None::<&()>)
            .await?;

        Ok(parse_codes(dto))
    }

    pub async fn add_favorite(&self, code: &CountryCode) -> Result<Vec<CountryCode>, ClientError> {
        let dto: FavoritesDto = self
            .send_json(
                Method::POST,
                &["favorites", code.as_str()],
                None::<&()>,
                None::<&()>,
            )
            .await?;

        Ok(parse_codes(dto))
    }

    pub async fn remove_favorite(&self, code: &CountryCode) -> Result<(), ClientError> {
        let url = self.endpoint(&["favorites", code.as_str()])?;
        let response = self.send(Method::DELETE, url.clone(), None::<&()>, None::<&()>).await?;

        error_for_status(response, &url).await?;

        Ok(())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);

        Ok(url)
    }

    async fn send<B: Serialize, Q: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<Response, ClientError> {
        tracing::debug!("{method} {url}");

        let mut request = self.http.request(method, url.clone());
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request
            .send()
            .await
            .map_err(|source| request_error(source, &url))
    }

    async fn send_json<T, B, Q>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
        Q: Serialize,
    {
        let url = self.endpoint(segments)?;
        let response = self.send(method, url.clone(), body, query).await?;
        let response = error_for_status(response, &url).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|source| request_error(source, &url))?;

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn request_error(source: reqwest::Error, url: &Url) -> ClientError {
    if source.is_timeout() {
        ClientError::Timeout {
            url: url.to_string(),
        }
    } else {
        ClientError::Transport {
            url: url.to_string(),
            source,
        }
    }
}

/// Passes successful responses through, decoding the error body of the others.
async fn error_for_status(response: Response, url: &Url) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();

    Err(match serde_json::from_slice::<ErrorDto>(&body) {
        Ok(dto) => ClientError::Api {
            status: status.as_u16(),
            kind: dto.kind,
            message: dto.error,
        },
        Err(_) => ClientError::Api {
            status: status.as_u16(),
            kind: kind_for_status(status.as_u16()),
            message: fallback_message(status, url),
        },
    })
}

fn fallback_message(status: StatusCode, url: &Url) -> String {
    format!(
        "{} {} from {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("error"),
        url
    )
}

fn parse_codes(dto: FavoritesDto) -> Vec<CountryCode> {
    dto.favorites
        .iter()
        .filter_map(|raw| match CountryCode::parse(raw) {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::warn!("Ignoring favorite from server: {e}");
                None
            }
        })
        .collect()
}

impl FavoritesRemote for ApiClient {
    fn add(
        &self,
        code: &CountryCode,
    ) -> impl Future<Output = Result<Vec<CountryCode>, ClientError>> + Send {
        self.add_favorite(code)
    }

    fn remove(&self, code: &CountryCode) -> impl Future<Output = Result<(), ClientError>> + Send {
        self.remove_favorite(code)
    }

    fn list(&self) -> impl Future<Output = Result<Vec<CountryCode>, ClientError>> + Send {
        self.favorites()
    }
}

impl CountryFetcher for ApiClient {
    fn fetch_country(
        &self,
        code: &CountryCode,
        language: Language,
    ) -> impl Future<Output = Result<CountryDto, ClientError>> + Send {
        self.country(code, language)
    }
}
