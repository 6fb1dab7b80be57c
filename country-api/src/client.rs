use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::debug;

use crate::{
    error::Error,
    model::{Country, OneOrMany},
};

/// Public REST Countries v3.1 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Upper bound on a single upstream request, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fields requested from `/all`, which refuses to answer without a field list
/// and accepts at most ten of them.
pub const LIST_FIELDS: &[&str] = &[
    "name",
    "cca3",
    "flags",
    "population",
    "region",
    "subregion",
    "capital",
    "languages",
    "area",
    "continents",
];

/// Client for the REST Countries API.
///
/// Cheap to clone, the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Creates a [`ClientBuilder`] with the public endpoint and default timeout.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Base URL every request is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the countries matching a code via `/alpha/{code}`.
    ///
    /// The upstream resolves cca2, ccn3 and cioc codes on this route as well, so callers
    /// wanting an exact cca3 match have to filter the result.
    pub async fn country_by_code(&self, code: &str) -> Result<Vec<Country>, Error> {
        self.get(&["alpha", code], &[]).await
    }

    /// Fetches every country in a region via `/region/{region}`.
    pub async fn countries_by_region(&self, region: &str) -> Result<Vec<Country>, Error> {
        self.get(&["region", region], &[]).await
    }

    /// Fetches countries whose name contains `name` via `/name/{name}`.
    pub async fn countries_by_name(&self, name: &str) -> Result<Vec<Country>, Error> {
        self.get(&["name", name], &[]).await
    }

    /// Fetches every country via `/all`, restricted to [`LIST_FIELDS`].
    pub async fn all_countries(&self) -> Result<Vec<Country>, Error> {
        self.get(&["all"], &[("fields", LIST_FIELDS.join(","))])
            .await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Vec<Country>, Error> {
        let url = self.endpoint(segments)?;
        debug!("GET {url}");

        let mut request = self.http.get(url.clone());
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request
            .send()
            .await
            .map_err(|err| request_error(err, &url))?;

        match response.status() {
            status if status.is_success() => {
                let body = response
                    .bytes()
                    .await
                    .map_err(|err| request_error(err, &url))?;

                let countries: OneOrMany =
                    serde_json::from_slice(&body).map_err(|source| Error::Decode {
                        url: url.to_string(),
                        source,
                    })?;

                Ok(countries.into())
            }
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => Err(Error::NotFound {
                url: url.to_string(),
            }),
            status => Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
        }
    }
}

fn request_error(err: reqwest::Error, url: &Url) -> Error {
    if err.is_timeout() {
        Error::Timeout {
            url: url.to_string(),
        }
    } else {
        Error::Http(err)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

impl ClientBuilder {
    /// Overrides the upstream base URL, used to point tests at a mock server.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url =
            Url::parse(&self.base_url).map_err(|_| Error::InvalidBaseUrl(self.base_url.clone()))?;

        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(self.base_url));
        }

        let mut http = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            http = http.user_agent(user_agent);
        }

        Ok(Client {
            http: http.build()?,
            base_url,
        })
    }
}
