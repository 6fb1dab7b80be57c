//! Country lookups against the REST Countries API.
//!
//! The upstream is called once per request with no caching or retry. Its responses are
//! normalized into [`CountryDto`] so handlers never expose the raw, sparsely populated
//! upstream schema.

pub mod normalize;

use country_api::model::Country;

use crate::{
    model::{
        country::CountryDto,
        input::{CountryCode, Language, Region},
    },
    server::{
        error::{country::CountryError, Error},
        service::country::normalize::normalize,
    },
};

/// Filter for [`CountryService::list_countries`]
#[derive(Clone, Debug, Default)]
pub struct CountryFilter {
    pub region: Option<Region>,
    /// Already trimmed, non-empty name fragment
    pub name: Option<String>,
    pub language: Language,
}

pub struct CountryService<'a> {
    client: &'a country_api::Client,
}

impl<'a> CountryService<'a> {
    /// Creates a new instance of [`CountryService`]
    ///
    /// # Arguments
    /// - `client` - REST Countries client, bounded by its request timeout
    pub fn new(client: &'a country_api::Client) -> Self {
        Self { client }
    }

    /// Fetches one country by cca3 code
    ///
    /// # Arguments
    /// - `code` - Validated country code
    /// - `language` - Language of the display name
    ///
    /// # Returns
    /// - `Ok(CountryDto)` - The country, with its display name in `language`
    /// - `Err(Error::CountryError(CountryError::NotFound))` - No country has this cca3 code
    /// - `Err(Error::CountryError(CountryError::UpstreamUnavailable))` - Upstream request failed
    pub async fn fetch_country_by_code(
        &self,
        code: &CountryCode,
        language: Language,
    ) -> Result<CountryDto, Error> {
        let countries = match self.client.country_by_code(code.as_str()).await {
            Ok(countries) => countries,
            Err(err) if err.is_not_found() => {
                return Err(CountryError::NotFound(code.to_string()).into())
            }
            Err(err) => return Err(CountryError::UpstreamUnavailable(err).into()),
        };

        // `/alpha` also resolves cca2, ccn3 and cioc codes, only an exact cca3 match counts
        countries
            .into_iter()
            .find(|country| {
                country
                    .cca3
                    .as_deref()
                    .is_some_and(|cca3| cca3.trim().eq_ignore_ascii_case(code.as_str()))
            })
            .and_then(|country| normalize(country, language))
            .ok_or_else(|| CountryError::NotFound(code.to_string()).into())
    }

    /// Lists countries matching the filter, sorted by display name then code
    ///
    /// A name fragment matching no country is an empty list, not an error.
    ///
    /// # Arguments
    /// - `filter` - Optional region, name fragment and display language
    ///
    /// # Returns
    /// - `Ok(Vec<CountryDto>)` - Matching countries, records without a code dropped
    /// - `Err(Error::CountryError(CountryError::UpstreamUnavailable))` - Upstream request failed
    pub async fn list_countries(&self, filter: &CountryFilter) -> Result<Vec<CountryDto>, Error> {
        let countries = match (&filter.region, &filter.name) {
            (Some(region), _) => self.client.countries_by_region(region.name()).await,
            (None, Some(name)) => self.client.countries_by_name(name).await,
            (None, None) => self.client.all_countries().await,
        };

        let countries: Vec<Country> = match countries {
            Ok(countries) => countries,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(CountryError::UpstreamUnavailable(err).into()),
        };

        let needle = filter.name.as_deref().map(str::to_lowercase);

        let mut dtos: Vec<CountryDto> = countries
            .into_iter()
            .filter_map(|country| normalize(country, filter.language))
            .filter(|dto| match (&filter.region, &needle) {
                // The upstream only filtered by region, apply the name locally
                (Some(_), Some(needle)) => name_matches(dto, needle),
                _ => true,
            })
            .collect();

        dtos.sort_by(|a, b| {
            a.name
                .display
                .to_lowercase()
                .cmp(&b.name.display.to_lowercase())
                .then_with(|| a.code.cmp(&b.code))
        });
        dtos.dedup_by(|a, b| a.code == b.code);

        tracing::debug!(
            region = ?filter.region,
            name = ?filter.name,
            count = dtos.len(),
            "Listed countries"
        );

        Ok(dtos)
    }
}

fn name_matches(dto: &CountryDto, needle: &str) -> bool {
    let official = dto.name.official.as_deref().unwrap_or_default();

    [dto.name.common.as_str(), official, dto.name.display.as_str()]
        .iter()
        .any(|name| name.to_lowercase().contains(needle))
}
