//! Normalized country records.
//!
//! Every attribute is always present when serialized: scalars the upstream may omit are
//! `null`, collections are empty. Clients never need to distinguish a missing key from a
//! missing value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CountryDto {
    /// ISO 3166-1 alpha-3 code
    pub code: String,
    pub name: CountryNameDto,
    /// Common names keyed by ISO 639-2 language code
    pub translations: BTreeMap<String, String>,
    pub flag: FlagDto,
    pub population: Option<u64>,
    /// Square kilometres
    pub area: Option<f64>,
    pub capital: Vec<String>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub continents: Vec<String>,
    /// Language names keyed by ISO 639-3 code
    pub languages: BTreeMap<String, String>,
    /// Keyed by ISO 4217 code
    pub currencies: BTreeMap<String, CurrencyDto>,
    pub timezones: Vec<String>,
    /// cca3 codes of bordering countries
    pub borders: Vec<String>,
    /// Full international dialling codes such as `+33`
    pub calling_codes: Vec<String>,
    pub top_level_domains: Vec<String>,
    pub independent: Option<bool>,
    pub un_member: Option<bool>,
    pub driving_side: Option<String>,
    pub coordinates: Option<CoordinatesDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CountryNameDto {
    pub common: String,
    pub official: Option<String>,
    /// Name in the requested language, `common` when no translation exists
    pub display: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FlagDto {
    pub png: Option<String>,
    pub svg: Option<String>,
    /// Text description of the flag
    pub alt: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CurrencyDto {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CoordinatesDto {
    pub lat: f64,
    pub lng: f64,
}

/// Query string of `GET /api/v1/countries`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct CountryListQuery {
    /// Africa, Americas, Antarctic, Asia, Europe or Oceania
    pub region: Option<String>,
    /// Case-insensitive name fragment
    pub name: Option<String>,
    /// en, si, ta, de or zh
    pub lang: Option<String>,
}

/// Query string of `GET /api/v1/countries/{code}`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct CountryLanguageQuery {
    /// en, si, ta, de or zh
    pub lang: Option<String>,
}
