//! Raw REST Countries record schema.
//!
//! Field names follow the upstream JSON. Every field is optional because the upstream
//! omits keys freely (Antarctica has no capital, Bouvet Island no languages, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Country {
    pub cca3: Option<String>,
    pub name: Option<CountryName>,
    /// Keyed by ISO 639-2 language code (`deu`, `zho`, ...).
    pub translations: Option<BTreeMap<String, Translation>>,
    pub population: Option<u64>,
    /// Square kilometres.
    pub area: Option<f64>,
    pub capital: Option<Vec<String>>,
    pub region: Option<String>,
    pub subregion: Option<String>,
    pub continents: Option<Vec<String>>,
    pub languages: Option<BTreeMap<String, String>>,
    pub currencies: Option<BTreeMap<String, Currency>>,
    pub timezones: Option<Vec<String>>,
    pub borders: Option<Vec<String>>,
    pub idd: Option<Idd>,
    pub tld: Option<Vec<String>>,
    pub independent: Option<bool>,
    pub un_member: Option<bool>,
    pub car: Option<Car>,
    pub latlng: Option<Vec<f64>>,
    pub flags: Option<Flags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryName {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    pub common: Option<String>,
    pub official: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

/// International direct dialling prefix, split into root (`+3`) and suffixes (`3`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Idd {
    pub root: Option<String>,
    pub suffixes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Car {
    pub side: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

/// The upstream answers `/alpha/{code}` with an array, but older deployments answer
/// with a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<Country>),
    One(Box<Country>),
}

impl From<OneOrMany> for Vec<Country> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(countries) => countries,
            OneOrMany::One(country) => vec![*country],
        }
    }
}
