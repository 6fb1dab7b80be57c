//! Validated request inputs.
//!
//! Raw strings from paths, query strings and request bodies are parsed into these types
//! once, at the edge, so services never see an unchecked country code or language.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid country code {0:?}, expected three letters such as \"FRA\"")]
    CountryCode(String),
    #[error("Unsupported language {0:?}, expected one of en, si, ta, de, zh")]
    Language(String),
    #[error(
        "Unknown region {0:?}, expected one of Africa, Americas, Antarctic, Asia, Europe, Oceania"
    )]
    Region(String),
    #[error("Name search must be between 1 and {max} characters", max = NAME_QUERY_MAX_CHARS)]
    NameQuery,
    #[error("Name must be between 1 and {max} characters", max = USER_NAME_MAX_CHARS)]
    UserName,
    #[error("Email address {0:?} is not valid")]
    Email(String),
    #[error("Password must be at least {min} characters", min = PASSWORD_MIN_CHARS)]
    Password,
    #[error("Invalid request body: {0}")]
    Body(String),
    #[error("Invalid query string: {0}")]
    Query(String),
}

pub const NAME_QUERY_MAX_CHARS: usize = 100;
pub const USER_NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 8;

/// ISO 3166-1 alpha-3 code, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a code, accepting any letter case (`fra`, `Fra`, `FRA`).
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(ValidationError::CountryCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display languages offered by the explorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    /// Sinhala
    Si,
    /// Tamil
    Ta,
    De,
    Zh,
}

impl Language {
    pub const ALL: [Language; 5] = [Self::En, Self::Si, Self::Ta, Self::De, Self::Zh];

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let lower = raw.trim().to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == lower)
            .ok_or_else(|| ValidationError::Language(raw.to_string()))
    }

    /// ISO 639-1 code used in query strings.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Si => "si",
            Self::Ta => "ta",
            Self::De => "de",
            Self::Zh => "zh",
        }
    }

    /// Key into the upstream `translations` map (ISO 639-2).
    ///
    /// English is the upstream's base language and has no translation entry.
    pub fn translation_key(self) -> Option<&'static str> {
        match self {
            Self::En => None,
            Self::Si => Some("sin"),
            Self::Ta => Some("tam"),
            Self::De => Some("deu"),
            Self::Zh => Some("zho"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Self::Africa,
        Self::Americas,
        Self::Antarctic,
        Self::Asia,
        Self::Europe,
        Self::Oceania,
    ];

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();

        Self::ALL
            .into_iter()
            .find(|region| region.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::Region(raw.to_string()))
    }

    /// Name as the upstream spells it in the `region` field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Antarctic => "Antarctic",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Region {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Trimmed, non-empty name fragment for country search.
pub fn parse_name_query(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len == 0 || len > NAME_QUERY_MAX_CHARS {
        return Err(ValidationError::NameQuery);
    }

    Ok(trimmed.to_string())
}
