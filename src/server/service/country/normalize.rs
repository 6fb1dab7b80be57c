//! Conversion of raw upstream records into [`CountryDto`].

use country_api::model::Country;

use crate::model::{
    country::{CoordinatesDto, CountryDto, CountryNameDto, CurrencyDto, FlagDto},
    input::Language,
};

/// Normalizes a record, returning `None` when it has no cca3 code.
pub fn normalize(country: Country, language: Language) -> Option<CountryDto> {
    let code = country
        .cca3
        .filter(|code| !code.trim().is_empty())?
        .trim()
        .to_ascii_uppercase();

    let name = country.name.unwrap_or_default();
    let translations = country.translations.unwrap_or_default();

    let common = name
        .common
        .filter(|common| !common.is_empty())
        .unwrap_or_else(|| code.clone());

    let display = language
        .translation_key()
        .and_then(|key| translations.get(key))
        .and_then(|translation| translation.common.clone())
        .filter(|translated| !translated.is_empty())
        .unwrap_or_else(|| common.clone());

    let translations = translations
        .into_iter()
        .filter_map(|(key, translation)| translation.common.map(|common| (key, common)))
        .collect();

    let flag = country
        .flags
        .map(|flags| FlagDto {
            png: flags.png,
            svg: flags.svg,
            alt: flags.alt,
        })
        .unwrap_or_default();

    let currencies = country
        .currencies
        .unwrap_or_default()
        .into_iter()
        .map(|(code, currency)| {
            (
                code,
                CurrencyDto {
                    name: currency.name,
                    symbol: currency.symbol,
                },
            )
        })
        .collect();

    Some(CountryDto {
        code,
        name: CountryNameDto {
            common,
            official: name.official,
            display,
        },
        translations,
        flag,
        population: country.population,
        area: country.area.filter(|area| area.is_finite()),
        capital: country.capital.unwrap_or_default(),
        region: country.region,
        subregion: country.subregion.filter(|subregion| !subregion.is_empty()),
        continents: country.continents.unwrap_or_default(),
        languages: country.languages.unwrap_or_default(),
        currencies,
        timezones: country.timezones.unwrap_or_default(),
        borders: country.borders.unwrap_or_default(),
        calling_codes: calling_codes(country.idd),
        top_level_domains: country.tld.unwrap_or_default(),
        independent: country.independent,
        un_member: country.un_member,
        driving_side: country.car.and_then(|car| car.side),
        coordinates: coordinates(country.latlng),
    })
}

/// Joins the dialling root with each suffix, or returns the root alone without suffixes.
fn calling_codes(idd: Option<country_api::model::Idd>) -> Vec<String> {
    let Some(idd) = idd else {
        return Vec::new();
    };

    let Some(root) = idd.root.filter(|root| !root.is_empty()) else {
        return Vec::new();
    };

    match idd.suffixes {
        Some(suffixes) if !suffixes.is_empty() => suffixes
            .into_iter()
            .map(|suffix| format!("{root}{suffix}"))
            .collect(),
        _ => vec![root],
    }
}

fn coordinates(latlng: Option<Vec<f64>>) -> Option<CoordinatesDto> {
    match latlng.as_deref() {
        Some(&[lat, lng]) if lat.is_finite() && lng.is_finite() => {
            Some(CoordinatesDto { lat, lng })
        }
        _ => None,
    }
}
