//! Display formatting for country attributes.

use std::collections::BTreeMap;

use crate::model::country::{CoordinatesDto, CurrencyDto};

pub const NOT_AVAILABLE: &str = "N/A";

/// `67.4M`, `3.4K` or the plain number below a thousand.
///
/// The unit is chosen after rounding to one decimal, so `999_950` is `1.0M`.
pub fn format_population(population: Option<u64>) -> String {
    let Some(n) = population else {
        return NOT_AVAILABLE.to_string();
    };

    let millions = round_tenth(n as f64 / 1_000_000.0);
    let thousands = round_tenth(n as f64 / 1_000.0);

    if n >= 1_000_000 || thousands >= 1_000.0 {
        format!("{millions:.1}M")
    } else if n >= 1_000 {
        format!("{thousands:.1}K")
    } else {
        n.to_string()
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Area with thousands separators and at most three decimals, e.g. `551,695 km²`.
pub fn format_area(area: Option<f64>) -> String {
    match area {
        Some(area) if area.is_finite() => format!("{} km²", group_thousands(area)),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (integer != "0" || !fraction.is_empty()) {
        "-"
    } else {
        ""
    };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction}")
    }
}

/// Comma separated list, `N/A` when empty.
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    join_or(items.iter().map(AsRef::as_ref), NOT_AVAILABLE)
}

/// Border codes, `None` for countries without land borders.
pub fn format_borders<S: AsRef<str>>(borders: &[S]) -> String {
    join_or(borders.iter().map(AsRef::as_ref), "None")
}

/// `Euro (€)`, falling back to the currency code when the name is missing.
pub fn format_currencies(currencies: &BTreeMap<String, CurrencyDto>) -> String {
    let formatted: Vec<String> = currencies
        .iter()
        .map(|(code, currency)| {
            let name = currency.name.as_deref().unwrap_or(code);
            match &currency.symbol {
                Some(symbol) => format!("{name} ({symbol})"),
                None => name.to_string(),
            }
        })
        .collect();

    format_list(&formatted)
}

pub fn format_coordinates(coordinates: Option<&CoordinatesDto>) -> String {
    match coordinates {
        Some(CoordinatesDto { lat, lng }) => format!("{lat}, {lng}"),
        None => NOT_AVAILABLE.to_string(),
    }
}

pub fn yes_no(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "Yes",
        Some(false) => "No",
        None => NOT_AVAILABLE,
    }
}

/// First entry of a list such as capitals or continents
pub fn first_or_na<S: AsRef<str>>(items: &[S]) -> &str {
    items.first().map_or(NOT_AVAILABLE, AsRef::as_ref)
}

fn join_or<'a>(items: impl Iterator<Item = &'a str>, empty: &str) -> String {
    let joined = items.collect::<Vec<_>>().join(", ");

    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}
