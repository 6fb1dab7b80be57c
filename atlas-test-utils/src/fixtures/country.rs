//! REST Countries records and mock endpoints.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::TestContext;

/// A complete upstream record for `code`.
///
/// Tests overwrite individual fields through indexing:
///
/// ```ignore
/// let mut germany = country_json("DEU", "Germany");
/// germany["translations"] = json!({"deu": {"common": "Deutschland"}});
/// ```
pub fn country_json(code: &str, common: &str) -> Value {
    let lower = code.to_ascii_lowercase();

    json!({
        "cca3": code,
        "name": {
            "common": common,
            "official": format!("Republic of {common}"),
        },
        "translations": {},
        "flags": {
            "png": format!("https://flagcdn.com/w320/{lower}.png"),
            "svg": format!("https://flagcdn.com/{lower}.svg"),
            "alt": format!("The flag of {common}"),
        },
        "population": 1_250_000,
        "area": 12_345.6,
        "capital": [format!("{common} City")],
        "region": "Europe",
        "subregion": "Western Europe",
        "continents": ["Europe"],
        "languages": {"eng": "English"},
        "currencies": {"EUR": {"name": "Euro", "symbol": "€"}},
        "timezones": ["UTC+01:00"],
        "borders": [],
        "idd": {"root": "+3", "suffixes": ["3"]},
        "tld": [format!(".{}", &lower[..2.min(lower.len())])],
        "independent": true,
        "unMember": true,
        "car": {"side": "right"},
        "latlng": [46.0, 2.0],
    })
}

impl TestContext {
    pub fn country(&mut self) -> CountryFixtures<'_> {
        CountryFixtures { test: self }
    }
}

pub struct CountryFixtures<'a> {
    test: &'a mut TestContext,
}

impl CountryFixtures<'_> {
    /// Answers `GET {path}` with a JSON array of `countries`.
    pub fn create_countries_endpoint(
        &mut self,
        path: &str,
        countries: &[Value],
        expected_requests: usize,
    ) -> Mock {
        self.test
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::from(countries.to_vec()).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Answers `GET /all` for any field list.
    pub fn create_all_endpoint(&mut self, countries: &[Value], expected_requests: usize) -> Mock {
        self.test
            .server
            .mock("GET", "/all")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::from(countries.to_vec()).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Answers `GET {path}` with `status` and the upstream's error body.
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.test
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({"status": status, "message": "Not Found"}).to_string())
            .expect(expected_requests)
            .create()
    }
}
