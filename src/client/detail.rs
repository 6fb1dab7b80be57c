//! Country detail view state.
//!
//! Each [`CountryDetail::show`] takes a ticket. A response is applied only while its ticket
//! is still the latest and still names the displayed code, so a slow response for a
//! country the user already left never replaces the current one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    client::api::CountryFetcher,
    model::{
        country::CountryDto,
        input::{CountryCode, Language},
    },
};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading {
        code: CountryCode,
    },
    Loaded(Box<CountryDto>),
    /// The server has no country for the code
    NoData {
        code: CountryCode,
    },
    Failed {
        code: CountryCode,
        error: String,
    },
}

#[derive(Debug, Default)]
struct Displayed {
    ticket: u64,
    state: DetailState,
}

pub struct CountryDetail<F> {
    fetcher: F,
    displayed: Mutex<Displayed>,
}

impl<F: CountryFetcher> CountryDetail<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            displayed: Mutex::new(Displayed::default()),
        }
    }

    pub fn state(&self) -> DetailState {
        self.displayed().state.clone()
    }

    /// Loads and displays a country.
    ///
    /// Returns whether the response was applied; `false` means another `show` or a
    /// [`clear`](Self::clear) superseded this one while it was in flight.
    pub async fn show(&self, code: &CountryCode, language: Language) -> bool {
        let ticket = {
            let mut displayed = self.displayed();
            displayed.ticket += 1;
            displayed.state = DetailState::Loading { code: code.clone() };
            displayed.ticket
        };

        let result = self.fetcher.fetch_country(code, language).await;

        let mut displayed = self.displayed();
        let current = displayed.ticket == ticket
            && matches!(&displayed.state, DetailState::Loading { code: shown } if shown == code);

        if !current {
            tracing::debug!("Dropping superseded response for {code}");
            return false;
        }

        displayed.state = match result {
            Ok(country) if country.code == code.as_str() => DetailState::Loaded(Box::new(country)),
            Ok(country) => DetailState::Failed {
                code: code.clone(),
                error: format!("Expected country {code}, received {}", country.code),
            },
            Err(e) if e.is_not_found() => DetailState::NoData { code: code.clone() },
            Err(e) => {
                tracing::warn!("Failed to load country {code}: {e}");
                DetailState::Failed {
                    code: code.clone(),
                    error: e.to_string(),
                }
            }
        };

        true
    }

    /// Leaves the detail view, superseding any request in flight.
    pub fn clear(&self) {
        let mut displayed = self.displayed();
        displayed.ticket += 1;
        displayed.state = DetailState::Idle;
    }

    fn displayed(&self) -> MutexGuard<'_, Displayed> {
        self.displayed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
