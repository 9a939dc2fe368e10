use std::sync::mpsc::Sender;
use std::thread;

use log::{debug, error};
use thiserror::Error;

use crate::config::EventsConfig;
use crate::events::{DayRecord, EventKind};
use crate::time::YearMonth;

/// Read-only client for the external date-events source.
///
/// The endpoint, key and country are injected at construction time, nothing
/// is read from process-global state.
#[derive(Debug, Clone)]
pub struct EventsClient {
    url: String,
    api_key: String,
    country: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] minreq::Error),
    #[error("server responded with {code} {reason}")]
    Status { code: i32, reason: String },
    #[error("response is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

impl EventsClient {
    #[must_use]
    pub fn new(config: &EventsConfig) -> Self {
        Self {
            url: config.url().to_string(),
            api_key: config.api_key().to_string(),
            country: config.country().to_string(),
        }
    }

    fn request_url(&self, kind: EventKind) -> String {
        format!(
            "{}?country={}&type={}",
            self.url,
            self.country,
            kind.as_query()
        )
    }

    /// Fetches all records of the given kind for the configured country.
    pub fn fetch(&self, kind: EventKind) -> Result<Vec<DayRecord>, FetchError> {
        let url = self.request_url(kind);
        debug!("requesting \"{}\"", url);

        let response = minreq::get(&url)
            .with_header("X-Api-Key", &self.api_key)
            .send()?;

        if !(200..300).contains(&response.status_code) {
            return Err(FetchError::Status {
                code: response.status_code,
                reason: response.reason_phrase.clone(),
            });
        }

        Ok(serde_json::from_slice(response.as_bytes())?)
    }

    /// Fetches on a worker thread and delivers the outcome over `sender`.
    ///
    /// A failed fetch is logged and delivers nothing, so the receiving side
    /// keeps whatever data it already has.
    pub fn fetch_in_background(
        &self,
        issued_for: YearMonth,
        kind: EventKind,
        sender: Sender<FetchResult>,
    ) {
        let client = self.clone();

        thread::spawn(move || match client.fetch(kind) {
            Ok(records) => {
                debug!(
                    "received {} {} records for {}",
                    records.len(),
                    kind,
                    issued_for
                );
                let _ = sender.send(FetchResult::new(issued_for, kind, records));
            }
            Err(error) => error!("failed to fetch {} data: {}", kind, error),
        });
    }
}

/// The outcome of a single fetch, tagged with the month it was issued for.
///
/// The tag lets a late arrival be told apart from data for the month that is
/// currently on display.
#[derive(Debug, Clone)]
pub struct FetchResult {
    issued_for: YearMonth,
    kind: EventKind,
    records: Vec<DayRecord>,
}

impl FetchResult {
    #[must_use]
    pub fn new(issued_for: YearMonth, kind: EventKind, records: Vec<DayRecord>) -> Self {
        Self {
            issued_for,
            kind,
            records,
        }
    }

    pub fn issued_for(&self) -> YearMonth {
        self.issued_for
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub fn into_records(self) -> Vec<DayRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_url() {
        let config: EventsConfig = toml::from_str(concat!(
            "url = \"https://api.example.com/v1/holidays\"\n",
            "api_key = \"secret\"\n",
        ))
        .expect("the config should be valid");
        let client = EventsClient::new(&config);

        assert_eq!(
            client.request_url(EventKind::NationalHoliday),
            "https://api.example.com/v1/holidays?country=PL&type=national_holiday"
        );
        assert_eq!(
            client.request_url(EventKind::Observance),
            "https://api.example.com/v1/holidays?country=PL&type=observance"
        );
    }
}
