use std::fs::File;
use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;

use crate::time::TimeStamp;
use crate::utils;

/// Everything the application needs to know, read from a toml file.
///
/// ```toml
/// [events]
/// url = "https://api.example.com/v1/holidays"
/// api_key = "..."
/// country = "PL"
///
/// [picker]
/// slots = ["12:00", "14:00", "16:30", "18:30", "20:00"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    events: Option<EventsConfig>,
    #[serde(default)]
    picker: PickerConfig,
}

impl Config {
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?;

        utils::toml_from_reader(file)
            .with_context(|| format!("failed to parse `{}`", path.display()))
    }

    /// Without this section no data is fetched and the calendar renders
    /// without annotations.
    pub fn events(&self) -> Option<&EventsConfig> {
        self.events.as_ref()
    }

    pub fn picker(&self) -> &PickerConfig {
        &self.picker
    }
}

/// Connection settings for the date-events source.
#[derive(Debug, Clone, Deserialize)]
pub struct EventsConfig {
    url: String,
    api_key: String,
    #[serde(default = "EventsConfig::default_country")]
    country: String,
}

impl EventsConfig {
    fn default_country() -> String {
        "PL".to_string()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "PickerConfig::default_slots")]
    slots: Vec<TimeStamp>,
}

impl PickerConfig {
    fn default_slots() -> Vec<TimeStamp> {
        vec![
            crate::time_stamp!(12:00),
            crate::time_stamp!(14:00),
            crate::time_stamp!(16:30),
            crate::time_stamp!(18:30),
            crate::time_stamp!(20:00),
        ]
    }

    /// The times of day offered by the time pane, in display order.
    pub fn slots(&self) -> &[TimeStamp] {
        &self.slots
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            slots: Self::default_slots(),
        }
    }
}
