use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A latitude/longitude pair, resolved once per session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Snapshot of weather observations for one location at fetch time.
///
/// Fields are carried verbatim from the upstream API; rounding and unit
/// conversion happen only at the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    /// Coarse category such as "Clear" or "Rain"; drives the icon lookup.
    pub condition_main: String,
    pub condition_description: String,
}

/// One predicted reading from the 5-day/3-hour forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp in seconds.
    pub dt: i64,
    pub temperature_c: f64,
    /// Human-readable timestamp as reported upstream, e.g. "2026-08-23 12:00:00".
    pub dt_txt: String,
}

impl ForecastEntry {
    /// The entry's timestamp as a typed UTC datetime, if `dt` is representable.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.dt, 0)
    }
}

/// Chronological forecast readings, one per 3-hour interval over 5 days.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Single source of truth for one dashboard session.
///
/// Transitions are one-directional: `Loading` moves to exactly one of
/// `Error` or `Ready` and stays there. `Ready` requires that both fetches
/// succeeded; a failure anywhere collapses the whole session into `Error`.
#[derive(Debug, Clone)]
pub enum SessionState {
    Loading,
    Error(String),
    Ready {
        current: CurrentConditions,
        forecast: ForecastSeries,
    },
}
