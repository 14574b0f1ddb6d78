use std::fmt::Debug;

use async_trait::async_trait;

use crate::model::{Coordinates, CurrentConditions, ForecastSeries};

pub mod openweather;

/// Errors produced by a weather fetch. `what` names the endpoint so the
/// surfaced message says which of the two fetches failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP status. The body is not inspected; the message
    /// stays generic.
    #[error("Failed to fetch {what}: HTTP status {status}")]
    Http {
        what: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Failed to parse {what} response")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to reach the weather service for {what}")]
    Network {
        what: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Source of weather data for a pair of coordinates.
///
/// The two fetches are independent of each other; each one is exactly one
/// network round trip with no timeout, retry, or caching.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_current(&self, coords: &Coordinates) -> Result<CurrentConditions, FetchError>;

    async fn fetch_forecast(&self, coords: &Coordinates) -> Result<ForecastSeries, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_names_the_endpoint() {
        let err = FetchError::Http {
            what: "forecast",
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        let msg = err.to_string();
        assert!(msg.contains("forecast"));
        assert!(msg.contains("401"));
    }

    #[test]
    fn parse_error_names_the_endpoint() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::Parse {
            what: "current weather",
            source,
        };
        assert!(err.to_string().contains("current weather"));
    }
}
