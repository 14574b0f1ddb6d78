use tracing::{error, info};

use crate::location::{LocationError, LocationResolver};
use crate::model::{CurrentConditions, ForecastSeries, SessionState};
use crate::provider::{FetchError, WeatherSource};

#[derive(Debug, thiserror::Error)]
enum SessionError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Runs the acquisition pipeline once and returns the terminal state.
///
/// Resolve location, then fetch current conditions, then the forecast.
/// Each step is awaited before the next starts, and the first failure
/// short-circuits the rest (a failed geolocation never issues an HTTP
/// request). The state is returned by value; callers hand it to the views
/// explicitly rather than sharing a mutable singleton.
pub async fn run_session(
    locator: &dyn LocationResolver,
    source: &dyn WeatherSource,
) -> SessionState {
    match pipeline(locator, source).await {
        Ok((current, forecast)) => {
            info!(location = %current.location_name, points = forecast.len(), "session ready");
            SessionState::Ready { current, forecast }
        }
        Err(err) => {
            error!(error = %err, "session failed");
            SessionState::Error(err.to_string())
        }
    }
}

async fn pipeline(
    locator: &dyn LocationResolver,
    source: &dyn WeatherSource,
) -> Result<(CurrentConditions, ForecastSeries), SessionError> {
    let coords = locator.resolve().await?;

    // The two fetches are independent, but run sequentially so at most one
    // outbound request is in flight at a time.
    let current = source.fetch_current(&coords).await?;
    let forecast = source.fetch_forecast(&coords).await?;

    Ok((current, forecast))
}
