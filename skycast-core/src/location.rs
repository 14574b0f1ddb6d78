use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use ipgeolocate::{Locator, Service};
use tracing::{Instrument, info, info_span, warn};

use crate::model::Coordinates;

/// Bounded wait for a location fix. Lookups that take longer are treated
/// the same as a denial.
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocation is not supported on this platform")]
    Unsupported,
    #[error("Location permission denied or no fix within {}s: {0}", LOCATION_TIMEOUT.as_secs())]
    DeniedOrTimedOut(String),
}

/// Single-shot resolver for the host's current position.
///
/// One invocation per session, no retries. Implementations must not serve
/// a cached prior fix; every call is a fresh reading.
#[async_trait]
pub trait LocationResolver: Send + Sync + Debug {
    async fn resolve(&self) -> Result<Coordinates, LocationError>;
}

/// Resolves the host's approximate position via IP geolocation (ip-api.com).
///
/// This is the terminal-platform counterpart of a browser location prompt:
/// a single outbound lookup, no state kept between calls.
#[derive(Debug, Clone, Default)]
pub struct IpApiLocator;

impl IpApiLocator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocationResolver for IpApiLocator {
    async fn resolve(&self) -> Result<Coordinates, LocationError> {
        let span = info_span!("location.lookup", service = %"IpApi");

        async move {
            // Empty IP string asks the service to geolocate the caller.
            let lookup = Locator::get("", Service::IpApi);

            let loc = match tokio::time::timeout(LOCATION_TIMEOUT, lookup).await {
                Ok(Ok(loc)) => loc,
                Ok(Err(e)) => {
                    warn!(error = %e, "geolocation service refused the lookup");
                    return Err(LocationError::DeniedOrTimedOut(e.to_string()));
                }
                Err(_) => {
                    warn!("geolocation lookup exceeded the deadline");
                    return Err(LocationError::DeniedOrTimedOut(
                        "lookup timed out".to_string(),
                    ));
                }
            };

            let latitude = loc.latitude.parse::<f64>();
            let longitude = loc.longitude.parse::<f64>();

            match (latitude, longitude) {
                (Ok(latitude), Ok(longitude)) => {
                    info!(lat = latitude, lon = longitude, city = %loc.city, "resolved position");
                    Ok(Coordinates {
                        latitude,
                        longitude,
                    })
                }
                _ => {
                    warn!(
                        raw_lat = %loc.latitude,
                        raw_lon = %loc.longitude,
                        "service returned unparseable coordinates"
                    );
                    Err(LocationError::DeniedOrTimedOut(
                        "service returned unparseable coordinates".to_string(),
                    ))
                }
            }
        }
        .instrument(span)
        .await
    }
}
