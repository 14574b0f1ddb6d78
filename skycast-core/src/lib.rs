//! Core library for the `skycast` weather dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Geolocation of the current host
//! - The OpenWeather data fetcher
//! - The session pipeline that drives one dashboard run
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod location;
pub mod model;
pub mod provider;
pub mod session;

pub use config::Config;
pub use location::{IpApiLocator, LocationError, LocationResolver};
pub use model::{Coordinates, CurrentConditions, ForecastEntry, ForecastSeries, SessionState};
pub use provider::{FetchError, WeatherSource, openweather::OpenWeatherProvider};
pub use session::run_session;
