use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{Coordinates, CurrentConditions, ForecastEntry, ForecastSeries};

use super::{FetchError, WeatherSource};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_ENDPOINT: &str = "current weather";
const FORECAST_ENDPOINT: &str = "forecast";

/// OpenWeather client for current conditions and the 5-day/3-hour forecast.
///
/// Both calls request metric units, so temperatures arrive in Celsius and
/// wind speed in meters per second.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the client at a different host, used by tests to target a
    /// local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get_json<T>(
        &self,
        path: &str,
        what: &'static str,
        coords: &Coordinates,
    ) -> Result<T, FetchError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}{path}", self.base_url);

        debug!(%url, lat = coords.latitude, lon = coords.longitude, "issuing weather request");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Network { what, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Network { what, source })?;

        if !status.is_success() {
            return Err(FetchError::Http { what, status });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Parse { what, source })
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherProvider {
    async fn fetch_current(&self, coords: &Coordinates) -> Result<CurrentConditions, FetchError> {
        let parsed: OwCurrentResponse = self
            .get_json("/data/2.5/weather", CURRENT_ENDPOINT, coords)
            .await?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .unwrap_or_else(OwWeather::unknown);

        Ok(CurrentConditions {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            condition_main: condition.main,
            condition_description: condition.description,
        })
    }

    async fn fetch_forecast(&self, coords: &Coordinates) -> Result<ForecastSeries, FetchError> {
        let parsed: OwForecastResponse = self
            .get_json("/data/2.5/forecast", FORECAST_ENDPOINT, coords)
            .await?;

        let entries = parsed
            .list
            .into_iter()
            .map(|e| ForecastEntry {
                dt: e.dt,
                temperature_c: e.main.temp,
                dt_txt: e.dt_txt,
            })
            .collect();

        Ok(ForecastSeries { entries })
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrentMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    #[serde(default)]
    main: String,
    #[serde(default)]
    description: String,
}

impl OwWeather {
    /// Stand-in when the response carries no weather element at all.
    fn unknown() -> Self {
        Self {
            main: "Unknown".to_string(),
            description: "Unknown".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwCurrentMain,
    wind: OwWind,
    #[serde(default)]
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastItem {
    dt: i64,
    main: OwForecastMain,
    #[serde(default)]
    dt_txt: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastItem>,
}
