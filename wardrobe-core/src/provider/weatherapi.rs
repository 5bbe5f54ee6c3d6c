use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::WeatherError,
    model::{WeatherRequest, WeatherResponse},
    provider::{ProviderId, http_client, truncate_body, unix_to_utc},
};

use super::WeatherProvider;

const NAME: &str = "WeatherAPI.com";
const CURRENT_URL: &str = "https://api.weatherapi.com/v1/current.json";

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    timeout: Duration,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        Ok(Self { api_key, timeout, http: http_client(timeout)? })
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherResponse> {
        let coords = request.coordinates;
        let q = format!("{},{}", coords.latitude, coords.longitude);

        tracing::debug!(%coords, "Querying WeatherAPI.com current weather");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", q.as_str())])
            .send()
            .await
            .map_err(|e| WeatherError::from_reqwest(NAME, self.timeout, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::from_reqwest(NAME, self.timeout, e))
            .context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(WeatherError::Http {
                provider: NAME,
                status: status.as_u16(),
                body: truncate_body(&body),
            }
            .into());
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    wind_kph: f64,
    #[serde(default = "day")]
    is_day: u8,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

fn day() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

fn parse_current(body: &str) -> Result<WeatherResponse> {
    let parsed: WaResponse =
        serde_json::from_str(body).context("Failed to parse WeatherAPI current JSON")?;

    let ts = parsed.current.last_updated_epoch.or(parsed.location.localtime_epoch);
    let observation_time = ts.and_then(unix_to_utc).unwrap_or_else(Utc::now);

    let location_name = format!("{}, {}", parsed.location.name, parsed.location.country);
    let wind_speed_mps = parsed.current.wind_kph / 3.6;

    Ok(WeatherResponse {
        provider: ProviderId::WeatherApi.to_string(),
        location_name,
        temperature_c: parsed.current.temp_c,
        feels_like_c: parsed.current.feelslike_c,
        condition: parsed.current.condition.text,
        humidity_pct: parsed.current.humidity,
        wind_speed_mps,
        is_night: parsed.current.is_day == 0,
        observation_time,
    })
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::WeatherApi
    }

    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse> {
        self.fetch_current(request).await
    }
}
