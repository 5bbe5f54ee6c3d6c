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

const NAME: &str = "OpenWeather";
const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    timeout: Duration,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self> {
        Ok(Self { api_key, timeout, http: http_client(timeout)? })
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<WeatherResponse> {
        let coords = request.coordinates;
        let lat = coords.latitude.to_string();
        let lon = coords.longitude.to_string();

        tracing::debug!(%coords, "Querying OpenWeather current weather");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::from_reqwest(NAME, self.timeout, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::from_reqwest(NAME, self.timeout, e))
            .context("Failed to read OpenWeather response body")?;

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
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: Option<OwSys>,
}

fn parse_current(body: &str) -> Result<WeatherResponse> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).context("Failed to parse OpenWeather current JSON")?;

    let observation_time = unix_to_utc(parsed.dt).unwrap_or_else(Utc::now);

    let condition = parsed
        .weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let is_night = match parsed.sys {
        Some(OwSys { sunrise: Some(rise), sunset: Some(set) }) => parsed.dt < rise || parsed.dt >= set,
        _ => false,
    };

    Ok(WeatherResponse {
        provider: ProviderId::OpenWeather.to_string(),
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        feels_like_c: parsed.main.feels_like,
        condition,
        humidity_pct: parsed.main.humidity,
        wind_speed_mps: parsed.wind.speed,
        is_night,
        observation_time,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse> {
        self.fetch_current(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "coord": {"lon": 10.75, "lat": 59.91},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 7.42, "feels_like": 4.9, "humidity": 87, "pressure": 1002},
        "wind": {"speed": 4.6, "deg": 220},
        "dt": 1700000000,
        "sys": {"country": "NO", "sunrise": 1699945200, "sunset": 1699973400},
        "name": "Oslo"
    }"#;

    #[test]
    fn parses_current_payload() {
        let reading = parse_current(BODY).expect("valid payload");

        assert_eq!(reading.provider, "openweather");
        assert_eq!(reading.location_name, "Oslo");
        assert_eq!(reading.condition, "light rain");
        assert_eq!(reading.humidity_pct, 87);
        assert!((reading.temperature_c - 7.42).abs() < f64::EPSILON);
        assert_eq!(reading.observation_time.timestamp(), 1_700_000_000);
        // dt is after sunset
        assert!(reading.is_night);
    }

    #[test]
    fn missing_weather_array_entry_is_unknown() {
        let body = r#"{"name": "X", "dt": 0, "main": {"temp": 1.0, "feels_like": 0.0, "humidity": 10},
                       "weather": [], "wind": {"speed": 0.5}}"#;
        let reading = parse_current(body).expect("valid payload");
        assert_eq!(reading.condition, "Unknown");
        assert!(!reading.is_night);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = parse_current("{\"cod\": 401}").unwrap_err();
        assert!(err.to_string().contains("Failed to parse OpenWeather"));
    }
}
