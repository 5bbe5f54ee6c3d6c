use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Geographic position used to key weather lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Two positions closer than this (in degrees, per axis) are the same place.
    pub const EPSILON: f64 = 1e-4;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn same_place(&self, other: &Coordinates) -> bool {
        (self.latitude - other.latitude).abs() < Self::EPSILON
            && (self.longitude - other.longitude).abs() < Self::EPSILON
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub provider: String,
    pub location_name: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    /// Provider's own wording, e.g. "light rain" or "Partly cloudy".
    pub condition: String,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    #[serde(default)]
    pub is_night: bool,
    pub observation_time: DateTime<Utc>,
}

impl WeatherResponse {
    /// Reduce a provider reading to the state the outfit resolver works on.
    ///
    /// Calm conditions (sunny/cloudy) are promoted to `Windy` once the wind
    /// reaches `windy_threshold_mps`; precipitation always wins over wind.
    pub fn to_state(&self, windy_threshold_mps: f64) -> WeatherState {
        let mut condition = Condition::classify(&self.condition);
        if matches!(condition, Condition::Sunny | Condition::Cloudy)
            && self.wind_speed_mps >= windy_threshold_mps
        {
            condition = Condition::Windy;
        }

        WeatherState {
            temperature_celsius: self.temperature_c.round() as i32,
            condition,
            is_night: self.is_night,
        }
    }
}

/// Weather condition the outfit rules understand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rain,
    Snow,
    Windy,
    /// Anything else. Carries the raw name; no condition rule applies to it.
    Other(String),
}

impl Condition {
    pub fn name(&self) -> &str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
            Condition::Windy => "windy",
            Condition::Other(name) => name.as_str(),
        }
    }

    pub fn known() -> [Condition; 5] {
        [
            Condition::Sunny,
            Condition::Cloudy,
            Condition::Rain,
            Condition::Snow,
            Condition::Windy,
        ]
    }

    /// Exact (case-insensitive) match on one of the five names; anything
    /// else becomes `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "sunny" => Condition::Sunny,
            "cloudy" => Condition::Cloudy,
            "rain" => Condition::Rain,
            "snow" => Condition::Snow,
            "windy" => Condition::Windy,
            _ => Condition::Other(name.trim().to_string()),
        }
    }

    /// Map free-form provider text ("moderate rain", "Overcast", "Clear")
    /// onto a condition by keyword.
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has(&["snow", "sleet", "blizzard", "ice pellets"]) {
            Condition::Snow
        } else if has(&["rain", "drizzle", "thunder", "shower"]) {
            Condition::Rain
        } else if has(&["wind", "gale", "squall", "tornado"]) {
            Condition::Windy
        } else if has(&["clear", "sun"]) {
            Condition::Sunny
        } else if has(&["cloud", "overcast", "mist", "fog", "haze"]) {
            Condition::Cloudy
        } else {
            Condition::Other(text.trim().to_string())
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherState {
    pub temperature_celsius: i32,
    pub condition: Condition,
    /// Carried through from the provider; the resolver does not look at it.
    pub is_night: bool,
}

impl WeatherState {
    pub fn new(temperature_celsius: i32, condition: Condition) -> Self {
        Self { temperature_celsius, condition, is_night: false }
    }
}
