//! Single-entry cache of the last weather reading.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::{Coordinates, WeatherResponse},
    store::{KeyValueStore, save_json},
};

pub const CACHE_KEY: &str = "weather_cache";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedWeather {
    pub coordinates: Coordinates,
    pub fetched_at: DateTime<Utc>,
    pub reading: WeatherResponse,
}

impl CachedWeather {
    fn is_fresh_for(&self, coords: &Coordinates, now: DateTime<Utc>, freshness: Duration) -> bool {
        // An entry stamped in the future is never fresh.
        self.coordinates.same_place(coords) && now >= self.fetched_at && now - self.fetched_at < freshness
    }
}

pub struct WeatherCache<'a> {
    store: &'a dyn KeyValueStore,
    freshness: Duration,
}

impl<'a> WeatherCache<'a> {
    pub fn new(store: &'a dyn KeyValueStore, freshness: Duration) -> Self {
        Self { store, freshness }
    }

    /// The cached reading, if it is for `coords` and younger than the
    /// freshness window. Unreadable entries count as a miss.
    pub fn lookup(&self, coords: &Coordinates, now: DateTime<Utc>) -> Option<WeatherResponse> {
        let raw = match self.store.get(CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Weather cache unreadable, treating as miss");
                return None;
            }
        };

        let entry: CachedWeather = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "Malformed weather cache entry, treating as miss");
                return None;
            }
        };

        if entry.is_fresh_for(coords, now, self.freshness) {
            tracing::debug!(%coords, fetched_at = %entry.fetched_at, "Weather cache hit");
            Some(entry.reading)
        } else {
            tracing::debug!(%coords, "Weather cache miss");
            None
        }
    }

    pub fn remember(&self, coords: Coordinates, reading: &WeatherResponse, now: DateTime<Utc>) -> Result<()> {
        let entry = CachedWeather { coordinates: coords, fetched_at: now, reading: reading.clone() };
        save_json(self.store, CACHE_KEY, &entry)
    }
}
