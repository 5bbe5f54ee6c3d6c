//! Weather lookups behind the cache, and outfit advice on top of them.

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::{
    advice::{OutfitAdvice, advise},
    cache::WeatherCache,
    config::WeatherSettings,
    model::{Coordinates, WeatherRequest, WeatherResponse},
    provider::WeatherProvider,
    store::KeyValueStore,
};

pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
    store: Arc<dyn KeyValueStore>,
    settings: WeatherSettings,
}

impl WeatherService {
    pub fn new(
        provider: Box<dyn WeatherProvider>,
        store: Arc<dyn KeyValueStore>,
        settings: WeatherSettings,
    ) -> Self {
        Self { provider, store, settings }
    }

    fn cache(&self) -> WeatherCache<'_> {
        WeatherCache::new(self.store.as_ref(), self.settings.cache_freshness())
    }

    pub async fn current(&self, coords: Coordinates) -> Result<WeatherResponse> {
        self.current_at(coords, Utc::now()).await
    }

    /// Cached reading for `coords` if still fresh at `now`, otherwise a new fetch.
    pub async fn current_at(&self, coords: Coordinates, now: DateTime<Utc>) -> Result<WeatherResponse> {
        if let Some(reading) = self.cache().lookup(&coords, now) {
            return Ok(reading);
        }
        self.fetch_and_remember(coords, now).await
    }

    /// Skip the cache, but still remember the new reading.
    pub async fn refresh(&self, coords: Coordinates) -> Result<WeatherResponse> {
        self.fetch_and_remember(coords, Utc::now()).await
    }

    async fn fetch_and_remember(&self, coords: Coordinates, now: DateTime<Utc>) -> Result<WeatherResponse> {
        let provider = self.provider.id();
        tracing::info!(%provider, %coords, "Fetching current weather");

        let reading = self.provider.get_weather(&WeatherRequest { coordinates: coords }).await?;

        if let Err(e) = self.cache().remember(coords, &reading, now) {
            tracing::warn!(error = %e, "Could not cache weather reading");
        }

        Ok(reading)
    }

    /// Current weather for `coords` and the outfit it calls for.
    pub async fn outfit_for(&self, coords: Coordinates, variant_seed: u32) -> Result<(WeatherResponse, OutfitAdvice)> {
        let reading = self.current(coords).await?;
        let state = reading.to_state(self.settings.windy_threshold_mps);
        let advice = advise(&state, variant_seed);
        Ok((reading, advice))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::WeatherError,
        provider::ProviderId,
        store::MemoryStore,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Debug)]
    struct FakeProvider {
        calls: Arc<AtomicUsize>,
        condition: &'static str,
        fail: bool,
    }

    impl FakeProvider {
        fn boxed(condition: &'static str) -> (Box<dyn WeatherProvider>, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            let provider = FakeProvider { calls: calls.clone(), condition, fail: false };
            (Box::new(provider), calls)
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        fn id(&self) -> ProviderId {
            ProviderId::OpenWeather
        }

        async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(WeatherError::Timeout { provider: "OpenWeather", timeout: Duration::from_secs(10) }.into());
            }
            Ok(WeatherResponse {
                provider: "openweather".into(),
                location_name: format!("{}", request.coordinates),
                temperature_c: 1.2,
                feels_like_c: -2.0,
                condition: self.condition.into(),
                humidity_pct: 70,
                wind_speed_mps: 3.0,
                is_night: false,
                observation_time: Utc::now(),
            })
        }
    }

    fn oslo() -> Coordinates {
        Coordinates::new(59.9139, 10.7522)
    }

    #[tokio::test]
    async fn second_lookup_is_served_from_cache() {
        let (provider, calls) = FakeProvider::boxed("light snow");
        let service = WeatherService::new(provider, Arc::new(MemoryStore::new()), WeatherSettings::default());
        let now = Utc::now();

        let first = service.current_at(oslo(), now).await.unwrap();
        let second = service.current_at(oslo(), now + chrono::Duration::minutes(5)).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn stale_or_moved_lookups_fetch_again() {
        let (provider, calls) = FakeProvider::boxed("light snow");
        let service = WeatherService::new(provider, Arc::new(MemoryStore::new()), WeatherSettings::default());
        let now = Utc::now();

        service.current_at(oslo(), now).await.unwrap();
        service.current_at(oslo(), now + chrono::Duration::minutes(11)).await.unwrap();
        service.current_at(Coordinates::new(0.0, 0.0), now + chrono::Duration::minutes(12)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn refresh_bypasses_cache() {
        let (provider, calls) = FakeProvider::boxed("clear sky");
        let service = WeatherService::new(provider, Arc::new(MemoryStore::new()), WeatherSettings::default());

        service.current(oslo()).await.unwrap();
        service.refresh(oslo()).await.unwrap();
        service.current(oslo()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn outfit_follows_the_reading() {
        let (provider, _) = FakeProvider::boxed("light snow");
        let service = WeatherService::new(provider, Arc::new(MemoryStore::new()), WeatherSettings::default());

        let (reading, advice) = service.outfit_for(oslo(), 0).await.unwrap();

        assert_eq!(reading.condition, "light snow");
        // 1.2 rounds to 1 -> "Winter Warmth" with snow rules applied
        assert_eq!(advice.title, "Winter Warmth");
        assert!(advice.badges.contains(&"Snow Ready".to_string()));
    }

    #[tokio::test]
    async fn provider_failures_surface_and_are_not_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = FakeProvider { calls: calls.clone(), condition: "rain", fail: true };
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let service = WeatherService::new(Box::new(provider), store.clone(), WeatherSettings::default());

        let err = service.current(oslo()).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<WeatherError>(), Some(WeatherError::Timeout { .. })));
        assert_eq!(store.get(crate::cache::CACHE_KEY).unwrap(), None);
    }
}
