use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    model::Coordinates,
    store::{KeyValueStore, load_json, save_json},
};

const PROFILE_KEY: &str = "profile";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sizes {
    pub top: Option<String>,
    pub bottom: Option<String>,
    pub shoe: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub display_name: String,
    pub email: Option<String>,
    pub style_preferences: Vec<String>,
    pub favorite_colors: Vec<String>,
    pub sizes: Sizes,
    /// Used for weather lookups when no coordinates are given.
    pub home: Option<Coordinates>,
}

impl Profile {
    /// Stored profile, or an empty one on first run.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(load_json::<Profile>(store, PROFILE_KEY)?.unwrap_or_default())
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> Result<()> {
        save_json(store, PROFILE_KEY, self)?;
        tracing::info!("Saved profile");
        Ok(())
    }

    pub fn greeting(&self) -> String {
        let name = self.display_name.trim();
        if name.is_empty() { "Hi there!".to_string() } else { format!("Hi, {name}!") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn first_run_is_empty_profile() {
        let store = MemoryStore::new();
        assert_eq!(Profile::load(&store).unwrap(), Profile::default());
    }

    #[test]
    fn save_and_reload() {
        let store = MemoryStore::new();
        let profile = Profile {
            display_name: "Sam".into(),
            favorite_colors: vec!["navy".into(), "olive".into()],
            sizes: Sizes { shoe: Some("42".into()), ..Sizes::default() },
            home: Some(Coordinates::new(52.52, 13.405)),
            ..Profile::default()
        };

        profile.save(&store).unwrap();
        assert_eq!(Profile::load(&store).unwrap(), profile);
    }

    #[test]
    fn partial_records_fill_defaults() {
        let store = MemoryStore::new();
        store.set(PROFILE_KEY, r#"{"display_name": "Ari"}"#).unwrap();

        let profile = Profile::load(&store).unwrap();
        assert_eq!(profile.display_name, "Ari");
        assert!(profile.style_preferences.is_empty());
    }

    #[test]
    fn greeting_uses_name() {
        assert_eq!(Profile::default().greeting(), "Hi there!");
        let profile = Profile { display_name: " Jo ".into(), ..Profile::default() };
        assert_eq!(profile.greeting(), "Hi, Jo!");
    }
}
