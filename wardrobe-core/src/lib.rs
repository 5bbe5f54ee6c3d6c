//! Core library for the `wardrobe` CLI.
//!
//! This crate defines:
//! - Weather-to-outfit rules (the advice resolver)
//! - Abstraction over weather providers, with a freshness-windowed cache
//! - Key-value persistence for the closet, the profile and cached weather
//! - Configuration & credentials handling
//! - The canned stylist chat
//!
//! It is used by `wardrobe-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod cache;
pub mod closet;
pub mod config;
pub mod error;
pub mod model;
pub mod profile;
pub mod provider;
pub mod service;
pub mod store;
pub mod stylist;

pub use advice::{OutfitAdvice, OutfitItem, Slot, outfit_advice};
pub use closet::{Category, Closet, ClothingItem, NewClothingItem};
pub use config::{Config, ProviderConfig, WeatherSettings};
pub use error::{ClosetError, StoreError, WeatherError};
pub use model::{Condition, Coordinates, WeatherRequest, WeatherResponse, WeatherState};
pub use profile::Profile;
pub use provider::{ProviderId, WeatherProvider};
pub use service::WeatherService;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use stylist::{StyleContext, Stylist, StylistReply};
