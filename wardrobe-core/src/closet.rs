use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};
use uuid::Uuid;

use crate::{
    error::ClosetError,
    store::{KeyValueStore, load_json, save_json},
};

const CLOSET_KEY: &str = "closet";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Footwear,
    Accessory,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Dress => "dress",
            Category::Outerwear => "outerwear",
            Category::Footwear => "footwear",
            Category::Accessory => "accessory",
        }
    }

    pub const fn all() -> &'static [Category] {
        &[
            Category::Top,
            Category::Bottom,
            Category::Dress,
            Category::Outerwear,
            Category::Footwear,
            Category::Accessory,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "top" | "tops" | "shirt" | "shirts" => Ok(Category::Top),
            "bottom" | "bottoms" | "pants" | "trousers" | "skirt" => Ok(Category::Bottom),
            "dress" | "dresses" => Ok(Category::Dress),
            "outerwear" | "jacket" | "jackets" | "coat" | "coats" => Ok(Category::Outerwear),
            "footwear" | "shoes" | "boots" | "sneakers" => Ok(Category::Footwear),
            "accessory" | "accessories" | "bag" | "hat" | "jewelry" => Ok(Category::Accessory),
            _ => Err(anyhow::anyhow!(
                "Unknown category '{value}'. Supported categories: top, bottom, dress, outerwear, footwear, accessory."
            )),
        }
    }
}

/// What the user supplies when adding or editing an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClothingItem {
    pub name: String,
    pub category: Category,
    pub color: String,
    pub brand: Option<String>,
    pub seasons: Vec<String>,
    /// Reference to a photo on disk; the image itself is not stored.
    pub image_path: Option<PathBuf>,
}

impl NewClothingItem {
    pub fn new(name: impl Into<String>, category: Category, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            color: color.into(),
            brand: None,
            seasons: Vec::new(),
            image_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub color: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub seasons: Vec<String>,
    #[serde(default)]
    pub image_path: Option<PathBuf>,
    #[serde(default)]
    pub favorite: bool,
    pub added_at: DateTime<Utc>,
}

/// The user's catalogued clothing, kept as one record in the store.
pub struct Closet<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> Closet<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<ClothingItem>> {
        Ok(load_json::<Vec<ClothingItem>>(self.store, CLOSET_KEY)?.unwrap_or_default())
    }

    fn save(&self, items: &[ClothingItem]) -> Result<()> {
        save_json(self.store, CLOSET_KEY, &items)
    }

    fn position(items: &[ClothingItem], id: Uuid) -> Result<usize> {
        items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ClosetError::NotFound(id).into())
    }

    fn clean_name(name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ClosetError::EmptyName.into());
        }
        Ok(name.to_string())
    }

    pub fn add(&self, new: NewClothingItem) -> Result<ClothingItem> {
        let name = Self::clean_name(&new.name)?;
        let mut items = self.load()?;

        let item = ClothingItem {
            id: Uuid::new_v4(),
            name,
            category: new.category,
            color: new.color.trim().to_string(),
            brand: new.brand,
            seasons: new.seasons,
            image_path: new.image_path,
            favorite: false,
            added_at: Utc::now(),
        };
        items.push(item.clone());
        self.save(&items)?;

        tracing::info!(id = %item.id, name = %item.name, "Added clothing item");
        Ok(item)
    }

    /// All items in the order they were added, optionally limited to one category.
    pub fn list(&self, filter: Option<Category>) -> Result<Vec<ClothingItem>> {
        let items = self.load()?;
        Ok(match filter {
            Some(category) => items.into_iter().filter(|i| i.category == category).collect(),
            None => items,
        })
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    pub fn get(&self, id: Uuid) -> Result<ClothingItem> {
        let items = self.load()?;
        let idx = Self::position(&items, id)?;
        Ok(items[idx].clone())
    }

    /// Replace the user-editable fields; id, favorite flag and `added_at` are kept.
    pub fn update(&self, id: Uuid, edit: NewClothingItem) -> Result<ClothingItem> {
        let name = Self::clean_name(&edit.name)?;
        let mut items = self.load()?;
        let idx = Self::position(&items, id)?;

        let item = &mut items[idx];
        item.name = name;
        item.category = edit.category;
        item.color = edit.color.trim().to_string();
        item.brand = edit.brand;
        item.seasons = edit.seasons;
        item.image_path = edit.image_path;
        let updated = item.clone();

        self.save(&items)?;
        tracing::info!(%id, "Updated clothing item");
        Ok(updated)
    }

    pub fn remove(&self, id: Uuid) -> Result<ClothingItem> {
        let mut items = self.load()?;
        let idx = Self::position(&items, id)?;
        let removed = items.remove(idx);
        self.save(&items)?;

        tracing::info!(%id, "Removed clothing item");
        Ok(removed)
    }

    /// Flip the favorite flag and return its new value.
    pub fn toggle_favorite(&self, id: Uuid) -> Result<bool> {
        let mut items = self.load()?;
        let idx = Self::position(&items, id)?;
        items[idx].favorite = !items[idx].favorite;
        let favorite = items[idx].favorite;
        self.save(&items)?;
        Ok(favorite)
    }
}
