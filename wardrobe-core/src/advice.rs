//! Weather-to-outfit rules.
//!
//! A temperature band picks a base outfit, a variant index rotates through
//! three authored labels per slot, and condition rules (rain, wind, snow,
//! sun) adjust the garments, append a badge and put their tips in front.

use serde::Serialize;

use crate::model::{Condition, WeatherState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Outerwear,
    Top,
    Base,
    Bottom,
    Footwear,
    Accessory,
}

impl Slot {
    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Outerwear => "outerwear",
            Slot::Top => "top",
            Slot::Base => "base",
            Slot::Bottom => "bottom",
            Slot::Footwear => "footwear",
            Slot::Accessory => "accessory",
        }
    }
}

/// Kind of garment behind a label. Condition rules match on this, never on
/// label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Garment {
    Parka,
    WoolCoat,
    PufferJacket,
    Peacoat,
    TrenchCoat,
    LightJacket,
    DenimJacket,
    RainJacket,
    Windbreaker,
    Cardigan,
    Sweater,
    Shirt,
    Tee,
    Thermal,
    Trousers,
    Shorts,
    Skirt,
    Boots,
    SnowBoots,
    RainBoots,
    Sneakers,
    Loafers,
    Sandals,
    Scarf,
    Beanie,
    Gloves,
    Hat,
    Sunglasses,
    Umbrella,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitItem {
    pub slot: Slot,
    pub garment: Garment,
    pub label: String,
    pub icon: String,
    /// Insertion-ordered, no duplicates.
    pub tags: Vec<String>,
}

impl OutfitItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    fn add_tag(&mut self, tag: &str) {
        if !self.has_tag(tag) {
            self.tags.push(tag.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutfitAdvice {
    pub title: String,
    pub items: Vec<OutfitItem>,
    pub tips: Vec<String>,
    pub badges: Vec<String>,
}

impl OutfitAdvice {
    pub fn items_in(&self, slot: Slot) -> impl Iterator<Item = &OutfitItem> {
        self.items.iter().filter(move |item| item.slot == slot)
    }
}

struct Choice {
    garment: Garment,
    label: &'static str,
}

const fn pick(garment: Garment, label: &'static str) -> Choice {
    Choice { garment, label }
}

struct BaseItem {
    slot: Slot,
    icon: &'static str,
    choices: [Choice; 3],
}

struct Band {
    title: &'static str,
    badge: &'static str,
    tips: &'static [&'static str],
    items: &'static [BaseItem],
}

static VERY_COLD: Band = Band {
    title: "Bundle Up: Freezing Cold",
    badge: "Freezing",
    tips: &["Layer a thermal base under everything", "Cover exposed skin to avoid frostbite"],
    items: &[
        BaseItem {
            slot: Slot::Outerwear,
            icon: "🧥",
            choices: [
                pick(Garment::Parka, "Heavy Down Parka"),
                pick(Garment::Parka, "Insulated Parka"),
                pick(Garment::WoolCoat, "Long Wool Overcoat"),
            ],
        },
        BaseItem {
            slot: Slot::Top,
            icon: "🧶",
            choices: [
                pick(Garment::Sweater, "Chunky Knit Sweater"),
                pick(Garment::Sweater, "Fleece Pullover"),
                pick(Garment::Sweater, "Turtleneck Sweater"),
            ],
        },
        BaseItem {
            slot: Slot::Base,
            icon: "👕",
            choices: [
                pick(Garment::Thermal, "Thermal Base Layer"),
                pick(Garment::Thermal, "Merino Wool Base Layer"),
                pick(Garment::Thermal, "Heat-Retaining Long Sleeve"),
            ],
        },
        BaseItem {
            slot: Slot::Bottom,
            icon: "👖",
            choices: [
                pick(Garment::Trousers, "Fleece-Lined Trousers"),
                pick(Garment::Trousers, "Jeans over Thermal Leggings"),
                pick(Garment::Trousers, "Wool Trousers"),
            ],
        },
        BaseItem {
            slot: Slot::Footwear,
            icon: "🥾",
            choices: [
                pick(Garment::Boots, "Insulated Winter Boots"),
                pick(Garment::Boots, "Shearling-Lined Boots"),
                pick(Garment::SnowBoots, "Snow Boots"),
            ],
        },
        BaseItem {
            slot: Slot::Accessory,
            icon: "🧣",
            choices: [
                pick(Garment::Scarf, "Wool Scarf & Gloves"),
                pick(Garment::Beanie, "Beanie & Mittens"),
                pick(Garment::Scarf, "Thermal Neck Gaiter"),
            ],
        },
    ],
};

static COLD: Band = Band {
    title: "Winter Warmth",
    badge: "Winter Ready",
    tips: &["Layer up, it's chilly out", "A scarf makes a big difference"],
    items: &[
        BaseItem {
            slot: Slot::Outerwear,
            icon: "🧥",
            choices: [
                pick(Garment::WoolCoat, "Wool Coat"),
                pick(Garment::PufferJacket, "Puffer Jacket"),
                pick(Garment::Peacoat, "Peacoat"),
            ],
        },
        BaseItem {
            slot: Slot::Top,
            icon: "🧶",
            choices: [
                pick(Garment::Sweater, "Cable Knit Sweater"),
                pick(Garment::Sweater, "Crewneck Sweater"),
                pick(Garment::Sweater, "Quarter-Zip Pullover"),
            ],
        },
        BaseItem {
            slot: Slot::Bottom,
            icon: "👖",
            choices: [
                pick(Garment::Trousers, "Dark Jeans"),
                pick(Garment::Trousers, "Corduroy Trousers"),
                pick(Garment::Trousers, "Wool Trousers"),
            ],
        },
        BaseItem {
            slot: Slot::Footwear,
            icon: "👢",
            choices: [
                pick(Garment::Boots, "Chelsea Boots"),
                pick(Garment::Boots, "Leather Ankle Boots"),
                pick(Garment::Sneakers, "Leather Sneakers"),
            ],
        },
        BaseItem {
            slot: Slot::Accessory,
            icon: "🧣",
            choices: [
                pick(Garment::Scarf, "Knit Scarf"),
                pick(Garment::Beanie, "Beanie"),
                pick(Garment::Gloves, "Leather Gloves"),
            ],
        },
    ],
};

static MILD: Band = Band {
    title: "Layered Comfort",
    badge: "Layer Friendly",
    tips: &["Bring a light layer for the evening", "Breathable fabrics work best"],
    items: &[
        BaseItem {
            slot: Slot::Outerwear,
            icon: "🧥",
            choices: [
                pick(Garment::LightJacket, "Light Jacket"),
                pick(Garment::DenimJacket, "Denim Jacket"),
                pick(Garment::Cardigan, "Cardigan"),
            ],
        },
        BaseItem {
            slot: Slot::Top,
            icon: "👕",
            choices: [
                pick(Garment::Shirt, "Long-Sleeve Tee"),
                pick(Garment::Shirt, "Button-Down Shirt"),
                pick(Garment::Sweater, "Light Knit Sweater"),
            ],
        },
        BaseItem {
            slot: Slot::Bottom,
            icon: "👖",
            choices: [
                pick(Garment::Trousers, "Chinos"),
                pick(Garment::Trousers, "Straight-Leg Jeans"),
                pick(Garment::Skirt, "Midi Skirt"),
            ],
        },
        BaseItem {
            slot: Slot::Footwear,
            icon: "👟",
            choices: [
                pick(Garment::Sneakers, "White Sneakers"),
                pick(Garment::Loafers, "Loafers"),
                pick(Garment::Boots, "Suede Ankle Boots"),
            ],
        },
    ],
};

static WARM: Band = Band {
    title: "Light & Breezy",
    badge: "Warm Weather",
    tips: &["Choose light, breathable fabrics", "Stay hydrated"],
    items: &[
        BaseItem {
            slot: Slot::Top,
            icon: "👕",
            choices: [
                pick(Garment::Tee, "Cotton T-Shirt"),
                pick(Garment::Shirt, "Linen Shirt"),
                pick(Garment::Tee, "Tank Top"),
            ],
        },
        BaseItem {
            slot: Slot::Bottom,
            icon: "🩳",
            choices: [
                pick(Garment::Shorts, "Chino Shorts"),
                pick(Garment::Trousers, "Linen Trousers"),
                pick(Garment::Skirt, "Flowy Skirt"),
            ],
        },
        BaseItem {
            slot: Slot::Footwear,
            icon: "👡",
            choices: [
                pick(Garment::Sandals, "Sandals"),
                pick(Garment::Sneakers, "Canvas Sneakers"),
                pick(Garment::Loafers, "Espadrilles"),
            ],
        },
        BaseItem {
            slot: Slot::Accessory,
            icon: "🕶️",
            choices: [
                pick(Garment::Sunglasses, "Sunglasses"),
                pick(Garment::Hat, "Sun Hat"),
                pick(Garment::Sunglasses, "Sunglasses"),
            ],
        },
    ],
};

fn band_for(temperature_celsius: i32) -> &'static Band {
    match temperature_celsius {
        t if t <= 0 => &VERY_COLD,
        1..=10 => &COLD,
        11..=20 => &MILD,
        _ => &WARM,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Rain,
    Windy,
    Snow,
    Sunny,
}

impl Rule {
    fn applies_to(self, condition: &Condition) -> bool {
        matches!(
            (self, condition),
            (Rule::Rain, Condition::Rain)
                | (Rule::Windy, Condition::Windy)
                | (Rule::Snow, Condition::Snow)
                | (Rule::Sunny, Condition::Sunny)
        )
    }
}

struct Effect {
    rule: Rule,
    badge: &'static str,
    tips: &'static [&'static str],
}

/// Application order. Tips are prepended, so a later rule's tips end up first.
static EFFECTS: [Effect; 4] = [
    Effect {
        rule: Rule::Rain,
        badge: "Rain Safe",
        tips: &["Bring an umbrella or a waterproof layer", "Skip suede and canvas today"],
    },
    Effect {
        rule: Rule::Windy,
        badge: "Wind Ready",
        tips: &["Choose a windproof outer layer", "Secure loose accessories"],
    },
    Effect {
        rule: Rule::Snow,
        badge: "Snow Ready",
        tips: &["Waterproof footwear essential", "Wear warm, insulated layers"],
    },
    Effect {
        rule: Rule::Sunny,
        badge: "Sun Protection",
        tips: &["Apply sunscreen (SPF 30+)", "Wear a hat to shade your face"],
    },
];

struct Adjustment {
    rule: Rule,
    garment: Garment,
    becomes: Option<(Garment, &'static str)>,
    tags: &'static [&'static str],
}

const fn adjust(
    rule: Rule,
    garment: Garment,
    becomes: Option<(Garment, &'static str)>,
    tags: &'static [&'static str],
) -> Adjustment {
    Adjustment { rule, garment, becomes, tags }
}

const WATERPROOF: &[&str] = &["waterproof"];
const WINDPROOF: &[&str] = &["windproof"];
const INSULATED: &[&str] = &["insulated"];
const SNOW_SAFE: &[&str] = &["waterproof", "insulated"];

static ADJUSTMENTS: &[Adjustment] = &[
    adjust(Rule::Rain, Garment::Parka, Some((Garment::Parka, "Waterproof Parka")), WATERPROOF),
    adjust(Rule::Rain, Garment::WoolCoat, Some((Garment::TrenchCoat, "Waterproof Trench Coat")), WATERPROOF),
    adjust(Rule::Rain, Garment::PufferJacket, Some((Garment::PufferJacket, "Water-Resistant Puffer Jacket")), WATERPROOF),
    adjust(Rule::Rain, Garment::LightJacket, Some((Garment::RainJacket, "Rain Jacket")), WATERPROOF),
    adjust(Rule::Rain, Garment::DenimJacket, Some((Garment::RainJacket, "Rain Jacket")), WATERPROOF),
    adjust(Rule::Rain, Garment::Sneakers, Some((Garment::Sneakers, "Waterproof Sneakers")), WATERPROOF),
    adjust(Rule::Rain, Garment::Loafers, Some((Garment::RainBoots, "Rain Boots")), WATERPROOF),
    adjust(Rule::Rain, Garment::Sandals, Some((Garment::RainBoots, "Rain Boots")), WATERPROOF),
    adjust(Rule::Rain, Garment::Boots, None, &["water-resistant"]),
    adjust(Rule::Windy, Garment::LightJacket, Some((Garment::Windbreaker, "Windbreaker")), WINDPROOF),
    adjust(Rule::Windy, Garment::Cardigan, Some((Garment::Windbreaker, "Windbreaker")), WINDPROOF),
    adjust(Rule::Windy, Garment::DenimJacket, None, WINDPROOF),
    adjust(Rule::Windy, Garment::Parka, None, WINDPROOF),
    adjust(Rule::Windy, Garment::PufferJacket, None, WINDPROOF),
    adjust(Rule::Windy, Garment::Hat, Some((Garment::Hat, "Fitted Cap")), &[]),
    adjust(Rule::Windy, Garment::Skirt, Some((Garment::Trousers, "Wide-Leg Trousers")), &[]),
    adjust(Rule::Snow, Garment::Boots, Some((Garment::SnowBoots, "Insulated Snow Boots")), SNOW_SAFE),
    adjust(Rule::Snow, Garment::Sneakers, Some((Garment::SnowBoots, "Insulated Snow Boots")), SNOW_SAFE),
    adjust(Rule::Snow, Garment::Loafers, Some((Garment::SnowBoots, "Insulated Snow Boots")), SNOW_SAFE),
    adjust(Rule::Snow, Garment::Sandals, Some((Garment::SnowBoots, "Insulated Snow Boots")), SNOW_SAFE),
    adjust(Rule::Snow, Garment::SnowBoots, None, SNOW_SAFE),
    adjust(Rule::Snow, Garment::Parka, None, INSULATED),
    adjust(Rule::Snow, Garment::PufferJacket, None, INSULATED),
    adjust(Rule::Snow, Garment::Skirt, Some((Garment::Trousers, "Fleece-Lined Trousers")), &[]),
    adjust(Rule::Sunny, Garment::Hat, None, &["sun-protection"]),
    adjust(Rule::Sunny, Garment::Sunglasses, None, &["uv-protection"]),
];

fn umbrella() -> OutfitItem {
    OutfitItem {
        slot: Slot::Accessory,
        garment: Garment::Umbrella,
        label: "Umbrella".to_string(),
        icon: "☂️".to_string(),
        tags: vec!["rain".to_string()],
    }
}

/// `(temperature + len(condition name) + seed) mod 3`, always in `0..3`.
///
/// Conditions whose names have the same length (rain/snow, sunny/windy)
/// share a rotation.
pub fn variant_index(temperature_celsius: i32, condition: &Condition, variant_seed: u32) -> usize {
    let name_len = condition.name().chars().count() as i64;
    let sum = i64::from(temperature_celsius) + name_len + i64::from(variant_seed);
    sum.rem_euclid(3) as usize
}

/// Resolve outfit advice for a temperature and condition.
///
/// Pure and infallible: the same inputs always give the same advice, and an
/// `Other` condition leaves the temperature band's outfit untouched.
pub fn outfit_advice(temperature_celsius: i32, condition: &Condition, variant_seed: u32) -> OutfitAdvice {
    let v = variant_index(temperature_celsius, condition, variant_seed);
    let band = band_for(temperature_celsius);

    let mut items: Vec<OutfitItem> = band
        .items
        .iter()
        .map(|base| {
            let choice = &base.choices[v];
            OutfitItem {
                slot: base.slot,
                garment: choice.garment,
                label: choice.label.to_string(),
                icon: base.icon.to_string(),
                tags: Vec::new(),
            }
        })
        .collect();
    let mut tips: Vec<String> = band.tips.iter().map(|t| t.to_string()).collect();
    let mut badges = vec![band.badge.to_string()];

    for effect in EFFECTS.iter().filter(|e| e.rule.applies_to(condition)) {
        for item in items.iter_mut() {
            apply_adjustments(effect.rule, item);
        }

        if effect.rule == Rule::Rain
            && !items.iter().any(|i| i.slot == Slot::Outerwear && i.has_tag("waterproof"))
        {
            items.push(umbrella());
        }

        badges.push(effect.badge.to_string());
        tips = effect.tips.iter().map(|t| t.to_string()).chain(tips).collect();
    }

    OutfitAdvice { title: band.title.to_string(), items, tips, badges }
}

/// Same as [`outfit_advice`], reading temperature and condition from a state.
pub fn advise(state: &WeatherState, variant_seed: u32) -> OutfitAdvice {
    outfit_advice(state.temperature_celsius, &state.condition, variant_seed)
}

fn apply_adjustments(rule: Rule, item: &mut OutfitItem) {
    let Some(adj) = ADJUSTMENTS.iter().find(|a| a.rule == rule && a.garment == item.garment)
    else {
        return;
    };

    if let Some((garment, label)) = adj.becomes {
        item.garment = garment;
        item.label = label.to_string();
    }
    for tag in adj.tags {
        item.add_tag(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(advice: &OutfitAdvice) -> Vec<Slot> {
        advice.items.iter().map(|i| i.slot).collect()
    }

    fn label(advice: &OutfitAdvice, slot: Slot) -> &str {
        advice.items_in(slot).next().map(|i| i.label.as_str()).unwrap_or("")
    }

    #[test]
    fn very_cold_band_covers_every_layer() {
        for t in [-30, -5, 0] {
            let advice = outfit_advice(t, &Condition::Cloudy, 0);
            assert_eq!(advice.title, "Bundle Up: Freezing Cold");
            let slots = slots(&advice);
            for slot in [Slot::Outerwear, Slot::Base, Slot::Bottom, Slot::Footwear, Slot::Accessory] {
                assert!(slots.contains(&slot), "{t}°C is missing {slot:?}");
            }
        }
    }

    #[test]
    fn band_boundaries_are_inclusive() {
        assert_eq!(outfit_advice(0, &Condition::Cloudy, 0).title, "Bundle Up: Freezing Cold");
        assert_eq!(outfit_advice(1, &Condition::Cloudy, 0).title, "Winter Warmth");
        assert_eq!(outfit_advice(10, &Condition::Cloudy, 0).title, "Winter Warmth");
        assert_eq!(outfit_advice(11, &Condition::Cloudy, 0).title, "Layered Comfort");
        assert_eq!(outfit_advice(20, &Condition::Cloudy, 0).title, "Layered Comfort");
        assert_eq!(outfit_advice(21, &Condition::Cloudy, 0).title, "Light & Breezy");
        assert_eq!(outfit_advice(45, &Condition::Cloudy, 0).title, "Light & Breezy");
    }

    #[test]
    fn rain_is_covered_by_waterproof_outerwear_or_umbrella() {
        for t in -10..=35 {
            for seed in 0..3 {
                let advice = outfit_advice(t, &Condition::Rain, seed);
                assert!(advice.badges.iter().any(|b| b == "Rain Safe"));

                let waterproof = advice
                    .items_in(Slot::Outerwear)
                    .any(|i| i.has_tag("waterproof"));
                let umbrella = advice.items.iter().any(|i| i.garment == Garment::Umbrella);
                assert!(waterproof ^ umbrella, "{t}°C seed {seed}: {advice:?}");
            }
        }
    }

    #[test]
    fn rain_swaps_light_jacket_for_rain_jacket() {
        // 16 + 4 + 2 = 22 -> variant 1 (denim jacket)
        let advice = outfit_advice(16, &Condition::Rain, 2);
        assert_eq!(label(&advice, Slot::Outerwear), "Rain Jacket");
        assert!(advice.items.iter().all(|i| i.garment != Garment::Umbrella));
    }

    #[test]
    fn cardigan_in_rain_gets_an_umbrella() {
        // 13 + 4 + 0 = 17 -> variant 2 (cardigan)
        let advice = outfit_advice(13, &Condition::Rain, 0);
        assert_eq!(label(&advice, Slot::Outerwear), "Cardigan");
        let last = advice.items.last().expect("umbrella appended");
        assert_eq!(last.label, "Umbrella");
        assert_eq!(last.slot, Slot::Accessory);
    }

    #[test]
    fn resolver_is_idempotent() {
        for condition in Condition::known() {
            let a = outfit_advice(7, &condition, 4);
            let b = outfit_advice(7, &condition, 4);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn variant_index_follows_formula() {
        assert_eq!(variant_index(6, &Condition::Cloudy, 0), 0);
        assert_eq!(variant_index(6, &Condition::Cloudy, 1), 1);
        assert_eq!(variant_index(6, &Condition::Cloudy, 2), 2);
        assert_eq!(variant_index(1, &Condition::Snow, 0), 2);
        assert_eq!(variant_index(16, &Condition::Sunny, 0), 0);
        // -7 + 4 + 0 = -3
        assert_eq!(variant_index(-7, &Condition::Rain, 0), 0);
        // -9 + 5 + 0 = -4, Euclidean remainder 2
        assert_eq!(variant_index(-9, &Condition::Windy, 0), 2);
    }

    #[test]
    fn equal_length_conditions_share_a_rotation() {
        assert_eq!(
            variant_index(12, &Condition::Rain, 5),
            variant_index(12, &Condition::Snow, 5)
        );
        assert_eq!(
            variant_index(3, &Condition::Sunny, 1),
            variant_index(3, &Condition::Windy, 1)
        );
    }

    #[test]
    fn seeds_cycle_through_label_variants() {
        let labels: Vec<String> = (0..3)
            .map(|seed| label(&outfit_advice(6, &Condition::Cloudy, seed), Slot::Outerwear).to_string())
            .collect();
        assert_eq!(labels, ["Wool Coat", "Puffer Jacket", "Peacoat"]);
    }

    #[test]
    fn snow_just_above_freezing() {
        let advice = outfit_advice(1, &Condition::Snow, 0);

        assert_eq!(advice.title, "Winter Warmth");
        assert_eq!(advice.badges, ["Winter Ready", "Snow Ready"]);
        assert_eq!(advice.tips[0], "Waterproof footwear essential");
        assert_eq!(advice.tips[1], "Wear warm, insulated layers");
        assert_eq!(&advice.tips[2..], ["Layer up, it's chilly out", "A scarf makes a big difference"]);

        let shoes = advice.items_in(Slot::Footwear).next().expect("footwear");
        assert_eq!(shoes.label, "Insulated Snow Boots");
        assert_eq!(shoes.tags, ["waterproof", "insulated"]);
    }

    #[test]
    fn sunny_mild_day() {
        let advice = outfit_advice(16, &Condition::Sunny, 0);

        assert!(advice.badges.contains(&"Sun Protection".to_string()));
        assert!(advice.tips[0].contains("sunscreen"));
        assert!(advice.tips[1].contains("hat"));
    }

    #[test]
    fn windy_turns_cardigan_into_windbreaker() {
        // 14 + 5 + 1 = 20 -> variant 2 (cardigan)
        let advice = outfit_advice(14, &Condition::Windy, 1);
        let outer = advice.items_in(Slot::Outerwear).next().expect("outerwear");
        assert_eq!(outer.label, "Windbreaker");
        assert!(outer.has_tag("windproof"));
        assert_eq!(advice.badges, ["Layer Friendly", "Wind Ready"]);
    }

    #[test]
    fn unknown_condition_leaves_base_outfit() {
        let hail = Condition::Other("hail".into());
        let advice = outfit_advice(16, &hail, 0);

        assert_eq!(advice.badges, ["Layer Friendly"]);
        assert_eq!(advice.tips, ["Bring a light layer for the evening", "Breathable fabrics work best"]);
        assert!(advice.items.iter().all(|i| i.tags.is_empty()));
        // 16 + 4 + 0 = 20 -> variant 2
        assert_eq!(label(&advice, Slot::Outerwear), "Cardigan");
    }

    #[test]
    fn every_item_has_label_and_icon() {
        for t in [-12, 0, 5, 15, 28] {
            for condition in Condition::known() {
                for seed in 0..3 {
                    let advice = outfit_advice(t, &condition, seed);
                    assert!(!advice.items.is_empty());
                    assert!(advice.items.iter().all(|i| !i.label.is_empty() && !i.icon.is_empty()));
                }
            }
        }
    }

    #[test]
    fn advise_reads_state() {
        let state = WeatherState::new(1, Condition::Snow);
        assert_eq!(advise(&state, 0), outfit_advice(1, &Condition::Snow, 0));
    }
}
