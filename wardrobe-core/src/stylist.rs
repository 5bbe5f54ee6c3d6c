//! Canned styling chat.
//!
//! Replies come from a keyword table; the first topic whose keyword appears
//! in the message answers. Nothing here calls a model.

use crate::{advice::OutfitAdvice, profile::Profile};

/// What the stylist knows about the user when answering.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub profile: &'a Profile,
    pub closet_items: usize,
    pub today: Option<&'a OutfitAdvice>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylistReply {
    pub text: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Canned,
    Weather,
}

struct Topic {
    kind: Kind,
    keywords: &'static [&'static str],
    reply: &'static str,
    suggestions: &'static [&'static str],
    uses_closet: bool,
}

static TOPICS: &[Topic] = &[
    Topic {
        kind: Kind::Canned,
        keywords: &["work", "office", "interview", "meeting", "business"],
        reply: "For a polished work look, pair tailored trousers with a crisp shirt and a structured blazer. Keep colors neutral and let one accessory stand out.",
        suggestions: &["Tailored trousers", "Crisp button-down", "Structured blazer", "Leather loafers"],
        uses_closet: true,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["date", "dinner", "romantic"],
        reply: "Go for something that feels like you, just a step up: dark jeans, a silky top or a fitted knit, and shoes you can walk in.",
        suggestions: &["Dark jeans", "Silk blouse or fitted knit", "Ankle boots"],
        uses_closet: true,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["wedding", "formal", "gala", "party"],
        reply: "Formal events call for a midi or maxi dress or a well-cut suit. Check the dress code and avoid white at weddings.",
        suggestions: &["Midi dress", "Tailored suit", "Statement earrings", "Dress shoes"],
        uses_closet: false,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["casual", "weekend", "relaxed", "brunch"],
        reply: "Relaxed but put-together: a good tee, straight-leg jeans and clean white sneakers. Add an overshirt if it cools down.",
        suggestions: &["Quality tee", "Straight-leg jeans", "White sneakers", "Overshirt"],
        uses_closet: true,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["gym", "workout", "run", "running", "yoga"],
        reply: "Choose moisture-wicking layers and supportive shoes. A light zip-up covers the walk there and back.",
        suggestions: &["Moisture-wicking tee", "Leggings or shorts", "Running shoes"],
        uses_closet: false,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["color", "colour", "colors", "colours", "match"],
        reply: "Start from a neutral base (navy, grey, camel, white) and add one accent color. Complementary pairs like blue and orange work when one stays muted.",
        suggestions: &["Navy + camel", "Grey + burgundy", "White + olive"],
        uses_closet: false,
    },
    Topic {
        kind: Kind::Canned,
        keywords: &["travel", "trip", "pack", "packing", "vacation"],
        reply: "Pack a capsule: a few neutral basics that all mix and match, one layer for cold evenings and two pairs of shoes at most.",
        suggestions: &["Neutral tees", "One pair of versatile trousers", "Packable jacket", "Comfortable sneakers"],
        uses_closet: true,
    },
    Topic {
        kind: Kind::Weather,
        keywords: &["weather", "rain", "cold", "hot", "snow", "today"],
        reply: "Share your location and I'll match your outfit to the forecast.",
        suggestions: &[],
        uses_closet: false,
    },
];

const FALLBACK: &str = "Tell me about the occasion, the weather or a color you want to wear, and I'll put together some ideas.";

fn words(message: &str) -> Vec<String> {
    message
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

pub struct Stylist;

impl Stylist {
    pub fn reply(message: &str, context: &StyleContext<'_>) -> StylistReply {
        let words = words(message);
        let topic = TOPICS
            .iter()
            .find(|topic| topic.keywords.iter().any(|k| words.iter().any(|w| w == k)));

        let greeting = context.profile.greeting();

        let Some(topic) = topic else {
            return StylistReply { text: format!("{greeting} {FALLBACK}"), suggestions: Vec::new() };
        };

        let (mut text, suggestions) = match (topic.kind, context.today) {
            (Kind::Weather, Some(advice)) => {
                let mut text = format!("{greeting} Today's look is \"{}\".", advice.title);
                if let Some(tip) = advice.tips.first() {
                    text.push_str(&format!(" Top tip: {tip}."));
                }
                let suggestions = advice.items.iter().map(|i| i.label.clone()).collect();
                (text, suggestions)
            }
            _ => (
                format!("{greeting} {}", topic.reply),
                topic.suggestions.iter().map(|s| s.to_string()).collect(),
            ),
        };

        if topic.uses_closet {
            match context.closet_items {
                0 => text.push_str(" Add a few pieces to your closet and I can pick from them."),
                1 => text.push_str(" You have 1 item in your closet to work with."),
                n => text.push_str(&format!(" You have {n} items in your closet to work with.")),
            }
        }

        StylistReply { text, suggestions }
    }
}
