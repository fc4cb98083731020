//! Content Map
//!
//! The per-take content model consumers index into: 52 takes, each with a
//! title, caption, photo reference, optional date, auxiliary cards and
//! stickers. The JSON on disk comes in two shapes (a bare array of takes,
//! or `{ "items": [...], "mainDates": {...} }`); both load into the same
//! [`ContentMap`].
//!
//! Cards arrive as loosely-typed objects (`type` + free-form `content`).
//! They are validated into the [`CardKind`] enum here; unrecognized or
//! malformed cards are dropped with a warning rather than trusted blindly
//! or treated as fatal.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

/// Errors loading a content map.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The file could not be read.
    #[error("failed to read content map: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON, or matches neither accepted shape.
    #[error("content map is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A date as it appears in the content JSON: either a formatted string
/// (`"09/11/2024"`) or a bare day-of-month number.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DateSpec {
    /// A formatted date string.
    Text(String),
    /// A day of month; month and year come from the take's position.
    Day(u32),
}

/// One micro-moment in the sequence.
#[derive(Clone, Debug)]
pub struct Take {
    /// Stable identifier (`foto1`..`foto52` when not given).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short caption under the frame.
    pub caption: String,
    /// Date override, if any.
    pub date: Option<DateSpec>,
    /// Photo reference (path or URL; the surface decides how to show it).
    pub image: String,
    /// Auxiliary content cards.
    pub cards: Vec<Card>,
    /// Decorative stickers.
    pub stickers: Vec<Sticker>,
}

/// An auxiliary content card attached to a take.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    /// Card heading.
    pub title: String,
    /// The card's validated payload.
    pub kind: CardKind,
}

/// Validated card payloads.
#[derive(Clone, Debug, PartialEq)]
pub enum CardKind {
    /// A place (city / country).
    Location {
        /// City name.
        city: String,
        /// Country name.
        country: String,
    },
    /// Free-form note.
    Text {
        /// The note body.
        text: String,
    },
    /// An embedded song.
    Music {
        /// Embed reference.
        embed: String,
    },
    /// An external link.
    Link {
        /// Link target.
        url: String,
        /// Optional display label.
        label: Option<String>,
    },
    /// An embedded video clip.
    Video {
        /// Embed reference.
        embed: String,
    },
}

/// A decorative sticker attached to a take.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    /// Image reference.
    pub image: String,
}

/// The full content model for the sequence.
#[derive(Clone, Debug, Default)]
pub struct ContentMap {
    takes: Vec<Take>,
    main_dates: BTreeMap<String, DateSpec>,
}

#[derive(Deserialize)]
struct RawTake {
    id: Option<String>,
    title: Option<String>,
    caption: Option<String>,
    date: Option<DateSpec>,
    image: Option<String>,
    #[serde(default)]
    cards: Vec<Value>,
    #[serde(default)]
    stickers: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMap {
    Wrapped {
        items: Vec<RawTake>,
        #[serde(rename = "mainDates", default)]
        main_dates: BTreeMap<String, DateSpec>,
    },
    Plain(Vec<RawTake>),
}

impl ContentMap {
    /// Load a content map from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse a content map from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: RawMap = serde_json::from_str(text)?;
        let (items, main_dates) = match raw {
            RawMap::Wrapped { items, main_dates } => (items, main_dates),
            RawMap::Plain(items) => (items, BTreeMap::new()),
        };
        let takes = items
            .into_iter()
            .enumerate()
            .map(|(i, raw)| take_from_raw(raw, i))
            .collect();
        Ok(Self { takes, main_dates })
    }

    /// A tiny built-in map used when the real JSON cannot be loaded, so the
    /// presentation still has something to show.
    #[must_use]
    pub fn demo() -> Self {
        let json = r#"[
          { "id": "foto1", "title": "Nov 2024 — Parte 1/4", "caption": "parte 1/4",
            "date": "09/11/2024", "image": "assets/nov_2024_1.jpg",
            "cards": [
              { "type": "location", "title": "SP • Brasil",
                "content": { "city": "São Paulo", "country": "Brasil" } },
              { "type": "text", "title": "Lembrete",
                "content": { "text": "Primeiro café juntos nesse dia." } }
            ] },
          { "id": "foto2", "title": "Nov 2024 — Parte 2/4", "caption": "parte 2/4",
            "date": "16/11/2024", "image": "assets/nov_2024_2.jpg",
            "cards": [
              { "type": "music", "title": "Nossa música",
                "content": { "embed": "spotify:track:7BKLCZ1jbUBVqRi2FVlTVw" } }
            ] }
        ]"#;
        Self::from_json(json).unwrap_or_default()
    }

    /// The take at `index`, if present.
    #[must_use]
    pub fn take(&self, index: u32) -> Option<&Take> {
        self.takes.get(index as usize)
    }

    /// All takes in order.
    #[must_use]
    pub fn takes(&self) -> &[Take] {
        &self.takes
    }

    /// Month-seed dates keyed by `"YYYY-MM"`.
    #[must_use]
    pub fn main_dates(&self) -> &BTreeMap<String, DateSpec> {
        &self.main_dates
    }

    /// Number of takes in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.takes.len()
    }

    /// Whether the map has no takes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.takes.is_empty()
    }
}

fn take_from_raw(raw: RawTake, index: usize) -> Take {
    let cards = raw
        .cards
        .into_iter()
        .filter_map(|value| card_from_value(&value))
        .collect();
    let stickers = raw
        .stickers
        .into_iter()
        .filter_map(|value| sticker_from_value(&value))
        .collect();
    Take {
        id: raw
            .id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("foto{}", index + 1)),
        title: raw.title.unwrap_or_default(),
        caption: raw.caption.unwrap_or_default(),
        date: raw.date,
        image: raw.image.unwrap_or_default(),
        cards,
        stickers,
    }
}

fn card_from_value(value: &Value) -> Option<Card> {
    let kind_tag = value.get("type").and_then(Value::as_str)?;
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let content = value.get("content");
    let field = |name: &str| -> Option<String> {
        content?
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    let kind = match kind_tag {
        "location" => CardKind::Location {
            city: field("city").unwrap_or_default(),
            country: field("country").unwrap_or_default(),
        },
        "text" => CardKind::Text {
            text: field("text")?,
        },
        "music" => CardKind::Music {
            embed: field("embed")?,
        },
        "link" => CardKind::Link {
            url: field("url")?,
            label: field("title"),
        },
        "video" => CardKind::Video {
            embed: field("embed")?,
        },
        other => {
            tracing::warn!(kind = other, "dropping card with unrecognized type");
            return None;
        }
    };
    Some(Card { title, kind })
}

fn sticker_from_value(value: &Value) -> Option<Sticker> {
    let image = value.get("img_src").and_then(Value::as_str)?;
    if image.is_empty() {
        return None;
    }
    Some(Sticker {
        image: image.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_array_shape_loads() {
        let map = ContentMap::from_json(
            r#"[{ "id": "a", "title": "t", "caption": "c", "image": "i.jpg" }]"#,
        )
        .unwrap();
        assert_eq!(map.len(), 1);
        let take = map.take(0).unwrap();
        assert_eq!(take.id, "a");
        assert_eq!(take.title, "t");
        assert!(take.cards.is_empty());
    }

    #[test]
    fn test_wrapped_shape_carries_main_dates() {
        let map = ContentMap::from_json(
            r#"{ "items": [ {}, {} ], "mainDates": { "2024-11": "09/11/2024", "2025-01": 17 } }"#,
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.main_dates().get("2024-11"),
            Some(&DateSpec::Text("09/11/2024".to_string()))
        );
        assert_eq!(map.main_dates().get("2025-01"), Some(&DateSpec::Day(17)));
    }

    #[test]
    fn test_missing_ids_get_defaults() {
        let map = ContentMap::from_json(r#"[ {}, { "id": "" } ]"#).unwrap();
        assert_eq!(map.take(0).unwrap().id, "foto1");
        assert_eq!(map.take(1).unwrap().id, "foto2");
    }

    #[test]
    fn test_cards_validate_by_type() {
        let map = ContentMap::from_json(
            r#"[{ "cards": [
                { "type": "location", "title": "SP", "content": { "city": "São Paulo", "country": "Brasil" } },
                { "type": "link", "title": "Reserva", "content": { "url": "https://example.com", "title": "Ver" } },
                { "type": "hologram", "title": "???", "content": {} },
                { "type": "music", "content": {} }
            ] }]"#,
        )
        .unwrap();
        let cards = &map.take(0).unwrap().cards;
        // Unknown type and the music card without an embed are dropped.
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0].kind,
            CardKind::Location {
                city: "São Paulo".to_string(),
                country: "Brasil".to_string(),
            }
        );
        assert_eq!(
            cards[1].kind,
            CardKind::Link {
                url: "https://example.com".to_string(),
                label: Some("Ver".to_string()),
            }
        );
    }

    #[test]
    fn test_stickers_require_an_image() {
        let map = ContentMap::from_json(
            r#"[{ "stickers": [ { "img_src": "heart.svg" }, { "img_src": "" }, {} ] }]"#,
        )
        .unwrap();
        assert_eq!(
            map.take(0).unwrap().stickers,
            vec![Sticker {
                image: "heart.svg".to_string()
            }]
        );
    }

    #[test]
    fn test_demo_map_is_usable() {
        let map = ContentMap::demo();
        assert!(!map.is_empty());
        assert_eq!(map.take(0).unwrap().id, "foto1");
        assert!(!map.take(0).unwrap().cards.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ContentMap::from_json("not json").is_err());
        assert!(ContentMap::from_json(r#"{ "neither": "shape" }"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "x" }}]"#).unwrap();
        let map = ContentMap::load(file.path()).unwrap();
        assert_eq!(map.take(0).unwrap().id, "x");
    }
}
