//! Card catalog and the embedded site manifest.
//!
//! # Design
//! - The card set is fixed at render time; only `visible` changes afterwards.
//! - `text` mirrors everything the card renders so search matches what users see.

use crate::core::config::UiConfig;
use serde::Deserialize;
use std::collections::BTreeSet;

/// Manifest bundled with the page.
pub const EMBEDDED_MANIFEST: &str = include_str!("../../assets/site.json");

/// Failure to decode the site manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// JSON was malformed or did not match the expected shape.
    #[error("site manifest is invalid: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Card as authored in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CardSeed {
    /// Stable slug used for keys and like state.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Body copy.
    #[serde(default)]
    pub description: String,
    /// Category attribute (e.g. `nature`).
    pub category: String,
    /// Media type attribute (e.g. `photo`).
    pub media: String,
    /// Publication date attribute, compared verbatim.
    pub date: String,
    /// Optional image URL for the card thumbnail.
    #[serde(default)]
    pub image: Option<String>,
}

/// Rendered card plus its current visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRecord {
    /// Stable slug.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Body copy.
    pub description: String,
    /// Full text content searched by the filter.
    pub text: String,
    /// Category attribute.
    pub category: String,
    /// Media type attribute.
    pub media: String,
    /// Date attribute.
    pub date: String,
    /// Optional thumbnail URL.
    pub image: Option<String>,
    /// Whether the card currently passes the filters.
    pub visible: bool,
}

impl From<CardSeed> for CardRecord {
    fn from(seed: CardSeed) -> Self {
        let text = [
            seed.title.as_str(),
            seed.description.as_str(),
            seed.category.as_str(),
            seed.media.as_str(),
            seed.date.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
        Self {
            id: seed.id,
            title: seed.title,
            description: seed.description,
            text,
            category: seed.category,
            media: seed.media,
            date: seed.date,
            image: seed.image,
            visible: true,
        }
    }
}

/// Config plus the fixed card list.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
pub struct SiteManifest {
    /// Page configuration; defaults apply when absent.
    #[serde(default)]
    pub config: UiConfig,
    /// Cards in render order.
    #[serde(default)]
    pub cards: Vec<CardSeed>,
}

impl SiteManifest {
    /// Decode a manifest from JSON.
    ///
    /// # Errors
    /// Returns [`ManifestError::Decode`] when the JSON does not match the manifest shape.
    pub fn parse(raw: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Convert the authored cards into visible records.
    #[must_use]
    pub fn records(&self) -> Vec<CardRecord> {
        self.cards.iter().cloned().map(CardRecord::from).collect()
    }
}

/// Distinct values offered by the category/media/date selects.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// Sorted category values.
    pub categories: Vec<String>,
    /// Sorted media values.
    pub media: Vec<String>,
    /// Sorted date values.
    pub dates: Vec<String>,
}

impl FilterOptions {
    /// Collect the distinct attribute values present on the cards.
    #[must_use]
    pub fn from_cards(cards: &[CardRecord]) -> Self {
        Self {
            categories: distinct(cards, |card| card.category.as_str()),
            media: distinct(cards, |card| card.media.as_str()),
            dates: distinct(cards, |card| card.date.as_str()),
        }
    }
}

fn distinct(cards: &[CardRecord], pick: impl Fn(&CardRecord) -> &str) -> Vec<String> {
    cards
        .iter()
        .map(pick)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_manifest_decodes() {
        let manifest = SiteManifest::parse(EMBEDDED_MANIFEST).expect("manifest parses");
        assert!(!manifest.cards.is_empty());
        assert!(manifest.records().iter().all(|card| card.visible));
    }

    #[test]
    fn record_text_covers_rendered_content() {
        let record = CardRecord::from(CardSeed {
            id: "sunset".into(),
            title: "Sunset Beach".into(),
            description: "Golden hour".into(),
            category: "nature".into(),
            media: "photo".into(),
            date: "2024-01-01".into(),
            image: None,
        });
        assert_eq!(record.text, "Sunset Beach Golden hour nature photo 2024-01-01");
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let err = SiteManifest::parse("{\"cards\": 3}").unwrap_err();
        assert!(err.to_string().starts_with("site manifest is invalid"));
    }

    #[test]
    fn options_are_distinct_and_sorted() {
        let manifest = SiteManifest::parse(
            r#"{"cards": [
                {"id": "a", "title": "A", "category": "urban", "media": "video", "date": "2024-02-01"},
                {"id": "b", "title": "B", "category": "nature", "media": "photo", "date": "2024-01-01"},
                {"id": "c", "title": "C", "category": "nature", "media": "photo", "date": "2024-02-01"}
            ]}"#,
        )
        .expect("manifest parses");
        let options = FilterOptions::from_cards(&manifest.records());
        assert_eq!(options.categories, vec!["nature", "urban"]);
        assert_eq!(options.media, vec!["photo", "video"]);
        assert_eq!(options.dates, vec!["2024-01-01", "2024-02-01"]);
    }
}
