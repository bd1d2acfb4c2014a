//! Domain types for the garage
//!
//! These types are storage-agnostic - they don't know where or how the
//! collection is persisted. Wire format matches the platform's content
//! API: camelCase enum values, RFC 3339 timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Content kind of a saved item; combined with `id` it forms the store key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardType {
    Photo,
    Video,
    NewCar,
    UsedCar,
    Article,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Photo => "photo",
            CardType::Video => "video",
            CardType::NewCar => "newCar",
            CardType::UsedCar => "usedCar",
            CardType::Article => "article",
        }
    }
}

impl FromStr for CardType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "photo" => Ok(CardType::Photo),
            "video" => Ok(CardType::Video),
            "newCar" | "new-car" => Ok(CardType::NewCar),
            "usedCar" | "used-car" => Ok(CardType::UsedCar),
            "article" => Ok(CardType::Article),
            _ => anyhow::bail!(
                "Invalid card type '{}'. Valid types: photo, video, newCar, usedCar, article",
                s
            ),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-assigned classification of a saved car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ownership {
    Owned,
    TestDriven,
    Interested,
}

impl Ownership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ownership::Owned => "owned",
            Ownership::TestDriven => "testDriven",
            Ownership::Interested => "interested",
        }
    }
}

impl FromStr for Ownership {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owned" => Ok(Ownership::Owned),
            "testDriven" | "test-driven" => Ok(Ownership::TestDriven),
            "interested" => Ok(Ownership::Interested),
            _ => anyhow::bail!(
                "Invalid ownership '{}'. Valid values: owned, testDriven, interested",
                s
            ),
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A free-form metadata value (the wire format allows strings and numbers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
}

impl From<&str> for MetadataValue {
    fn from(s: &str) -> Self {
        MetadataValue::Text(s.to_string())
    }
}

impl From<f64> for MetadataValue {
    fn from(n: f64) -> Self {
        MetadataValue::Number(n)
    }
}

/// Item metadata: a typed `ownership` field plus a free-form fallback map
///
/// The store never validates the fallback map's contents; consuming
/// features read keys by convention. Absent keys stand in for values the
/// platform never set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ownership: Option<Ownership>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, MetadataValue>,
}

impl ItemMetadata {
    /// Metadata with just an ownership category
    pub fn with_ownership(ownership: Ownership) -> Self {
        Self {
            ownership: Some(ownership),
            extra: BTreeMap::new(),
        }
    }

    /// Shallow-merge a patch into this metadata
    ///
    /// A `Some` ownership in the patch replaces the field; each key present
    /// in the patch's fallback map overwrites that key. Keys absent from the
    /// patch are left untouched.
    pub fn merge(&mut self, patch: ItemMetadata) {
        if patch.ownership.is_some() {
            self.ownership = patch.ownership;
        }
        self.extra.extend(patch.extra);
    }
}

/// A saved content item - a car, article, video, or photo in the garage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub title: String,
    pub image_url: String,
    /// Set at creation, never mutated by metadata updates
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl SavedItem {
    /// Create an item saved right now
    pub fn new(
        id: impl Into<String>,
        card_type: CardType,
        title: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            card_type,
            title: title.into(),
            image_url: image_url.into(),
            saved_at: Utc::now(),
            metadata: ItemMetadata::default(),
        }
    }

    /// The store key: `(id, card_type)`
    pub fn key(&self) -> (&str, CardType) {
        (&self.id, self.card_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_wire_format() {
        let json = serde_json::to_string(&CardType::NewCar).unwrap();
        assert_eq!(json, "\"newCar\"");

        let parsed: CardType = serde_json::from_str("\"usedCar\"").unwrap();
        assert_eq!(parsed, CardType::UsedCar);
    }

    #[test]
    fn test_ownership_wire_format() {
        let json = serde_json::to_string(&Ownership::TestDriven).unwrap();
        assert_eq!(json, "\"testDriven\"");
    }

    #[test]
    fn test_card_type_from_str_rejects_unknown() {
        assert!("banner".parse::<CardType>().is_err());
        assert_eq!("new-car".parse::<CardType>().unwrap(), CardType::NewCar);
    }

    #[test]
    fn test_saved_item_round_trip() {
        let mut item = SavedItem::new("car-42", CardType::NewCar, "Rivian R2", "https://img/r2.jpg");
        item.metadata.ownership = Some(Ownership::Interested);
        item.metadata
            .extra
            .insert("trim".to_string(), "Launch Edition".into());
        item.metadata.extra.insert("year".to_string(), 2026.0.into());

        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"type\":\"newCar\""));
        assert!(json.contains("\"savedAt\""));
        assert!(json.contains("\"imageUrl\""));

        let back: SavedItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_metadata_flattens_extra_keys() {
        let json = r#"{"ownership":"owned","mileage":42000.0,"color":"red"}"#;
        let meta: ItemMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.ownership, Some(Ownership::Owned));
        assert_eq!(meta.extra.get("color"), Some(&MetadataValue::from("red")));
        assert_eq!(meta.extra.get("mileage"), Some(&MetadataValue::from(42000.0)));
    }

    #[test]
    fn test_merge_overwrites_present_keys_only() {
        let mut meta = ItemMetadata::with_ownership(Ownership::Interested);
        meta.extra.insert("color".to_string(), "red".into());
        meta.extra.insert("trim".to_string(), "SE".into());

        let mut patch = ItemMetadata::default();
        patch.extra.insert("color".to_string(), "blue".into());
        meta.merge(patch);

        // Absent ownership in the patch leaves the field alone
        assert_eq!(meta.ownership, Some(Ownership::Interested));
        assert_eq!(meta.extra.get("color"), Some(&MetadataValue::from("blue")));
        assert_eq!(meta.extra.get("trim"), Some(&MetadataValue::from("SE")));
    }

    #[test]
    fn test_merge_replaces_ownership() {
        let mut meta = ItemMetadata::with_ownership(Ownership::Interested);
        meta.merge(ItemMetadata::with_ownership(Ownership::Owned));
        assert_eq!(meta.ownership, Some(Ownership::Owned));
    }
}
