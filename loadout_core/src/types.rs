//! Core types specific to loadout_core

use serde::{Deserialize, Serialize};

/// A single metadata trait on an item or horse
///
/// This mirrors the NFT-metadata attribute shape:
/// `{ "trait_type": "Bonus", "value": "+2 Charm" }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// An ownable item catalog entry (attire, weapon, food, etc.)
///
/// Immutable once loaded; owned-item instances are read-only copies
/// tagged with their stable token id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCard {
    /// Stable token id identifying the item instance
    #[serde(rename = "tokenId")]
    pub token_id: String,
    pub name: String,
    /// Image reference, possibly an `ipfs://` URI
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ItemCard {
    /// Resolve the image reference to a fetchable URL
    ///
    /// `ipfs://` URIs are rewritten to the public ipfs.io gateway.
    pub fn image_url(&self) -> Option<String> {
        self.image.as_ref().map(|url| {
            match url.strip_prefix("ipfs://") {
                Some(rest) => format!("https://ipfs.io/ipfs/{}", rest),
                None => url.clone(),
            }
        })
    }
}

/// A base attribute on a character sheet, already an integer value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAttribute {
    /// Stat name, matched case-sensitively against [`Stat`] names
    #[serde(rename = "trait_type")]
    pub stat: String,
    pub value: i32,
}

/// A playable character catalog entry, keyed by name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub attributes: Vec<BaseAttribute>,
}

/// A horse catalog entry, keyed by name
///
/// Attributes with trait type `"Bonus"` carry modifier strings that
/// apply to the rider while mounted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HorseCard {
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// The eight canonical stats tracked for a build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Skill,
    Health,
    Quickdraw,
    Deadeye,
    Horsemanship,
    Grit,
    Notoriety,
    Charm,
}

impl Stat {
    /// Get all canonical stats, in display order
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Skill,
            Stat::Health,
            Stat::Quickdraw,
            Stat::Deadeye,
            Stat::Horsemanship,
            Stat::Grit,
            Stat::Notoriety,
            Stat::Charm,
        ]
    }

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Stat::Skill => "Skill",
            Stat::Health => "Health",
            Stat::Quickdraw => "Quickdraw",
            Stat::Deadeye => "Deadeye",
            Stat::Horsemanship => "Horsemanship",
            Stat::Grit => "Grit",
            Stat::Notoriety => "Notoriety",
            Stat::Charm => "Charm",
        }
    }

    /// Look up a stat by its exact canonical name
    ///
    /// Matching is case-sensitive: `"charm"` is not a canonical stat.
    pub fn from_name(name: &str) -> Option<Stat> {
        Stat::all().iter().copied().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_from_name_exact() {
        assert_eq!(Stat::from_name("Charm"), Some(Stat::Charm));
        assert_eq!(Stat::from_name("Horsemanship"), Some(Stat::Horsemanship));
    }

    #[test]
    fn test_stat_from_name_is_case_sensitive() {
        assert_eq!(Stat::from_name("charm"), None);
        assert_eq!(Stat::from_name("CHARM"), None);
        assert_eq!(Stat::from_name("Luck"), None);
    }

    #[test]
    fn test_stat_all_has_eight_entries() {
        assert_eq!(Stat::all().len(), 8);
    }

    #[test]
    fn test_image_url_resolves_ipfs() {
        let item = ItemCard {
            token_id: "1".to_string(),
            name: "Dusty Hat".to_string(),
            image: Some("ipfs://QmHat123".to_string()),
            rarity: None,
            attributes: vec![],
        };
        assert_eq!(
            item.image_url().as_deref(),
            Some("https://ipfs.io/ipfs/QmHat123")
        );
    }

    #[test]
    fn test_image_url_passes_through_http() {
        let item = ItemCard {
            token_id: "1".to_string(),
            name: "Dusty Hat".to_string(),
            image: Some("https://example.com/hat.png".to_string()),
            rarity: None,
            attributes: vec![],
        };
        assert_eq!(
            item.image_url().as_deref(),
            Some("https://example.com/hat.png")
        );
    }

    #[test]
    fn test_item_card_deserializes_nft_metadata_shape() {
        let json = r#"{
            "tokenId": "42",
            "name": "Bandit Pistol",
            "image": "ipfs://QmPistol",
            "rarity": "Rare",
            "attributes": [
                { "trait_type": "Type", "value": "Pistol" },
                { "trait_type": "Bonus", "value": "+1 Quickdraw" }
            ]
        }"#;
        let item: ItemCard = serde_json::from_str(json).unwrap();
        assert_eq!(item.token_id, "42");
        assert_eq!(item.attributes.len(), 2);
        assert_eq!(item.attributes[0].trait_type, "Type");
    }
}
