//! Static catalog of characters, horses, and items

use crate::types::{CharacterSheet, HorseCard, ItemCard};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Catalog loading error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A reference into whichever collection a name resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry<'a> {
    Character(&'a CharacterSheet),
    Horse(&'a HorseCard),
    Item(&'a ItemCard),
}

/// The three static collections, loaded once at startup and then
/// treated as read-only
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub characters: Vec<CharacterSheet>,
    pub horses: Vec<HorseCard>,
    pub items: Vec<ItemCard>,
}

impl Catalog {
    /// Build a catalog from the three collection JSON documents
    pub fn from_json_strs(
        characters: &str,
        horses: &str,
        items: &str,
    ) -> Result<Catalog, CatalogError> {
        Ok(Catalog {
            characters: serde_json::from_str(characters)?,
            horses: serde_json::from_str(horses)?,
            items: serde_json::from_str(items)?,
        })
    }

    /// Load `characters.json`, `horses.json`, and `items.json` from a
    /// directory
    pub fn load_from_dir(dir: &Path) -> Result<Catalog, CatalogError> {
        let characters = fs::read_to_string(dir.join("characters.json"))?;
        let horses = fs::read_to_string(dir.join("horses.json"))?;
        let items = fs::read_to_string(dir.join("items.json"))?;
        Catalog::from_json_strs(&characters, &horses, &items)
    }

    /// Look up a character by exact name
    pub fn character(&self, name: &str) -> Option<&CharacterSheet> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Look up a horse by exact name
    pub fn horse(&self, name: &str) -> Option<&HorseCard> {
        self.horses.iter().find(|h| h.name == name)
    }

    /// Look up an item by its stable token id
    pub fn item(&self, token_id: &str) -> Option<&ItemCard> {
        self.items.iter().find(|i| i.token_id == token_id)
    }

    /// Resolve a name against characters, then horses, then items
    pub fn find_by_name(&self, name: &str) -> Option<CatalogEntry<'_>> {
        if let Some(c) = self.character(name) {
            return Some(CatalogEntry::Character(c));
        }
        if let Some(h) = self.horse(name) {
            return Some(CatalogEntry::Horse(h));
        }
        self.items
            .iter()
            .find(|i| i.name == name)
            .map(CatalogEntry::Item)
    }
}
