//! Configuration loading from TOML files

use crate::taxonomy::{Category, Subcategory, Taxonomy};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a taxonomy from a TOML file
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, ConfigError> {
    load_toml(path)
}

/// Load a taxonomy from a TOML string
pub fn parse_taxonomy(content: &str) -> Result<Taxonomy, ConfigError> {
    parse_toml(content)
}

/// Get the default taxonomy
///
/// Reads the bundled `config/taxonomy.toml`; falls back to the same
/// hierarchy built in code if the bundled file fails to parse.
pub fn default_taxonomy() -> Taxonomy {
    let toml = include_str!("../config/taxonomy.toml");
    parse_taxonomy(toml).unwrap_or_else(|_| builtin_taxonomy())
}

fn builtin_taxonomy() -> Taxonomy {
    fn sub(label: &str, key: &str) -> Subcategory {
        Subcategory {
            label: label.to_string(),
            key: key.to_string(),
        }
    }

    Taxonomy {
        categories: vec![
            Category {
                label: "Attire".to_string(),
                key: "attire".to_string(),
                subcategories: vec![
                    sub("All", "all"),
                    sub("Hat", "hat"),
                    sub("Coat", "coat"),
                    sub("Chaps", "chaps"),
                    sub("Gloves", "gloves"),
                    sub("Boots", "boots"),
                ],
                members: ["hat", "coat", "chaps", "gloves", "boots", "attire"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            Category {
                label: "Weapons".to_string(),
                key: "weapon".to_string(),
                subcategories: vec![
                    sub("All", "all"),
                    sub("Pistols", "pistol"),
                    sub("Rifles", "rifle"),
                    sub("Knives", "knife"),
                    sub("Special Weapons", "special"),
                ],
                members: ["pistol", "rifle", "knife", "special", "weapon"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            Category {
                label: "Horses".to_string(),
                key: "horse".to_string(),
                subcategories: vec![],
                members: vec![],
            },
            Category {
                label: "Characters".to_string(),
                key: "char".to_string(),
                subcategories: vec![],
                members: vec![],
            },
            Category {
                label: "Food & Potions".to_string(),
                key: "food".to_string(),
                subcategories: vec![],
                members: vec![],
            },
        ],
    }
}
