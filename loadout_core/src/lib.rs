//! loadout_core - Character-build configurator engine
//!
//! This library provides:
//! - Classification of items into categories from their metadata
//! - Category-driven filtering of an owned-item collection
//! - Equip state with a one-item-per-category invariant
//! - Aggregation of sign-prefixed stat modifiers into build totals
//!
//! Everything here is pure and synchronous; catalog data is loaded
//! once and shared read-only, and equip state is threaded through as
//! a value.

pub mod catalog;
pub mod config;
pub mod loadout;
pub mod modifier;
pub mod stats;
pub mod store;
pub mod taxonomy;
pub mod types;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogEntry, CatalogError};
pub use config::{default_taxonomy, load_taxonomy, parse_taxonomy, ConfigError};
pub use loadout::Loadout;
pub use modifier::{parse_modifier, Modifier};
pub use stats::{compute_for_loadout, compute_stats, StatTotals};
pub use store::{JsonFileStore, LoadoutStore, MemoryStore, StoreError};
pub use taxonomy::{classify, Category, Subcategory, Taxonomy, ALL_SUBCATEGORY};
pub use types::{Attribute, BaseAttribute, CharacterSheet, HorseCard, ItemCard, Stat};
