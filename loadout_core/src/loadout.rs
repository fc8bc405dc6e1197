//! Equip state - one item per category key

use crate::taxonomy::classify;
use crate::types::ItemCard;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The equipped-item state: at most one item per category key
///
/// Equip operations are value replacement (they return a new
/// `Loadout`), so callers thread the state explicitly and the
/// one-per-category invariant holds by construction. The serde shape
/// of the map (category key -> item metadata) is also the persistence
/// blob written through a [`LoadoutStore`](crate::store::LoadoutStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Loadout {
    slots: BTreeMap<String, ItemCard>,
}

impl Loadout {
    /// Create an empty loadout
    pub fn new() -> Self {
        Loadout::default()
    }

    /// Equip an item into its classified category slot
    ///
    /// Returns a new state with the item occupying its category key,
    /// replacing any prior occupant. An unclassifiable item leaves the
    /// state unchanged. Idempotent.
    pub fn equip(&self, item: &ItemCard) -> Loadout {
        let mut next = self.clone();
        if let Some(key) = classify(item) {
            next.slots.insert(key, item.clone());
        }
        next
    }

    /// Remove whatever occupies a category slot
    pub fn unequip(&self, category: &str) -> Loadout {
        let mut next = self.clone();
        next.slots.remove(category);
        next
    }

    /// Whether this exact item (by token id) occupies its category slot
    pub fn is_equipped(&self, item: &ItemCard) -> bool {
        let Some(key) = classify(item) else {
            return false;
        };
        self.slots
            .get(&key)
            .is_some_and(|equipped| equipped.token_id == item.token_id)
    }

    /// The item occupying a category slot, if any
    pub fn get(&self, category: &str) -> Option<&ItemCard> {
        self.slots.get(category)
    }

    /// Iterate (category key, item) in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ItemCard)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
