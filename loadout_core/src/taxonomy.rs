//! Category taxonomy, item classification, and category filtering

use crate::types::ItemCard;
use serde::{Deserialize, Serialize};

/// Synthetic subcategory key meaning "the whole category"
pub const ALL_SUBCATEGORY: &str = "all";

/// Trait type that carries an item's category (matched case-insensitively)
const TYPE_TRAIT: &str = "type";

/// A subcategory under a top-level category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub label: String,
    pub key: String,
}

/// A top-level category in the fixed hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    /// Lowercase category key ("attire", "weapon", "horse", ...)
    pub key: String,
    /// Empty for flat categories (horses, characters, food)
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    /// Category keys counted as members when filtering the category as
    /// a whole; empty means the category key alone
    #[serde(default)]
    pub members: Vec<String>,
}

impl Category {
    /// Whether a classified category key belongs to this category
    pub fn is_member(&self, key: &str) -> bool {
        if self.members.is_empty() {
            self.key == key
        } else {
            self.members.iter().any(|m| m == key)
        }
    }

    pub fn has_subcategories(&self) -> bool {
        !self.subcategories.is_empty()
    }
}

/// The fixed category hierarchy, held as plain data so that adding a
/// category or subcategory is a data change only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: Vec<Category>,
}

impl Taxonomy {
    /// Look up a category by its exact key
    pub fn find(&self, key: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Filter items by top-level category and optional subcategory
    ///
    /// Order-preserving over the input. An unrecognized category gives
    /// an empty result. A flat category, or the synthetic "all"
    /// subcategory, matches against the category's membership set; a
    /// specific subcategory matches its key exactly. Unclassifiable
    /// items never match.
    pub fn filter_by_category<'a>(
        &self,
        items: &'a [ItemCard],
        category: &str,
        subcategory: &str,
    ) -> Vec<&'a ItemCard> {
        let Some(cat) = self.find(category) else {
            return Vec::new();
        };

        if !cat.has_subcategories() || subcategory == ALL_SUBCATEGORY {
            items
                .iter()
                .filter(|item| classify(item).is_some_and(|key| cat.is_member(&key)))
                .collect()
        } else {
            let wanted = subcategory.to_lowercase();
            items
                .iter()
                .filter(|item| classify(item).as_deref() == Some(wanted.as_str()))
                .collect()
        }
    }
}

/// Derive an item's category key from its attribute list
///
/// Scans for a trait type equal to "type" (case-insensitive) and
/// returns its value lowercased. `None` means the item is
/// unclassifiable: it is skipped by filtering, and equipping it is a
/// no-op.
pub fn classify(item: &ItemCard) -> Option<String> {
    item.attributes
        .iter()
        .find(|attr| attr.trait_type.eq_ignore_ascii_case(TYPE_TRAIT))
        .map(|attr| attr.value.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_taxonomy;
    use crate::types::Attribute;

    fn item(token_id: &str, attrs: &[(&str, &str)]) -> ItemCard {
        ItemCard {
            token_id: token_id.to_string(),
            name: format!("item-{}", token_id),
            image: None,
            rarity: None,
            attributes: attrs
                .iter()
                .map(|(t, v)| Attribute::new(*t, *v))
                .collect(),
        }
    }

    #[test]
    fn test_classify_is_case_insensitive_on_both_sides() {
        for trait_type in ["type", "Type", "TYPE"] {
            for value in ["Hat", "HAT", "hat"] {
                let it = item("1", &[(trait_type, value)]);
                assert_eq!(classify(&it).as_deref(), Some("hat"));
            }
        }
    }

    #[test]
    fn test_classify_without_type_trait() {
        let it = item("1", &[("Bonus", "+2 Charm")]);
        assert_eq!(classify(&it), None);
    }

    #[test]
    fn test_classify_uses_first_type_trait() {
        let it = item("1", &[("Type", "Hat"), ("type", "Coat")]);
        assert_eq!(classify(&it).as_deref(), Some("hat"));
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let taxonomy = default_taxonomy();
        let items = vec![item("1", &[("Type", "Hat")])];
        assert!(taxonomy.filter_by_category(&items, "saddles", "all").is_empty());
    }

    #[test]
    fn test_filter_attire_all_uses_membership_set() {
        let taxonomy = default_taxonomy();
        let items = vec![
            item("1", &[("Type", "Hat")]),
            item("2", &[("Type", "Pistol")]),
            item("3", &[("Type", "Boots")]),
            item("4", &[("Type", "Attire")]),
            item("5", &[("Bonus", "+1 Grit")]), // unclassifiable
        ];
        let filtered = taxonomy.filter_by_category(&items, "attire", "all");
        let ids: Vec<&str> = filtered.iter().map(|i| i.token_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
    }

    #[test]
    fn test_filter_specific_subcategory() {
        let taxonomy = default_taxonomy();
        let items = vec![
            item("1", &[("Type", "Hat")]),
            item("2", &[("Type", "Coat")]),
        ];
        let filtered = taxonomy.filter_by_category(&items, "attire", "coat");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].token_id, "2");
    }

    #[test]
    fn test_filter_flat_category_ignores_subcategory() {
        let taxonomy = default_taxonomy();
        let items = vec![
            item("1", &[("Type", "Horse")]),
            item("2", &[("Type", "Hat")]),
        ];
        // Subcategory value is irrelevant for categories without one
        let filtered = taxonomy.filter_by_category(&items, "horse", "hat");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].token_id, "1");
    }

    #[test]
    fn test_filter_weapon_all_members() {
        let taxonomy = default_taxonomy();
        let items = vec![
            item("1", &[("Type", "Rifle")]),
            item("2", &[("Type", "Special")]),
            item("3", &[("Type", "Weapon")]),
            item("4", &[("Type", "Hat")]),
        ];
        let filtered = taxonomy.filter_by_category(&items, "weapon", "all");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let taxonomy = default_taxonomy();
        let items = vec![
            item("3", &[("Type", "Boots")]),
            item("1", &[("Type", "Hat")]),
            item("2", &[("Type", "Gloves")]),
        ];
        let filtered = taxonomy.filter_by_category(&items, "attire", "all");
        let ids: Vec<&str> = filtered.iter().map(|i| i.token_id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }
}
