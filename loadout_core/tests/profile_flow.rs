//! Integration test: Load catalog -> Browse -> Equip -> Persist -> Compute
//!
//! This test walks the full profile-to-dashboard flow against the
//! engine: filtering an owned collection by category, equipping one
//! item per slot, saving and restoring the loadout through a store,
//! and computing combined totals mounted and dismounted.

use loadout_core::{
    compute_for_loadout, compute_stats, default_taxonomy, Catalog, Loadout, LoadoutStore,
    MemoryStore, Stat,
};

const CHARACTERS: &str = r#"[
    {
        "name": "Ranger",
        "image": "ipfs://QmRanger",
        "attributes": [
            { "trait_type": "Skill", "value": 3 }
        ]
    },
    {
        "name": "Drifter",
        "attributes": [
            { "trait_type": "Grit", "value": 2 },
            { "trait_type": "Notoriety", "value": 1 }
        ]
    }
]"#;

const HORSES: &str = r#"[
    {
        "name": "Mustang",
        "attributes": [
            { "trait_type": "Coat", "value": "Bay" },
            { "trait_type": "Bonus", "value": "+1 Horsemanship" }
        ]
    }
]"#;

const ITEMS: &str = r#"[
    {
        "tokenId": "101",
        "name": "Dusty Hat",
        "rarity": "Common",
        "attributes": [
            { "trait_type": "Type", "value": "Hat" },
            { "trait_type": "Bonus", "value": "+2 Charm" }
        ]
    },
    {
        "tokenId": "102",
        "name": "Ten-Gallon Hat",
        "rarity": "Rare",
        "attributes": [
            { "trait_type": "Type", "value": "Hat" },
            { "trait_type": "Bonus", "value": "+1 Notoriety" }
        ]
    },
    {
        "tokenId": "201",
        "name": "Bandit Pistol",
        "attributes": [
            { "trait_type": "Type", "value": "Pistol" },
            { "trait_type": "Bonus", "value": "+1 Quickdraw" }
        ]
    },
    {
        "tokenId": "301",
        "name": "Ranger",
        "attributes": [
            { "trait_type": "Type", "value": "Char" }
        ]
    },
    {
        "tokenId": "302",
        "name": "Mustang",
        "attributes": [
            { "trait_type": "Type", "value": "Horse" }
        ]
    },
    {
        "tokenId": "401",
        "name": "Campfire Beans",
        "attributes": [
            { "trait_type": "Type", "value": "Food" },
            { "trait_type": "Bonus", "value": "+1 Health" }
        ]
    }
]"#;

/// Helper to print a separator
fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

#[test]
fn test_full_profile_to_dashboard_flow() {
    separator("STEP 1: Loading Catalog");

    let catalog = Catalog::from_json_strs(CHARACTERS, HORSES, ITEMS)
        .expect("Failed to load catalog");
    println!("  Loaded {} characters", catalog.characters.len());
    println!("  Loaded {} horses", catalog.horses.len());
    println!("  Loaded {} items", catalog.items.len());

    let taxonomy = default_taxonomy();

    separator("STEP 2: Browsing the Wardrobe");

    let hats = taxonomy.filter_by_category(&catalog.items, "attire", "hat");
    println!("  Hats: {:?}", hats.iter().map(|i| &i.name).collect::<Vec<_>>());
    assert_eq!(hats.len(), 2);

    let all_attire = taxonomy.filter_by_category(&catalog.items, "attire", "all");
    assert_eq!(all_attire.len(), 2);

    let weapons = taxonomy.filter_by_category(&catalog.items, "weapon", "all");
    assert_eq!(weapons.len(), 1);

    let food = taxonomy.filter_by_category(&catalog.items, "food", "all");
    assert_eq!(food.len(), 1);

    separator("STEP 3: Equipping One Item Per Category");

    let mut loadout = Loadout::new();
    for item in [&catalog.items[0], &catalog.items[2], &catalog.items[3], &catalog.items[4]] {
        loadout = loadout.equip(item);
        assert!(loadout.is_equipped(item));
    }
    println!("  Equipped {} slots", loadout.len());
    assert_eq!(loadout.len(), 4);

    // Swapping hats keeps one item in the slot
    let other_hat = catalog.item("102").unwrap();
    let swapped = loadout.equip(other_hat);
    assert_eq!(swapped.len(), 4);
    assert_eq!(swapped.get("hat").unwrap().token_id, "102");
    assert!(!swapped.is_equipped(catalog.item("101").unwrap()));

    separator("STEP 4: Persisting and Restoring the Loadout");

    let mut store = MemoryStore::new();
    store.save("session-ranger", &loadout).expect("save failed");
    let restored = store
        .load("session-ranger")
        .expect("load failed")
        .expect("snapshot missing");
    assert_eq!(restored, loadout);
    println!("  Snapshot round-tripped with {} slots", restored.len());

    separator("STEP 5: Computing Combined Stats");

    let mounted = compute_for_loadout(&catalog, &restored, true);
    for (stat, value) in mounted.entries() {
        println!("  {:12} {}", stat.name(), value);
    }
    // Ranger base Skill 3, hat +2 Charm, pistol +1 Quickdraw,
    // Mustang +1 Horsemanship while mounted
    assert_eq!(mounted.get(Stat::Skill), 3);
    assert_eq!(mounted.get(Stat::Charm), 2);
    assert_eq!(mounted.get(Stat::Quickdraw), 1);
    assert_eq!(mounted.get(Stat::Horsemanship), 1);
    assert_eq!(mounted.get(Stat::Grit), 0);

    let dismounted = compute_for_loadout(&catalog, &restored, false);
    assert_eq!(dismounted.get(Stat::Horsemanship), 0);
    assert_eq!(dismounted.get(Stat::Skill), 3);

    separator("STEP 6: Direct compute_stats Scenario");

    let hat = catalog.item("101").unwrap();
    let totals = compute_stats(&catalog, "Ranger", [hat], Some("Mustang"), true);
    assert_eq!(totals.get(Stat::Skill), 3);
    assert_eq!(totals.get(Stat::Charm), 2);
    assert_eq!(totals.get(Stat::Horsemanship), 1);

    // Unknown character: everything from the character contributes zero
    let unknown = compute_stats(&catalog, "Stranger", std::iter::empty(), None, false);
    assert_eq!(unknown.entries().map(|(_, v)| v).sum::<i32>(), 0);
}
