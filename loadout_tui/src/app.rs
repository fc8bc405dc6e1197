//! Application state

use loadout_core::{
    compute_for_loadout, default_taxonomy, taxonomy::classify, Catalog, Category, ItemCard,
    Loadout, LoadoutStore, MemoryStore, StatTotals, Taxonomy, ALL_SUBCATEGORY,
};
use std::path::Path;

/// Store key for this session's loadout snapshot
const SESSION_KEY: &str = "local-session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Wardrobe,
    Loadout,
    Stats,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Wardrobe, Tab::Loadout, Tab::Stats, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Wardrobe => "Wardrobe",
            Tab::Loadout => "Loadout",
            Tab::Stats => "Stats",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub taxonomy: Taxonomy,
    pub catalog: Catalog,
    /// The owned collection browsed in the wardrobe. Ownership queries
    /// are an external concern; the demo treats the whole item catalog
    /// as owned.
    pub owned: Vec<ItemCard>,
    pub loadout: Loadout,
    pub store: MemoryStore,
    pub mounted: bool,
    pub selected_category: usize,
    pub selected_subcategory: usize,
    pub selected_item: usize,
    pub stats_scroll: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        let catalog = load_catalog();
        let owned = catalog.items.clone();
        let store = MemoryStore::new();
        let loadout = store
            .load(SESSION_KEY)
            .ok()
            .flatten()
            .unwrap_or_default();

        App {
            current_tab: Tab::Wardrobe,
            taxonomy: default_taxonomy(),
            catalog,
            owned,
            loadout,
            store,
            mounted: true,
            selected_category: 0,
            selected_subcategory: 0,
            selected_item: 0,
            stats_scroll: 0,
            status: None,
        }
    }

    pub fn current_category(&self) -> &Category {
        &self.taxonomy.categories[self.selected_category]
    }

    /// Key of the active subcategory ("all" for flat categories)
    pub fn subcategory_key(&self) -> &str {
        let category = self.current_category();
        category
            .subcategories
            .get(self.selected_subcategory)
            .map(|s| s.key.as_str())
            .unwrap_or(ALL_SUBCATEGORY)
    }

    /// Items visible in the wardrobe under the current selection
    pub fn filtered_items(&self) -> Vec<&ItemCard> {
        let category = self.current_category();
        self.taxonomy
            .filter_by_category(&self.owned, &category.key, self.subcategory_key())
    }

    pub fn totals(&self) -> StatTotals {
        compute_for_loadout(&self.catalog, &self.loadout, self.mounted)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Wardrobe => {
                if self.selected_item > 0 {
                    self.selected_item -= 1;
                }
            }
            Tab::Stats => {
                if self.stats_scroll > 0 {
                    self.stats_scroll -= 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Wardrobe => {
                let count = self.filtered_items().len();
                if self.selected_item < count.saturating_sub(1) {
                    self.selected_item += 1;
                }
            }
            Tab::Stats => {
                if self.stats_scroll < crate::ui::stats_view::LINE_COUNT - 1 {
                    self.stats_scroll += 1;
                }
            }
            _ => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Wardrobe && self.selected_category > 0 {
            self.selected_category -= 1;
            self.reset_wardrobe_cursor();
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Wardrobe
            && self.selected_category < self.taxonomy.categories.len() - 1
        {
            self.selected_category += 1;
            self.reset_wardrobe_cursor();
        }
    }

    /// Cycle through the current category's subcategories
    pub fn next_subcategory(&mut self) {
        let count = self.current_category().subcategories.len();
        if count > 0 {
            self.selected_subcategory = (self.selected_subcategory + 1) % count;
            self.selected_item = 0;
        }
    }

    /// Equip the item under the cursor
    pub fn on_enter(&mut self) {
        let Some(item) = self.filtered_items().get(self.selected_item).cloned().cloned() else {
            return;
        };
        self.loadout = self.loadout.equip(&item);
        self.persist();
    }

    /// Unequip whatever occupies the selected item's category slot
    pub fn unequip_selected(&mut self) {
        let Some(key) = self
            .filtered_items()
            .get(self.selected_item)
            .copied()
            .and_then(classify)
        else {
            return;
        };
        self.loadout = self.loadout.unequip(&key);
        self.persist();
    }

    pub fn toggle_mounted(&mut self) {
        self.mounted = !self.mounted;
    }

    fn reset_wardrobe_cursor(&mut self) {
        self.selected_subcategory = 0;
        self.selected_item = 0;
    }

    fn persist(&mut self) {
        self.status = match self.store.save(SESSION_KEY, &self.loadout) {
            Ok(()) => None,
            Err(e) => Some(format!("save failed: {}", e)),
        };
    }
}

fn load_catalog() -> Catalog {
    // Try to load from data/ relative to common working directories
    let dirs = ["loadout_tui/data", "data", "../loadout_tui/data"];

    for dir in dirs {
        let path = Path::new(dir);
        if path.join("items.json").exists() {
            match Catalog::load_from_dir(path) {
                Ok(catalog) => {
                    eprintln!("Loaded catalog from {}", dir);
                    return catalog;
                }
                Err(e) => {
                    eprintln!("Failed to load catalog from {}: {}", dir, e);
                }
            }
        }
    }

    // Fall back to the bundled catalog
    Catalog::from_json_strs(
        include_str!("../data/characters.json"),
        include_str!("../data/horses.json"),
        include_str!("../data/items.json"),
    )
    .unwrap_or_default()
}
