//! Stat aggregation across character, equipped items, and horse bonus

use crate::catalog::Catalog;
use crate::loadout::Loadout;
use crate::modifier::parse_modifier;
use crate::types::{ItemCard, Stat};
use serde::{Deserialize, Serialize};

/// Trait type on horse cards whose values are rider modifiers
const BONUS_TRAIT: &str = "Bonus";

/// Loadout slots resolved by name instead of contributing as items
const CHARACTER_SLOT: &str = "char";
const HORSE_SLOT: &str = "horse";

/// Combined totals for the eight canonical stats
///
/// Always carries exactly these eight keys; computing totals never
/// fails and unknown inputs contribute zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatTotals {
    pub skill: i32,
    pub health: i32,
    pub quickdraw: i32,
    pub deadeye: i32,
    pub horsemanship: i32,
    pub grit: i32,
    pub notoriety: i32,
    pub charm: i32,
}

impl StatTotals {
    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Skill => self.skill,
            Stat::Health => self.health,
            Stat::Quickdraw => self.quickdraw,
            Stat::Deadeye => self.deadeye,
            Stat::Horsemanship => self.horsemanship,
            Stat::Grit => self.grit,
            Stat::Notoriety => self.notoriety,
            Stat::Charm => self.charm,
        }
    }

    pub fn add(&mut self, stat: Stat, delta: i32) {
        let slot = match stat {
            Stat::Skill => &mut self.skill,
            Stat::Health => &mut self.health,
            Stat::Quickdraw => &mut self.quickdraw,
            Stat::Deadeye => &mut self.deadeye,
            Stat::Horsemanship => &mut self.horsemanship,
            Stat::Grit => &mut self.grit,
            Stat::Notoriety => &mut self.notoriety,
            Stat::Charm => &mut self.charm,
        };
        *slot = slot.saturating_add(delta);
    }

    /// Iterate (stat, value) in display order
    pub fn entries(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::all().iter().map(move |&stat| (stat, self.get(stat)))
    }

    /// Apply a freeform modifier string ("+2 Charm")
    ///
    /// No-op when the string doesn't parse or names a stat outside the
    /// canonical eight.
    fn apply_modifier_value(&mut self, value: &str) {
        if let Some(modifier) = parse_modifier(value) {
            if let Some(stat) = Stat::from_name(&modifier.stat) {
                self.add(stat, modifier.delta);
            }
        }
    }
}

/// Compute combined stat totals for a build
///
/// Base character attributes are added as integers directly; every
/// attribute value on every equipped item runs through the modifier
/// parser; the horse's `"Bonus"` attributes count only while mounted.
/// Unresolved names, unparseable values, and non-canonical stat names
/// all contribute nothing. Total function: always returns a complete
/// eight-stat record.
pub fn compute_stats<'a, I>(
    catalog: &Catalog,
    character_name: &str,
    items: I,
    horse_name: Option<&str>,
    mounted: bool,
) -> StatTotals
where
    I: IntoIterator<Item = &'a ItemCard>,
{
    let mut totals = StatTotals::default();

    if let Some(character) = catalog.character(character_name) {
        for base in &character.attributes {
            if let Some(stat) = Stat::from_name(&base.stat) {
                totals.add(stat, base.value);
            }
        }
    }

    for item in items {
        for attr in &item.attributes {
            totals.apply_modifier_value(&attr.value);
        }
    }

    let horse_name = horse_name.filter(|name| !name.is_empty());
    if mounted {
        if let Some(horse) = horse_name.and_then(|name| catalog.horse(name)) {
            for attr in &horse.attributes {
                if attr.trait_type == BONUS_TRAIT {
                    totals.apply_modifier_value(&attr.value);
                }
            }
        }
    }

    totals
}

/// Compute totals straight from a loadout
///
/// The `char` and `horse` slots resolve by name against the catalog;
/// every other slot contributes as an equipped item.
pub fn compute_for_loadout(catalog: &Catalog, loadout: &Loadout, mounted: bool) -> StatTotals {
    let character_name = loadout
        .get(CHARACTER_SLOT)
        .map(|c| c.name.as_str())
        .unwrap_or_default();
    let horse_name = loadout.get(HORSE_SLOT).map(|h| h.name.as_str());

    let items: Vec<&ItemCard> = loadout
        .entries()
        .filter(|(key, _)| *key != CHARACTER_SLOT && *key != HORSE_SLOT)
        .map(|(_, item)| item)
        .collect();

    compute_stats(catalog, character_name, items, horse_name, mounted)
}
