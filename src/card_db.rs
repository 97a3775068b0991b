//! External card database model and identifier lookup.
//!
//! The host application loads the database once at startup and passes it
//! in; this crate only reads it. The database maps set names to set
//! records, each carrying the printed card entries for that set.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::ids::MultiverseId;

/// One printed card entry within a set.
///
/// Printings without a multiverse ID exist in the wild; they can never be
/// resolved, so lookups pass over them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardEntry {
    pub name: String,
    pub multiverseid: Option<MultiverseId>,
}

/// One card set, the unit the database is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardSet {
    pub cards: Vec<CardEntry>,
}

/// The full card database, keyed by set name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CardDatabase {
    sets: BTreeMap<String, CardSet>,
}

impl CardDatabase {
    /// Looks up a set by name.
    pub fn set(&self, name: &str) -> Option<&CardSet> {
        self.sets.get(name)
    }

    /// Number of sets in the database.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns true if the database holds no sets.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Resolves card names to multiverse IDs within the allowed sets.
///
/// Every target found in at least one allowed set lands in the result;
/// targets found nowhere are omitted without error. When a name is
/// printed in several allowed sets, sets later in `allowed_sets`
/// overwrite earlier matches, so the last listed set takes priority.
/// Allowed sets missing from the database are skipped.
pub fn multiverse_ids(
    database: &CardDatabase,
    allowed_sets: &[&str],
    targets: &[&str],
) -> BTreeMap<String, MultiverseId> {
    let mut ids = BTreeMap::new();
    for &target in targets {
        for &set_name in allowed_sets {
            let Some(set) = database.set(set_name) else {
                continue;
            };
            for entry in &set.cards {
                if entry.name == target
                    && let Some(id) = entry.multiverseid
                {
                    ids.insert(target.to_string(), id);
                }
            }
        }
    }
    ids
}
