//! Format construction.
//!
//! A format is one analysis universe: every archetype seen in a batch of
//! scraped decks, keyed by archetype name.

use std::collections::BTreeMap;

use crate::archetype::Archetype;
use crate::deck::Deck;
use crate::scrape::ScrapeRecord;

/// A name-keyed collection of archetypes built from one scrape batch.
///
/// Built once per analysis run, then treated as read-only for matching.
/// `add` must not interleave with queries without external
/// synchronization; the format itself takes no locks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Format {
    archetypes: BTreeMap<String, Archetype>,
}

impl Format {
    /// Creates an empty format.
    pub fn new() -> Self {
        Self {
            archetypes: BTreeMap::new(),
        }
    }

    /// Builds a format from a batch of scrape records.
    ///
    /// Each record contributes exactly one deck; identical decks are not
    /// deduplicated. Records that produce no deck (no title) are skipped.
    pub fn from_records(records: &[ScrapeRecord]) -> Self {
        let mut format = Self::new();
        for record in records {
            if let Some(deck) = record.to_deck() {
                format.add(&deck);
            }
        }
        format
    }

    /// Folds a deck into the archetype matching its name, creating that
    /// archetype on first sight.
    pub fn add(&mut self, deck: &Deck) {
        self.archetypes
            .entry(deck.name().to_string())
            .or_insert_with(|| Archetype::new(deck.name()))
            .add(deck.cards());
    }

    /// Looks up an archetype by name.
    pub fn get(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.get(name)
    }

    /// Iterates archetypes in name order.
    pub fn archetypes(&self) -> impl Iterator<Item = &Archetype> {
        self.archetypes.values()
    }

    /// Number of distinct archetypes seen.
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Returns true if no decks have been added yet.
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_archetype_on_first_sight() {
        let mut format = Format::new();
        format.add(&Deck::from_list("Bant Company", "4 Collected Company"));

        assert_eq!(format.len(), 1);
        let archetype = format.get("Bant Company").unwrap();
        assert_eq!(archetype.total_decks(), 1);
    }

    #[test]
    fn test_decks_sharing_a_name_share_an_archetype() {
        let mut format = Format::new();
        format.add(&Deck::from_list("Bant Company", "4 Collected Company"));
        format.add(&Deck::from_list("Bant Company", "3 Collected Company"));
        format.add(&Deck::from_list("GW Tokens", "4 Gideon, Ally of Zendikar"));

        assert_eq!(format.len(), 2);
        assert_eq!(format.get("Bant Company").unwrap().total_decks(), 2);
        assert_eq!(format.get("GW Tokens").unwrap().total_decks(), 1);
    }

    #[test]
    fn test_from_records_groups_by_deck_name() {
        let records = vec![
            ScrapeRecord {
                name: vec!["Bant Company  by hukre".to_string()],
                cards: vec!["Collected Company\n".to_string()],
                quantities: vec!["4\n".to_string()],
            },
            ScrapeRecord {
                name: vec!["Bant Company  by mig".to_string()],
                cards: vec!["Collected Company\n".to_string()],
                quantities: vec!["4\n".to_string()],
            },
            ScrapeRecord {
                name: Vec::new(),
                cards: vec!["Shock\n".to_string()],
                quantities: vec!["4\n".to_string()],
            },
        ];

        let format = Format::from_records(&records);
        assert_eq!(format.len(), 1);
        assert_eq!(format.get("Bant Company").unwrap().total_decks(), 2);
    }

    #[test]
    fn test_identical_records_each_count() {
        let record = ScrapeRecord {
            name: vec!["Mono Red  by taka".to_string()],
            cards: vec!["Lightning Bolt\n".to_string()],
            quantities: vec!["4\n".to_string()],
        };
        let format = Format::from_records(&[record.clone(), record]);
        assert_eq!(format.get("Mono Red").unwrap().total_decks(), 2);
    }
}
