//! Archetype aggregation.
//!
//! An archetype accumulates every deck scraped under one name into
//! per-card copy-count distributions: for each card, how many decks ran
//! exactly one copy, exactly two, and so on up to the playset limit.

use std::collections::BTreeMap;

/// Smallest copy-count the distributions track.
pub const MIN_COPIES: u32 = 1;
/// Largest copy-count the distributions track (the playset limit).
pub const MAX_COPIES: u32 = 4;

/// Deck tallies per copy-count, one bucket for each count 1 through 4.
///
/// The fixed shape means every observed card always reports all four
/// buckets, zeroes included; no bucket appears or disappears based on
/// which counts happened to occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyCounts([u32; MAX_COPIES as usize]);

impl CopyCounts {
    /// Creates a distribution with every bucket at zero.
    pub const fn new() -> Self {
        Self([0; MAX_COPIES as usize])
    }

    /// Records one deck that ran `copies` of the card.
    ///
    /// Counts outside 1–4 are dropped: real decks run well past four
    /// basic lands, and such entries carry no copy-count signal. The
    /// owning archetype still counts the deck in its total.
    pub fn record(&mut self, copies: u32) {
        if (MIN_COPIES..=MAX_COPIES).contains(&copies) {
            self.0[(copies - MIN_COPIES) as usize] += 1;
        }
    }

    /// Number of decks that ran exactly `copies` copies; zero outside 1–4.
    pub const fn decks_running(self, copies: u32) -> u32 {
        if copies < MIN_COPIES || copies > MAX_COPIES {
            return 0;
        }
        self.0[(copies - MIN_COPIES) as usize]
    }

    /// Total decks recorded across all buckets.
    pub fn total(self) -> u32 {
        self.0.iter().sum()
    }
}

/// A named cluster of decks, aggregated per card.
///
/// Mutated only through [`Format::add`](crate::format::Format::add). The
/// aggregate is append-only and keeps no reference to the decks it was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archetype {
    name: String,
    card_data: BTreeMap<String, CopyCounts>,
    total_decks: u32,
}

impl Archetype {
    /// Creates an empty archetype with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            card_data: BTreeMap::new(),
            total_decks: 0,
        }
    }

    /// Folds one deck's card-count mapping into the aggregate.
    ///
    /// Every card gets its distribution seeded on first sight and the
    /// matching bucket incremented. Every deck increments `total_decks`,
    /// even one with no cards.
    pub fn add(&mut self, cards: &BTreeMap<String, u32>) {
        for (card, &count) in cards {
            self.card_data
                .entry(card.clone())
                .or_insert_with(CopyCounts::new)
                .record(count);
        }
        self.total_decks += 1;
    }

    /// The archetype's name, unique within its format.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-card distributions, in card-name order.
    pub fn card_data(&self) -> &BTreeMap<String, CopyCounts> {
        &self.card_data
    }

    /// Number of decks folded into this archetype.
    pub fn total_decks(&self) -> u32 {
        self.total_decks
    }

    /// Returns true if any contributed deck ran the named card.
    pub fn has_card(&self, card: &str) -> bool {
        self.card_data.contains_key(card)
    }

    /// The copy-count distribution for the named card, if seen.
    pub fn distribution(&self, card: &str) -> Option<CopyCounts> {
        self.card_data.get(card).copied()
    }
}
