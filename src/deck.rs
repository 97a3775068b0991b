//! Deck representation and deck-list parsing.
//!
//! Two line-oriented notations are supported:
//! - `"<n> <card name>"` for mainboard entries
//! - `"SB: <n> <card name>"` for sideboard entries
//!
//! Sideboard entries share the mainboard key space: both forms write the
//! same card-name key, and the last line for a name wins. Lines that match
//! neither form contribute nothing; deck lists scraped from the wild carry
//! headers, blank lines, and commentary, so skipping quietly is the
//! contract here, not an accident.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Line prefix marking a sideboard entry in `.dec` deck lists.
const SIDEBOARD_MARKER: &str = "SB:";

/// A single parsed deck: a display name plus its card-count mapping.
///
/// Card names are non-empty trimmed strings and counts are at least 1;
/// the parsers uphold both. A deck is immutable once built, and an
/// [`Archetype`](crate::archetype::Archetype) absorbs its data by copying,
/// never by holding a reference back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    name: String,
    cards: BTreeMap<String, u32>,
}

impl Deck {
    /// Creates a deck from an already-validated card-count mapping.
    pub fn new(name: impl Into<String>, cards: BTreeMap<String, u32>) -> Self {
        Self {
            name: name.into(),
            cards,
        }
    }

    /// Parses a deck from deck-list text, one card per line.
    pub fn from_list(name: impl Into<String>, list: &str) -> Self {
        let mut cards = BTreeMap::new();
        for line in list.lines() {
            add_line(&mut cards, line);
        }
        Self::new(name, cards)
    }

    /// Reads and parses a `.dec` file.
    ///
    /// The deck is named after the path with any `.dec` suffix removed.
    /// Bytes that are not valid UTF-8 are replaced rather than rejected;
    /// deck files circulate in a mix of encodings.
    pub fn from_dec_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let list = String::from_utf8_lossy(&bytes);
        let name = path.to_string_lossy().trim_end_matches(".dec").to_string();
        Ok(Self::from_list(name, &list))
    }

    /// The deck's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The card-count mapping, in card-name order.
    pub fn cards(&self) -> &BTreeMap<String, u32> {
        &self.cards
    }

    /// Number of copies of the named card, or `None` if absent.
    pub fn count_of(&self, card: &str) -> Option<u32> {
        self.cards.get(card).copied()
    }

    /// Number of distinct card names in the deck.
    pub fn distinct_cards(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck contains no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.name)?;
        for (card, count) in &self.cards {
            writeln!(f, "{} {}", count, card)?;
        }
        Ok(())
    }
}

/// Folds one deck-list line into `cards`.
///
/// Accepts `"<n> <card name>"` and `"SB: <n> <card name>"`; anything else
/// is skipped. A count of zero or a missing card name also skips the line,
/// keeping the deck invariants intact.
fn add_line(cards: &mut BTreeMap<String, u32>, line: &str) {
    let mut tokens = line.split_whitespace();
    let Some(first) = tokens.next() else {
        return;
    };
    let count_token = if first == SIDEBOARD_MARKER {
        match tokens.next() {
            Some(token) => token,
            None => return,
        }
    } else {
        first
    };
    let Ok(count) = count_token.parse::<u32>() else {
        return;
    };
    if count == 0 {
        return;
    }
    let name = tokens.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return;
    }
    cards.insert(name, count);
}
