//! Decoded crawler output.
//!
//! The crawler publishes one record per deck page it visits. Records reach
//! this crate already decoded from JSON; fetching and decoding belong to
//! the host application.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::deck::Deck;

/// Separator between a deck title and its author credit in scraped page
/// titles (two spaces, then "by").
const TITLE_AUTHOR_SEPARATOR: &str = "  by";

/// One scraped deck record.
///
/// `cards` and `quantities` correspond positionally, and both may carry
/// trailing newlines from the page extraction. `name` holds the page title
/// as a one-element sequence; the crawler emits it that way.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapeRecord {
    pub name: Vec<String>,
    pub cards: Vec<String>,
    pub quantities: Vec<String>,
}

impl ScrapeRecord {
    /// Converts this record into a deck.
    ///
    /// The deck's display name is the page title up to the author
    /// separator. Entries whose quantity does not parse as a positive
    /// integer, or whose card name trims to nothing, are skipped the same
    /// way malformed deck-list lines are. Returns `None` when the record
    /// has no title at all.
    pub fn to_deck(&self) -> Option<Deck> {
        let title = self.name.first()?;
        let name = match title.split_once(TITLE_AUTHOR_SEPARATOR) {
            Some((deck_name, _)) => deck_name,
            None => title.as_str(),
        };
        let mut cards = BTreeMap::new();
        for (card, quantity) in self.cards.iter().zip(&self.quantities) {
            let card = card.trim();
            let Ok(count) = quantity.trim().parse::<u32>() else {
                continue;
            };
            if count == 0 || card.is_empty() {
                continue;
            }
            cards.insert(card.to_string(), count);
        }
        Some(Deck::new(name, cards))
    }
}
