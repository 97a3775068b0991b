//! Naive deck-to-archetype matching.
//!
//! Similarity is the number of distinct card names a deck shares with an
//! archetype. Copy counts and card roles carry no weight. Downstream
//! consumers depend on the exact scoring and tie-break semantics, so keep
//! them as they are.
//
// TODO: weight shared cards by copy count once enough scrape data exists
// to validate the ranking against hand-labeled decks.

use crate::archetype::Archetype;
use crate::deck::Deck;
use crate::format::Format;

/// Scores a deck against one archetype.
///
/// The score is the count of distinct card names present in both; card
/// order and copy counts are irrelevant.
pub fn deck_compare(archetype: &Archetype, deck: &Deck) -> usize {
    deck.cards()
        .keys()
        .filter(|card| archetype.has_card(card.as_str()))
        .count()
}

/// Picks the archetype a deck most resembles.
///
/// Archetypes are scanned in name order, and a candidate replaces the
/// current best only on a strictly greater score, so ties keep the first
/// one found. Returns `None` when no archetype shares a single card with
/// the deck; callers branch on that as a legitimate outcome, not an
/// error.
pub fn best_match<'a>(format: &'a Format, deck: &Deck) -> Option<&'a Archetype> {
    let mut best_score = 0;
    let mut best = None;
    for archetype in format.archetypes() {
        let score = deck_compare(archetype, deck);
        if score > best_score {
            best_score = score;
            best = Some(archetype);
        }
    }
    best
}
