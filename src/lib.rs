//! Deck archetype statistics for scraped trading-card metagames.
//!
//! This crate turns a batch of web-scraped deck lists into named archetype
//! aggregates, computes per-card copy-count percentages for each
//! archetype, and matches user-submitted decks against the closest
//! archetype by naive card overlap. Crawling, transport, and presentation
//! live outside: the crate consumes decoded scrape records or raw
//! deck-list text and hands back plain data.

pub mod archetype;
pub mod card_db;
pub mod deck;
pub mod format;
pub mod ids;
pub mod matcher;
pub mod scrape;
pub mod stats;

#[cfg(test)]
mod tests;

pub use archetype::{Archetype, CopyCounts, MAX_COPIES, MIN_COPIES};
pub use card_db::{CardDatabase, CardEntry, CardSet, multiverse_ids};
pub use deck::Deck;
pub use format::Format;
pub use ids::MultiverseId;
pub use matcher::{best_match, deck_compare};
pub use scrape::ScrapeRecord;
pub use stats::{
    CopyCountPercents, PercentReport, StatsError, analyze_archetype, percent_report,
};
