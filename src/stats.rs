//! Percentage statistics over archetype aggregates.
//!
//! Reports are derived views, recomputed on every request; nothing is
//! cached on the archetype.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::archetype::{Archetype, CopyCounts, MAX_COPIES, MIN_COPIES};

/// Errors that can occur when deriving statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// The archetype holds no decks, so percentages are undefined.
    EmptyArchetype,
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptyArchetype => {
                write!(f, "archetype holds no decks to take percentages over")
            }
        }
    }
}

impl std::error::Error for StatsError {}

/// Share of an archetype's decks per copy-count, one value per count 1–4.
///
/// Serializes as a `{"1": pct, ..., "4": pct}` JSON object so hosts can
/// forward a report to a front end unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CopyCountPercents([f64; MAX_COPIES as usize]);

impl CopyCountPercents {
    fn from_counts(counts: CopyCounts, total_decks: u32) -> Self {
        let mut percents = [0.0; MAX_COPIES as usize];
        for (slot, percent) in percents.iter_mut().enumerate() {
            let copies = slot as u32 + MIN_COPIES;
            *percent =
                f64::from(counts.decks_running(copies)) / f64::from(total_decks) * 100.0;
        }
        Self(percents)
    }

    /// Percentage of decks running exactly `copies`; zero outside 1–4.
    pub fn percent(self, copies: u32) -> f64 {
        if copies < MIN_COPIES || copies > MAX_COPIES {
            return 0.0;
        }
        self.0[(copies - MIN_COPIES) as usize]
    }

    /// Iterates `(copies, percent)` pairs in ascending copy order.
    pub fn iter(self) -> impl Iterator<Item = (u32, f64)> {
        self.0
            .into_iter()
            .enumerate()
            .map(|(slot, percent)| (slot as u32 + MIN_COPIES, percent))
    }
}

impl Serialize for CopyCountPercents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (copies, percent) in self.iter() {
            map.serialize_entry(&copies.to_string(), &percent)?;
        }
        map.end()
    }
}

/// Per-card copy-count percentages for one archetype, in card-name order.
pub type PercentReport = BTreeMap<String, CopyCountPercents>;

/// Computes the percentage of an archetype's decks running each copy-count
/// of each card, as `bucket / total_decks * 100`.
///
/// Fails with [`StatsError::EmptyArchetype`] when no decks have been
/// folded in, rather than dividing by zero.
pub fn percent_report(archetype: &Archetype) -> Result<PercentReport, StatsError> {
    if archetype.total_decks() == 0 {
        return Err(StatsError::EmptyArchetype);
    }
    let mut report = BTreeMap::new();
    for (card, &counts) in archetype.card_data() {
        report.insert(
            card.clone(),
            CopyCountPercents::from_counts(counts, archetype.total_decks()),
        );
    }
    Ok(report)
}

/// Flattens an archetype's percentages into display lines.
///
/// The first entry is the archetype name; each card follows as its name
/// and then one `"<count>:<percent>%"` entry per copy-count, with two
/// decimal places. Cards come out in name order, buckets in 1→4 order.
pub fn analyze_archetype(archetype: &Archetype) -> Result<Vec<String>, StatsError> {
    let report = percent_report(archetype)?;
    let mut lines = Vec::with_capacity(1 + report.len() * (1 + MAX_COPIES as usize));
    lines.push(archetype.name().to_string());
    for (card, percents) in &report {
        lines.push(card.clone());
        for (copies, percent) in percents.iter() {
            lines.push(format!("{copies}:{percent:.2}%"));
        }
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn deck(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(card, count)| (card.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_unanimous_count_reports_one_hundred_percent() {
        let mut archetype = Archetype::new("Bant Company");
        archetype.add(&deck(&[("Collected Company", 4)]));
        archetype.add(&deck(&[("Collected Company", 4)]));

        let report = percent_report(&archetype).unwrap();
        let company = report["Collected Company"];
        assert_eq!(company.percent(4), 100.0);
        for copies in 1..=3 {
            assert_eq!(company.percent(copies), 0.0);
        }
    }

    #[test]
    fn test_split_counts_report_their_shares() {
        let mut archetype = Archetype::new("Bant Company");
        archetype.add(&deck(&[("Reflector Mage", 4)]));
        archetype.add(&deck(&[("Reflector Mage", 3)]));
        archetype.add(&deck(&[("Reflector Mage", 3)]));
        archetype.add(&deck(&[("Reflector Mage", 2)]));

        let report = percent_report(&archetype).unwrap();
        let mage = report["Reflector Mage"];
        assert_eq!(mage.percent(2), 25.0);
        assert_eq!(mage.percent(3), 50.0);
        assert_eq!(mage.percent(4), 25.0);
    }

    #[test]
    fn test_percentages_stay_within_bounds() {
        let mut archetype = Archetype::new("Mixed");
        archetype.add(&deck(&[("Shock", 1), ("Mountain", 22)]));
        archetype.add(&deck(&[("Shock", 4)]));

        let report = percent_report(&archetype).unwrap();
        for percents in report.values() {
            for (_, percent) in percents.iter() {
                assert!((0.0..=100.0).contains(&percent));
            }
        }
    }

    #[test]
    fn test_empty_archetype_is_an_explicit_error() {
        let archetype = Archetype::new("Unplayed");
        assert_eq!(percent_report(&archetype), Err(StatsError::EmptyArchetype));
        assert_eq!(analyze_archetype(&archetype), Err(StatsError::EmptyArchetype));
    }

    #[test]
    fn test_analysis_lines_are_flattened_in_order() {
        let mut archetype = Archetype::new("Bant Company");
        archetype.add(&deck(&[("Collected Company", 4)]));

        let lines = analyze_archetype(&archetype).unwrap();
        assert_eq!(
            lines,
            vec![
                "Bant Company",
                "Collected Company",
                "1:0.00%",
                "2:0.00%",
                "3:0.00%",
                "4:100.00%",
            ]
        );
    }

    #[test]
    fn test_report_serializes_with_string_count_keys() {
        let mut archetype = Archetype::new("Bant Company");
        archetype.add(&deck(&[("Collected Company", 4)]));

        let report = percent_report(&archetype).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["Collected Company"]["4"], 100.0);
        assert_eq!(json["Collected Company"]["1"], 0.0);
    }
}
