use serde::{Deserialize, Serialize};

/// External stable identifier for a specific card printing.
///
/// Minted by the card database the host application loads at startup;
/// this crate only ever reads these back out of that database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiverseId(pub u32);

impl MultiverseId {
    /// Create a multiverse ID from a raw database value.
    pub fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MultiverseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiverse_id_round_trip() {
        let id = MultiverseId::from_raw(409741);
        assert_eq!(id.value(), 409741);
        assert_eq!(id.to_string(), "409741");
    }

    #[test]
    fn test_multiverse_id_serializes_transparently() {
        let id = MultiverseId::from_raw(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: MultiverseId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
