//! The eight-stage maturity lifecycle shared by all entities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Development maturity of an entity.
///
/// The stages form a total order; entities advance one stage at a time.
/// `Deprecated` is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Maturity {
    Idea,
    Specified,
    Designed,
    Implemented,
    Tested,
    Documented,
    Released,
    Deprecated,
}

impl Maturity {
    /// All stages in progression order.
    pub const ORDER: [Maturity; 8] = [
        Maturity::Idea,
        Maturity::Specified,
        Maturity::Designed,
        Maturity::Implemented,
        Maturity::Tested,
        Maturity::Documented,
        Maturity::Released,
        Maturity::Deprecated,
    ];

    /// Zero-based rank within the progression order.
    pub fn rank(self) -> usize {
        self as usize
    }

    /// The next stage in the progression, or `None` at the terminal stage.
    pub fn next(self) -> Option<Maturity> {
        let idx = self.rank();
        Self::ORDER.get(idx + 1).copied()
    }

    /// The wire name of this stage.
    pub fn as_str(self) -> &'static str {
        match self {
            Maturity::Idea => "idea",
            Maturity::Specified => "specified",
            Maturity::Designed => "designed",
            Maturity::Implemented => "implemented",
            Maturity::Tested => "tested",
            Maturity::Documented => "documented",
            Maturity::Released => "released",
            Maturity::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Maturity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown maturity stage '{s}'"))
    }
}
