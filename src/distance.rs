//! Total distance from a source vertex, with an explicit unreachable state.
//!
//! Shortest-path results use this instead of a magic "maximum" weight so that
//! unreachable vertices cannot be confused with merely far-away ones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance from a source vertex.
///
/// Ordering places every `Finite` value below `Unreachable`, so relaxation
/// comparisons and min-heap ordering work directly on `Distance` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// A reachable vertex at the given total edge weight.
    Finite(u64),
    /// No path from the source.
    Unreachable,
}

impl Distance {
    /// Distance of a source vertex to itself.
    pub const ZERO: Self = Self::Finite(0);

    /// Extends this distance by one edge weight.
    ///
    /// `Unreachable` absorbs any extension; finite additions saturate at
    /// `u64::MAX` so comparisons stay sound on adversarial weights.
    #[must_use]
    pub const fn plus(self, weight: u64) -> Self {
        match self {
            Self::Finite(d) => Self::Finite(d.saturating_add(weight)),
            Self::Unreachable => Self::Unreachable,
        }
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns the total weight if this vertex is reachable.
    #[must_use]
    pub const fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Unreachable => None,
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::Unreachable
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}
