//! # Loft Topology
//!
//! Declared loop behaviour of a sweep family.

use serde::{Deserialize, Serialize};

/// How the sweep path closes.
///
/// ## Variants
///
/// - `Open`: distinct ends, capped when the profile is a ring
/// - `ClosedSingle`: the path returns to its start after one traversal
/// - `ClosedDouble`: the cross-section arrives mirrored after one traversal
///   and only coincides with the start after the progress covers `[0, 2]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topology {
    /// Non-looping sweep.
    Open,
    /// Closes after one traversal.
    ClosedSingle,
    /// Closes after two traversals.
    ClosedDouble,
}

impl Topology {
    /// Topology of a loop carrying `half_twists` half rotations per
    /// traversal: odd counts need two traversals to close.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_transforms::Topology;
    ///
    /// assert_eq!(Topology::from_half_twists(3), Topology::ClosedDouble);
    /// assert_eq!(Topology::from_half_twists(4), Topology::ClosedSingle);
    /// ```
    pub fn from_half_twists(half_twists: u32) -> Self {
        if half_twists % 2 == 1 {
            Self::ClosedDouble
        } else {
            Self::ClosedSingle
        }
    }

    /// Number of parameter traversals the loft spans.
    #[inline]
    pub fn traversals(self) -> usize {
        match self {
            Self::ClosedDouble => 2,
            Self::Open | Self::ClosedSingle => 1,
        }
    }

    /// True for both looping topologies.
    #[inline]
    pub fn is_closed(self) -> bool {
        !matches!(self, Self::Open)
    }

    /// Number of slices generated for `slices` per traversal.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sweep_transforms::Topology;
    ///
    /// assert_eq!(Topology::ClosedSingle.total_slices(121), 121);
    /// assert_eq!(Topology::ClosedDouble.total_slices(121), 241);
    /// ```
    #[inline]
    pub fn total_slices(self, slices: usize) -> usize {
        slices.saturating_sub(1) * self.traversals() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_twist_parity() {
        for k in 1..=5 {
            let expected = if k % 2 == 1 {
                Topology::ClosedDouble
            } else {
                Topology::ClosedSingle
            };
            assert_eq!(Topology::from_half_twists(k), expected, "k = {k}");
        }
    }

    #[test]
    fn test_traversals() {
        assert_eq!(Topology::Open.traversals(), 1);
        assert_eq!(Topology::ClosedSingle.traversals(), 1);
        assert_eq!(Topology::ClosedDouble.traversals(), 2);
        assert!(!Topology::Open.is_closed());
        assert!(Topology::ClosedDouble.is_closed());
    }

    #[test]
    fn test_total_slices_open() {
        assert_eq!(Topology::Open.total_slices(2), 2);
        assert_eq!(Topology::Open.total_slices(80), 80);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Topology::ClosedDouble).unwrap();
        assert_eq!(json, "\"closed-double\"");
        let parsed: Topology = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(parsed, Topology::Open);
    }
}
