//! # Built-in Families
//!
//! Concrete sweep families and the tagged [`Family`] variant that selects
//! one by name:
//!
//! | name             | type            | topology                  |
//! |------------------|-----------------|---------------------------|
//! | `twisted-column` | [`TwistColumn`] | open                      |
//! | `mobius`         | [`Mobius`]      | closed, 1 or 2 traversals |
//! | `double-mobius`  | [`DoubleMobius`]| closed                    |
//! | `trefoil`        | [`Trefoil`]     | closed                    |
//! | `figure8`        | [`FigureEight`] | closed                    |
//! | `wave`           | [`WaveTile`]    | open                      |
//! | `saddle`         | [`SaddleTile`]  | open                      |

mod column;
mod knot;
mod mobius;
mod tile;


pub use column::TwistColumn;
pub use knot::{FigureEight, Trefoil};
pub use mobius::{DoubleMobius, Mobius};
pub use tile::{SaddleTile, WaveTile};

use crate::error::{Result, TransformError};
use crate::family::{SliceSample, SweepFamily};
use crate::placement::Placement;
use crate::topology::Topology;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// FAMILY KIND
// =============================================================================

/// Name of a built-in family.
///
/// # Example
///
/// ```rust
/// use sweep_transforms::FamilyKind;
///
/// let kind: FamilyKind = "figure8".parse().unwrap();
/// assert_eq!(kind, FamilyKind::FigureEight);
/// assert_eq!(kind.to_string(), "figure8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FamilyKind {
    /// [`TwistColumn`]
    TwistedColumn,
    /// [`Mobius`]
    Mobius,
    /// [`DoubleMobius`]
    DoubleMobius,
    /// [`Trefoil`]
    Trefoil,
    /// [`FigureEight`]
    #[serde(rename = "figure8")]
    FigureEight,
    /// [`WaveTile`]
    Wave,
    /// [`SaddleTile`]
    Saddle,
}

impl FamilyKind {
    /// Every built-in family.
    pub const ALL: [FamilyKind; 7] = [
        Self::TwistedColumn,
        Self::Mobius,
        Self::DoubleMobius,
        Self::Trefoil,
        Self::FigureEight,
        Self::Wave,
        Self::Saddle,
    ];

    /// Selection name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TwistedColumn => "twisted-column",
            Self::Mobius => "mobius",
            Self::DoubleMobius => "double-mobius",
            Self::Trefoil => "trefoil",
            Self::FigureEight => "figure8",
            Self::Wave => "wave",
            Self::Saddle => "saddle",
        }
    }
}

impl fmt::Display for FamilyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FamilyKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TransformError::configuration("family", format!("unknown family `{s}`")))
    }
}

// =============================================================================
// FAMILY
// =============================================================================

/// One of the built-in families, tagged by `kind`.
///
/// Deserializes from `{"kind": "mobius", "radius": 40.0, ...}`; missing
/// fields take their defaults.
///
/// # Example
///
/// ```rust
/// use sweep_transforms::{Family, FamilyKind, SweepFamily, Topology};
///
/// let family = Family::with_defaults(FamilyKind::Trefoil);
/// assert_eq!(family.topology(), Topology::ClosedSingle);
/// assert_eq!(family.name(), "trefoil");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Family {
    /// Twisted column
    TwistedColumn(TwistColumn),
    /// Möbius band
    Mobius(Mobius),
    /// Double Möbius loop
    DoubleMobius(DoubleMobius),
    /// Trefoil knot
    Trefoil(Trefoil),
    /// Figure-8 knot
    #[serde(rename = "figure8")]
    FigureEight(FigureEight),
    /// Wave tile
    Wave(WaveTile),
    /// Saddle tile
    Saddle(SaddleTile),
}

impl Family {
    /// The family of `kind` with default parameters.
    pub fn with_defaults(kind: FamilyKind) -> Self {
        match kind {
            FamilyKind::TwistedColumn => Self::TwistedColumn(TwistColumn::default()),
            FamilyKind::Mobius => Self::Mobius(Mobius::default()),
            FamilyKind::DoubleMobius => Self::DoubleMobius(DoubleMobius::default()),
            FamilyKind::Trefoil => Self::Trefoil(Trefoil::default()),
            FamilyKind::FigureEight => Self::FigureEight(FigureEight::default()),
            FamilyKind::Wave => Self::Wave(WaveTile::default()),
            FamilyKind::Saddle => Self::Saddle(SaddleTile::default()),
        }
    }

    /// Which built-in this is.
    pub fn kind(&self) -> FamilyKind {
        match self {
            Self::TwistedColumn(_) => FamilyKind::TwistedColumn,
            Self::Mobius(_) => FamilyKind::Mobius,
            Self::DoubleMobius(_) => FamilyKind::DoubleMobius,
            Self::Trefoil(_) => FamilyKind::Trefoil,
            Self::FigureEight(_) => FamilyKind::FigureEight,
            Self::Wave(_) => FamilyKind::Wave,
            Self::Saddle(_) => FamilyKind::Saddle,
        }
    }

    fn inner(&self) -> &dyn SweepFamily {
        match self {
            Self::TwistedColumn(f) => f,
            Self::Mobius(f) => f,
            Self::DoubleMobius(f) => f,
            Self::Trefoil(f) => f,
            Self::FigureEight(f) => f,
            Self::Wave(f) => f,
            Self::Saddle(f) => f,
        }
    }
}

impl SweepFamily for Family {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn topology(&self) -> Topology {
        self.inner().topology()
    }

    fn validate(&self) -> Result<()> {
        self.inner().validate()
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        self.inner().evaluate(sample)
    }
}

impl From<TwistColumn> for Family {
    fn from(family: TwistColumn) -> Self {
        Self::TwistedColumn(family)
    }
}

impl From<Mobius> for Family {
    fn from(family: Mobius) -> Self {
        Self::Mobius(family)
    }
}

impl From<DoubleMobius> for Family {
    fn from(family: DoubleMobius) -> Self {
        Self::DoubleMobius(family)
    }
}

impl From<Trefoil> for Family {
    fn from(family: Trefoil) -> Self {
        Self::Trefoil(family)
    }
}

impl From<FigureEight> for Family {
    fn from(family: FigureEight) -> Self {
        Self::FigureEight(family)
    }
}

impl From<WaveTile> for Family {
    fn from(family: WaveTile) -> Self {
        Self::Wave(family)
    }
}

impl From<SaddleTile> for Family {
    fn from(family: SaddleTile) -> Self {
        Self::Saddle(family)
    }
}
