//! # Sweep Family Capability
//!
//! The single interface the loft engine is written against. Every family,
//! built-in or caller supplied, is a pure function from a [`SliceSample`] to
//! a [`Placement`] plus a declared [`Topology`].

use crate::error::Result;
use crate::placement::Placement;
use crate::topology::Topology;
use std::fmt;

/// Where a slice sits in the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceSample {
    /// Slice index in generation order.
    pub index: usize,
    /// Total number of generated slices.
    pub count: usize,
    /// Normalized progress; `[0, 1]` per traversal, up to `2` for
    /// double-traversal lofts.
    pub progress: f64,
}

impl SliceSample {
    /// Creates a sample.
    pub fn new(index: usize, count: usize, progress: f64) -> Self {
        Self {
            index,
            count,
            progress,
        }
    }

    /// Sample at a bare progress value (index and count unknown).
    pub fn at(progress: f64) -> Self {
        Self::new(0, 1, progress)
    }
}

/// A parametric sweep family.
///
/// Implementations must be pure: the same sample always yields the same
/// placement, and no state is shared between calls. The engine evaluates
/// samples in parallel.
///
/// # Example
///
/// ```rust
/// use sweep_transforms::{SliceSample, SweepFamily, Topology, TwistColumn};
///
/// let column = TwistColumn::default();
/// assert_eq!(column.topology(), Topology::Open);
/// let top = column.evaluate(SliceSample::at(1.0));
/// assert!((top.origin().z - column.height).abs() < 1e-12);
/// ```
pub trait SweepFamily: Send + Sync {
    /// Short family name used in logs and errors.
    fn name(&self) -> &str;

    /// Declared loop behaviour.
    fn topology(&self) -> Topology;

    /// Checks the family parameters. Called once before any slice is
    /// evaluated.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Placement of the profile at the given sample.
    fn evaluate(&self, sample: SliceSample) -> Placement;
}

impl<F: SweepFamily + ?Sized> SweepFamily for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn topology(&self) -> Topology {
        (**self).topology()
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        (**self).evaluate(sample)
    }
}

impl<F: SweepFamily + ?Sized> SweepFamily for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn topology(&self) -> Topology {
        (**self).topology()
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        (**self).evaluate(sample)
    }
}

/// Family built from a caller-supplied closure.
///
/// The caller declares the topology; the engine's closure check catches a
/// closure whose output does not actually loop.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_transforms::{CustomFamily, Placement, SweepFamily, Topology};
///
/// let lift = CustomFamily::new("lift", Topology::Open, |sample| {
///     Placement::translation(DVec3::new(0.0, 0.0, sample.progress * 10.0))
/// });
/// assert_eq!(lift.name(), "lift");
/// ```
pub struct CustomFamily<F> {
    name: String,
    topology: Topology,
    generator: F,
}

impl<F> CustomFamily<F>
where
    F: Fn(SliceSample) -> Placement + Send + Sync,
{
    /// Wraps `generator` with a name and declared topology.
    pub fn new(name: impl Into<String>, topology: Topology, generator: F) -> Self {
        Self {
            name: name.into(),
            topology,
            generator,
        }
    }
}

impl<F> fmt::Debug for CustomFamily<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFamily")
            .field("name", &self.name)
            .field("topology", &self.topology)
            .finish_non_exhaustive()
    }
}

impl<F> SweepFamily for CustomFamily<F>
where
    F: Fn(SliceSample) -> Placement + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn topology(&self) -> Topology {
        self.topology
    }

    fn evaluate(&self, sample: SliceSample) -> Placement {
        (self.generator)(sample)
    }
}
