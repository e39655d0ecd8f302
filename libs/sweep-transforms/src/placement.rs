//! # Placement
//!
//! Immutable affine transform that positions one copy of the profile.
//!
//! Placements never mutate in place. Chains are built with [`compose`],
//! which returns a new value, so slices can be generated on any thread
//! without sharing transform state.

use glam::{DMat4, DVec2, DVec3};

/// Affine placement of the profile plane in 3D.
///
/// The profile lives in the local XY plane; a placement maps it into world
/// space. Translation, rotation and non-uniform scale are all carried by a
/// single 4×4 matrix.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use sweep_transforms::{compose, Placement};
///
/// let lift = Placement::translation(DVec3::new(0.0, 0.0, 5.0));
/// let turn = Placement::rotation_z(std::f64::consts::FRAC_PI_2);
/// let placed = compose(lift, turn).place(DVec2::new(1.0, 0.0));
/// assert!((placed - DVec3::new(0.0, 1.0, 5.0)).length() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    matrix: DMat4,
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Placement {
    /// The identity placement: the profile stays in the world XY plane.
    pub const IDENTITY: Self = Self {
        matrix: DMat4::IDENTITY,
    };

    /// Wraps an arbitrary affine matrix.
    pub fn from_matrix(matrix: DMat4) -> Self {
        Self { matrix }
    }

    /// Pure translation.
    pub fn translation(offset: DVec3) -> Self {
        Self::from_matrix(DMat4::from_translation(offset))
    }

    /// Rotation about the Z axis (radians).
    pub fn rotation_z(angle: f64) -> Self {
        Self::from_matrix(DMat4::from_rotation_z(angle))
    }

    /// Rotation about the X axis (radians).
    pub fn rotation_x(angle: f64) -> Self {
        Self::from_matrix(DMat4::from_rotation_x(angle))
    }

    /// Non-uniform scale.
    pub fn scale(factors: DVec3) -> Self {
        Self::from_matrix(DMat4::from_scale(factors))
    }

    /// Returns `self ∘ inner`: `inner` is applied first.
    #[must_use]
    pub fn then_apply(self, inner: Placement) -> Self {
        Self::from_matrix(self.matrix * inner.matrix)
    }

    /// Returns the underlying matrix.
    #[inline]
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }

    /// World position of the profile origin.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.matrix.w_axis.truncate()
    }

    /// Transforms a 3D point.
    #[inline]
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.matrix.transform_point3(point)
    }

    /// Transforms a direction (ignores translation).
    #[inline]
    pub fn transform_vector(&self, vector: DVec3) -> DVec3 {
        self.matrix.transform_vector3(vector)
    }

    /// Places a profile point (local `z = 0`) in world space.
    #[inline]
    pub fn place(&self, point: DVec2) -> DVec3 {
        self.transform_point(point.extend(0.0))
    }

    /// Normal of the placed profile plane, `X' × Y'`.
    ///
    /// Not normalized; its length is the area scale of the placement.
    pub fn plane_normal(&self) -> DVec3 {
        self.transform_vector(DVec3::X)
            .cross(self.transform_vector(DVec3::Y))
    }

    /// Determinant of the linear part. Negative for mirroring placements.
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// True when every matrix entry is finite.
    pub fn is_finite(&self) -> bool {
        self.matrix.is_finite()
    }
}

/// Composes two placements: the result applies `inner` first, then `outer`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use sweep_transforms::{compose, Placement};
///
/// let p = compose(
///     Placement::translation(DVec3::X),
///     Placement::scale(DVec3::splat(2.0)),
/// );
/// assert_eq!(p.transform_point(DVec3::Y), DVec3::new(1.0, 2.0, 0.0));
/// ```
#[inline]
pub fn compose(outer: Placement, inner: Placement) -> Placement {
    outer.then_apply(inner)
}
