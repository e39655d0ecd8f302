//! # Profile
//!
//! The 2D cross-section swept by a loft.
//!
//! A profile is validated once at construction and immutable afterwards.
//! Points are held behind an [`Arc`] so every slice of a loft shares the
//! same storage.
//!
//! ## Validation
//!
//! - At least 3 and at most `MAX_PROFILE_POINTS` points, all finite
//! - No two consecutive points closer than the point tolerance
//! - No segment folds back onto its neighbour
//! - Non-adjacent segments never touch (the outline is simple)
//! - A closed outline encloses a non-zero area

use crate::error::{LoftError, Result};
use config::constants::{
    GlobalConfig, AREA_EPSILON, MAX_PROFILE_POINTS, MIN_PROFILE_POINTS, POINT_MERGE_EPSILON,
};
use glam::DVec2;
use std::f64::consts::{PI, TAU};
use std::sync::Arc;

/// Ordered outline in the local XY plane, closed or open.
///
/// # Example
///
/// ```rust
/// use slice_loft::Profile;
///
/// let strip = Profile::rectangle(15.0, 2.0).unwrap();
/// assert_eq!(strip.len(), 4);
/// assert!(strip.is_closed());
/// assert!((strip.area() - 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Arc<[DVec2]>,
    closed: bool,
}

impl Profile {
    /// Validates `points` with the default point tolerance.
    pub fn new(points: Vec<DVec2>, closed: bool) -> Result<Self> {
        Self::with_tolerance(points, closed, POINT_MERGE_EPSILON)
    }

    /// Validates `points`; consecutive points must be further apart than
    /// `point_tolerance`.
    pub fn with_tolerance(points: Vec<DVec2>, closed: bool, point_tolerance: f64) -> Result<Self> {
        validate_outline(&points, closed, point_tolerance)?;
        Ok(Self {
            points: points.into(),
            closed,
        })
    }

    /// Validates `points` with the point tolerance of `config`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::GlobalConfig;
    /// use glam::DVec2;
    /// use slice_loft::Profile;
    ///
    /// let coarse = GlobalConfig::new(1e-6, 0.01).unwrap();
    /// let points = vec![DVec2::ZERO, DVec2::new(0.005, 0.0), DVec2::new(0.0, 1.0)];
    /// assert!(Profile::new(points.clone(), true).is_ok());
    /// assert!(Profile::from_config(points, true, &coarse).is_err());
    /// ```
    pub fn from_config(points: Vec<DVec2>, closed: bool, config: &GlobalConfig) -> Result<Self> {
        Self::with_tolerance(points, closed, config.point_tolerance)
    }

    /// Closed outline.
    pub fn closed(points: Vec<DVec2>) -> Result<Self> {
        Self::new(points, true)
    }

    /// Open polyline; swept into a two-sided surface without caps.
    pub fn polyline(points: Vec<DVec2>) -> Result<Self> {
        Self::new(points, false)
    }

    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Centered rectangle, counter-clockwise from the lower left corner.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        require_positive("rectangle width", width)?;
        require_positive("rectangle height", height)?;
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::closed(vec![
            DVec2::new(-hw, -hh),
            DVec2::new(hw, -hh),
            DVec2::new(hw, hh),
            DVec2::new(-hw, hh),
        ])
    }

    /// Regular polygon inscribed in a circle, counter-clockwise from
    /// `(radius, 0)`. Six segments give a hexagon.
    pub fn circle(radius: f64, segments: u32) -> Result<Self> {
        require_positive("circle radius", radius)?;
        if segments < 3 {
            return Err(LoftError::invalid_profile(format!(
                "circle needs at least 3 segments, got {segments}"
            )));
        }
        let points = (0..segments)
            .map(|i| {
                let angle = TAU * f64::from(i) / f64::from(segments);
                DVec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::closed(points)
    }

    /// Star with `tips` points alternating between the two radii,
    /// counter-clockwise from the first outer tip at `(outer, 0)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use slice_loft::Profile;
    ///
    /// let star = Profile::star(22.0, 12.0, 5).unwrap();
    /// assert_eq!(star.len(), 10);
    /// assert!(star.is_ccw());
    /// ```
    pub fn star(outer_radius: f64, inner_radius: f64, tips: u32) -> Result<Self> {
        require_positive("star outer radius", outer_radius)?;
        require_positive("star inner radius", inner_radius)?;
        if tips < 2 {
            return Err(LoftError::invalid_profile(format!(
                "star needs at least 2 tips, got {tips}"
            )));
        }
        let step = PI / f64::from(tips);
        let points = (0..tips * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                let angle = step * f64::from(i);
                DVec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::closed(points)
    }

    /// Open circular arc from `start_degrees` to `end_degrees` with
    /// `segments + 1` points.
    pub fn arc(radius: f64, start_degrees: f64, end_degrees: f64, segments: u32) -> Result<Self> {
        require_positive("arc radius", radius)?;
        if !(start_degrees.is_finite() && end_degrees.is_finite()) {
            return Err(LoftError::invalid_profile("arc angles must be finite"));
        }
        if segments < 2 {
            return Err(LoftError::invalid_profile(format!(
                "arc needs at least 2 segments, got {segments}"
            )));
        }
        let sweep = end_degrees - start_degrees;
        if sweep.abs() >= 360.0 {
            return Err(LoftError::invalid_profile(
                "arc spans a full turn, use a circle",
            ));
        }
        let points = (0..=segments)
            .map(|i| {
                let angle = (start_degrees + sweep * f64::from(i) / f64::from(segments)).to_radians();
                DVec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self::polyline(points)
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The outline points.
    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Point `index` of the outline.
    #[inline]
    pub fn point(&self, index: usize) -> DVec2 {
        self.points[index]
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a valid profile has at least 3 points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True for a closed outline.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Edges stitched per slice pair: `n` closed, `n − 1` open.
    #[inline]
    pub fn edge_count(&self) -> usize {
        if self.closed {
            self.len()
        } else {
            self.len() - 1
        }
    }

    // =========================================================================
    // MEASURES
    // =========================================================================

    /// Shoelace area of the ring through all points, positive when
    /// counter-clockwise. Open profiles are measured as if closed by their
    /// end chord.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Absolute enclosed area.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True for counter-clockwise outlines.
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Outline length, including the closing edge of a closed profile.
    pub fn perimeter(&self) -> f64 {
        let open_length: f64 = self
            .points
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .sum();
        match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) => open_length + last.distance(*first),
            _ => open_length,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (DVec2, DVec2) {
        self.points.iter().fold(
            (DVec2::splat(f64::INFINITY), DVec2::splat(f64::NEG_INFINITY)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        )
    }

    /// Diagonal of the bounds.
    pub fn extent(&self) -> f64 {
        let (min, max) = self.bounds();
        (max - min).length()
    }

    /// Same outline traversed in the opposite direction.
    ///
    /// Lofting the reversed profile flips the winding of every triangle
    /// while keeping the area.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let points: Vec<DVec2> = self.points.iter().rev().copied().collect();
        Self {
            points: points.into(),
            closed: self.closed,
        }
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

fn require_positive(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LoftError::invalid_profile(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

pub(crate) fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        / 2.0
}

fn validate_outline(points: &[DVec2], closed: bool, point_tolerance: f64) -> Result<()> {
    let n = points.len();
    if n < MIN_PROFILE_POINTS {
        return Err(LoftError::invalid_profile(format!(
            "needs at least {MIN_PROFILE_POINTS} points, got {n}"
        )));
    }
    if n > MAX_PROFILE_POINTS {
        return Err(LoftError::invalid_profile(format!(
            "too many points: {n} (max: {MAX_PROFILE_POINTS})"
        )));
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(LoftError::invalid_profile(format!(
            "point {index} is not finite"
        )));
    }

    let edge_count = if closed { n } else { n - 1 };
    let edge = |i: usize| (points[i], points[(i + 1) % n]);

    for i in 0..edge_count {
        let (a, b) = edge(i);
        if a.distance(b) <= point_tolerance {
            return Err(LoftError::invalid_profile(format!(
                "points {i} and {} coincide",
                (i + 1) % n
            )));
        }
    }

    // A vertex where the outline turns straight back
    let corners = if closed { 0..n } else { 1..n - 1 };
    for i in corners {
        let prev = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        let incoming = here - prev;
        let outgoing = next - here;
        let turn = incoming.perp_dot(outgoing).abs();
        if turn <= AREA_EPSILON * incoming.length() * outgoing.length()
            && incoming.dot(outgoing) < 0.0
        {
            return Err(LoftError::invalid_profile(format!(
                "outline folds back on itself at point {i}"
            )));
        }
    }

    for i in 0..edge_count {
        for j in (i + 2)..edge_count {
            if closed && i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = edge(i);
            let (c, d) = edge(j);
            if segments_touch(a, b, c, d) {
                return Err(LoftError::invalid_profile(format!(
                    "outline is not simple: edges {i} and {j} intersect"
                )));
            }
        }
    }

    if closed && signed_area(points).abs() <= AREA_EPSILON {
        return Err(LoftError::invalid_profile("closed outline has zero area"));
    }
    Ok(())
}

fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn on_segment(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_touch(a: DVec2, b: DVec2, c: DVec2, d: DVec2) -> bool {
    let d1 = orient(c, d, a);
    let d2 = orient(c, d, b);
    let d3 = orient(a, b, c);
    let d4 = orient(a, b, d);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(c, d, a))
        || (d2 == 0.0 && on_segment(c, d, b))
        || (d3 == 0.0 && on_segment(a, b, c))
        || (d4 == 0.0 && on_segment(a, b, d))
}
