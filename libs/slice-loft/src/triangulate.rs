//! # Ear Clipping
//!
//! Triangulates a simple polygon for end caps.
//!
//! Triangles keep the traversal direction of the input: a counter-clockwise
//! outline yields counter-clockwise triangles and vice versa. The loft
//! reverses the start cap itself.

use crate::error::{LoftError, Result};
use crate::profile::signed_area;
use config::constants::AREA_EPSILON;
use glam::DVec2;

/// Triangulates a simple polygon into `n − 2` triangles of point indices.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use slice_loft::triangulate::triangulate;
///
/// let square = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(1.0, 0.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// assert_eq!(triangulate(&square).unwrap().len(), 2);
/// ```
pub fn triangulate(points: &[DVec2]) -> Result<Vec<[u32; 3]>> {
    let n = points.len();
    if n < 3 {
        return Err(LoftError::invalid_profile(format!(
            "cannot triangulate {n} points"
        )));
    }

    let orientation = signed_area(points).signum();
    let mut ring: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);
    let mut cursor = 0usize;
    let mut misses = 0usize;

    while ring.len() > 3 {
        let len = ring.len();
        let prev = ring[(cursor + len - 1) % len];
        let ear = ring[cursor];
        let next = ring[(cursor + 1) % len];

        if is_ear(points, &ring, [prev, ear, next], orientation) {
            triangles.push([prev as u32, ear as u32, next as u32]);
            ring.remove(cursor);
            cursor %= ring.len();
            misses = 0;
            continue;
        }

        cursor = (cursor + 1) % len;
        misses += 1;
        if misses > len {
            return Err(LoftError::invalid_profile(
                "failed to triangulate cap (no ears found)",
            ));
        }
    }

    triangles.push([ring[0] as u32, ring[1] as u32, ring[2] as u32]);
    Ok(triangles)
}

fn orient(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn is_ear(points: &[DVec2], ring: &[usize], corner: [usize; 3], orientation: f64) -> bool {
    let [ia, ib, ic] = corner;
    let (a, b, c) = (points[ia], points[ib], points[ic]);

    // reflex or flat
    if orient(a, b, c) * orientation <= AREA_EPSILON {
        return false;
    }

    !ring
        .iter()
        .filter(|&&i| i != ia && i != ib && i != ic)
        .any(|&i| {
            let p = points[i];
            orient(a, b, p) * orientation >= 0.0
                && orient(b, c, p) * orientation >= 0.0
                && orient(c, a, p) * orientation >= 0.0
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn total_signed_area(points: &[DVec2], triangles: &[[u32; 3]]) -> f64 {
        triangles
            .iter()
            .map(|t| {
                orient(
                    points[t[0] as usize],
                    points[t[1] as usize],
                    points[t[2] as usize],
                ) / 2.0
            })
            .sum()
    }

    #[test]
    fn test_triangle_passes_through() {
        let points = [DVec2::ZERO, DVec2::X, DVec2::Y];
        assert_eq!(triangulate(&points).unwrap(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_concave_l_shape() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(0.0, 2.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(total_signed_area(&points, &triangles), 3.0, epsilon = 1e-12);
        for t in &triangles {
            let area = orient(points[t[0] as usize], points[t[1] as usize], points[t[2] as usize]);
            assert!(area > 0.0, "triangle {t:?} is not counter-clockwise");
        }
    }

    #[test]
    fn test_clockwise_input_keeps_direction() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(total_signed_area(&points, &triangles), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_star_cap_covers_area() {
        let points: Vec<DVec2> = (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { 22.0 } else { 12.0 };
                let angle = std::f64::consts::PI / 5.0 * f64::from(i);
                DVec2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 8);
        assert_relative_eq!(
            total_signed_area(&points, &triangles),
            signed_area(&points),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_too_few_points() {
        assert!(triangulate(&[DVec2::ZERO, DVec2::X]).is_err());
    }
}
