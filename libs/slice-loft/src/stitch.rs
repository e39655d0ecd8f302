//! # Stitching
//!
//! Turns a loft into a triangle mesh.
//!
//! ## Layout
//!
//! - Vertices: one ring of `m` points per emitted slice. Closed lofts skip
//!   the final slice and wrap the last pair onto ring 0.
//! - Side wall: two triangles per profile edge per slice pair, written in
//!   parallel into disjoint chunks of one pre-sized buffer.
//! - Caps: ear-clipped profile on the first and last ring of an open loft,
//!   wound against the wall so every rim edge is shared in opposite
//!   directions.
//!
//! Each wall quad `p_j, p_{j+1}, q_{j+1}, q_j` (lower ring `p`, upper ring
//! `q`) is split along its shorter diagonal. Equal diagonals go to the one
//! leaving the lexicographically smaller of `p_j` and `p_{j+1}`, so a
//! reversed profile yields the same triangles with the opposite winding.
//! For [`Winding::Forward`] the triangles run `p_j → p_{j+1}` along the
//! lower ring.

use crate::error::Result;
use crate::loft::{Loft, Winding};
use crate::mesh::Mesh;
use crate::profile::Profile;
use crate::triangulate::triangulate;
use glam::DVec3;
use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

/// Triangles produced for `slice_count` slices of `profile`.
pub(crate) fn triangle_count(profile: &Profile, slice_count: usize, caps: bool) -> usize {
    let walls = slice_count.saturating_sub(1) * profile.edge_count() * 2;
    let caps = if caps { 2 * (profile.len() - 2) } else { 0 };
    walls + caps
}

/// Lexicographic order on world coordinates.
fn precedes(a: DVec3, b: DVec3) -> bool {
    (a.x, a.y, a.z) < (b.x, b.y, b.z)
}

pub(crate) fn stitch(loft: &Loft) -> Result<Mesh> {
    let profile = loft.profile();
    let m = profile.len();
    let edges = profile.edge_count();
    let slice_count = loft.slices().len();
    let rings = loft.ring_count();
    let ring_of = |i: usize| i % rings;
    let forward = loft.winding() == Winding::Forward;

    let mut vertices = vec![DVec3::ZERO; rings * m];
    vertices
        .par_chunks_mut(m)
        .zip(loft.slices().par_iter())
        .for_each(|(ring, slice)| {
            for (j, vertex) in ring.iter_mut().enumerate() {
                *vertex = slice.point(j);
            }
        });
    let positions = &vertices;

    let per_pair = edges * 2;
    let walls = (slice_count - 1) * per_pair;
    let mut triangles = Vec::with_capacity(loft.triangle_count());
    triangles.resize(walls, [0u32; 3]);

    triangles
        .par_chunks_mut(per_pair)
        .enumerate()
        .for_each(|(pair, chunk)| {
            let lower = (ring_of(pair) * m) as u32;
            let upper = (ring_of(pair + 1) * m) as u32;
            for edge in 0..edges {
                let j = edge as u32;
                let next = ((edge + 1) % m) as u32;
                let (p0, p1) = (lower + j, lower + next);
                let (q0, q1) = (upper + j, upper + next);
                let at = |i: u32| positions[i as usize];
                let rising = match at(p0)
                    .distance_squared(at(q1))
                    .partial_cmp(&at(p1).distance_squared(at(q0)))
                {
                    Some(Ordering::Less) => true,
                    Some(Ordering::Greater) => false,
                    _ => precedes(at(p0), at(p1)),
                };
                let quad = if rising {
                    [[p0, p1, q1], [p0, q1, q0]]
                } else {
                    [[p0, p1, q0], [p1, q1, q0]]
                };
                for (slot, [a, b, c]) in chunk[2 * edge..2 * edge + 2].iter_mut().zip(quad) {
                    *slot = if forward { [a, b, c] } else { [a, c, b] };
                }
            }
        });

    if loft.has_caps() {
        let ears = triangulate(profile.points())?;
        let top = (ring_of(slice_count - 1) * m) as u32;
        // start cap faces against the sweep, end cap along it
        let (start_flip, end_flip) = (forward, !forward);
        for &[a, b, c] in &ears {
            triangles.push(if start_flip { [a, c, b] } else { [a, b, c] });
        }
        for &[a, b, c] in &ears {
            let [a, b, c] = [a + top, b + top, c + top];
            triangles.push(if end_flip { [a, c, b] } else { [a, b, c] });
        }
    }

    debug!(
        family = loft.family_name(),
        vertices = vertices.len(),
        triangles = triangles.len(),
        "loft stitched"
    );

    Ok(Mesh::from_parts(vertices, triangles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loft::build_loft;
    use glam::DVec2;
    use sweep_transforms::{CustomFamily, Placement, SliceSample, Topology};

    fn lift(height: f64) -> CustomFamily<impl Fn(SliceSample) -> Placement + Send + Sync> {
        CustomFamily::new("lift", Topology::Open, move |s: SliceSample| {
            Placement::translation(DVec3::new(0.0, 0.0, s.progress * height))
        })
    }

    fn unit_square() -> Profile {
        Profile::closed(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_triangle_count_formula() {
        let square = unit_square();
        assert_eq!(triangle_count(&square, 3, false), 16);
        assert_eq!(triangle_count(&square, 3, true), 20);
    }

    #[test]
    fn test_first_wall_quad_layout() {
        let mesh = build_loft(&unit_square(), 2, &lift(1.0))
            .unwrap()
            .to_mesh()
            .unwrap();
        assert_eq!(mesh.triangle(0), [0, 1, 5]);
        assert_eq!(mesh.triangle(1), [0, 5, 4]);
        // closing edge 3 → 0 ties and leaves from vertex 0
        assert_eq!(mesh.triangle(6), [3, 0, 7]);
        assert_eq!(mesh.triangle(7), [0, 4, 7]);
    }

    #[test]
    fn test_equal_diagonals_split_the_same_way_when_reversed() {
        let forward = build_loft(&unit_square(), 2, &lift(1.0))
            .unwrap()
            .to_mesh()
            .unwrap();
        let reversed = build_loft(&unit_square().reversed(), 2, &lift(1.0))
            .unwrap()
            .to_mesh()
            .unwrap();
        let walls = |mesh: &Mesh| {
            let mut faces: Vec<[[u64; 3]; 3]> = mesh.triangles()[..8]
                .iter()
                .map(|tri| {
                    let mut corners = tri.map(|i| mesh.vertex(i).to_array().map(f64::to_bits));
                    corners.sort_unstable();
                    corners
                })
                .collect();
            faces.sort_unstable();
            faces
        };
        assert_eq!(walls(&forward), walls(&reversed));
    }

    #[test]
    fn test_unit_cube_is_closed_with_outward_faces() {
        let mesh = build_loft(&unit_square(), 2, &lift(1.0))
            .unwrap()
            .to_mesh()
            .unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.is_closed_manifold());
        assert!(mesh.is_consistently_oriented());
        assert!((mesh.signed_volume() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_wall_normals_point_outward() {
        let mesh = build_loft(&unit_square(), 2, &lift(1.0))
            .unwrap()
            .to_mesh()
            .unwrap();
        let [a, b, c] = mesh.triangle(0).map(|i| mesh.vertex(i));
        // edge 0 runs along y = 0
        assert!((b - a).cross(c - a).y < 0.0);
    }
}
