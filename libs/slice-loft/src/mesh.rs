//! # Mesh Data Structure
//!
//! Indexed triangle mesh produced by the loft, with the measurements used to
//! check it: surface area, signed volume, edge census and connectivity.

use config::constants::AREA_EPSILON;
use glam::DVec3;
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens for renderers.
///
/// # Example
///
/// ```rust
/// use slice_loft::Mesh;
/// use glam::DVec3;
///
/// let mesh = Mesh::from_parts(
///     vec![DVec3::ZERO, DVec3::X, DVec3::Y],
///     vec![[0, 1, 2]],
/// );
/// assert!((mesh.surface_area() - 0.5).abs() < 1e-12);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals
    normals: Option<Vec<DVec3>>,
}

/// Undirected edge usage of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeCensus {
    /// Edges used by exactly one triangle
    pub boundary: usize,
    /// Edges used by exactly two triangles
    pub shared: usize,
    /// Edges used by three or more triangles
    pub non_manifold: usize,
}

impl EdgeCensus {
    /// Total number of distinct edges.
    pub fn total(&self) -> usize {
        self.boundary + self.shared + self.non_manifold
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Assembles a mesh from filled buffers.
    pub fn from_parts(vertices: Vec<DVec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    fn corners(&self, tri: &[u32; 3]) -> [DVec3; 3] {
        tri.map(|i| self.vertices[i as usize])
    }

    /// Computes area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let [v0, v1, v2] = self.corners(tri);
            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            let len = normal.length();
            if len > 0.0 {
                *normal /= len;
            }
        }

        self.normals = Some(normals);
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh; its indices are offset past the current
    /// vertices. No vertices are welded.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        let had_vertices = !self.vertices.is_empty();

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| tri.map(|i| i + offset)),
        );

        self.normals = match (self.normals.take(), &other.normals) {
            (Some(mut mine), Some(theirs)) => {
                mine.extend_from_slice(theirs);
                Some(mine)
            }
            (None, Some(theirs)) if !had_vertices => Some(theirs.clone()),
            _ => None,
        };
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = self.corners(tri);
            (v1 - v0).cross(v2 - v0).length() >= AREA_EPSILON
        })
    }

    // =========================================================================
    // ANALYSIS
    // =========================================================================

    /// Sum of triangle areas.
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = self.corners(tri);
                (v1 - v0).cross(v2 - v0).length() / 2.0
            })
            .sum()
    }

    /// Signed enclosed volume; positive when a closed mesh has outward
    /// facing triangles.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = self.corners(tri);
                v0.dot(v1.cross(v2))
            })
            .sum::<f64>()
            / 6.0
    }

    fn edge_uses(&self) -> HashMap<(u32, u32), usize> {
        let mut uses = HashMap::with_capacity(self.triangles.len() * 3 / 2);
        for tri in &self.triangles {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                *uses.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        uses
    }

    /// Counts how many triangles use each undirected edge.
    pub fn edge_census(&self) -> EdgeCensus {
        self.edge_uses()
            .values()
            .fold(EdgeCensus::default(), |mut census, &count| {
                match count {
                    1 => census.boundary += 1,
                    2 => census.shared += 1,
                    _ => census.non_manifold += 1,
                }
                census
            })
    }

    /// True when every edge is shared by exactly two triangles.
    pub fn is_closed_manifold(&self) -> bool {
        !self.triangles.is_empty() && self.edge_uses().values().all(|&count| count == 2)
    }

    /// True when every directed edge appears once and its reverse once,
    /// so neighbouring triangles agree on their facing.
    pub fn is_consistently_oriented(&self) -> bool {
        let mut directed: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                *directed.entry((tri[k], tri[(k + 1) % 3])).or_insert(0) += 1;
            }
        }
        directed
            .iter()
            .all(|(&(a, b), &count)| count == 1 && directed.get(&(b, a)) == Some(&1))
    }

    /// Number of groups of triangles connected through shared vertices.
    pub fn connected_components(&self) -> usize {
        let mut parent: Vec<u32> = (0..self.vertices.len() as u32).collect();

        fn find(parent: &mut [u32], mut i: u32) -> u32 {
            while parent[i as usize] != i {
                let grand = parent[parent[i as usize] as usize];
                parent[i as usize] = grand;
                i = grand;
            }
            i
        }

        for tri in &self.triangles {
            let root = find(&mut parent, tri[0]);
            for &v in &tri[1..] {
                let other = find(&mut parent, v);
                if other != root {
                    parent[other as usize] = root;
                }
            }
        }

        let mut roots: Vec<u32> = self
            .triangles
            .iter()
            .map(|tri| find(&mut parent, tri[0]))
            .collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }

    // =========================================================================
    // EXPORT
    // =========================================================================

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_ref().map(|normals| {
            normals
                .iter()
                .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect()
        })
    }
}
