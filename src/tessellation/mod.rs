mod pyramid;
mod weld;

pub use pyramid::MakePyramid;

use crate::math::{Point2, Point3, Vector3, TOLERANCE};
use crate::render::ColorRgba;

use weld::PositionWelder;

/// Distance under which two vertex positions count as the same point.
const WELD_TOLERANCE: f64 = 1e-9;

/// A triangle mesh with per-vertex attributes.
///
/// All attribute vectors have one entry per vertex.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Vertex colors.
    pub colors: Vec<ColorRgba>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Flattened index buffer, three entries per triangle.
    #[must_use]
    pub fn index_data(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }

    /// Per-vertex normals taken from the face each vertex belongs to.
    ///
    /// Exact when every face owns its vertices; a vertex shared between
    /// faces gets the normal of the last triangle that uses it. Degenerate
    /// triangles contribute a zero normal.
    #[must_use]
    pub fn flat_normals(&self) -> Vec<Vector3> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let normal = self
                .face_cross(tri)
                .try_normalize(TOLERANCE)
                .unwrap_or_else(Vector3::zeros);
            for &i in tri {
                normals[i as usize] = normal;
            }
        }
        normals
    }

    /// Per-vertex normals averaged over every face touching the same
    /// position, weighted by face area.
    ///
    /// Vertices are grouped by position, not by index, so a mesh whose faces
    /// own their vertices still shades smoothly across edges. Positions no
    /// face touches get a zero normal.
    #[must_use]
    pub fn smooth_normals(&self) -> Vec<Vector3> {
        let mut welder = PositionWelder::new(WELD_TOLERANCE);
        let groups: Vec<usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, p)| welder.representative(i, p))
            .collect();

        let mut sums = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let weighted = self.face_cross(tri);
            for &i in tri {
                sums[groups[i as usize]] += weighted;
            }
        }

        groups
            .iter()
            .map(|&g| sums[g].try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros))
            .collect()
    }

    /// Cross product of a triangle's edges; its length is twice the area.
    fn face_cross(&self, [a, b, c]: &[u32; 3]) -> Vector3 {
        let (a, b, c) = (
            self.vertices[*a as usize],
            self.vertices[*b as usize],
            self.vertices[*c as usize],
        );
        (b - a).cross(&(c - a))
    }
}
