use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3};
use crate::render::ColorRgba;

use super::TriangleMesh;

/// Builds a square pyramid with flat shading.
///
/// The apex sits at `(0, height, 0)` above a square base of side `base`
/// centered on the origin in the XZ plane. Every face owns its vertices, so
/// normals and colors are constant per face: 4 side triangles of 3
/// vertices plus a 4-vertex base, 16 vertices in all. Faces wind
/// counter-clockwise when seen from outside.
#[derive(Debug, Clone, Copy)]
pub struct MakePyramid {
    base: f64,
    height: f64,
    color: Option<ColorRgba>,
}

/// Side faces in order, with their colors and U range on the texture strip.
const SIDES: [(ColorRgba, f64); 4] = [
    (ColorRgba::RED, 0.0),      // front (+Z)
    (ColorRgba::YELLOW, 0.25),  // right (+X)
    (ColorRgba::MAGENTA, 0.5),  // back (-Z)
    (ColorRgba::CYAN, 0.75),    // left (-X)
];

impl MakePyramid {
    /// Creates a new `MakePyramid` operation.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` or `height` is not positive and finite.
    pub fn new(base: f64, height: f64) -> Result<Self> {
        for (name, value) in [("pyramid base", base), ("pyramid height", height)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GeometryError::InvalidDimension { name, value }.into());
            }
        }
        Ok(Self {
            base,
            height,
            color: None,
        })
    }

    /// Paints every vertex with `color` instead of the per-face palette.
    #[must_use]
    pub fn with_color(mut self, color: ColorRgba) -> Self {
        self.color = Some(color);
        self
    }

    /// Executes the operation, producing the mesh.
    #[must_use]
    pub fn execute(&self) -> TriangleMesh {
        let h = self.base * 0.5;
        let apex = Point3::new(0.0, self.height, 0.0);
        // Base corners, counter-clockwise seen from above starting front-left.
        let corners = [
            Point3::new(-h, 0.0, h),
            Point3::new(h, 0.0, h),
            Point3::new(h, 0.0, -h),
            Point3::new(-h, 0.0, -h),
        ];

        let mut mesh = TriangleMesh::default();

        for (i, (face_color, u0)) in SIDES.iter().enumerate() {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let normal = face_normal(&apex, &a, &b);
            let first = index(mesh.vertices.len());

            mesh.vertices.extend([apex, a, b]);
            mesh.normals.extend([normal; 3]);
            mesh.colors.extend([self.color.unwrap_or(*face_color); 3]);
            mesh.uvs.extend([
                Point2::new(u0 + 0.125, 1.0),
                Point2::new(*u0, 0.0),
                Point2::new(u0 + 0.25, 0.0),
            ]);
            mesh.indices.push([first, first + 1, first + 2]);
        }

        // Base, wound to face -Y.
        let base = [corners[0], corners[3], corners[2], corners[1]];
        let normal = face_normal(&base[0], &base[1], &base[2]);
        let first = index(mesh.vertices.len());
        mesh.vertices.extend(base);
        mesh.normals.extend([normal; 4]);
        mesh.colors.extend([self.color.unwrap_or(ColorRgba::BLUE); 4]);
        mesh.uvs.extend([
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        mesh.indices.push([first, first + 1, first + 2]);
        mesh.indices.push([first + 2, first + 3, first]);

        mesh
    }
}

impl Default for MakePyramid {
    /// Unit base, unit height.
    fn default() -> Self {
        Self {
            base: 1.0,
            height: 1.0,
            color: None,
        }
    }
}

/// Unit normal of the triangle `(a, b, c)` by the right-hand rule.
fn face_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a).cross(&(c - a)).normalize()
}

#[allow(clippy::cast_possible_truncation)]
fn index(len: usize) -> u32 {
    len as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vertex_and_index_counts() {
        let mesh = MakePyramid::default().execute();
        assert_eq!(mesh.vertices.len(), 16);
        assert_eq!(mesh.normals.len(), 16);
        assert_eq!(mesh.colors.len(), 16);
        assert_eq!(mesh.uvs.len(), 16);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.index_data().len(), 18);
    }

    #[test]
    fn normals_match_winding_and_point_outward() {
        let mesh = MakePyramid::default().execute();
        let center = Point3::new(0.0, 0.25, 0.0);
        for [i, j, k] in &mesh.indices {
            let (a, b, c) = (
                mesh.vertices[*i as usize],
                mesh.vertices[*j as usize],
                mesh.vertices[*k as usize],
            );
            let n = face_normal(&a, &b, &c);
            assert_relative_eq!(n, mesh.normals[*i as usize], epsilon = 1e-12);
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
            let centroid = Point3::from((a.coords + b.coords + c.coords) / 3.0);
            assert!(n.dot(&(centroid - center)) > 0.0, "inward normal {n:?}");
        }
    }

    #[test]
    fn base_faces_down() {
        let mesh = MakePyramid::default().execute();
        assert_relative_eq!(mesh.normals[15], -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn front_face_is_red_and_base_is_blue() {
        let mesh = MakePyramid::default().execute();
        assert_eq!(mesh.colors[0], ColorRgba::RED);
        assert_eq!(mesh.colors[3], ColorRgba::YELLOW);
        assert_eq!(mesh.colors[12], ColorRgba::BLUE);
    }

    #[test]
    fn uniform_color_override() {
        let gray = ColorRgba::new(0.8, 0.8, 0.8, 1.0);
        let mesh = MakePyramid::default().with_color(gray).execute();
        assert!(mesh.colors.iter().all(|c| *c == gray));
    }

    #[test]
    fn apex_height_follows_parameter() {
        let mesh = MakePyramid::new(2.0, 3.0).unwrap().execute();
        assert_relative_eq!(mesh.vertices[0].y, 3.0);
        assert_relative_eq!(mesh.vertices[1].x, -1.0);
    }

    #[test]
    fn rejects_degenerate_dimensions() {
        for (base, height) in [(0.0, 1.0), (1.0, -2.0), (f64::NAN, 1.0), (1.0, f64::INFINITY)] {
            assert!(MakePyramid::new(base, height).is_err(), "{base} x {height}");
        }
    }

    #[test]
    fn small_pyramid_has_unit_normals() {
        let mesh = MakePyramid::new(1e-3, 2e-3).unwrap().execute();
        for n in &mesh.normals {
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-9);
        }
    }
}
