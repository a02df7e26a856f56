//! Shading modes for a lit object.
//!
//! Two independent switches: which normals the mesh carries (per-face or
//! averaged per position) and where the Phong model is evaluated (per
//! vertex with colors interpolated, or per fragment with normals
//! interpolated).

mod lighting;

pub use lighting::{phong, LightingSetup, Material, PointLight};

use tracing::debug;

use crate::interaction::{Key, KeyEvent, KeyState};
use crate::math::{Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Which normals the mesh is lit with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NormalMode {
    /// One normal per face; edges stay visible.
    Flat,
    /// Normals averaged over the faces meeting at each position.
    #[default]
    Smooth,
}

impl NormalMode {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Flat => "FLAT",
            Self::Smooth => "SMOOTH",
        }
    }
}

/// Where lighting is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightingModel {
    /// Per vertex; colors are interpolated across the triangle.
    Gouraud,
    /// Per fragment; positions and normals are interpolated.
    #[default]
    Phong,
}

impl LightingModel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Gouraud => "GOURAUD",
            Self::Phong => "PHONG",
        }
    }

    /// Specular exponent paired with this model.
    #[must_use]
    pub fn shininess(self) -> f64 {
        match self {
            Self::Gouraud => 32.0,
            Self::Phong => 16.0,
        }
    }

    /// Color at barycentric `weights` inside a triangle given as
    /// `(position, normal)` corners.
    #[must_use]
    pub fn shade_triangle(
        self,
        corners: &[(Point3, Vector3); 3],
        weights: [f64; 3],
        setup: &LightingSetup,
    ) -> Vector3 {
        let weighted = corners.iter().zip(weights);
        match self {
            Self::Gouraud => weighted.fold(Vector3::zeros(), |acc, ((p, n), w)| {
                acc + phong(setup, p, n) * w
            }),
            Self::Phong => {
                let (p, n) = weighted.fold(
                    (Vector3::zeros(), Vector3::zeros()),
                    |(p_acc, n_acc), ((p, n), w)| (p_acc + p.coords * w, n_acc + n * w),
                );
                phong(setup, &Point3::from(p), &n)
            }
        }
    }
}

/// Normal and lighting selection, switched with `f`/`s` and `g`/`p`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadingMode {
    pub normals: NormalMode,
    pub lighting: LightingModel,
}

impl ShadingMode {
    /// Feeds a keyboard event. Returns whether it was a shading key.
    pub fn handle_key(&mut self, event: KeyEvent) -> bool {
        let (KeyState::Pressed, Key::Letter(letter)) = (event.state, event.key) else {
            return false;
        };
        match letter {
            'f' => self.normals = NormalMode::Flat,
            's' => self.normals = NormalMode::Smooth,
            'g' => self.lighting = LightingModel::Gouraud,
            'p' => self.lighting = LightingModel::Phong,
            _ => return false,
        }
        debug!(normals = ?self.normals, lighting = ?self.lighting, "shading mode changed");
        true
    }

    /// Overlay text, e.g. `shading mode: SMOOTH (PHONG)`.
    #[must_use]
    pub fn status(&self) -> String {
        format!(
            "shading mode: {} ({})",
            self.normals.name(),
            self.lighting.name()
        )
    }

    /// Normals `mesh` should carry in this mode.
    #[must_use]
    pub fn normals_for(&self, mesh: &TriangleMesh) -> Vec<Vector3> {
        match self.normals {
            NormalMode::Flat => mesh.flat_normals(),
            NormalMode::Smooth => mesh.smooth_normals(),
        }
    }

    /// Replaces the normals of `mesh` with the ones this mode calls for.
    pub fn apply_to(&self, mesh: &mut TriangleMesh) {
        mesh.normals = self.normals_for(mesh);
    }

    /// Material, light and eye for the selected lighting model.
    #[must_use]
    pub fn setup(&self) -> LightingSetup {
        LightingSetup::new(Material::plastic(self.lighting.shininess()))
    }

    /// Shades a point of triangle `tri` of `mesh` using its current normals.
    #[must_use]
    pub fn shade(&self, mesh: &TriangleMesh, tri: usize, weights: [f64; 3]) -> Option<Vector3> {
        let indices = mesh.indices.get(tri)?;
        let corner = |i: u32| -> Option<(Point3, Vector3)> {
            let i = i as usize;
            Some((*mesh.vertices.get(i)?, *mesh.normals.get(i)?))
        };
        let corners = [corner(indices[0])?, corner(indices[1])?, corner(indices[2])?];
        Some(self.lighting.shade_triangle(&corners, weights, &self.setup()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::MakePyramid;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const CENTER: [f64; 3] = [1.0 / 3.0; 3];

    fn press(mode: &mut ShadingMode, letter: char) -> bool {
        mode.handle_key(KeyEvent::pressed(Key::Letter(letter)))
    }

    #[test]
    fn starts_smooth_with_phong() {
        assert_eq!(ShadingMode::default().status(), "shading mode: SMOOTH (PHONG)");
    }

    #[test]
    fn letters_switch_each_axis_independently() {
        let mut mode = ShadingMode::default();
        assert!(press(&mut mode, 'f'));
        assert_eq!(mode.status(), "shading mode: FLAT (PHONG)");
        assert!(press(&mut mode, 'g'));
        assert_eq!(mode.status(), "shading mode: FLAT (GOURAUD)");
        assert!(press(&mut mode, 's'));
        assert!(press(&mut mode, 'p'));
        assert_eq!(mode, ShadingMode::default());
    }

    #[test]
    fn other_keys_are_not_consumed() {
        let mut mode = ShadingMode::default();
        assert!(!press(&mut mode, 'a'));
        assert!(!mode.handle_key(KeyEvent::released(Key::Letter('f'))));
        assert!(!mode.handle_key(KeyEvent::pressed(Key::Digit(1))));
        assert_eq!(mode, ShadingMode::default());
    }

    #[test]
    fn apply_switches_mesh_normals() {
        let mut mesh = MakePyramid::default().execute();
        let mut mode = ShadingMode::default();
        mode.apply_to(&mut mesh);
        assert_relative_eq!(mesh.normals[0], Vector3::y(), epsilon = 1e-12);

        press(&mut mode, 'f');
        mode.apply_to(&mut mesh);
        assert!(mesh.normals[0].y < 1.0 - 1e-3, "apex keeps face normal");
        assert_relative_eq!(mesh.normals[15], -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn phong_keeps_highlight_gouraud_misses() {
        // Normals tilt outward at each corner, so the highlight sits at the
        // center where only the interpolated normal faces the light.
        let corner = |angle: f64| {
            let p = Point3::new(angle.cos(), angle.sin(), 0.0);
            (p, Vector3::new(p.x, p.y, 1.0).normalize())
        };
        let tri = [
            corner(FRAC_PI_2),
            corner(FRAC_PI_2 + TAU / 3.0),
            corner(FRAC_PI_2 + 2.0 * TAU / 3.0),
        ];
        let setup = LightingSetup {
            light: PointLight {
                position: Point3::new(0.0, 0.0, 2.0),
                ..PointLight::default()
            },
            ..LightingSetup::new(Material::plastic(16.0))
        };

        let phong = LightingModel::Phong.shade_triangle(&tri, CENTER, &setup);
        let gouraud = LightingModel::Gouraud.shade_triangle(&tri, CENTER, &setup);
        assert_relative_eq!(phong, Vector3::new(1.4, 0.95, 0.779), epsilon = 1e-9);
        assert!(phong.x > gouraud.x + 0.5, "phong={phong:?} gouraud={gouraud:?}");
    }

    #[test]
    fn shade_reads_mesh_triangle() {
        let mesh = MakePyramid::default().execute();
        let mode = ShadingMode::default();
        let lit = mode.shade(&mesh, 0, CENTER).unwrap();
        assert!(lit.iter().all(|c| c.is_finite() && *c >= 0.0));
        assert!(mode.shade(&mesh, 99, CENTER).is_none());
    }
}
