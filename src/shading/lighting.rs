use crate::math::{Point3, Vector3, TOLERANCE};

/// Surface reflectance for the Phong model, in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Vector3,
    pub specular: Vector3,
    /// Specular exponent; larger values give a tighter highlight.
    pub shininess: f64,
}

impl Material {
    /// Orange plastic with a gray highlight.
    #[must_use]
    pub fn plastic(shininess: f64) -> Self {
        Self {
            diffuse: Vector3::new(1.0, 0.5, 0.31),
            specular: Vector3::new(0.5, 0.5, 0.5),
            shininess,
        }
    }
}

/// Point light with separate ambient, diffuse and specular intensities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Point3,
    pub ambient: Vector3,
    pub diffuse: Vector3,
    pub specular: Vector3,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point3::new(1.0, 0.7, 1.0),
            ambient: Vector3::repeat(0.2),
            diffuse: Vector3::repeat(0.7),
            specular: Vector3::repeat(1.0),
        }
    }
}

/// Material, light and eye position for one shaded object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightingSetup {
    pub material: Material,
    pub light: PointLight,
    pub eye: Point3,
}

impl LightingSetup {
    /// The default light and a camera at `(0, 0, 3)` looking at the origin.
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            light: PointLight::default(),
            eye: Point3::new(0.0, 0.0, 3.0),
        }
    }
}

/// Phong reflection at `position` for surface normal `normal`.
///
/// `normal` need not be unit length. Surfaces facing away from the light,
/// and zero normals, receive only the ambient term.
#[must_use]
pub fn phong(setup: &LightingSetup, position: &Point3, normal: &Vector3) -> Vector3 {
    let (material, light) = (&setup.material, &setup.light);
    let ambient = light.ambient.component_mul(&material.diffuse);

    let (Some(n), Some(l)) = (
        normal.try_normalize(TOLERANCE),
        (light.position - position).try_normalize(TOLERANCE),
    ) else {
        return ambient;
    };
    let lambert = n.dot(&l);
    if lambert <= 0.0 {
        return ambient;
    }

    let diffuse = light.diffuse.component_mul(&material.diffuse) * lambert;
    let reflected = n * (2.0 * lambert) - l;
    let highlight = (setup.eye - position)
        .try_normalize(TOLERANCE)
        .map_or(0.0, |v| v.dot(&reflected).max(0.0).powf(material.shininess));
    let specular = light.specular.component_mul(&material.specular) * highlight;

    ambient + diffuse + specular
}
