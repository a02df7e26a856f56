use crate::math::{Matrix4, Vector3};
use crate::render::ColorRgba;
use crate::tessellation::TriangleMesh;

slotmap::new_key_type! {
    /// Unique identifier for a node in a [`SceneGraph`](super::SceneGraph).
    pub struct NodeId;
}

/// Kind of light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light from every direction.
    Ambient,
    /// Parallel rays travelling along `direction`.
    Directional { direction: Vector3 },
    /// Omnidirectional source at the node origin; `range` of zero means unbounded.
    Point { range: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: ColorRgba,
    pub intensity: f64,
}

/// Camera projection, with clip planes at `near` and `far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        /// Vertical field of view in radians.
        fov_y: f64,
        aspect: f64,
        near: f64,
        far: f64,
    },
    Orthographic {
        /// Half of the visible height; width follows `aspect`.
        half_height: f64,
        aspect: f64,
        near: f64,
        far: f64,
    },
}

impl Projection {
    /// Returns the clip-space projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        match *self {
            Self::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => Matrix4::new_perspective(aspect, fov_y, near, far),
            Self::Orthographic {
                half_height,
                aspect,
                near,
                far,
            } => {
                let half_width = half_height * aspect;
                Matrix4::new_orthographic(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    near,
                    far,
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub projection: Projection,
}

/// The closed set of things a scene can hold.
#[derive(Debug, Clone)]
pub enum NodeKind {
    Mesh(TriangleMesh),
    Light(Light),
    Camera(Camera),
    /// Pure transform node that only carries children.
    Group,
}

/// A node in the scene graph.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub kind: NodeKind,
    /// Transform relative to the parent (or to the world for roots).
    pub local: Matrix4,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
}

impl SceneNode {
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
