use thiserror::Error;

/// Top-level error type for glsketch.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to constructing geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("circle radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),

    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Errors related to the rendering surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("surface size must be positive and finite, got {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Errors related to transform composition.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("unknown transform order: {0:?}")]
    UnknownOrder(String),
}

/// Errors related to scene graph edits.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene node not found: {0}")]
    NodeNotFound(&'static str),

    #[error("attaching this node would create a cycle")]
    Cycle,
}

/// Convenience type alias for results using [`SketchError`].
pub type Result<T> = std::result::Result<T, SketchError>;
