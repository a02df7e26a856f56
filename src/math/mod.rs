pub mod distance_2d;
pub mod intersect_2d;

/// 2D point type (normalized device coordinates unless stated otherwise).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Band around zero inside which a quadratic discriminant counts as zero.
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-6;
