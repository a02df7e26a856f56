//! Surface pixel space and its mapping to normalized device coordinates.
//!
//! Pixel space:
//! - origin at the surface's top-left corner
//! - +X right, +Y down
//!
//! NDC space spans `[-1, 1]` on both axes with +Y up.

mod surface;

pub use surface::SurfaceSize;
