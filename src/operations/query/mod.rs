mod intersect;

pub use intersect::{CircleSegmentIntersect, SegmentHit};
