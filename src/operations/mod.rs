pub mod motion;
pub mod query;
pub mod transform;
