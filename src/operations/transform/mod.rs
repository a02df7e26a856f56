mod clock;
mod compose;
mod selection;
mod windmill;

pub use clock::{FrameClock, FrameTime};
pub use compose::{compose, merge, transform_point, TransformOrder, Trs};
pub use selection::TransformSelection;
pub use windmill::{windmill_pose, WindmillPose};
