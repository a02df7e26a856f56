use std::f64::consts::PI;

use crate::math::Matrix4;

use super::compose::{compose, merge, TransformOrder, Trs};

/// Offset of the main blade hub from the pillar origin.
const HUB_OFFSET: f64 = 0.5;

/// Offset of each small blade from the main blade center, along its local X.
const SMALL_BLADE_OFFSET: f64 = 0.3;

/// Angle multipliers applied to `sin(elapsed) * π`.
const BIG_SPIN: f64 = 2.0;
const SMALL_SPIN: f64 = -10.0;

/// Model transforms of the windmill parts at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct WindmillPose {
    /// The pillar never moves.
    pub pillar: Matrix4,
    /// The large blade, spinning around the hub.
    pub blade: Matrix4,
    /// The two small blades riding at each end of the large one.
    pub small_blades: [Matrix4; 2],
}

/// Computes the windmill hierarchy at `elapsed` seconds since start.
///
/// The swing angle oscillates as `sin(elapsed) * π`; the large blade turns
/// by twice that and each small blade counter-rotates ten times faster in
/// its parent's frame.
#[must_use]
pub fn windmill_pose(elapsed: f64) -> WindmillPose {
    let swing = elapsed.sin() * PI;
    let big = swing * BIG_SPIN;
    let small = swing * SMALL_SPIN;

    let blade = compose(TransformOrder::Rts, &Trs::new(0.0, HUB_OFFSET, big, 1.0, 1.0));
    let small_blade = |dx: f64| {
        let local = compose(TransformOrder::Rts, &Trs::new(dx, 0.0, small, 1.0, 1.0));
        merge(&local, &blade)
    };

    WindmillPose {
        pillar: Matrix4::identity(),
        blade,
        small_blades: [small_blade(SMALL_BLADE_OFFSET), small_blade(-SMALL_BLADE_OFFSET)],
    }
}
