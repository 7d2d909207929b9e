use crate::ship::{Orientation, ShipId, ShipSpec};

pub const BOARD_SIZE: usize = 4;
pub const SHIP_LEN: usize = 2;
pub const NUM_SHIPS: usize = 2;
pub const HITS_TO_WIN: usize = NUM_SHIPS * SHIP_LEN;

/// Cap on rejection-sampling attempts during random placement. Unreachable
/// for the fixed 4x4 / length-2 configuration, but keeps the loop from
/// hanging if the constants above ever change.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// The first ship always lies horizontal, the second always vertical.
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new(ShipId::First, Orientation::Horizontal),
    ShipSpec::new(ShipId::Second, Orientation::Vertical),
];
