use crate::Scalar;

/// Boltzmann constant, J/K
pub const KB: Scalar = 1.380649e-23;

/// Mass of the lightest particle category, kg. Every other category is an integer multiple.
pub const UNIT_MASS: Scalar = 1.67e-27;

/// Room temperature, K
pub const ROOM_TEMPERATURE: Scalar = 295.;

/// Only ever displayed, never used in a computation.
pub const PRESSURE: Scalar = 101325.;
/// Only ever displayed, never used in a computation.
pub const GAS_CONSTANT: Scalar = 8.314;

pub const NUM_POINTS: usize = 100;
pub const DT_SCALE: Scalar = 0.01;
pub const THRESHOLD_DISTANCE: Scalar = 0.1;

pub const IDEAL_MAX_SPEED: Scalar = 1.;
pub const IDEAL_POSITION_STD_DEV: Scalar = 0.1;

pub const REACTIVE_MAX_SPEED: Scalar = 0.5;
pub const REACTIVE_POSITION_STD_DEV: Scalar = 0.4;

/// How many times a single non-positive speed draw is redrawn before giving up.
pub const MAX_SPEED_REDRAWS: usize = 64;
