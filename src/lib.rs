//! A box of point particles. In the ideal gas they just bounce off the walls; in the reactive gas
//! they also carry a category that changes when two particles come within a bond threshold of
//! each other.
//!
//! The crate owns the particle state and advances it one tick at a time. Drawing the particles
//! is left to whoever consumes the `Snapshot`s.

extern crate nalgebra as na;

pub mod category;
pub mod constants;
pub mod errors;
pub mod initial_condition;
pub mod integrator;
pub mod parameters;
pub mod particles;
pub mod proximity;
pub mod simulation;
pub mod statistics;
pub mod util;
pub mod velocity;

pub type Scalar = f64;
pub type Vec3 = na::Vector3<Scalar>;

pub use category::Category;
pub use errors::{GasError, Result};
pub use parameters::{GasParameters, Variant};
pub use particles::{ParticleState, Species};
pub use proximity::{BondChanges, BondSet, NeighborSearch, ProximityReactor};
pub use simulation::{GasSimulation, Snapshot};
pub use statistics::SimulationStatistics;
