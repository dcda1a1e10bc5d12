use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::Result;
use crate::initial_condition::{GaussianCloud, InitialCondition};
use crate::integrator;
use crate::parameters::{GasParameters, Variant};
use crate::particles::ParticleState;
use crate::proximity::{BondChanges, BondSet, ProximityReactor};
use crate::statistics::SimulationStatistics;
use crate::{Scalar, Vec3};

/// Everything a renderer needs to draw one frame. Owned, so the live state stays private to the
/// simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: usize,
    pub positions: Vec<Vec3>,
    pub categories: Option<Vec<Category>>,
    pub bonded_pairs: Vec<(usize, usize)>,
    pub average_mass: Scalar,
}

/// Contains all of the state for a gas simulation.
pub struct GasSimulation {
    state: ParticleState,
    bonds: BondSet,
    /// The bond changes produced by the last tick
    changes: BondChanges,
    params: GasParameters,
    /// `None` for an ideal gas
    reactor: Option<ProximityReactor>,
    frame: usize,
}

impl GasSimulation {
    /// Validates `params` and builds the initial particle cloud from `params.seed`.
    pub fn new(params: GasParameters) -> Result<Self> {
        params.validate()?;

        let state = match params.variant {
            Variant::Ideal => ParticleState::new(params.bounds)?,
            Variant::Reactive => ParticleState::reactive(params.bounds)?,
        };
        let mut state = state.with_unit_mass(params.unit_mass)?;

        let mut rng = StdRng::seed_from_u64(params.seed);
        GaussianCloud::from_parameters(&params).populate(&mut state, &mut rng)?;

        tracing::info!(
            variant = ?params.variant,
            num_particles = state.len(),
            bounds = ?params.bounds.as_slice(),
            seed = params.seed,
            "created gas simulation"
        );

        Self::from_state(state, params)
    }

    /// Wraps an existing state. The variant is taken from the state rather than `params`.
    ///
    /// Fails if `params` doesn't validate or the state's columns have different lengths.
    pub fn from_state(state: ParticleState, params: GasParameters) -> Result<Self> {
        params.validate()?;
        state.check_columns()?;

        let reactor = if state.is_reactive() {
            Some(ProximityReactor::new(
                params.threshold_distance,
                params.neighbor_search,
            ))
        } else {
            None
        };

        Ok(GasSimulation {
            state,
            bonds: BondSet::new(),
            changes: BondChanges::default(),
            params,
            reactor,
            frame: 0,
        })
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    pub fn bonds(&self) -> &BondSet {
        &self.bonds
    }

    /// The bond changes produced by the last tick.
    pub fn changes(&self) -> &BondChanges {
        &self.changes
    }

    pub fn params(&self) -> &GasParameters {
        &self.params
    }

    /// Advances the simulation by one tick and returns the new frame.
    pub fn tick(&mut self) -> Snapshot {
        integrator::step(&mut self.state, self.params.dt_scale);

        if let Some(reactor) = &self.reactor {
            let bonds = reactor.react(&mut self.state, &self.bonds);
            self.changes = bonds.changes_since(&self.bonds);
            self.bonds = bonds;
        }

        self.frame += 1;

        tracing::trace!(
            frame = self.frame,
            bonds = self.bonds.len(),
            formed = self.changes.formed.len(),
            broken = self.changes.broken.len(),
            "tick"
        );

        self.snapshot()
    }

    /// The current frame, without advancing.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            positions: self.state.positions.clone(),
            categories: self.state.categories.clone(),
            bonded_pairs: self.bonds.to_vec(),
            average_mass: self.average_mass(),
        }
    }
}
