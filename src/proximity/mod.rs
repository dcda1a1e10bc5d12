//! Bond detection and category reactions between nearby particles.

mod bonds;
pub(crate) mod grid;

pub use bonds::{BondChanges, BondSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::particles::ParticleState;
use crate::util::distance;
use crate::{Scalar, Vec3};
use grid::Grid;

/// How close pairs are found. Both strategies find exactly the same pairs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborSearch {
    /// Checks every pair.
    BruteForce,
    /// Only checks pairs in adjacent cells of a grid with cells as wide as the threshold.
    Grid,
}

impl Default for NeighborSearch {
    fn default() -> Self {
        NeighborSearch::BruteForce
    }
}

#[derive(Debug, Clone)]
pub struct ProximityReactor {
    pub threshold_distance: Scalar,
    pub search: NeighborSearch,
}

impl ProximityReactor {
    pub fn new(threshold_distance: Scalar, search: NeighborSearch) -> Self {
        Self {
            threshold_distance,
            search,
        }
    }

    /// Recomputes the bond set from the current positions and applies the reaction table to
    /// every bonded pair.
    ///
    /// Reactions run for every pair that is within the threshold this tick, not only freshly
    /// formed ones, so a pair that stays close keeps reacting. Pairs are processed in ascending
    /// `(i, j)` order and each reaction is visible to the pairs after it: if particle 0 is bonded
    /// to both 1 and 2, the `(0, 2)` rule sees particle 0's category as left by `(0, 1)`.
    ///
    /// `previous` is only used to report newly formed bonds.
    pub fn react(&self, state: &mut ParticleState, previous: &BondSet) -> BondSet {
        let bonds: BondSet = self.close_pairs(&state.positions).into_iter().collect();

        for (i, j) in bonds.iter() {
            if !previous.contains(i, j) {
                tracing::debug!(
                    i,
                    j,
                    left = ?state.categories.as_ref().map(|c| c[i]),
                    right = ?state.categories.as_ref().map(|c| c[j]),
                    left_position = ?state.positions[i].as_slice(),
                    right_position = ?state.positions[j].as_slice(),
                    "bond formed"
                );
            }

            let reaction = state
                .categories
                .as_ref()
                .and_then(|categories| Category::react(categories[i], categories[j]));

            if let Some((left, right)) = reaction {
                state.set_category(i, left);
                state.set_category(j, right);
            }
        }

        bonds
    }

    /// All pairs `(i, j)`, `i < j`, closer than the threshold, in ascending order.
    pub fn close_pairs(&self, positions: &[Vec3]) -> Vec<(usize, usize)> {
        let mut pairs = match self.search {
            NeighborSearch::BruteForce => self.close_pairs_brute_force(positions),
            NeighborSearch::Grid => self.close_pairs_grid(positions),
        };
        pairs.sort_unstable();
        pairs
    }

    fn close_pairs_brute_force(&self, positions: &[Vec3]) -> Vec<(usize, usize)> {
        let threshold = self.threshold_distance;
        (0..positions.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                (i + 1..positions.len())
                    .filter(move |&j| distance(&positions[i], &positions[j]) < threshold)
                    .map(move |j| (i, j))
            })
            .collect()
    }

    fn close_pairs_grid(&self, positions: &[Vec3]) -> Vec<(usize, usize)> {
        let threshold = self.threshold_distance;
        let grid = Grid::from_positions(threshold, positions);

        (0..positions.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                grid.get_neighbors(grid.position_to_coord(positions[i]))
                    .filter(move |&j| j > i)
                    .filter(move |&j| distance(&positions[i], &positions[j]) < threshold)
                    .map(move |j| (i, j))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
