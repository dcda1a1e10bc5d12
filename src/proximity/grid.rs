use std::collections::HashMap;

use itertools::iproduct;
use na::Vector3;
use smallvec::SmallVec;

use crate::{Scalar, Vec3};

/// Represents a single grid cell. A grid cell contains a list of the particles within it.
///
/// A `SmallVec` is used to prevent unnecessary allocation.
type GridCell = SmallVec<[usize; 4]>;

/// A 3d Coordinate composed of 3 integers. Signed, so particles outside the box still get
/// their own cell.
pub type Coord = Vector3<i64>;

/// Hashed binning grid used to speed up the close-pair search.
///
/// Cells are `cell_size` wide, so any two particles closer than `cell_size` are in the same or
/// adjacent cells. Only occupied cells are stored, so memory follows the particle count rather
/// than the size of the box.
pub struct Grid {
    cells: HashMap<Coord, GridCell>,
    cell_size: Scalar,
}

impl Grid {
    pub fn new(cell_size: Scalar) -> Self {
        Grid {
            cells: HashMap::new(),
            cell_size,
        }
    }

    /// Creates a grid and bins every position into it.
    pub fn from_positions(cell_size: Scalar, positions: &[Vec3]) -> Self {
        let mut grid = Grid::new(cell_size);
        for (index, &position) in positions.iter().enumerate() {
            let coord = grid.position_to_coord(position);
            grid.add_particle(coord, index);
        }
        grid
    }

    pub fn position_to_coord(&self, pos: Vec3) -> Coord {
        // `as` saturates, and NaN goes to 0
        pos.map(|x| (x / self.cell_size).floor() as i64)
    }

    pub fn add_particle(&mut self, coord: Coord, index: usize) {
        self.cells.entry(coord).or_default().push(index);
    }

    /// Number of occupied cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// All particles in the 3x3x3 block of cells around `coord`.
    pub fn get_neighbors(&self, coord: Coord) -> impl Iterator<Item = usize> + Clone + '_ {
        iproduct!(
            coord.x.saturating_sub(1)..=coord.x.saturating_add(1),
            coord.y.saturating_sub(1)..=coord.y.saturating_add(1),
            coord.z.saturating_sub(1)..=coord.z.saturating_add(1)
        )
        .filter_map(move |(x, y, z)| self.cells.get(&Vector3::new(x, y, z)))
        .flat_map(|cell| cell.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binning() {
        let grid = Grid::new(0.1);

        assert_eq!(
            grid.position_to_coord(Vec3::new(0.05, 0.15, 0.25)),
            Vector3::new(0, 1, 2)
        );
        assert_eq!(
            grid.position_to_coord(Vec3::new(-0.05, 9.05, 0.15)),
            Vector3::new(-1, 90, 1)
        );
    }

    #[test]
    fn test_neighbors() {
        let positions = vec![
            Vec3::new(0.05, 0.05, 0.05),
            Vec3::new(0.15, 0.05, 0.05),
            Vec3::new(0.95, 0.95, 0.95),
        ];
        let grid = Grid::from_positions(0.1, &positions);
        assert_eq!(grid.len(), 3);

        let mut near_first: Vec<usize> = grid
            .get_neighbors(grid.position_to_coord(positions[0]))
            .collect();
        near_first.sort_unstable();
        assert_eq!(near_first, vec![0, 1]);

        let near_last: Vec<usize> = grid
            .get_neighbors(grid.position_to_coord(positions[2]))
            .collect();
        assert_eq!(near_last, vec![2]);
    }

    #[test]
    fn test_huge_box_only_stores_occupied_cells() {
        let positions = vec![
            Vec3::from_element(1e7),
            Vec3::new(1e7 - 0.05, 1e7, 1e7),
            Vec3::zeros(),
        ];
        let grid = Grid::from_positions(0.1, &positions);
        assert!(grid.len() <= 3);

        let mut near: Vec<usize> = grid
            .get_neighbors(grid.position_to_coord(positions[0]))
            .collect();
        near.sort_unstable();
        assert_eq!(near, vec![0, 1]);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let grid = Grid::from_positions(0.1, &[Vec3::from_element(Scalar::MAX)]);
        let coord = grid.position_to_coord(Vec3::from_element(Scalar::MAX));
        assert_eq!(coord, Vector3::repeat(i64::MAX));
        assert_eq!(grid.get_neighbors(coord).count(), 1);
    }
}
