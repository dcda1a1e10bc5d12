use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::UNIT_MASS;
use crate::errors::{GasError, Result};
use crate::util::VecExt;
use crate::{Scalar, Vec3};

/// What kind of particle is being added to a `ParticleState`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Species {
    /// A particle of fixed mass that never reacts.
    Inert { mass: Scalar },
    /// A particle whose mass follows its category.
    Reactive(Category),
}

/// Contains all of the particle data, one column per quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleState {
    /// Upper corner of the box. The lower corner is always the origin.
    pub bounds: Vec3,
    /// Mass of the lightest category, used to re-derive masses after a reaction
    pub unit_mass: Scalar,
    pub positions: Vec<Vec3>,
    /// Not normalized: the magnitude scales how far a particle travels each step.
    pub directions: Vec<Vec3>,
    pub speeds: Vec<Scalar>,
    pub masses: Vec<Scalar>,
    /// `None` for an ideal gas, where particles have no category.
    pub categories: Option<Vec<Category>>,
}

impl ParticleState {
    /// Creates an empty state for inert particles inside a `bounds` sized box.
    pub fn new(bounds: Vec3) -> Result<Self> {
        validate_bounds(bounds)?;
        Ok(Self {
            bounds,
            unit_mass: UNIT_MASS,
            positions: Vec::new(),
            directions: Vec::new(),
            speeds: Vec::new(),
            masses: Vec::new(),
            categories: None,
        })
    }

    /// Creates an empty state for categorized particles inside a `bounds` sized box.
    pub fn reactive(bounds: Vec3) -> Result<Self> {
        Ok(Self {
            categories: Some(Vec::new()),
            ..Self::new(bounds)?
        })
    }

    /// Changes the unit mass used by `Species::Reactive` particles.
    pub fn with_unit_mass(mut self, unit_mass: Scalar) -> Result<Self> {
        if !(unit_mass > 0. && unit_mass.is_finite()) {
            return Err(GasError::InvalidParameter {
                name: "unit_mass",
                value: unit_mass,
            });
        }
        self.unit_mass = unit_mass;
        Ok(self)
    }

    /// Adds a particle. Inert particles can only go into a state made with `new`, reactive ones
    /// only into a state made with `reactive`.
    pub fn add_particle(
        &mut self,
        position: Vec3,
        direction: Vec3,
        speed: Scalar,
        species: Species,
    ) -> Result<()> {
        if !(speed >= 0. && speed.is_finite()) {
            return Err(GasError::InvalidParameter {
                name: "speed",
                value: speed,
            });
        }

        let mass = match (species, &mut self.categories) {
            (Species::Inert { mass }, None) => {
                if !(mass > 0. && mass.is_finite()) {
                    return Err(GasError::InvalidParameter {
                        name: "mass",
                        value: mass,
                    });
                }
                mass
            }
            (Species::Reactive(category), Some(categories)) => {
                categories.push(category);
                category.mass(self.unit_mass)
            }
            _ => return Err(GasError::SpeciesMismatch),
        };

        self.positions.push(position);
        self.directions.push(direction);
        self.speeds.push(speed);
        self.masses.push(mass);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_reactive(&self) -> bool {
        self.categories.is_some()
    }

    /// Sets the category of particle `index` and re-derives its mass.
    ///
    /// Does nothing for an ideal gas.
    pub(crate) fn set_category(&mut self, index: usize, category: Category) {
        if let Some(categories) = &mut self.categories {
            categories[index] = category;
            self.masses[index] = category.mass(self.unit_mass);
        }
    }

    /// Checks that every column holds one entry per particle. The columns are public, so a
    /// state assembled by hand can be ragged.
    pub fn check_columns(&self) -> Result<()> {
        let expected = self.speeds.len();
        let columns = [
            ("positions", self.positions.len()),
            ("directions", self.directions.len()),
            ("masses", self.masses.len()),
            (
                "categories",
                self.categories.as_ref().map_or(expected, Vec::len),
            ),
        ];
        for &(column, found) in columns.iter() {
            if found != expected {
                return Err(GasError::ColumnMismatch {
                    column,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// True if every position lies inside the closed box `[0, bounds]`.
    pub fn all_in_bounds(&self) -> bool {
        self.positions
            .iter()
            .all(|p| p.all_ge(&Vec3::zeros()) && p.all_le(&self.bounds))
    }
}

fn validate_bounds(bounds: Vec3) -> Result<()> {
    for (axis, &value) in ['x', 'y', 'z'].iter().zip(bounds.iter()) {
        if !(value > 0. && value.is_finite()) {
            return Err(GasError::InvalidDimension { axis: *axis, value });
        }
    }
    Ok(())
}
