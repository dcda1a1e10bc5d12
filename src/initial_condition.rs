use rand::{distributions::Uniform, seq::SliceRandom, Rng};
use rand_distr::{Distribution, Normal};

use crate::category::Category;
use crate::errors::{GasError, Result};
use crate::parameters::{GasParameters, Variant};
use crate::particles::{ParticleState, Species};
use crate::velocity::sample_speeds;
use crate::{Scalar, Vec3};

pub trait InitialCondition {
    fn populate<R: Rng + ?Sized>(&self, state: &mut ParticleState, rng: &mut R) -> Result<()>;
}

/// A cloud of particles normally distributed around `center`, moving in random directions.
pub struct GaussianCloud {
    pub num_particles: usize,
    pub center: Vec3,
    pub std_dev: Scalar,
    pub max_speed: Scalar,
    pub temperature: Scalar,
    pub unit_mass: Scalar,
    /// Categories to choose from, or `None` for inert particles of `unit_mass`.
    pub palette: Option<Vec<Category>>,
}

impl GaussianCloud {
    /// The cloud the given parameters describe, centred in the box.
    pub fn from_parameters(params: &GasParameters) -> Self {
        GaussianCloud {
            num_particles: params.num_particles,
            center: params.bounds / 2.,
            std_dev: params.position_std_dev,
            max_speed: params.max_speed,
            temperature: params.temperature,
            unit_mass: params.unit_mass,
            palette: match params.variant {
                Variant::Ideal => None,
                Variant::Reactive => Some(params.palette.clone()),
            },
        }
    }
}

impl InitialCondition for GaussianCloud {
    /// Positions are not clamped into the box; the first integrator step does that.
    fn populate<R: Rng + ?Sized>(&self, state: &mut ParticleState, rng: &mut R) -> Result<()> {
        let n = self.num_particles;

        // speeds are always shaped by the lightest mass, whatever the category
        let speeds = sample_speeds(self.temperature, self.unit_mass, n, self.max_speed, rng)?;

        let mut positions = vec![Vec3::zeros(); n];
        for axis in 0..3 {
            let normal = Normal::new(self.center[axis], self.std_dev).map_err(|_| {
                GasError::InvalidParameter {
                    name: "position_std_dev",
                    value: self.std_dev,
                }
            })?;
            for position in positions.iter_mut() {
                position[axis] = normal.sample(rng);
            }
        }

        let uniform = Uniform::new(-1., 1.);
        let directions: Vec<Vec3> = (0..n)
            .map(|_| Vec3::new(uniform.sample(rng), uniform.sample(rng), uniform.sample(rng)))
            .collect();

        let species: Vec<Species> = match &self.palette {
            None => vec![
                Species::Inert {
                    mass: self.unit_mass
                };
                n
            ],
            Some(palette) => (0..n)
                .map(|_| {
                    palette
                        .choose(rng)
                        .copied()
                        .map(Species::Reactive)
                        .ok_or(GasError::InvalidParameter {
                            name: "palette length",
                            value: 0.,
                        })
                })
                .collect::<Result<_>>()?,
        };

        for (((position, direction), speed), species) in positions
            .into_iter()
            .zip(directions)
            .zip(speeds)
            .zip(species)
        {
            state.add_particle(position, direction, speed, species)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn populated(params: &GasParameters) -> ParticleState {
        let mut state = match params.variant {
            Variant::Ideal => ParticleState::new(params.bounds),
            Variant::Reactive => ParticleState::reactive(params.bounds),
        }
        .unwrap();
        let mut rng = StdRng::seed_from_u64(params.seed);
        GaussianCloud::from_parameters(params)
            .populate(&mut state, &mut rng)
            .unwrap();
        state
    }

    #[test]
    fn test_ideal_cloud() {
        let params = GasParameters::ideal().with_bounds(2., 2., 2.);
        let state = populated(&params);

        assert_eq!(state.len(), 100);
        assert!(state.categories.is_none());
        assert!(state.masses.iter().all(|&m| m == params.unit_mass));
        assert!(state
            .directions
            .iter()
            .all(|d| d.iter().all(|&c| (-1. ..1.).contains(&c))));

        let max = state.speeds.iter().copied().fold(0., Scalar::max);
        assert!((max - 1.).abs() < 1e-12);

        let mean: Vec3 = state.positions.iter().sum::<Vec3>() / state.len() as Scalar;
        assert!((mean - Vec3::from_element(1.)).norm() < 0.1);
    }

    #[test]
    fn test_reactive_cloud() {
        let params = GasParameters::reactive();
        let state = populated(&params);
        let categories = state.categories.as_ref().unwrap();

        assert_eq!(categories.len(), 100);
        assert!(!categories.contains(&Category::Purple));
        for (&category, &mass) in categories.iter().zip(&state.masses) {
            assert_eq!(mass, category.mass(params.unit_mass));
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let params = GasParameters::reactive();
        assert_eq!(populated(&params), populated(&params));

        let mut other = params.clone();
        other.seed = 1;
        assert_ne!(populated(&params).positions, populated(&other).positions);
    }

    #[test]
    fn test_zero_spread() {
        let mut params = GasParameters::ideal();
        params.position_std_dev = 0.;
        let state = populated(&params);
        assert!(state
            .positions
            .iter()
            .all(|&p| p == Vec3::from_element(0.5)));
    }
}
