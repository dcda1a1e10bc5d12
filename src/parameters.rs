use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::constants::*;
use crate::errors::{GasError, Result};
use crate::proximity::NeighborSearch;
use crate::{Scalar, Vec3};

/// Which of the two gas models to simulate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Identical inert particles bouncing around the box.
    Ideal,
    /// Categorized particles that react when they come close to each other.
    Reactive,
}

/// A struct containing all of the high-level parameters for a gas simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasParameters {
    pub variant: Variant,
    /// The size of the box, in meters. The box spans from the origin to `bounds`.
    pub bounds: Vec3,
    pub num_particles: usize,
    /// Temperature used to shape the initial speed distribution, K
    pub temperature: Scalar,
    /// Mass of the lightest particle category, kg
    pub unit_mass: Scalar,
    /// Speed of the fastest particle after sampling
    pub max_speed: Scalar,
    /// Spread of the initial positions around the centre of the box
    pub position_std_dev: Scalar,
    /// Scales how far particles move per tick
    pub dt_scale: Scalar,
    /// Particles closer than this are bonded
    pub threshold_distance: Scalar,
    pub neighbor_search: NeighborSearch,
    /// Categories particles start out with, chosen uniformly
    pub palette: Vec<Category>,
    pub seed: u64,
}

impl GasParameters {
    pub fn ideal() -> Self {
        Self {
            variant: Variant::Ideal,
            max_speed: IDEAL_MAX_SPEED,
            position_std_dev: IDEAL_POSITION_STD_DEV,
            ..Self::reactive()
        }
    }

    pub fn reactive() -> Self {
        Self {
            variant: Variant::Reactive,
            bounds: Vec3::new(1., 1., 1.),
            num_particles: NUM_POINTS,
            temperature: ROOM_TEMPERATURE,
            unit_mass: UNIT_MASS,
            max_speed: REACTIVE_MAX_SPEED,
            position_std_dev: REACTIVE_POSITION_STD_DEV,
            dt_scale: DT_SCALE,
            threshold_distance: THRESHOLD_DISTANCE,
            neighbor_search: NeighborSearch::default(),
            palette: Category::INITIAL.to_vec(),
            seed: 0,
        }
    }

    pub fn with_bounds(mut self, width: Scalar, height: Scalar, depth: Scalar) -> Self {
        self.bounds = Vec3::new(width, height, depth);
        self
    }

    /// Checks every parameter, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        for (axis, &value) in ['x', 'y', 'z'].iter().zip(self.bounds.iter()) {
            if !(value > 0. && value.is_finite()) {
                return Err(GasError::InvalidDimension { axis: *axis, value });
            }
        }

        positive("temperature", self.temperature)?;
        positive("unit_mass", self.unit_mass)?;
        positive("max_speed", self.max_speed)?;
        positive("threshold_distance", self.threshold_distance)?;

        if !(self.position_std_dev >= 0. && self.position_std_dev.is_finite()) {
            return Err(GasError::InvalidParameter {
                name: "position_std_dev",
                value: self.position_std_dev,
            });
        }
        if !self.dt_scale.is_finite() {
            return Err(GasError::InvalidParameter {
                name: "dt_scale",
                value: self.dt_scale,
            });
        }
        if self.variant == Variant::Reactive && self.palette.is_empty() {
            return Err(GasError::InvalidParameter {
                name: "palette length",
                value: 0.,
            });
        }

        Ok(())
    }
}

impl Default for GasParameters {
    fn default() -> Self {
        Self::reactive()
    }
}

fn positive(name: &'static str, value: Scalar) -> Result<()> {
    if value > 0. && value.is_finite() {
        Ok(())
    } else {
        Err(GasError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GasParameters::ideal().validate().is_ok());
        assert!(GasParameters::reactive().validate().is_ok());
        assert_eq!(GasParameters::ideal().max_speed, 1.);
        assert_eq!(GasParameters::reactive().max_speed, 0.5);
    }

    #[test]
    fn test_invalid_dimension() {
        let params = GasParameters::reactive().with_bounds(1., 2., -3.);
        assert_eq!(
            params.validate(),
            Err(GasError::InvalidDimension {
                axis: 'z',
                value: -3.
            })
        );
    }

    #[test]
    fn test_invalid_parameters() {
        let mut params = GasParameters::ideal();
        params.temperature = 0.;
        assert!(params.validate().is_err());

        let mut params = GasParameters::reactive();
        params.palette.clear();
        assert!(params.validate().is_err());

        // an ideal gas never looks at its palette
        let mut params = GasParameters::ideal();
        params.palette.clear();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_json_defaults_fill_in() {
        let params: GasParameters = serde_json::from_str(
            r#"{ "variant": "ideal", "bounds": [2.0, 3.0, 4.0], "seed": 42, "neighbor_search": "grid" }"#,
        )
        .unwrap();

        assert_eq!(params.variant, Variant::Ideal);
        assert_eq!(params.bounds, Vec3::new(2., 3., 4.));
        assert_eq!(params.seed, 42);
        assert_eq!(params.neighbor_search, NeighborSearch::Grid);
        assert_eq!(params.num_particles, NUM_POINTS);
    }

    #[test]
    fn test_json_rejects_unknown_category() {
        let result = serde_json::from_str::<GasParameters>(r#"{ "palette": ["red", "teal"] }"#);
        assert!(result.is_err());
    }
}
