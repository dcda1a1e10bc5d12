//! Initial particle speeds.
//!
//! This is not a Maxwell-Boltzmann sampler. Speeds are drawn from a normal distribution whose
//! mean and spread come from the thermal speed `sqrt(kB T / m)`, and the whole array is then
//! rescaled so the fastest particle moves at exactly `max_speed`. Real thermal speeds for a
//! nitrogen-ish mass are hundreds of metres per second, which is useless for a box a few
//! metres across, so only the shape of the distribution survives.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::constants::{KB, MAX_SPEED_REDRAWS};
use crate::errors::{GasError, Result};
use crate::Scalar;

/// Mean and standard deviation of the thermal speed distribution at `temperature` for
/// particles of `mass`.
pub fn thermal_speed_parameters(temperature: Scalar, mass: Scalar) -> (Scalar, Scalar) {
    let mean = (2. * KB * temperature / mass).sqrt();
    let std_dev = (KB * temperature / mass).sqrt();
    (mean, std_dev)
}

/// Samples `count` strictly positive speeds, rescaled so their maximum equals `max_speed`.
///
/// Non-positive draws are redrawn, up to `MAX_SPEED_REDRAWS` times per particle.
pub fn sample_speeds<R: Rng + ?Sized>(
    temperature: Scalar,
    mass: Scalar,
    count: usize,
    max_speed: Scalar,
    rng: &mut R,
) -> Result<Vec<Scalar>> {
    check_positive("temperature", temperature)?;
    check_positive("mass", mass)?;
    check_positive("max_speed", max_speed)?;

    let (mean, std_dev) = thermal_speed_parameters(temperature, mass);
    let normal = Normal::new(mean, std_dev).map_err(|_| GasError::InvalidParameter {
        name: "thermal speed std_dev",
        value: std_dev,
    })?;

    sample_rescaled(&normal, count, max_speed, rng)
}

/// Draws `count` speeds from `distribution`, redrawing anything that is not strictly positive
/// (NaN included), then rescales so the fastest equals `max_speed`.
fn sample_rescaled<D, R>(
    distribution: &D,
    count: usize,
    max_speed: Scalar,
    rng: &mut R,
) -> Result<Vec<Scalar>>
where
    D: Distribution<Scalar>,
    R: Rng + ?Sized,
{
    let mut redraws = 0;
    let mut speeds = Vec::with_capacity(count);
    for _ in 0..count {
        let mut speed = distribution.sample(rng);
        let mut attempts = 0;
        while !(speed > 0.) && attempts < MAX_SPEED_REDRAWS {
            speed = distribution.sample(rng);
            attempts += 1;
        }
        if !(speed > 0.) {
            return Err(GasError::DegenerateSampling { max: speed });
        }
        redraws += attempts;
        speeds.push(speed);
    }

    if redraws > 0 {
        tracing::warn!(redraws, "redrew non-positive speed samples");
    }

    if speeds.is_empty() {
        return Ok(speeds);
    }

    let max = speeds.iter().copied().fold(Scalar::NEG_INFINITY, Scalar::max);
    if !(max > 0.) || !max.is_finite() {
        return Err(GasError::DegenerateSampling { max });
    }

    let scale = max_speed / max;
    speeds.iter_mut().for_each(|s| *s *= scale);

    Ok(speeds)
}

fn check_positive(name: &'static str, value: Scalar) -> Result<()> {
    if value > 0. && value.is_finite() {
        Ok(())
    } else {
        Err(GasError::InvalidParameter { name, value })
    }
}
