use itertools::izip;

use crate::particles::ParticleState;
use crate::util::VecExt;
use crate::{Scalar, Vec3};

/// Advances every particle by one step of size `dt_scale`.
///
/// Particles move along `dt_scale * speed * direction`. A particle whose new position lies
/// outside the box on some axis has that axis of its direction flipped, and is then clamped
/// back onto the wall. There is no overshoot correction: a particle that crosses a wall ends the
/// step sitting on it rather than reflected back inside.
pub fn step(state: &mut ParticleState, dt_scale: Scalar) {
    let bounds = state.bounds;
    let origin = Vec3::zeros();

    for (position, direction, &speed) in izip!(
        &mut state.positions,
        &mut state.directions,
        &state.speeds
    ) {
        *position += dt_scale * speed * *direction;

        for axis in 0..3 {
            if position[axis] < 0. || position[axis] > bounds[axis] {
                direction[axis] = -direction[axis];
            }
        }

        *position = position.component_clamp(&origin, &bounds);
    }
}
