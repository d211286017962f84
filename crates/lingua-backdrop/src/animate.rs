use bevy::prelude::*;

use crate::{
    plugin::BackdropPhase,
    scene::{DriftShape, OrbitLight, ParticleCloud},
};

/// Fixed clock increment per frame.
///
/// The accumulator advances once per frame rather than by wall time, which
/// keeps the motion bounded and makes the whole pass deterministic under
/// test.
pub const CLOCK_STEP: f32 = 0.01;

/// Amplitude of the per-frame positional oscillation.
const DRIFT_AMPLITUDE: f32 = 0.001;

/// Yaw applied to the particle cloud each frame.
const PARTICLE_SPIN: f32 = 0.0005;

/// Monotonically increasing time accumulator for the animation pass.
///
/// Exists only while the backdrop is active; teardown removes it, which is
/// what stops the animation systems for good.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct BackdropClock(pub f32);

/// Run condition for the animation pass: constructed and not disposed.
pub(crate) fn backdrop_active(
    phase: Res<BackdropPhase>,
    clock: Option<Res<BackdropClock>>,
) -> bool {
    *phase == BackdropPhase::Active && clock.is_some()
}

pub(crate) fn advance_clock(mut clock: ResMut<BackdropClock>) {
    clock.0 += CLOCK_STEP;
}

/// Spin every shape by its fixed deltas and apply the bounded oscillating
/// positional offset driven by the shared clock.
pub(crate) fn drift_shapes(
    clock: Res<BackdropClock>,
    mut shapes: Query<(&DriftShape, &mut Transform)>,
) {
    for (shape, mut transform) in &mut shapes {
        transform.rotate_x(shape.spin.x);
        transform.rotate_y(shape.spin.y);
        transform.translation.y += (clock.0 + shape.phase.x).sin() * DRIFT_AMPLITUDE;
        transform.translation.x += (clock.0 + shape.phase.y).cos() * DRIFT_AMPLITUDE;
    }
}

/// Sweep the point light along a circle as a function of the clock.
pub(crate) fn orbit_light(
    clock: Res<BackdropClock>,
    mut lights: Query<(&OrbitLight, &mut Transform)>,
) {
    for (orbit, mut transform) in &mut lights {
        let angle = clock.0 * orbit.angular_speed;
        transform.translation.x = angle.sin() * orbit.radius;
        transform.translation.y = angle.cos() * orbit.radius;
    }
}

pub(crate) fn spin_particles(mut clouds: Query<&mut Transform, With<ParticleCloud>>) {
    for mut transform in &mut clouds {
        transform.rotate_y(PARTICLE_SPIN);
    }
}
