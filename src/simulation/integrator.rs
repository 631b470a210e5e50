//! Velocity-Verlet update steps
//!
//! The engine drives a step as:
//! 1. [`advance_positions`] with a(t)
//! 2. recompute a(t + dt) into the other acceleration buffer
//! 3. [`advance_velocities`] with the average of a(t) and a(t + dt)

use super::states::NVec3;

/// x_n+1 = x_n + dt v_n + (dt^2 / 2) a_n
pub fn advance_positions(positions: &mut [NVec3], velocities: &[NVec3], accelerations: &[NVec3], dt: f64) {
    let coef2 = 0.5 * dt * dt;
    for ((x, v), a) in positions.iter_mut().zip(velocities).zip(accelerations) {
        *x += dt * *v + coef2 * *a;
    }
}

/// v_n+1 = v_n + (dt / 2) (a_n + a_n+1)
pub fn advance_velocities(velocities: &mut [NVec3], a_old: &[NVec3], a_new: &[NVec3], dt: f64) {
    let coef = 0.5 * dt;
    for ((v, a0), a1) in velocities.iter_mut().zip(a_old).zip(a_new) {
        *v += coef * (*a0 + *a1);
    }
}
