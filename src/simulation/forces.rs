//! Force / acceleration kernels for the n-body engine
//!
//! [`Acceleration`] is the seam the engine calls once per step. The only
//! implementation is [`NewtonianGravity`], the direct O(n^2) pairwise sum with
//! unit gravitational constant and no softening.

use crate::simulation::states::NVec3;

/// An acceleration source over the whole particle set.
///
/// Implementations *add* into `out`; the caller hands over a zeroed buffer.
/// They must not depend on anything but `masses` and `positions`.
pub trait Acceleration {
    fn acceleration(&self, masses: &[f64], positions: &[NVec3], out: &mut [NVec3]);
}

/// Newtonian gravity, G = 1, direct sum over unordered pairs.
///
/// Pairs are visited as `i` ascending, then `j > i` ascending, so the
/// floating-point summation order is identical from run to run.
///
/// Coincident particles are not guarded against: `r2 == 0` yields inf/NaN in
/// both particles' accelerations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonianGravity;

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, masses: &[f64], positions: &[NVec3], out: &mut [NVec3]) {
        let n = masses.len();
        debug_assert_eq!(positions.len(), n);
        debug_assert_eq!(out.len(), n);

        for i in 0..n {
            let xi = positions[i]; // position of particle i
            let mi = masses[i]; // mass of particle i

            for j in (i + 1)..n {
                // d points from j to i
                let d = xi - positions[j];
                let r2 = d.dot(&d);

                // |d|^3, the denominator of the inverse-square law in vector form
                let r3 = r2 * r2.sqrt();

                // i is pulled along -d, j along +d (equal and opposite forces)
                out[i] -= (masses[j] / r3) * d;
                out[j] += (mi / r3) * d;
            }
        }
    }
}
