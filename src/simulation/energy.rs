//! Energy and momentum diagnostics.
//!
//! Pure functions over the particle arrays; nothing here mutates state.
//! The potential term visits pairs in the same order as the force kernel.

use super::states::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energies {
    pub total: f64,
    pub kinetic: f64,
    pub potential: f64,
}

/// 0.5 * sum_i m_i |v_i|^2
pub fn kinetic_energy(masses: &[f64], velocities: &[NVec3]) -> f64 {
    0.5 * masses
        .iter()
        .zip(velocities)
        .map(|(m, v)| m * v.norm_squared())
        .sum::<f64>()
}

/// -sum_{i<j} m_i m_j / |x_i - x_j|
pub fn potential_energy(masses: &[f64], positions: &[NVec3]) -> f64 {
    let n = masses.len();
    let mut pe = 0.0;
    for i in 0..n {
        let xi = positions[i];
        let mi = masses[i];
        for j in (i + 1)..n {
            let distance = (xi - positions[j]).norm();
            pe -= (mi * masses[j]) / distance;
        }
    }
    pe
}

pub fn compute_energies(masses: &[f64], positions: &[NVec3], velocities: &[NVec3]) -> Energies {
    let kinetic = kinetic_energy(masses, velocities);
    let potential = potential_energy(masses, positions);
    Energies {
        total: kinetic + potential,
        kinetic,
        potential,
    }
}

/// sum_i m_i v_i, conserved by pairwise-symmetric forces
pub fn total_momentum(masses: &[f64], velocities: &[NVec3]) -> NVec3 {
    masses
        .iter()
        .zip(velocities)
        .fold(NVec3::zeros(), |p, (m, v)| p + *m * *v)
}
