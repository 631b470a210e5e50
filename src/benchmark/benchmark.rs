use std::time::Instant;

use crate::error::Result;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, ParticleSet};

/// Deterministic particle set of size `n`, total mass 1, at rest.
/// Positions are spread over a box of half-width 5 without needing rand.
pub fn make_particles(n: usize) -> ParticleSet {
    let m = 1.0 / n as f64;
    let bodies: Vec<Body> = (0..n)
        .map(|i| {
            let i_f = i as f64;
            Body {
                m,
                x: NVec3::new(
                    (i_f * 0.37).sin() * 5.0,
                    (i_f * 0.13).cos() * 5.0,
                    (i_f * 0.07).sin() * 5.0,
                ),
                v: NVec3::zeros(),
            }
        })
        .collect();
    ParticleSet::from_bodies(&bodies)
}

/// Time one force evaluation for a range of n
pub fn bench_gravity() {
    let ns = [256, 512, 1024, 2048, 4096];

    for n in ns {
        let particles = make_particles(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        NewtonianGravity.acceleration(particles.masses(), particles.positions(), &mut out);

        out.iter_mut().for_each(|a| *a = NVec3::zeros());
        let t0 = Instant::now();
        NewtonianGravity.acceleration(particles.masses(), particles.positions(), &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, force evaluation = {dt_direct:8.6} s");
    }
}

/// Time full engine steps for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_steps() -> Result<()> {
    println!("N,step_ms");

    for n in (256..=4096).step_by(256) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 1024 { 5 } else { 1 };

        // One extra step for warm-up, which also takes the only energy checkpoint
        let parameters = Parameters::new(1.0e-3, steps + 1).with_energy_check_interval(usize::MAX);
        let mut engine = Engine::new(make_particles(n), parameters)?;
        engine.step()?;

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.step()?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
    Ok(())
}
