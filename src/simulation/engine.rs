//! Simulation loop
//!
//! [`Engine`] owns the particle arrays and both acceleration buffers for the
//! whole run and advances them with velocity-Verlet for a fixed number of
//! steps. Every `energy_check_interval` steps it evaluates the total energy,
//! logs the drift since the previous checkpoint and records a [`Checkpoint`].

use log::{info, warn};

use crate::error::{NbodyError, Result};
use crate::simulation::energy::compute_energies;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::{advance_positions, advance_velocities};
use crate::simulation::params::{Parameters, Validation};
use crate::simulation::states::{AccelBuffers, NVec3, ParticleSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Initialized,
    StepInProgress,
    Completed,
}

/// One energy diagnostic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub step: usize,  // 0-based index of the step just taken
    pub time: f64,    // simulated time after that step
    pub energy: f64,  // total energy
    pub drift: f64,   // (E - E_prev) / E_prev
}

/// What a finished (or stopped) run reports back
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub energy: f64,  // last computed total energy
    pub energy0: f64, // total energy at t = 0
    pub steps: usize,
    pub time: f64,
    pub checkpoints: Vec<Checkpoint>,
}

impl RunSummary {
    /// (E - E0) / E0 over the whole run
    pub fn relative_drift(&self) -> f64 {
        (self.energy - self.energy0) / self.energy0
    }
}

pub struct Engine<A = NewtonianGravity> {
    parameters: Parameters,
    particles: ParticleSet,
    forces: A,
    accels: AccelBuffers,
    time: f64,
    steps_done: usize,
    energy0: f64,
    energy: f64,
    energy_previous: f64,
    checkpoints: Vec<Checkpoint>,
    state: EngineState,
}

impl Engine<NewtonianGravity> {
    pub fn new(particles: ParticleSet, parameters: Parameters) -> Result<Self> {
        Self::with_forces(particles, parameters, NewtonianGravity)
    }
}

impl<A: Acceleration> Engine<A> {
    /// Validate parameters, compute a(0) and E(0)
    pub fn with_forces(particles: ParticleSet, parameters: Parameters, forces: A) -> Result<Self> {
        parameters.validate()?;

        let mut accels = AccelBuffers::new(particles.len());
        forces.acceleration(&particles.masses, &particles.positions, accels.current_mut());

        let energy0 = compute_energies(&particles.masses, &particles.positions, &particles.velocities).total;
        if !energy0.is_finite() {
            warn!("initial energy is not finite (E0 = {energy0}); check for coincident particles");
            if parameters.validation == Validation::Strict {
                return Err(NbodyError::NonFiniteEnergy { step: 0, time: 0.0 });
            }
        }

        let state = if parameters.nb_steps == 0 {
            EngineState::Completed
        } else {
            EngineState::Initialized
        };

        Ok(Self {
            parameters,
            particles,
            forces,
            accels,
            time: 0.0,
            steps_done: 0,
            energy0,
            energy: energy0,
            energy_previous: energy0,
            checkpoints: Vec::new(),
            state,
        })
    }

    /// Advance by one time step.
    ///
    /// Returns the checkpoint taken after this step, if any. Once all
    /// `nb_steps` have run this is a no-op returning `Ok(None)`.
    pub fn step(&mut self) -> Result<Option<Checkpoint>> {
        if self.state == EngineState::Completed {
            return Ok(None);
        }
        self.state = EngineState::StepInProgress;

        let dt = self.parameters.time_step;

        // x(t + dt) from x, v, a(t)
        advance_positions(
            &mut self.particles.positions,
            &self.particles.velocities,
            self.accels.current(),
            dt,
        );

        // a(t) becomes the old buffer, a(t + dt) goes into the zeroed one
        self.accels.swap_and_clear();
        self.forces.acceleration(
            &self.particles.masses,
            &self.particles.positions,
            self.accels.current_mut(),
        );

        let (a_old, a_new) = self.accels.pair();
        advance_velocities(&mut self.particles.velocities, a_old, a_new, dt);

        self.time += dt;
        let step = self.steps_done;
        self.steps_done += 1;

        let checkpoint = if step % self.parameters.energy_check_interval == 0 {
            Some(self.checkpoint(step)?)
        } else {
            None
        };

        if self.steps_done == self.parameters.nb_steps {
            self.state = EngineState::Completed;
        }
        Ok(checkpoint)
    }

    /// Run the remaining steps
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.state != EngineState::Completed {
            self.step()?;
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            energy: self.energy,
            energy0: self.energy0,
            steps: self.steps_done,
            time: self.time,
            checkpoints: self.checkpoints.clone(),
        }
    }

    fn checkpoint(&mut self, step: usize) -> Result<Checkpoint> {
        let energy = compute_energies(
            &self.particles.masses,
            &self.particles.positions,
            &self.particles.velocities,
        )
        .total;
        let drift = (energy - self.energy_previous) / self.energy_previous;

        info!("t = {:4.2}, E = {:.6}, dE/E = {:+.6e}", self.time, energy, drift);

        if !energy.is_finite() {
            warn!("energy became non-finite at step {step} (t = {})", self.time);
            if self.parameters.validation == Validation::Strict {
                return Err(NbodyError::NonFiniteEnergy { step, time: self.time });
            }
        }

        let checkpoint = Checkpoint {
            step,
            time: self.time,
            energy,
            drift,
        };
        self.energy_previous = energy;
        self.energy = energy;
        self.checkpoints.push(checkpoint);
        Ok(checkpoint)
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn into_particles(self) -> ParticleSet {
        self.particles
    }

    /// a at the current time
    pub fn accelerations(&self) -> &[NVec3] {
        self.accels.current()
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps_done(&self) -> usize {
        self.steps_done
    }

    pub fn energy0(&self) -> f64 {
        self.energy0
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}
