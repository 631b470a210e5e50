pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::NbodyError;

pub use simulation::states::{Body, ParticleSet, AccelBuffers, NVec3};
pub use simulation::params::{Parameters, Validation};
pub use simulation::loader::{load_from_path, load_from_reader, load_from_str};
pub use simulation::forces::{Acceleration, NewtonianGravity};
pub use simulation::integrator::{advance_positions, advance_velocities};
pub use simulation::energy::{compute_energies, kinetic_energy, potential_energy, total_momentum, Energies};
pub use simulation::engine::{Engine, EngineState, Checkpoint, RunSummary};
pub use simulation::scenario::Scenario;

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_steps, make_particles};
