pub mod states;
pub mod params;
pub mod loader;
pub mod forces;
pub mod integrator;
pub mod energy;
pub mod engine;
pub mod scenario;
