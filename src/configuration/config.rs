//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, run length and diagnostic period
//! - either `input`, a path to a whitespace-delimited initial-condition file
//!   (relative paths resolve against the YAML file's directory), or
//! - [`BodyConfig`] entries giving each particle inline
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   time_step: 0.001          # dt
//!   t_end: 10.0               # or `nb_steps: 10001`; nb_steps wins if both are set
//!   energy_check_interval: 100
//!   strict: false             # true -> non-finite energy aborts the run
//!
//! bodies:
//!   - m: 1.0
//!     x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, -0.7071067811865476, 0.0 ]
//!   - m: 1.0
//!     x: [  0.5, 0.0, 0.0 ]
//!     v: [  0.0,  0.7071067811865476, 0.0 ]
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::simulation::params::DEFAULT_ENERGY_CHECK_INTERVAL;

fn default_energy_check_interval() -> usize {
    DEFAULT_ENERGY_CHECK_INTERVAL
}

/// Numerical parameters of a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub time_step: f64,            // time step size
    #[serde(default)]
    pub nb_steps: Option<usize>,   // explicit step count
    #[serde(default)]
    pub t_end: Option<f64>,        // end time, converted to a step count
    #[serde(default = "default_energy_check_interval")]
    pub energy_check_interval: usize,
    #[serde(default)]
    pub strict: bool,
}

/// Initial state of a single particle
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub m: f64,      // mass
    pub x: Vec<f64>, // position, 3 components
    pub v: Vec<f64>, // velocity, 3 components
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub input: Option<PathBuf>,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}
