//! Build runnable scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Scenario`]:
//! validated runtime `Parameters` plus the initial `ParticleSet`, loaded
//! either from the referenced input file or from the inline bodies.

use std::path::Path;

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::error::{NbodyError, Result};
use crate::simulation::engine::Engine;
use crate::simulation::loader::load_from_path;
use crate::simulation::params::{Parameters, Validation};
use crate::simulation::states::{Body, NVec3, ParticleSet};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: Parameters,
    pub particles: ParticleSet,
}

impl Scenario {
    /// `base_dir` is where a relative `input` path is resolved from
    pub fn build_scenario(cfg: ScenarioConfig, base_dir: &Path) -> Result<Self> {
        let parameters = build_parameters(&cfg.parameters)?;

        let particles = match &cfg.input {
            Some(input) => load_from_path(&base_dir.join(input))?,
            None => {
                let bodies = cfg
                    .bodies
                    .iter()
                    .enumerate()
                    .map(|(i, bc)| build_body(i, bc))
                    .collect::<Result<Vec<Body>>>()?;
                ParticleSet::from_bodies(&bodies)
            }
        };

        Ok(Self { parameters, particles })
    }

    pub fn into_engine(self) -> Result<Engine> {
        Engine::new(self.particles, self.parameters)
    }
}

fn build_parameters(p_cfg: &ParametersConfig) -> Result<Parameters> {
    let parameters = match (p_cfg.nb_steps, p_cfg.t_end) {
        (Some(nb_steps), _) => Parameters::new(p_cfg.time_step, nb_steps),
        (None, Some(t_end)) => Parameters::from_t_end(t_end, p_cfg.time_step)?,
        (None, None) => {
            return Err(NbodyError::InvalidParameter(
                "scenario needs either nb_steps or t_end".to_string(),
            ))
        }
    };

    let validation = if p_cfg.strict {
        Validation::Strict
    } else {
        Validation::Baseline
    };
    let parameters = parameters
        .with_energy_check_interval(p_cfg.energy_check_interval)
        .with_validation(validation);
    parameters.validate()?;
    Ok(parameters)
}

fn build_body(index: usize, bc: &BodyConfig) -> Result<Body> {
    Ok(Body {
        m: bc.m,
        x: vec3(index, "x", &bc.x)?,
        v: vec3(index, "v", &bc.v)?,
    })
}

fn vec3(index: usize, field: &str, values: &[f64]) -> Result<NVec3> {
    match values {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(NbodyError::InvalidParameter(format!(
            "body {index}: `{field}` needs 3 components, got {}",
            values.len()
        ))),
    }
}
