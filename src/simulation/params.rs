//! Numerical parameters for a run
//!
//! `Parameters` holds runtime settings:
//! - step size and number of steps,
//! - how often the energy diagnostic runs,
//! - whether non-finite energies are fatal (`Validation::Strict`)

use crate::error::{NbodyError, Result};

pub const DEFAULT_ENERGY_CHECK_INTERVAL: usize = 100;

/// What the engine does when the energy stops being finite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Keep integrating; NaN/inf only shows up in the diagnostics
    #[default]
    Baseline,
    /// Fail with `NbodyError::NonFiniteEnergy`
    Strict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub time_step: f64,               // dt
    pub nb_steps: usize,              // number of steps to run
    pub energy_check_interval: usize, // steps between energy checkpoints
    pub validation: Validation,
}

impl Parameters {
    pub fn new(time_step: f64, nb_steps: usize) -> Self {
        Self {
            time_step,
            nb_steps,
            energy_check_interval: DEFAULT_ENERGY_CHECK_INTERVAL,
            validation: Validation::Baseline,
        }
    }

    /// Enough steps to reach `t_end`: floor(t_end / dt) + 1
    pub fn from_t_end(t_end: f64, time_step: f64) -> Result<Self> {
        check_time_step(time_step)?;
        if !(t_end.is_finite() && t_end >= 0.0) {
            return Err(NbodyError::InvalidParameter(format!(
                "t_end must be finite and non-negative, got {t_end}"
            )));
        }
        let quotient = (t_end / time_step).floor();
        if quotient >= usize::MAX as f64 {
            return Err(NbodyError::InvalidParameter(format!(
                "t_end / time_step = {quotient:e} steps is too many to run"
            )));
        }
        let nb_steps = quotient as usize + 1;
        Ok(Self::new(time_step, nb_steps))
    }

    pub fn with_energy_check_interval(mut self, interval: usize) -> Self {
        self.energy_check_interval = interval;
        self
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_time_step(self.time_step)?;
        if self.energy_check_interval == 0 {
            return Err(NbodyError::InvalidParameter(
                "energy_check_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_time_step(time_step: f64) -> Result<()> {
    if time_step.is_finite() && time_step > 0.0 {
        Ok(())
    } else {
        Err(NbodyError::InvalidParameter(format!(
            "time_step must be finite and positive, got {time_step}"
        )))
    }
}
