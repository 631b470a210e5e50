//! Error type shared by the loader, parameter validation and the engine.
//!
//! Numerical degeneracy (coincident particles) is *not* an error by default:
//! it shows up as non-finite values in accelerations and energies. Only the
//! opt-in strict validation mode turns it into [`NbodyError::NonFiniteEnergy`].

use std::fmt;

#[derive(Debug)]
pub enum NbodyError {
    /// Reading the initial-condition source failed
    Io(std::io::Error),
    /// Malformed particle record (wrong field count or unparsable token)
    Format { line: usize, message: String },
    /// Parallel particle arrays of different lengths
    Shape { masses: usize, positions: usize, velocities: usize },
    /// Configuration value out of range
    InvalidParameter(String),
    /// Strict mode only: energy became NaN/inf
    NonFiniteEnergy { step: usize, time: f64 },
}

impl fmt::Display for NbodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NbodyError::Io(err) => write!(f, "i/o error: {err}"),
            NbodyError::Format { line, message } => {
                write!(f, "format error on line {line}: {message}")
            }
            NbodyError::Shape { masses, positions, velocities } => write!(
                f,
                "particle arrays differ in length (masses {masses}, positions {positions}, velocities {velocities})"
            ),
            NbodyError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            NbodyError::NonFiniteEnergy { step, time } => {
                write!(f, "non-finite energy at step {step} (t = {time})")
            }
        }
    }
}

impl std::error::Error for NbodyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NbodyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NbodyError {
    fn from(err: std::io::Error) -> Self {
        NbodyError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, NbodyError>;
