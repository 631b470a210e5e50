//! Initial-condition loader.
//!
//! Input is plain text, one particle per line:
//!
//! ```text
//! mass x y z vx vy vz
//! ```
//!
//! Fields are separated by any run of whitespace. Blank lines are skipped.
//! Any other line must have exactly seven floating-point fields, otherwise the
//! whole load fails with [`NbodyError::Format`]; nothing is partially loaded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{NbodyError, Result};
use crate::simulation::states::{Body, NVec3, ParticleSet};

const FIELDS_PER_RECORD: usize = 7;

pub fn load_from_path(path: &Path) -> Result<ParticleSet> {
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}

pub fn load_from_reader<R: BufRead>(reader: R) -> Result<ParticleSet> {
    let mut particles = ParticleSet::default();
    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = std::str::from_utf8(&bytes).map_err(|err| NbodyError::Format {
            line: idx + 1,
            message: format!("record is not valid UTF-8: {err}"),
        })?;
        if let Some(body) = parse_record(line, idx + 1)? {
            particles.push(body);
        }
    }
    Ok(particles)
}

pub fn load_from_str(text: &str) -> Result<ParticleSet> {
    load_from_reader(text.as_bytes())
}

/// Parse one line; `Ok(None)` for blank lines
fn parse_record(line: &str, line_no: usize) -> Result<Option<Body>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    if tokens.len() != FIELDS_PER_RECORD {
        return Err(NbodyError::Format {
            line: line_no,
            message: format!(
                "expected {FIELDS_PER_RECORD} fields (mass x y z vx vy vz), found {}",
                tokens.len()
            ),
        });
    }

    let mut values = [0.0; FIELDS_PER_RECORD];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = token.parse::<f64>().map_err(|err| NbodyError::Format {
            line: line_no,
            message: format!("cannot parse {token:?} as a number: {err}"),
        })?;
    }

    let [m, x, y, z, vx, vy, vz] = values;
    Ok(Some(Body {
        m,
        x: NVec3::new(x, y, z),
        v: NVec3::new(vx, vy, vz),
    }))
}
