//! Core state types for the N-body simulation.
//!
//! Particles are stored as three parallel arrays indexed `0..n`:
//! - `masses`     – fixed once loaded
//! - `positions`  – `NVec3`, advanced by the engine every step
//! - `velocities` – `NVec3`, advanced by the engine every step
//!
//! Accelerations live in [`AccelBuffers`], a pair of buffers that the engine
//! swaps each step instead of reallocating.

use nalgebra::Vector3;

use crate::error::{NbodyError, Result};

pub type NVec3 = Vector3<f64>;

/// A single particle's initial state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub m: f64,   // mass
    pub x: NVec3, // position
    pub v: NVec3, // velocity
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleSet {
    pub(crate) masses: Vec<f64>,
    pub(crate) positions: Vec<NVec3>,
    pub(crate) velocities: Vec<NVec3>,
}

impl ParticleSet {
    /// Build a set from parallel arrays, which must all have length n
    pub fn new(masses: Vec<f64>, positions: Vec<NVec3>, velocities: Vec<NVec3>) -> Result<Self> {
        if masses.len() != positions.len() || masses.len() != velocities.len() {
            return Err(NbodyError::Shape {
                masses: masses.len(),
                positions: positions.len(),
                velocities: velocities.len(),
            });
        }
        Ok(Self {
            masses,
            positions,
            velocities,
        })
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            masses: Vec::with_capacity(n),
            positions: Vec::with_capacity(n),
            velocities: Vec::with_capacity(n),
        }
    }

    pub fn from_bodies(bodies: &[Body]) -> Self {
        let mut set = Self::with_capacity(bodies.len());
        for b in bodies {
            set.push(*b);
        }
        set
    }

    /// Append one particle. Only used while loading; n is fixed afterwards.
    pub fn push(&mut self, body: Body) {
        self.masses.push(body.m);
        self.positions.push(body.x);
        self.velocities.push(body.v);
    }

    pub fn len(&self) -> usize {
        self.masses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masses.is_empty()
    }

    pub fn masses(&self) -> &[f64] {
        &self.masses
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.velocities
    }

    pub fn body(&self, i: usize) -> Body {
        Body {
            m: self.masses[i],
            x: self.positions[i],
            v: self.velocities[i],
        }
    }
}

/// Two acceleration buffers of length n, allocated once.
///
/// `current` holds a(t) between steps. During a step the engine calls
/// [`AccelBuffers::swap_and_clear`], so the old a(t) stays readable through
/// [`AccelBuffers::pair`] while a(t + dt) is accumulated into the zeroed one.
#[derive(Debug, Clone)]
pub struct AccelBuffers {
    buffers: [Vec<NVec3>; 2],
    current: usize,
}

impl AccelBuffers {
    pub fn new(n: usize) -> Self {
        Self {
            buffers: [vec![NVec3::zeros(); n], vec![NVec3::zeros(); n]],
            current: 0,
        }
    }

    pub fn current(&self) -> &[NVec3] {
        &self.buffers[self.current]
    }

    pub fn current_mut(&mut self) -> &mut [NVec3] {
        &mut self.buffers[self.current]
    }

    pub fn previous(&self) -> &[NVec3] {
        &self.buffers[1 - self.current]
    }

    /// Make the other buffer current and zero it
    pub fn swap_and_clear(&mut self) {
        self.current = 1 - self.current;
        for a in self.buffers[self.current].iter_mut() {
            *a = NVec3::zeros();
        }
    }

    /// `(old, new)` accelerations, as needed by the velocity update
    pub fn pair(&self) -> (&[NVec3], &[NVec3]) {
        (self.previous(), self.current())
    }
}
