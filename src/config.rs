// Centralized configuration for simulation parameters

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ====================
// Physical Parameters
// ====================
/// Particles per unit area; the domain grows with N to hold this constant.
pub const DENSITY: f32 = 0.0005;
/// Particle mass.
pub const MASS: f32 = 0.01;
/// Interaction radius; also the cell side length of the spatial grid.
pub const CUTOFF: f32 = 0.01;
/// Integration timestep.
pub const DT: f32 = 0.0005;

// ====================
// Run Parameters
// ====================
pub const NSTEPS: usize = 1000; // Steps per run
pub const SAVEFREQ: usize = 10; // Snapshot cadence in steps
pub const DEFAULT_PARTICLE_COUNT: usize = 1000;

// ====================
// Sanity Thresholds
// ====================
/// A healthy run keeps the minimum pair distance above this fraction of
/// the cutoff; typical values are 0.7-0.8.
pub const MIN_DISTANCE_WARN: f32 = 0.4;
/// The mean interaction distance sits near 0.95 cutoff when particles
/// interact correctly and near 0.66 when they do not.
pub const AVG_DISTANCE_WARN: f32 = 0.8;

fn default_density() -> f32 {
    DENSITY
}

fn default_mass() -> f32 {
    MASS
}

fn default_cutoff() -> f32 {
    CUTOFF
}

fn default_dt() -> f32 {
    DT
}

fn default_nsteps() -> usize {
    NSTEPS
}

fn default_savefreq() -> usize {
    SAVEFREQ
}

/// Runtime simulation parameters, loadable from a TOML file. Every field
/// falls back to the compile-time default when omitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimParams {
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default = "default_mass")]
    pub mass: f32,
    #[serde(default = "default_cutoff")]
    pub cutoff: f32,
    #[serde(default = "default_dt")]
    pub dt: f32,
    #[serde(default = "default_nsteps")]
    pub nsteps: usize,
    #[serde(default = "default_savefreq")]
    pub savefreq: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            density: DENSITY,
            mass: MASS,
            cutoff: CUTOFF,
            dt: DT,
            nsteps: NSTEPS,
            savefreq: SAVEFREQ,
        }
    }
}

impl SimParams {
    /// Floor on pair distances inside the force law.
    pub fn min_r(&self) -> f32 {
        self.cutoff / 100.0
    }

    /// Side length of the square domain holding `n` particles at the
    /// configured density.
    pub fn domain_size(&self, n: usize) -> f32 {
        (self.density * n as f32).sqrt()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let params: SimParams = toml::from_str(&content)?;
        Ok(params)
    }
}
