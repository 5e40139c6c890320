//! Configuration system for the Y86-64 simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! simulation run:
//! 1. **Defaults:** Baseline constants (memory capacity, step cap).
//! 2. **Structures:** Hierarchical config for the driver and for memory.
//!
//! Configuration is supplied as JSON (see `Config::from_json`) or via
//! `Config::default()`.

use serde::Deserialize;

use crate::common::constants::{DEFAULT_MAX_STEPS, MEMORY_SIZE};

/// General, driver-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Cap on the number of steps the driver will execute. A policy of the
    /// driver, not the engine: a malformed program that never halts stops
    /// here.
    pub max_steps: u64,
    /// Emit per-stage trace events.
    pub trace: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            trace: false,
        }
    }
}

/// Memory configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Capacity of the flat memory in bytes.
    pub size: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { size: MEMORY_SIZE }
    }
}

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Driver-level settings.
    pub general: GeneralConfig,
    /// Memory settings.
    pub memory: MemoryConfig,
}

impl Config {
    /// Deserializes a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
