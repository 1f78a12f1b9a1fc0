//! Benchmark configuration.
//!
//! Defaults reproduce the reference comparison run. With the `config-file`
//! feature the configuration can be loaded from YAML; precedence is
//! CLI > file > defaults, with the CLI layer applied by the binary.

use crate::error::{Error, Result};
use crate::stability::NumericFormat;

#[cfg(feature = "config-file")]
use std::path::Path;

fn default_radii() -> Vec<i32> {
    vec![10, 25, 50, 75, 100, 150, 200]
}
fn default_iterations() -> u32 {
    50_000
}
fn default_revolutions() -> f64 {
    100.0
}
fn default_stability_radii() -> Vec<i32> {
    vec![10, 50, 100, 500, 1000, 5000]
}
fn default_visual_radius() -> i32 {
    20
}
fn default_visual_size() -> u32 {
    50
}
fn default_canvas_scale() -> u32 {
    3
}

/// Settings for a benchmark and report run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config-file", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config-file", serde(default))]
pub struct BenchConfig {
    /// Radii to time every generator at.
    pub radii: Vec<i32>,
    /// Timed iterations per (generator, radius) pair.
    pub iterations: u32,
    /// Revolutions for each stability run.
    pub revolutions: f64,
    /// Radii for the stability table.
    pub stability_radii: Vec<i32>,
    /// Radius drawn in the visual comparison.
    pub visual_radius: i32,
    /// Side of the visual comparison canvas.
    pub visual_size: u32,
    /// Benchmark canvases are `canvas_scale * r` cells square.
    pub canvas_scale: u32,
    /// Formats listed in the critical-radius table.
    pub formats: Vec<NumericFormat>,
    /// Also time the full-circle (no symmetry) variants.
    pub full_circle: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            radii: default_radii(),
            iterations: default_iterations(),
            revolutions: default_revolutions(),
            stability_radii: default_stability_radii(),
            visual_radius: default_visual_radius(),
            visual_size: default_visual_size(),
            canvas_scale: default_canvas_scale(),
            formats: NumericFormat::standard(),
            full_circle: false,
        }
    }
}

impl BenchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the benchmark radii.
    #[must_use]
    pub fn radii(mut self, radii: impl Into<Vec<i32>>) -> Self {
        self.radii = radii.into();
        self
    }

    /// Set the timed iterations per run.
    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the revolutions per stability run.
    #[must_use]
    pub fn revolutions(mut self, revolutions: f64) -> Self {
        self.revolutions = revolutions;
        self
    }

    /// Set the stability table radii.
    #[must_use]
    pub fn stability_radii(mut self, radii: impl Into<Vec<i32>>) -> Self {
        self.stability_radii = radii.into();
        self
    }

    /// Set the canvas scale.
    #[must_use]
    pub fn canvas_scale(mut self, scale: u32) -> Self {
        self.canvas_scale = scale;
        self
    }

    /// Include the full-circle variants in the benchmark.
    #[must_use]
    pub fn full_circle(mut self, enabled: bool) -> Self {
        self.full_circle = enabled;
        self
    }

    /// Check the configuration for values no run can use.
    ///
    /// Non-positive radii are allowed; they simply draw nothing.
    pub fn validate(&self) -> Result<()> {
        if self.radii.is_empty() {
            return Err(Error::InvalidConfig("radii must not be empty".to_string()));
        }
        if self.iterations == 0 {
            return Err(Error::InvalidConfig("iterations must be positive".to_string()));
        }
        if !(self.revolutions.is_finite() && self.revolutions > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "revolutions must be positive, got {}",
                self.revolutions
            )));
        }
        if self.canvas_scale == 0 {
            return Err(Error::InvalidConfig("canvas_scale must be positive".to_string()));
        }
        if self.visual_size == 0 {
            return Err(Error::InvalidConfig("visual_size must be positive".to_string()));
        }
        Ok(())
    }

    /// Parse a YAML configuration. Missing fields take their defaults.
    #[cfg(feature = "config-file")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file.
    #[cfg(feature = "config-file")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Serialize to YAML.
    #[cfg(feature = "config-file")]
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
