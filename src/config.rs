use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;
use crate::cli::Cli;
use crate::core::{InteractionController, DEFAULT_IMPACT_THRESHOLD};
use crate::math::Color;
use crate::render::SceneGraph;
use crate::scene::{GridLayout, ObjectRegistry, Stage};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Material color of freshly created boxes
    pub default: Color,
    /// Color a box takes when clicked
    pub selected: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            default: ObjectRegistry::<SceneGraph>::DEFAULT_COLOR,
            selected: InteractionController::DEFAULT_SELECTED_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub impact_threshold: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            impact_threshold: DEFAULT_IMPACT_THRESHOLD,
        }
    }
}

/// Runtime settings: defaults, then an optional JSON file, then CLI flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub grid: GridLayout,
    pub stage: Stage,
    pub colors: ColorConfig,
    pub audio: AudioConfig,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                info!("Loading config: {}", path.display());
                Self::load(path)?
            }
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(threshold) = cli.impact_threshold {
            self.audio.impact_threshold = threshold;
        }
        if let Some(counts) = cli.grid {
            self.grid.counts = counts.0;
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }
}
