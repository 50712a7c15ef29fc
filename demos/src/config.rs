// Copyright 2025 the Spyglass Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, ValueEnum};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use spyglass_tiles::GridSpec;
use spyglass_view::{ScreenSize, ViewMode, ViewportSettings};

/// Everything a demo needs to build its world and camera.
///
/// Missing JSON fields fall back to [`SceneConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Tile grid to generate.
    pub grid: GridSpec,
    /// Seed for tile tones.
    pub seed: u64,
    /// Output frame size in pixels.
    pub screen: ScreenSize,
    /// Main camera. When `limits` is unset the grid bounds grown by
    /// `limits_margin` are used.
    pub view: ViewportSettings,
    /// Extra world units around the grid the camera may show.
    pub limits_margin: f64,
    /// Number of frames to simulate.
    pub frames: u32,
    /// Interpolation factor for smoothed camera follow.
    pub follow_smoothing: f64,
    /// Player speed in world units per second.
    pub player_speed: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::centered(50, 50, 32.0),
            seed: 123,
            screen: ScreenSize::new(1000, 600),
            view: ViewportSettings {
                mode: ViewMode::Letterbox,
                region: Rect::new(0.0, 0.0, 400.0, 300.0),
                limits: None,
            },
            limits_margin: 10.0,
            frames: 240,
            follow_smoothing: 0.1,
            player_speed: 200.0,
        }
    }
}

impl SceneConfig {
    /// Parses a scene from JSON text.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("invalid scene JSON")
    }

    /// Reads a scene from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Fitting mode as a command-line value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Show exactly the region, padding the rest.
    Letterbox,
    /// Grow the bounding box to the screen aspect ratio.
    Expand,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Letterbox => Self::Letterbox,
            ModeArg::Expand => Self::Expand,
        }
    }
}

/// Command-line options shared by every demo.
#[derive(Args, Debug, Clone)]
pub struct SceneArgs {
    /// JSON scene file (built-in scene when omitted)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the tile seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the number of simulated frames
    #[arg(short, long)]
    pub frames: Option<u32>,

    /// Override the output width in pixels
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Override the output height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Override the fitting mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Outline the region rect on every frame
    #[arg(long)]
    pub debug: bool,

    /// Where to write the final frame
    #[arg(short, long, default_value = "frame.png")]
    pub out: PathBuf,
}

impl SceneArgs {
    /// Loads the configured scene and applies command-line overrides.
    pub fn scene(&self) -> anyhow::Result<SceneConfig> {
        let mut scene = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };
        if let Some(seed) = self.seed {
            scene.seed = seed;
        }
        if let Some(frames) = self.frames {
            scene.frames = frames;
        }
        if let Some(width) = self.width {
            scene.screen.width = width;
        }
        if let Some(height) = self.height {
            scene.screen.height = height;
        }
        if let Some(mode) = self.mode {
            scene.view.mode = mode.into();
        }
        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::SceneConfig;
    use spyglass_view::{ScreenSize, ViewMode};

    #[test]
    fn partial_json_keeps_defaults() {
        let text = r#"{ "seed": 7, "screen": { "width": 320, "height": 200 } }"#;
        let scene = SceneConfig::from_json(text).unwrap();
        assert_eq!(scene.seed, 7);
        assert_eq!(scene.screen, ScreenSize::new(320, 200));
        assert_eq!(scene.grid, SceneConfig::default().grid);
        assert_eq!(scene.view.mode, ViewMode::Letterbox);
    }

    #[test]
    fn default_scene_serializes_and_parses_back() {
        let text = serde_json::to_string(&SceneConfig::default()).unwrap();
        assert_eq!(SceneConfig::from_json(&text).unwrap(), SceneConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SceneConfig::from_json("{ \"seed\": \"many\" }").is_err());
    }
}
