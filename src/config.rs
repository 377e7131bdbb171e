//! Configuration handling for raster-canvas
//!
//! Everything has a built-in default; a config file only needs to name the
//! fields it wants to change. The file lives at
//! `<config dir>/raster-canvas/config.toml` and is never written by the app.

use crate::error::Error;
use crate::tool::Mode;
use crate::types::rgb;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

/// Stroke colors and widths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub line: [u8; 3],
    pub rectangle: [u8; 3],
    pub circle: [u8; 3],
    pub freehand: [u8; 3],
    /// Width of shapes committed to the canvas
    pub stroke_width: u32,
    /// Width of the live preview while dragging
    pub preview_width: u32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line: [255, 0, 0],
            rectangle: [255, 128, 0],
            circle: [0, 255, 0],
            freehand: [50, 50, 50],
            stroke_width: 2,
            preview_width: 1,
        }
    }
}

impl StyleConfig {
    /// Packed 0x00RRGGBB color for shapes drawn in `mode`.
    pub fn color_for(&self, mode: Mode) -> u32 {
        let [r, g, b] = match mode {
            Mode::Line => self.line,
            Mode::Rectangle => self.rectangle,
            Mode::Circle => self.circle,
            Mode::Freehand => self.freehand,
        };
        rgb(r, g, b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    pub width: usize,
    pub height: usize,
    /// Where "save" writes the canvas; the extension picks the format
    pub save_path: PathBuf,
    /// Frame cap; also bounds how long each loop iteration waits for input
    pub target_fps: usize,
    pub style: StyleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Canvas".to_string(),
            width: 960,
            height: 540,
            save_path: PathBuf::from("canvas_saida.png"),
            target_fps: 50,
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the configuration file
    pub fn config_path() -> PathBuf {
        let config_dir = match dirs::config_dir() {
            Some(dir) => dir.join("raster-canvas"),
            None => PathBuf::from(".config/raster-canvas"),
        };
        config_dir.join("config.toml")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, Error> {
        Self::load_from_path(&Self::config_path())
    }

    /// Load from `path`, returning defaults if the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self, Error> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let config: Self = toml::from_str(&content).map_err(|source| Error::ConfigParse {
                    path: path.to_path_buf(),
                    source,
                })?;
                log::info!("Loaded config from {}", path.display());
                Ok(config.sanitized())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}; using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(Error::ConfigRead { path: path.to_path_buf(), source }),
        }
    }

    // Zero sizes would give an empty window and a zero-length buffer.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.width == 0 || self.height == 0 {
            log::warn!(
                "Config size {}x{} is empty; using {}x{}",
                self.width, self.height, defaults.width, defaults.height
            );
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if self.target_fps == 0 {
            self.target_fps = defaults.target_fps;
        }
        self.style.stroke_width = self.style.stroke_width.max(1);
        self.style.preview_width = self.style.preview_width.max(1);
        self
    }
}
