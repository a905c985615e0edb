//! Viewer configuration.
//!
//! Settings come from built-in defaults, optionally overlaid by a TOML file.
//! Any key missing from the file keeps its default. Command-line flags are
//! applied on top by the binary.
//!
//! ```toml
//! width = 320
//! height = 240
//! model_scale = 50.0
//! color = 11
//! light_direction = [0.0, 0.0, -1.0]
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors::{self, PALETTE_SIZE};
use crate::error::{LoadError, Result};
use crate::light::{DirectionalLight, DEFAULT_AMBIENT};
use crate::math::vec3::Vec3;

/// Automatic rotation per frame, about the horizontal axis.
pub const AUTO_PITCH_PER_FRAME: f32 = 0.01;
/// Automatic rotation per frame, about the vertical axis.
pub const AUTO_YAW_PER_FRAME: f32 = 0.015;
/// Radians of rotation per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f32 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Framebuffer width in pixels.
    pub width: u32,
    /// Framebuffer height in pixels.
    pub height: u32,
    /// Window pixels per framebuffer pixel.
    pub pixel_scale: u32,
    pub fps: u32,
    /// Multiplier applied to every model coordinate.
    pub model_scale: f32,
    /// Palette index of the model.
    pub color: usize,
    /// Palette index of the background.
    pub background: usize,
    pub ambient: f32,
    pub light_direction: [f32; 3],
    pub auto_pitch_speed: f32,
    pub auto_yaw_speed: f32,
    pub drag_sensitivity: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            pixel_scale: 3,
            fps: 60,
            model_scale: 50.0,
            color: 11,
            background: 0,
            ambient: DEFAULT_AMBIENT,
            light_direction: [0.0, 0.0, -1.0],
            auto_pitch_speed: AUTO_PITCH_PER_FRAME,
            auto_yaw_speed: AUTO_YAW_PER_FRAME,
            drag_sensitivity: DRAG_SENSITIVITY,
        }
    }
}

impl ViewerConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LoadError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io(e),
        })?;
        Self::from_toml(&text)
    }

    /// Reject values the renderer cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LoadError::Config(format!(
                "screen size {}x{} must be non-zero",
                self.width, self.height
            )));
        }
        if self.pixel_scale == 0 || self.fps == 0 {
            return Err(LoadError::Config(
                "pixel_scale and fps must be non-zero".to_string(),
            ));
        }
        for (name, index) in [("color", self.color), ("background", self.background)] {
            if index >= PALETTE_SIZE {
                return Err(LoadError::Config(format!(
                    "{name} {index} is outside the {PALETTE_SIZE}-color palette"
                )));
            }
        }
        if Vec3::from(self.light_direction).try_normalize().is_none() {
            return Err(LoadError::Config(
                "light_direction must be a non-zero vector".to_string(),
            ));
        }
        Ok(())
    }

    pub fn light(&self) -> DirectionalLight {
        DirectionalLight::new(Vec3::from(self.light_direction)).with_ambient(self.ambient)
    }

    pub fn model_color(&self) -> u32 {
        colors::palette(self.color).unwrap_or(colors::FILL)
    }

    pub fn background_color(&self) -> u32 {
        colors::palette(self.background).unwrap_or(colors::BACKGROUND)
    }
}
