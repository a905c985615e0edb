//! The render context.
//!
//! The [`Engine`] owns everything that changes between frames: the loaded
//! model, the rotation, the rotation mode, the last pointer position and the
//! status line. The host drives it once per frame with [`Engine::update`]
//! followed by [`Engine::render`], and pushes new model text in through the
//! `load_model_*` methods on the same instance.

use std::f64::consts::TAU;
use std::path::Path;

use log::{info, warn};

use crate::config::ViewerConfig;
use crate::error::{LoadError, ParseError};
use crate::light::DirectionalLight;
use crate::math::vec2::Vec2;
use crate::model::Model;
use crate::pipeline::{self, FrameStats};
use crate::projection::Projection;
use crate::render::Renderer;
use crate::transform::RotationState;

/// How the rotation is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationMode {
    /// Angles follow the frame counter.
    #[default]
    Auto,
    /// Angles follow pointer drags with the primary button held.
    Manual,
}

impl RotationMode {
    pub fn toggled(self) -> Self {
        match self {
            RotationMode::Auto => RotationMode::Manual,
            RotationMode::Manual => RotationMode::Auto,
        }
    }
}

impl std::fmt::Display for RotationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationMode::Auto => write!(f, "Mode: Auto (Right-click)"),
            RotationMode::Manual => write!(f, "Mode: Manual (Drag Left-click)"),
        }
    }
}

/// Host input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer position in framebuffer pixels.
    pub pointer: Vec2,
    /// Primary button is held.
    pub primary_down: bool,
    /// Secondary button went down this frame.
    pub secondary_pressed: bool,
    /// Frames presented since startup.
    pub frame: u64,
}

pub struct Engine {
    renderer: Renderer,
    projection: Projection,
    light: DirectionalLight,
    model: Model,
    rotation: RotationState,
    mode: RotationMode,
    last_pointer: Vec2,
    status: String,
    model_scale: f32,
    color: u32,
    background: u32,
    auto_yaw_speed: f32,
    auto_pitch_speed: f32,
    drag_sensitivity: f32,
}

/// Whether a path names a `.wrl` file (case-insensitive).
pub fn is_model_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wrl"))
}

/// `frame * speed` wrapped into `[0, 2π)` without losing precision on long runs.
fn auto_angle(frame: u64, speed: f32) -> f32 {
    ((frame as f64 * speed as f64) % TAU) as f32
}

impl Engine {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            renderer: Renderer::new(config.width, config.height),
            projection: Projection::new(config.width, config.height),
            light: config.light(),
            model: Model::default(),
            rotation: RotationState::default(),
            mode: RotationMode::default(),
            last_pointer: Vec2::ZERO,
            status: String::new(),
            model_scale: config.model_scale,
            color: config.model_color(),
            background: config.background_color(),
            auto_yaw_speed: config.auto_yaw_speed,
            auto_pitch_speed: config.auto_pitch_speed,
            drag_sensitivity: config.drag_sensitivity,
        }
    }

    // ============ Loading ============

    fn adopt(&mut self, model: Model, source: &str) {
        if model.is_empty() {
            warn!("{source}: no model data");
            self.status = "Parse Error: No model data.".to_string();
        } else {
            info!(
                "{source}: {} vertices, {} faces",
                model.vertices().len(),
                model.faces().len()
            );
            self.status = format!("Loaded: {source}");
        }
        self.model = model;
    }

    /// Parse `text` and replace the current model.
    ///
    /// On a parse error the previous model stays loaded. The outcome is
    /// reflected in [`Engine::status`] either way.
    pub fn load_model_text(&mut self, text: &str, source: &str) -> Result<(), ParseError> {
        match Model::load(text, self.model_scale) {
            Ok(model) => {
                self.adopt(model, source);
                Ok(())
            }
            Err(e) => {
                warn!("{source}: {e}");
                self.status = format!("Error: {e}");
                Err(e)
            }
        }
    }

    /// Read and parse a model file, replacing the current model on success.
    pub fn load_model_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match Model::from_file(path, self.model_scale) {
            Ok(model) => {
                self.adopt(model, &source);
                Ok(())
            }
            Err(e) => {
                warn!("{}: {e}", path.display());
                self.status = match &e {
                    LoadError::NotFound(_) => format!("{source} not found."),
                    other => format!("Error: {other}"),
                };
                Err(e)
            }
        }
    }

    // ============ Frame ============

    /// Advance the rotation for one frame.
    pub fn update(&mut self, input: &FrameInput) {
        if input.secondary_pressed {
            self.mode = self.mode.toggled();
            info!("{}", self.mode);
        }

        match self.mode {
            RotationMode::Auto => {
                self.rotation.set(
                    auto_angle(input.frame, self.auto_yaw_speed),
                    auto_angle(input.frame, self.auto_pitch_speed),
                );
            }
            RotationMode::Manual => {
                if input.primary_down {
                    let delta = input.pointer - self.last_pointer;
                    self.rotation.rotate(
                        delta.x * self.drag_sensitivity,
                        -delta.y * self.drag_sensitivity,
                    );
                }
            }
        }

        self.last_pointer = input.pointer;
    }

    /// Clear the framebuffer and draw the current model.
    pub fn render(&mut self) -> FrameStats {
        self.renderer.clear(self.background);
        let mut fb = self.renderer.as_framebuffer();
        pipeline::render(
            &self.model,
            &self.rotation,
            &self.projection,
            &self.light,
            self.color,
            &mut fb,
        )
    }

    // ============ Accessors ============

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Message from the last load, empty before the first one.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_model::TORUS_WRL;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn engine() -> Engine {
        Engine::new(&ViewerConfig::default())
    }

    fn lit_pixels(engine: &Engine) -> usize {
        let fill = ViewerConfig::default().model_color();
        engine.renderer().pixels().iter().filter(|&&c| c == fill).count()
    }

    #[test]
    fn default_model_loads_and_renders() {
        let mut engine = engine();
        engine.load_model_text(TORUS_WRL, "default").unwrap();
        assert_eq!(engine.status(), "Loaded: default");
        assert!(!engine.status().contains("Error"));

        let stats = engine.render();
        assert_eq!(stats.drawn + stats.excluded.total(), 64);
        assert!(lit_pixels(&engine) > 0);
    }

    #[test]
    fn parse_error_keeps_previous_model() {
        let mut engine = engine();
        engine.load_model_text(TORUS_WRL, "default").unwrap();
        let before = engine.model().clone();

        let err = engine
            .load_model_text("coord Coordinate { point [ 1 2 ] }", "bad.wrl")
            .unwrap_err();
        assert_eq!(err, ParseError::IncompleteVertex { count: 2 });
        assert_eq!(engine.model(), &before);
        assert!(engine.status().starts_with("Error:"));
    }

    #[test]
    fn empty_parse_is_adopted_and_reported() {
        let mut engine = engine();
        engine.load_model_text(TORUS_WRL, "default").unwrap();
        engine.load_model_text("#VRML V2.0 utf8", "empty.wrl").unwrap();
        assert!(engine.model().is_empty());
        assert_eq!(engine.status(), "Parse Error: No model data.");

        let stats = engine.render();
        assert_eq!(stats.drawn, 0);
        assert_eq!(lit_pixels(&engine), 0);
    }

    #[test]
    fn missing_file_is_distinct_from_bad_file() {
        let mut engine = engine();
        let dir = tempfile::tempdir().unwrap();
        let missing = engine.load_model_file(dir.path().join("model.wrl"));
        assert!(matches!(missing, Err(LoadError::NotFound(_))));
        assert_eq!(engine.status(), "model.wrl not found.");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Coordinate3 {{ point [ 1 ] }}").unwrap();
        let bad = engine.load_model_file(file.path());
        assert!(matches!(bad, Err(LoadError::Parse(_))));
        assert!(engine.status().starts_with("Error: Parse error"));
    }

    #[test]
    fn only_wrl_paths_are_models() {
        assert!(is_model_path(Path::new("scene.wrl")));
        assert!(is_model_path(Path::new("/tmp/SCENE.WRL")));
        assert!(!is_model_path(Path::new("scene.obj")));
        assert!(!is_model_path(Path::new("wrl")));
    }

    #[test]
    fn auto_mode_follows_frame_counter() {
        let mut engine = engine();
        engine.update(&FrameInput {
            frame: 100,
            ..Default::default()
        });
        assert_relative_eq!(engine.rotation().pitch(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(engine.rotation().yaw(), 1.5, epsilon = 1e-5);

        // Long runs stay wrapped
        engine.update(&FrameInput {
            frame: 10_000_000,
            ..Default::default()
        });
        assert!(engine.rotation().yaw() < std::f32::consts::TAU);
    }

    #[test]
    fn secondary_button_toggles_mode() {
        let mut engine = engine();
        let press = FrameInput {
            secondary_pressed: true,
            ..Default::default()
        };
        engine.update(&press);
        assert_eq!(engine.mode(), RotationMode::Manual);
        engine.update(&press);
        assert_eq!(engine.mode(), RotationMode::Auto);
    }

    #[test]
    fn manual_drag_accumulates_rotation() {
        let mut engine = engine();
        engine.update(&FrameInput {
            secondary_pressed: true,
            pointer: Vec2::new(100.0, 100.0),
            ..Default::default()
        });
        assert_eq!(engine.rotation(), RotationState::default());

        // Pointer moves with the button held
        engine.update(&FrameInput {
            pointer: Vec2::new(120.0, 90.0),
            primary_down: true,
            frame: 500,
            ..Default::default()
        });
        assert_relative_eq!(engine.rotation().yaw(), 0.2, epsilon = 1e-5);
        assert_relative_eq!(engine.rotation().pitch(), 0.1, epsilon = 1e-5);

        // Released: moving does nothing, but the position is tracked
        engine.update(&FrameInput {
            pointer: Vec2::new(200.0, 200.0),
            ..Default::default()
        });
        engine.update(&FrameInput {
            pointer: Vec2::new(205.0, 200.0),
            primary_down: true,
            ..Default::default()
        });
        assert_relative_eq!(engine.rotation().yaw(), 0.25, epsilon = 1e-5);
        assert_relative_eq!(engine.rotation().pitch(), 0.1, epsilon = 1e-5);
    }
}
