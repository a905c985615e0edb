//! A CPU-rendered halftone viewer for VRML models.
//!
//! Models are read from the `Coordinate`/`coordIndex` blocks of a VRML 1.0 or
//! 2.0 file, rotated, projected with a simple perspective divide, flat shaded
//! against one directional light and painted back to front as a 4x4 ordered
//! dither of a single palette color. SDL2 is used only to show the result and
//! is behind the default `window` feature; everything else runs headless.
//!
//! # Quick Start
//!
//! ```no_run
//! use halftone::prelude::*;
//!
//! let mut engine = Engine::new(&ViewerConfig::default());
//! engine.load_model_file("teapot.wrl")?;
//! engine.update(&FrameInput { frame: 120, ..Default::default() });
//! engine.render();
//! halftone::snapshot::save(engine.renderer(), "teapot.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod config;
pub mod default_model;
pub mod engine;
pub mod error;
pub mod light;
pub mod math;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod projection;
pub mod render;
pub mod shading;
pub mod snapshot;
pub mod sorting;
pub mod transform;
#[cfg(feature = "window")]
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use config::ViewerConfig;
pub use engine::{Engine, FrameInput, RotationMode};
pub use error::{LoadError, ParseError};
pub use model::{Face, Model};
pub use projection::Projection;
pub use transform::RotationState;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use halftone::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{is_model_path, Engine, FrameInput, RotationMode};
    pub use crate::pipeline::FrameStats;

    // Configuration
    pub use crate::config::ViewerConfig;

    // Model
    pub use crate::error::{LoadError, ParseError};
    pub use crate::model::{Face, Model};

    // Scene
    pub use crate::light::DirectionalLight;
    pub use crate::projection::Projection;
    pub use crate::transform::RotationState;

    // Math
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Window & Input
    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, InputState, Window};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{DitherRasterizer, FrameBuffer, Rasterizer, Triangle};
}
