//! Pixel output: framebuffer views, the dither pattern and the rasterizer.

pub mod dither;
pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{DitherRasterizer, Rasterizer, Triangle};
pub use renderer::Renderer;
