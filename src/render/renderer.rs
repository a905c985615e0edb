//! Owned pixel storage.
//!
//! Provides the [`Renderer`] struct which owns the color buffer the pipeline
//! draws into and hands it to the host for presentation.

use super::framebuffer::FrameBuffer;
use crate::colors;

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BACKGROUND; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// The ARGB8888 pixels, row-major.
    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// The pixels as bytes in native endianness, ready for an ARGB8888 texture.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: u32 has no padding and u8 has alignment 1; the length covers
        // exactly the same allocation.
        unsafe {
            std::slice::from_raw_parts(
                self.color_buffer.as_ptr() as *const u8,
                self.color_buffer.len() * 4,
            )
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }
}
