//! Writing rendered frames to image files.

use std::path::Path;

use image::{ImageResult, RgbaImage};

use crate::colors;
use crate::render::Renderer;

/// Convert the renderer's ARGB pixels into an RGBA image.
pub fn to_image(renderer: &Renderer) -> RgbaImage {
    let bytes: Vec<u8> = renderer
        .pixels()
        .iter()
        .flat_map(|&argb| colors::to_rgba(argb))
        .collect();
    // The buffer length is width * height * 4 by construction
    RgbaImage::from_raw(renderer.width(), renderer.height(), bytes)
        .unwrap_or_else(|| RgbaImage::new(renderer.width(), renderer.height()))
}

/// Save the current frame; the format follows the file extension.
pub fn save<P: AsRef<Path>>(renderer: &Renderer, path: P) -> ImageResult<()> {
    to_image(renderer).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_keep_their_channels() {
        let mut renderer = Renderer::new(2, 1);
        renderer.as_framebuffer().set_pixel(1, 0, 0xFF70C6A9);
        let img = to_image(&renderer);
        assert_eq!(img.get_pixel(1, 0).0, [0x70, 0xC6, 0xA9, 0xFF]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0xFF]);
    }

    #[test]
    fn saves_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        save(&Renderer::new(8, 8), &path).unwrap();
        let reloaded = image::open(&path).unwrap();
        assert_eq!((reloaded.width(), reloaded.height()), (8, 8));
    }
}
