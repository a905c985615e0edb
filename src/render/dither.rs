//! Ordered (Bayer) dithering.
//!
//! Each pixel gets a fixed threshold from a 4x4 matrix tiled over the screen.
//! A face with brightness `b` lights every pixel whose threshold is below
//! `b`, so a single flat color reads as one of 17 halftone densities and the
//! pattern stays put from frame to frame.

/// 4x4 Bayer matrix, indexed `[y % 4][x % 4]`.
pub const BAYER_MATRIX: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

const LEVELS: f32 = 16.0;

/// Threshold in `[0, 15/16]` for the pixel at (x, y).
#[inline]
pub fn threshold(x: i32, y: i32) -> f32 {
    let row = y.rem_euclid(4) as usize;
    let col = x.rem_euclid(4) as usize;
    BAYER_MATRIX[row][col] as f32 / LEVELS
}

/// Whether a pixel of the given brightness is painted.
#[inline]
pub fn is_lit(x: i32, y: i32, brightness: f32) -> bool {
    brightness > threshold(x, y)
}
