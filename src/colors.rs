//! The fixed 16-color palette, in ARGB8888.
//!
//! Faces are drawn in one solid palette entry each; shading comes only from
//! the dither density, never from mixing colors.

pub const PALETTE_SIZE: usize = 16;

pub const PALETTE: [u32; PALETTE_SIZE] = [
    0xFF000000, // 0 black
    0xFF2B335F, // 1 navy
    0xFF7E2072, // 2 purple
    0xFF19959C, // 3 teal
    0xFF8B4852, // 4 brown
    0xFF395C98, // 5 dark blue
    0xFFA9C1FF, // 6 light blue
    0xFFEEEEEE, // 7 white
    0xFFD4186C, // 8 red
    0xFFD38441, // 9 orange
    0xFFE9C35B, // 10 yellow
    0xFF70C6A9, // 11 mint
    0xFF7696DE, // 12 periwinkle
    0xFFA3A3A3, // 13 gray
    0xFFFF9798, // 14 pink
    0xFFEDC7B0, // 15 peach
];

pub const BACKGROUND: u32 = PALETTE[0];
pub const FILL: u32 = PALETTE[11];

/// Palette color for `index`, or `None` past the end of the palette.
pub fn palette(index: usize) -> Option<u32> {
    PALETTE.get(index).copied()
}

/// Split an ARGB8888 color into `[r, g, b, a]` bytes.
#[inline]
pub fn to_rgba(color: u32) -> [u8; 4] {
    let [a, r, g, b] = color.to_be_bytes();
    [r, g, b, a]
}
