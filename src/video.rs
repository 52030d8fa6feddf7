//! Frame buffer and NTSC palette.
//!
//! The frame buffer holds raw TIA colour register values, one byte per pixel.
//! Hosts turn them into RGB with [`palette::ntsc_rgb`] or
//! [`FrameBuffer::to_rgba`].

/// 160x192 frame of raw TIA colour values, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pixels: Box<[u8]>,
}

impl FrameBuffer {
    /// Visible pixels per scanline.
    pub const WIDTH: usize = 160;
    /// Visible scanlines per frame.
    pub const HEIGHT: usize = 192;

    /// Creates a frame with every pixel 0x00.
    pub fn new() -> Self {
        Self {
            pixels: vec![0; Self::WIDTH * Self::HEIGHT].into_boxed_slice(),
        }
    }

    /// Sets every pixel back to 0x00.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// All pixels, row-major: pixel (x, y) is at `y * 160 + x`.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of 160 pixels.
    ///
    /// # Panics
    ///
    /// Panics if `line` is 192 or more.
    pub fn row(&self, line: usize) -> &[u8] {
        let start = line * Self::WIDTH;
        &self.pixels[start..start + Self::WIDTH]
    }

    /// # Panics
    ///
    /// Panics if the coordinates are outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        assert!(x < Self::WIDTH && y < Self::HEIGHT, "pixel ({x}, {y}) out of range");
        self.pixels[y * Self::WIDTH + x]
    }

    /// # Panics
    ///
    /// Panics if the coordinates are outside the frame.
    pub fn set_pixel(&mut self, x: usize, y: usize, value: u8) {
        assert!(x < Self::WIDTH && y < Self::HEIGHT, "pixel ({x}, {y}) out of range");
        self.pixels[y * Self::WIDTH + x] = value;
    }

    /// Expands the frame to RGBA8 bytes (4 per pixel) through the NTSC
    /// palette.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * 4);
        for &value in self.pixels.iter() {
            let argb = palette::ntsc_rgb(value);
            rgba.extend_from_slice(&[(argb >> 16) as u8, (argb >> 8) as u8, argb as u8, 0xFF]);
        }
        rgba
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("width", &Self::WIDTH)
            .field("height", &Self::HEIGHT)
            .finish_non_exhaustive()
    }
}

/// NTSC colour palette.
pub mod palette {
    /// 16 hues x 8 luminances, 0xAARRGGBB.
    #[rustfmt::skip]
    const NTSC_PALETTE: [u32; 128] = [
        // Hue 0 (grey)
        0xFF000000, 0xFF404040, 0xFF6C6C6C, 0xFF909090, 0xFFB0B0B0, 0xFFC8C8C8, 0xFFDCDCDC, 0xFFECECEC,
        // Hue 1 (gold)
        0xFF444400, 0xFF646410, 0xFF848424, 0xFFA0A034, 0xFFB8B840, 0xFFD0D050, 0xFFE8E85C, 0xFFFCFC68,
        // Hue 2 (orange)
        0xFF702800, 0xFF844414, 0xFF985C28, 0xFFAC783C, 0xFFBC8C4C, 0xFFCCA05C, 0xFFDCB468, 0xFFECC878,
        // Hue 3 (red-orange)
        0xFF841800, 0xFF983418, 0xFFAC5030, 0xFFC06848, 0xFFD0805C, 0xFFE09470, 0xFFECA880, 0xFFFCBC94,
        // Hue 4 (red)
        0xFF880000, 0xFF9C2020, 0xFFB03C3C, 0xFFC05858, 0xFFD07070, 0xFFE08888, 0xFFECA0A0, 0xFFFCB4B4,
        // Hue 5 (magenta)
        0xFF78005C, 0xFF8C2074, 0xFFA03C88, 0xFFB0589C, 0xFFC070B0, 0xFFD084C0, 0xFFDC9CD0, 0xFFECB0E0,
        // Hue 6 (purple)
        0xFF480078, 0xFF602090, 0xFF783CA4, 0xFF8C58B8, 0xFFA070CC, 0xFFB484DC, 0xFFC49CEC, 0xFFD4B0FC,
        // Hue 7 (violet)
        0xFF140084, 0xFF302098, 0xFF4C3CAC, 0xFF6858C0, 0xFF7C70D0, 0xFF9488E0, 0xFFA8A0EC, 0xFFBCB4FC,
        // Hue 8 (blue)
        0xFF000088, 0xFF1C209C, 0xFF3840B0, 0xFF505CC0, 0xFF6874D0, 0xFF7C8CE0, 0xFF90A4EC, 0xFFA4B8FC,
        // Hue 9 (light blue)
        0xFF00187C, 0xFF1C3890, 0xFF3854A8, 0xFF5070BC, 0xFF6888CC, 0xFF7C9CDC, 0xFF90B4EC, 0xFFA4C8FC,
        // Hue 10 (cyan)
        0xFF002C5C, 0xFF1C4C78, 0xFF386890, 0xFF5084AC, 0xFF689CC0, 0xFF7CB4D4, 0xFF90CCE8, 0xFFA4E0FC,
        // Hue 11 (teal)
        0xFF003C2C, 0xFF1C5C48, 0xFF387C64, 0xFF509C80, 0xFF68B494, 0xFF7CD0AC, 0xFF90E4C0, 0xFFA4FCD4,
        // Hue 12 (green)
        0xFF003C00, 0xFF205C20, 0xFF407C40, 0xFF5C9C5C, 0xFF74B474, 0xFF8CD08C, 0xFFA4E4A4, 0xFFB8FCB8,
        // Hue 13 (yellow-green)
        0xFF143800, 0xFF345C1C, 0xFF507C38, 0xFF6C9850, 0xFF84B468, 0xFF9CCC7C, 0xFFB4E490, 0xFFC8FCA4,
        // Hue 14 (olive)
        0xFF2C3000, 0xFF4C501C, 0xFF687034, 0xFF848C4C, 0xFF9CA864, 0xFFB4C078, 0xFFCCD488, 0xFFE0EC9C,
        // Hue 15 (brown)
        0xFF442800, 0xFF644818, 0xFF846830, 0xFFA08444, 0xFFB89C58, 0xFFD0B46C, 0xFFE8CC7C, 0xFFFCE08C,
    ];

    /// Maps a colour register value to 0xAARRGGBB (alpha always 0xFF).
    ///
    /// Bits 7..4 select the hue and bits 3..1 the luminance; bit 0 is not
    /// wired on the TIA and is ignored.
    ///
    /// ```
    /// use lib2600::palette::ntsc_rgb;
    ///
    /// assert_eq!(ntsc_rgb(0x00), 0xFF000000);
    /// assert_eq!(ntsc_rgb(0x0E), 0xFFECECEC);
    /// assert_eq!(ntsc_rgb(0x0F), ntsc_rgb(0x0E));
    /// ```
    pub fn ntsc_rgb(value: u8) -> u32 {
        NTSC_PALETTE[(value >> 1) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_black() {
        let frame = FrameBuffer::new();
        assert_eq!(frame.pixels().len(), 160 * 192);
        assert!(frame.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_pixel_layout_is_row_major() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(3, 2, 0x42);

        assert_eq!(frame.pixels()[2 * 160 + 3], 0x42);
        assert_eq!(frame.row(2)[3], 0x42);
        assert_eq!(frame.pixel(3, 2), 0x42);

        frame.clear();
        assert_eq!(frame.pixel(3, 2), 0x00);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_set_pixel_out_of_range() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(160, 0, 0x00);
    }

    #[test]
    fn test_palette_alpha_always_opaque() {
        for value in 0..=255u8 {
            assert_eq!(palette::ntsc_rgb(value) & 0xFF00_0000, 0xFF00_0000);
        }
    }

    #[test]
    fn test_to_rgba() {
        let mut frame = FrameBuffer::new();
        frame.set_pixel(0, 0, 0x0E);

        let rgba = frame.to_rgba();
        assert_eq!(rgba.len(), 160 * 192 * 4);
        assert_eq!(&rgba[0..4], &[0xEC, 0xEC, 0xEC, 0xFF]);
        assert_eq!(&rgba[4..8], &[0x00, 0x00, 0x00, 0xFF]);
    }
}
