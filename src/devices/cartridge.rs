//! Cartridge ROM.
//!
//! A fixed 4KB window with no bank switching. The 6507 sees it at
//! 0x1000-0x1FFF, which is also where 0xF000-0xFFFF lands after the 13-bit
//! mask, so the reset vector sits at offsets 0xFFC/0xFFD.

use super::Device;

/// Capacity of the cartridge window in bytes.
pub const ROM_SIZE: usize = 4096;

/// Read-only cartridge image.
///
/// `Cartridge` stores the loaded image zero-padded to 4KB. Offsets past the
/// length that was actually loaded read as 0xFF, like the floating data bus of
/// a missing ROM chip. Writes are silently ignored.
///
/// # Examples
///
/// ```rust
/// use lib2600::{Cartridge, Device};
///
/// let mut cart = Cartridge::new();
/// cart.load(&[0xEA, 0xEA, 0xEA]); // Three NOP instructions
///
/// assert_eq!(cart.read(0), 0xEA);
/// assert_eq!(cart.read(3), 0xFF); // past the loaded length
///
/// // Writes are ignored
/// cart.write(0, 0x00);
/// assert_eq!(cart.read(0), 0xEA);
/// ```
pub struct Cartridge {
    image: Box<[u8; ROM_SIZE]>,
    len: usize,
}

impl Cartridge {
    /// Creates an empty cartridge. Every offset reads 0xFF until `load`.
    pub fn new() -> Self {
        Self {
            image: Box::new([0; ROM_SIZE]),
            len: 0,
        }
    }

    /// Replaces the image with `bytes`.
    ///
    /// The window is cleared first, then `min(bytes.len(), 4096)` bytes are
    /// copied to offset 0. Excess bytes are dropped and the remainder stays
    /// zero. No format validation is done.
    ///
    /// Returns the number of bytes loaded.
    pub fn load(&mut self, bytes: &[u8]) -> usize {
        let len = bytes.len().min(ROM_SIZE);
        self.image.fill(0);
        self.image[..len].copy_from_slice(&bytes[..len]);
        self.len = len;
        len
    }

    /// Number of bytes taken from the last `load`.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The full 4KB window, including the zero padding.
    pub fn image(&self) -> &[u8; ROM_SIZE] {
        &self.image
    }
}

impl Default for Cartridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Cartridge {
    fn read(&self, offset: u16) -> u8 {
        let offset = offset as usize;
        if offset < self.len {
            self.image[offset]
        } else {
            0xFF
        }
    }

    fn write(&mut self, _offset: u16, _value: u8) {
        // ROM
    }

    fn size(&self) -> u16 {
        ROM_SIZE as u16
    }
}
