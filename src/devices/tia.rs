//! TIA (Television Interface Adapter) register bank and scanline rasterizer.
//!
//! The TIA is modelled as a 64-byte register bank at 0x00-0x3F plus a
//! rasterizer that turns the current playfield, colour and sprite-graphics
//! registers into one row of the frame buffer. Beam timing, sprite
//! positioning, missiles, the ball, collisions and audio are not modelled.
//!
//! ## Playfield
//!
//! The 20-bit playfield pattern is assembled from PF0 (upper nibble), PF1 and
//! PF2. Each bit covers four pixels; the left half of the screen shows bits
//! 19..0 in order. The right half repeats them, or mirrors them when bit 0 of
//! CTRLPF is set.

use super::{Device, NoHook, WriteHook};
use crate::video::FrameBuffer;

/// Number of registers in the TIA window.
pub const TIA_SIZE: usize = 64;

/// Player 0 colour.
pub const COLUP0: u16 = 0x06;
/// Player 1 colour.
pub const COLUP1: u16 = 0x07;
/// Playfield colour.
pub const COLUPF: u16 = 0x08;
/// Background colour.
pub const COLUBK: u16 = 0x09;
/// Playfield control; bit 0 reflects the right half.
pub const CTRLPF: u16 = 0x0A;
/// Playfield register 0 (upper nibble used).
pub const PF0: u16 = 0x0D;
/// Playfield register 1.
pub const PF1: u16 = 0x0E;
/// Playfield register 2.
pub const PF2: u16 = 0x0F;
/// Player 0 graphics.
pub const GRP0: u16 = 0x1B;
/// Player 1 graphics.
pub const GRP1: u16 = 0x1C;

const PIXELS_PER_CELL: usize = 4;
const HALF_CELLS: usize = 20;
const GRP0_START: usize = 0;
const GRP1_START: usize = 16;
const SPRITE_WIDTH: usize = 8;

/// TIA register bank.
pub struct Tia {
    registers: [u8; TIA_SIZE],
    hook: Box<dyn WriteHook>,
}

impl Tia {
    /// Creates a TIA with all registers zeroed and no write hook.
    pub fn new() -> Self {
        Self::with_hook(NoHook)
    }

    /// Creates a TIA that reports every register write to `hook`.
    pub fn with_hook(hook: impl WriteHook + 'static) -> Self {
        Self {
            registers: [0; TIA_SIZE],
            hook: Box::new(hook),
        }
    }

    /// Replaces the write hook.
    pub fn set_hook(&mut self, hook: impl WriteHook + 'static) {
        self.hook = Box::new(hook);
    }

    /// Returns the register at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is 64 or more. The bus never produces such offsets.
    pub fn read_register(&self, offset: u16) -> u8 {
        assert!(
            (offset as usize) < TIA_SIZE,
            "TIA register offset 0x{offset:02X} out of range"
        );
        self.registers[offset as usize]
    }

    /// Stores `value` at `offset`, then notifies the write hook.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is 64 or more.
    pub fn write_register(&mut self, offset: u16, value: u8) {
        assert!(
            (offset as usize) < TIA_SIZE,
            "TIA register offset 0x{offset:02X} out of range"
        );
        self.registers[offset as usize] = value;
        self.hook.on_write(offset, value);
    }

    /// Zeroes every register. The hook is kept and not notified.
    pub fn reset(&mut self) {
        self.registers = [0; TIA_SIZE];
    }

    /// Read-only view of the register bank.
    pub fn registers(&self) -> &[u8; TIA_SIZE] {
        &self.registers
    }

    /// The 20-bit playfield pattern: PF0 bits 7..4 land in bits 19..16, PF1 in
    /// bits 15..8 and PF2 in bits 7..0.
    pub fn playfield_pattern(&self) -> u32 {
        let pf0 = (self.registers[PF0 as usize] >> 4) as u32;
        let pf1 = self.registers[PF1 as usize] as u32;
        let pf2 = self.registers[PF2 as usize] as u32;
        (pf0 << 16) | (pf1 << 8) | pf2
    }

    fn playfield_bit(pattern: u32, cell: usize, reflect: bool) -> bool {
        let index = if cell < HALF_CELLS {
            cell
        } else if reflect {
            (HALF_CELLS - 1) - (cell - HALF_CELLS)
        } else {
            cell - HALF_CELLS
        };
        pattern & (1 << (19 - index)) != 0
    }

    /// Renders scanline `line` into `frame` from the current register values.
    ///
    /// Each pixel gets COLUPF where the playfield bit is set and COLUBK
    /// elsewhere. GRP0 then overlays pixels 0-7 in COLUP0 and GRP1 overlays
    /// pixels 16-23 in COLUP1, most significant bit leftmost.
    ///
    /// Lines outside the visible area (192 and up) are ignored.
    pub fn draw_scanline(&self, line: usize, frame: &mut FrameBuffer) {
        if line >= FrameBuffer::HEIGHT {
            return;
        }

        let pattern = self.playfield_pattern();
        let reflect = self.registers[CTRLPF as usize] & 0x01 != 0;
        let playfield = self.registers[COLUPF as usize];
        let background = self.registers[COLUBK as usize];
        let grp0 = self.registers[GRP0 as usize];
        let grp1 = self.registers[GRP1 as usize];

        for x in 0..FrameBuffer::WIDTH {
            let cell = x / PIXELS_PER_CELL;
            let mut colour = if Self::playfield_bit(pattern, cell, reflect) {
                playfield
            } else {
                background
            };

            if (GRP0_START..GRP0_START + SPRITE_WIDTH).contains(&x)
                && grp0 & (0x80 >> (x - GRP0_START)) != 0
            {
                colour = self.registers[COLUP0 as usize];
            }
            if (GRP1_START..GRP1_START + SPRITE_WIDTH).contains(&x)
                && grp1 & (0x80 >> (x - GRP1_START)) != 0
            {
                colour = self.registers[COLUP1 as usize];
            }

            frame.set_pixel(x, line, colour);
        }
    }
}

impl Default for Tia {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Tia {
    fn read(&self, offset: u16) -> u8 {
        self.read_register(offset)
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.write_register(offset, value);
    }

    fn size(&self) -> u16 {
        TIA_SIZE as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(frame: &FrameBuffer, line: usize) -> Vec<u8> {
        frame.row(line).to_vec()
    }

    #[test]
    fn test_register_round_trip() {
        let mut tia = Tia::new();
        for offset in 0..TIA_SIZE as u16 {
            tia.write_register(offset, offset as u8 ^ 0xA5);
        }
        for offset in 0..TIA_SIZE as u16 {
            assert_eq!(tia.read_register(offset), offset as u8 ^ 0xA5);
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_read_panics() {
        let tia = Tia::new();
        tia.read_register(0x40);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_write_panics() {
        let mut tia = Tia::new();
        tia.write_register(0x40, 0x00);
    }

    #[test]
    fn test_reset_zeroes_registers() {
        let mut tia = Tia::new();
        tia.write_register(COLUBK, 0x42);
        tia.reset();
        assert_eq!(tia.read_register(COLUBK), 0x00);
    }

    #[test]
    fn test_playfield_pattern_packing() {
        let mut tia = Tia::new();
        tia.write_register(PF0, 0xA0);
        tia.write_register(PF1, 0x5A);
        tia.write_register(PF2, 0xC3);
        assert_eq!(tia.playfield_pattern(), 0xA5AC3);

        // Low nibble of PF0 is not part of the pattern
        tia.write_register(PF0, 0x0F);
        assert_eq!(tia.playfield_pattern() >> 16, 0);
    }

    #[test]
    fn test_background_only() {
        let mut tia = Tia::new();
        tia.write_register(COLUBK, 0x84);
        let mut frame = FrameBuffer::new();

        tia.draw_scanline(10, &mut frame);

        assert!(row(&frame, 10).iter().all(|&p| p == 0x84));
        assert!(row(&frame, 9).iter().all(|&p| p == 0x00));
    }

    #[test]
    fn test_first_playfield_cell_is_pf0_bit_7() {
        let mut tia = Tia::new();
        tia.write_register(COLUPF, 0x1E);
        tia.write_register(COLUBK, 0x00);
        tia.write_register(PF0, 0x80);
        let mut frame = FrameBuffer::new();

        tia.draw_scanline(0, &mut frame);

        let pixels = row(&frame, 0);
        assert_eq!(&pixels[0..4], &[0x1E; 4]);
        assert_eq!(&pixels[4..8], &[0x00; 4]);
        // Repeated (not reflected) on the right half
        assert_eq!(&pixels[80..84], &[0x1E; 4]);
        assert_eq!(pixels[159], 0x00);
    }

    #[test]
    fn test_reflected_playfield_mirrors_left_half() {
        let mut tia = Tia::new();
        tia.write_register(COLUPF, 0x1E);
        tia.write_register(PF0, 0x80);
        tia.write_register(CTRLPF, 0x01);
        let mut frame = FrameBuffer::new();

        tia.draw_scanline(0, &mut frame);

        let pixels = row(&frame, 0);
        assert_eq!(&pixels[0..4], &[0x1E; 4]);
        assert_eq!(&pixels[80..84], &[0x00; 4]);
        assert_eq!(&pixels[156..160], &[0x1E; 4]);
    }

    #[test]
    fn test_sprite_overlay_wins_over_playfield() {
        let mut tia = Tia::new();
        tia.write_register(COLUPF, 0x0E);
        tia.write_register(PF0, 0xF0);
        tia.write_register(PF1, 0xFF);
        tia.write_register(COLUP0, 0x44);
        tia.write_register(COLUP1, 0x88);
        tia.write_register(GRP0, 0b1000_0001);
        tia.write_register(GRP1, 0b0100_0000);
        let mut frame = FrameBuffer::new();

        tia.draw_scanline(5, &mut frame);

        let pixels = row(&frame, 5);
        assert_eq!(pixels[0], 0x44);
        assert_eq!(pixels[1], 0x0E);
        assert_eq!(pixels[7], 0x44);
        assert_eq!(pixels[16], 0x0E);
        assert_eq!(pixels[17], 0x88);
        assert_eq!(pixels[24], 0x0E);
    }

    #[test]
    fn test_line_past_visible_area_is_ignored() {
        let mut tia = Tia::new();
        tia.write_register(COLUBK, 0x84);
        let mut frame = FrameBuffer::new();

        tia.draw_scanline(FrameBuffer::HEIGHT, &mut frame);

        assert!(frame.pixels().iter().all(|&p| p == 0x00));
    }
}
