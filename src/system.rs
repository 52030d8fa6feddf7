//! Frame driver: ties the CPU, bus and frame buffer together.
//!
//! Execution is instruction-timed. A scanline is `steps_per_scanline` calls to
//! `CPU::step`, after which the TIA rasterizes that scanline from whatever its
//! registers hold at that moment. A frame is `scanlines_per_frame` scanlines;
//! only those from `first_visible_scanline` onwards that fit in the 192-row
//! frame buffer are drawn.

use crate::trace::TraceSink;
use crate::{AtariBus, ExecutionError, FrameBuffer, TimingConfig, CPU};

/// An Atari 2600 console.
///
/// # Examples
///
/// ```
/// use lib2600::{Atari2600, TimingConfig};
///
/// // Set the background colour, then spin forever
/// let mut rom = vec![0xEA; 4096];
/// rom[..7].copy_from_slice(&[
///     0xA9, 0x84,       // LDA #$84
///     0x85, 0x09,       // STA COLUBK
///     0x4C, 0x04, 0xF0, // JMP $F004
/// ]);
/// rom[0x0FFC] = 0x00;
/// rom[0x0FFD] = 0xF0;
///
/// let mut atari = Atari2600::new(TimingConfig::default());
/// atari.load_rom(&rom);
///
/// let frame = atari.run_frame().unwrap();
/// assert!(frame.pixels().iter().all(|&p| p == 0x84));
/// assert_eq!(atari.frame_count(), 1);
/// ```
pub struct Atari2600 {
    cpu: CPU,
    bus: AtariBus,
    frame: FrameBuffer,
    config: TimingConfig,
    scanline: u32,
    frame_count: u64,
}

impl Atari2600 {
    /// Creates a console with an empty cartridge slot.
    pub fn new(config: TimingConfig) -> Self {
        Self::with_bus(config, AtariBus::new())
    }

    /// Creates a console around a prepared bus, e.g. one built with
    /// [`AtariBus::with_hooks`].
    pub fn with_bus(config: TimingConfig, bus: AtariBus) -> Self {
        Self {
            cpu: CPU::new(),
            bus,
            frame: FrameBuffer::new(),
            config,
            scanline: 0,
            frame_count: 0,
        }
    }

    /// Inserts a cartridge image and resets the console.
    ///
    /// The image is truncated to 4KB or zero-padded up to it. The reset vector
    /// is read from image offsets 0xFFC/0xFFD.
    pub fn load_rom(&mut self, rom: &[u8]) {
        self.bus.load_rom(rom);
        self.reset();
    }

    /// Resets the chips and the CPU, rewinds to scanline 0 and clears the
    /// frame buffer. The cartridge and the frame counter are kept.
    pub fn reset(&mut self) {
        self.bus.reset();
        self.cpu.reset(&self.bus);
        self.scanline = 0;
        self.frame.clear();
    }

    /// Blanks the frame buffer without touching the CPU, the chips or the
    /// scanline counter.
    pub fn clear_frame_buffer(&mut self) {
        self.frame.clear();
    }

    /// Executes one instruction. See [`CPU::step`].
    pub fn step(&mut self) -> Result<u8, ExecutionError> {
        self.cpu.step(&mut self.bus)
    }

    /// Runs one scanline and returns the CPU cycles it took.
    ///
    /// On error the scanline is abandoned: nothing is drawn and the scanline
    /// counter does not move.
    pub fn run_scanline(&mut self) -> Result<u32, ExecutionError> {
        let mut cycles = 0u32;
        for _ in 0..self.config.steps_per_scanline {
            cycles += self.cpu.step(&mut self.bus)? as u32;
        }

        if let Some(row) = self.visible_row() {
            self.bus.tia().draw_scanline(row, &mut self.frame);
        }

        self.scanline += 1;
        if self.scanline >= self.config.scanlines_per_frame {
            self.scanline = 0;
            self.frame_count += 1;
        }

        Ok(cycles)
    }

    /// Runs scanlines until the current frame is complete and returns it.
    ///
    /// Called at scanline 0 this runs a whole frame. A partially drawn frame is
    /// never returned: on error the caller gets only the error.
    pub fn run_frame(&mut self) -> Result<&FrameBuffer, ExecutionError> {
        loop {
            self.run_scanline()?;
            if self.scanline == 0 {
                break;
            }
        }
        Ok(&self.frame)
    }

    fn visible_row(&self) -> Option<usize> {
        let row = self
            .scanline
            .checked_sub(self.config.first_visible_scanline)? as usize;
        (row < FrameBuffer::HEIGHT).then_some(row)
    }

    /// Installs an instruction trace sink on the CPU.
    pub fn set_tracer(&mut self, tracer: impl TraceSink + 'static) {
        self.cpu.set_tracer(Box::new(tracer));
    }

    /// The CPU.
    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    /// Mutable CPU, for seeding registers.
    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    /// The bus and the chips behind it.
    pub fn bus(&self) -> &AtariBus {
        &self.bus
    }

    /// Mutable bus.
    pub fn bus_mut(&mut self) -> &mut AtariBus {
        &mut self.bus
    }

    /// The frame being drawn, or the last complete one after `run_frame`.
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Scanline the next `run_scanline` will execute.
    pub fn scanline(&self) -> u32 {
        self.scanline
    }

    /// Frames completed since construction.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// True once the CPU has halted on an unimplemented opcode.
    pub fn is_halted(&self) -> bool {
        self.cpu.is_halted()
    }

    /// Timing in use.
    pub fn config(&self) -> &TimingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> TimingConfig {
        TimingConfig {
            steps_per_scanline: 2,
            scanlines_per_frame: 4,
            first_visible_scanline: 1,
        }
    }

    fn nop_rom() -> Vec<u8> {
        let mut rom = vec![0xEA; 4096];
        rom[0x0FFC] = 0x00;
        rom[0x0FFD] = 0xF0;
        rom
    }

    #[test]
    fn test_load_rom_resets_cpu() {
        let mut atari = Atari2600::new(TimingConfig::default());
        atari.load_rom(&nop_rom());

        assert_eq!(atari.cpu().pc(), 0xF000);
        assert_eq!(atari.cpu().sp(), 0xFF);
        assert_eq!(atari.scanline(), 0);
    }

    #[test]
    fn test_scanline_counter_wraps_and_counts_frames() {
        let mut atari = Atari2600::new(short_config());
        atari.load_rom(&nop_rom());

        for expected in [1, 2, 3] {
            assert_eq!(atari.run_scanline().unwrap(), 4);
            assert_eq!(atari.scanline(), expected);
            assert_eq!(atari.frame_count(), 0);
        }
        atari.run_scanline().unwrap();
        assert_eq!(atari.scanline(), 0);
        assert_eq!(atari.frame_count(), 1);
    }

    #[test]
    fn test_visible_row_mapping() {
        let mut atari = Atari2600::new(short_config());
        atari.load_rom(&nop_rom());
        atari.bus_mut().tia_mut().write_register(0x09, 0x42);

        // Scanline 0 is above the picture
        atari.run_scanline().unwrap();
        assert!(atari.frame_buffer().row(0).iter().all(|&p| p == 0));

        // Scanline 1 draws row 0
        atari.run_scanline().unwrap();
        assert!(atari.frame_buffer().row(0).iter().all(|&p| p == 0x42));
        assert!(atari.frame_buffer().row(1).iter().all(|&p| p == 0));
    }

    #[test]
    fn test_clear_frame_buffer_keeps_machine_state() {
        // LDA #$84 / STA COLUBK / JMP $F004
        let mut rom = nop_rom();
        rom[..7].copy_from_slice(&[0xA9, 0x84, 0x85, 0x09, 0x4C, 0x04, 0xF0]);
        let mut atari = Atari2600::new(TimingConfig::default());
        atari.load_rom(&rom);
        atari.run_frame().unwrap();
        atari.run_scanline().unwrap();
        assert!(atari.frame_buffer().pixels().iter().all(|&p| p == 0x84));
        assert_eq!(atari.scanline(), 1);

        let pc = atari.cpu().pc();
        let a = atari.cpu().a();
        let status = atari.cpu().status();
        let cycles = atari.cpu().cycles();
        let scanline = atari.scanline();

        atari.clear_frame_buffer();

        assert!(atari.frame_buffer().pixels().iter().all(|&p| p == 0));
        assert_eq!(atari.cpu().pc(), pc);
        assert_eq!(atari.cpu().a(), a);
        assert_eq!(atari.cpu().status(), status);
        assert_eq!(atari.cpu().cycles(), cycles);
        assert_eq!(atari.scanline(), scanline);
        assert_eq!(atari.frame_count(), 1);
        assert_eq!(atari.bus().tia().read_register(0x09), 0x84);

        // Finishing the frame repaints from the unchanged registers
        atari.run_frame().unwrap();
        assert!(atari.frame_buffer().pixels().iter().all(|&p| p == 0x84));
    }

    #[test]
    fn test_halt_stops_scanline() {
        let mut rom = nop_rom();
        rom[2] = 0x02;
        let mut atari = Atari2600::new(short_config());
        atari.load_rom(&rom);

        assert!(atari.run_scanline().is_ok());
        assert_eq!(
            atari.run_scanline(),
            Err(ExecutionError::UnimplementedOpcode {
                opcode: 0x02,
                address: 0xF002
            })
        );
        assert!(atari.is_halted());
        assert_eq!(atari.scanline(), 1);
        assert_eq!(atari.run_frame().err(), Some(ExecutionError::Halted));

        atari.reset();
        assert!(!atari.is_halted());
    }
}
