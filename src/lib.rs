//! # Atari 2600 Emulation Core
//!
//! An instruction-timed emulator for the Atari 2600: the 6507 CPU (a 6502 with
//! 13 address lines), the TIA video chip's register bank and scanline
//! rasterizer, and the RIOT's RAM/register bank, all wired together by an
//! address-decoding bus.
//!
//! The crate is headless. It produces a 160×192 frame buffer of raw TIA colour
//! values; presenting it, picking ROM files and playing audio belong to the
//! host application.
//!
//! ## Quick Start
//!
//! ```rust
//! use lib2600::{Atari2600, TimingConfig};
//!
//! // 4KB cartridge of NOPs with the reset vector pointing at $F000
//! let mut rom = vec![0xEA; 4096];
//! rom[0x0FFC] = 0x00;
//! rom[0x0FFD] = 0xF0;
//!
//! let mut atari = Atari2600::new(TimingConfig::default());
//! atari.load_rom(&rom);
//! assert_eq!(atari.cpu().pc(), 0xF000);
//!
//! // One scanline is 76 steps in the default timing model
//! atari.run_scanline().unwrap();
//! assert_eq!(atari.cpu().pc(), 0xF000 + 76);
//! ```
//!
//! ## Architecture
//!
//! - **CPU** never owns memory: `CPU::step` borrows any [`MemoryBus`] for the
//!   duration of one instruction.
//! - **Table-driven decode**: [`OPCODE_TABLE`] maps every opcode byte to its
//!   mnemonic, addressing mode, base cycle cost and handler.
//! - **Bus** ([`AtariBus`]) masks addresses to 13 bits and routes them to the
//!   TIA, RIOT, cartridge or open bus. Chip writes are stored, then reported to
//!   the chip's [`WriteHook`].
//! - **System** ([`Atari2600`]) drives the step / scanline / frame loop.
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and a flat test memory
//! - `bus` - Atari 2600 address decoding
//! - `devices` - TIA, RIOT and cartridge
//! - `opcodes` - Opcode dispatch table
//! - `addressing` - Addressing mode enumerations
//! - `video` - Frame buffer and NTSC palette
//! - `system` - Frame driver
//! - `trace` - Instruction trace sink
//! - `config` - Timing configuration

pub mod addressing;
pub mod bus;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod memory;
pub mod opcodes;
pub mod system;
pub mod trace;
pub mod video;

// Instruction implementations (reached only through OPCODE_TABLE)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::AtariBus;
pub use config::TimingConfig;
pub use cpu::CPU;
pub use devices::{Cartridge, Device, NoHook, Riot, Tia, WriteHook};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, OPCODE_TABLE};
pub use system::Atari2600;
pub use trace::{LogTracer, TraceRecord, TraceSink};
pub use video::{palette, FrameBuffer};

use thiserror::Error;

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The fetched byte is not a documented 6502 opcode.
    ///
    /// The CPU halts; only a reset brings it back.
    #[error("opcode 0x{opcode:02X} at 0x{address:04X} is not implemented")]
    UnimplementedOpcode {
        /// The opcode byte
        opcode: u8,
        /// Address the opcode was fetched from
        address: u16,
    },

    /// `step` was called on a CPU that already halted.
    #[error("CPU is halted; reset required")]
    Halted,
}
