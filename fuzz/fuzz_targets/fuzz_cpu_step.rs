//! Fuzz target for console execution.
//!
//! Loads arbitrary bytes as a cartridge, seeds the CPU registers, then steps
//! through a bounded number of instructions looking for panics. Errors from
//! undocumented opcodes are expected and end the run.

#![no_main]

use arbitrary::Arbitrary;
use lib2600::{Atari2600, ExecutionError, MemoryBus, TimingConfig};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    /// Cartridge image; truncated or padded by `load_rom`
    rom: Vec<u8>,
    /// Bytes poked into RIOT RAM before execution
    ram: [u8; 128],
    /// Number of instructions to execute
    steps: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut atari = Atari2600::new(TimingConfig::default());
    atari.load_rom(&input.rom);

    for (i, &byte) in input.ram.iter().enumerate() {
        atari.bus_mut().write(0x0080 + i as u16, byte);
    }

    let cpu = atari.cpu_mut();
    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    for _ in 0..input.steps.min(4096) {
        match atari.step() {
            Ok(cycles) => assert!((2..=7).contains(&cycles)),
            Err(ExecutionError::UnimplementedOpcode { .. }) => {
                assert!(atari.is_halted());
                assert_eq!(atari.step(), Err(ExecutionError::Halted));
                break;
            }
            Err(ExecutionError::Halted) => unreachable!("halt is reported once per run"),
        }
    }

    // Status bit 5 reads as set whatever the program did
    assert_eq!(atari.cpu().status() & 0x20, 0x20);
});
