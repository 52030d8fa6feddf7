//! # Shift and Rotate Instructions
//!
//! This module implements ASL, LSR, ROL and ROR. Each works either on the
//! accumulator or as a read-modify-write on memory.
//!
//! - C receives the bit shifted out
//! - Z and N reflect the result
//!
//! Memory forms take a flat 5/6/6/7 cycles with no page-crossing penalty.

use crate::{AddressingMode, MemoryBus, CPU};

/// Applies `op` to the accumulator or to memory. `op` returns the result and
/// the new carry.
fn shift(
    cpu: &mut CPU,
    bus: &mut dyn MemoryBus,
    mode: AddressingMode,
    op: fn(u8, bool) -> (u8, bool),
) -> u8 {
    if mode == AddressingMode::Accumulator {
        let (result, carry) = op(cpu.a, cpu.flag_c);
        cpu.a = result;
        cpu.flag_c = carry;
        cpu.set_zn(result);
    } else {
        let address = cpu.effective_address(bus, mode).address;
        let (result, carry) = op(bus.read(address), cpu.flag_c);
        bus.write(address, result);
        cpu.flag_c = carry;
        cpu.set_zn(result);
    }
    0
}

/// Executes the ASL (Arithmetic Shift Left) instruction. Bit 0 becomes 0.
pub(crate) fn asl(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    shift(cpu, bus, mode, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction. Bit 7 becomes 0, so N
/// is always cleared.
pub(crate) fn lsr(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    shift(cpu, bus, mode, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction. The old carry enters bit 0.
pub(crate) fn rol(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    shift(cpu, bus, mode, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction. The old carry enters bit 7.
pub(crate) fn ror(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    shift(cpu, bus, mode, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}
