//! # Increment and Decrement Instructions
//!
//! - INC / DEC: read-modify-write on memory
//! - INX, INY, DEX, DEY: register forms
//!
//! All wrap at 8 bits and update Z and N. The memory forms never pay a
//! page-crossing penalty; `abs,X` is a flat 7 cycles.

use crate::{AddressingMode, MemoryBus, CPU};

fn modify_memory(
    cpu: &mut CPU,
    bus: &mut dyn MemoryBus,
    mode: AddressingMode,
    op: fn(u8) -> u8,
) -> u8 {
    let address = cpu.effective_address(bus, mode).address;
    let result = op(bus.read(address));
    bus.write(address, result);
    cpu.set_zn(result);
    0
}

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn inc(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    modify_memory(cpu, bus, mode, |value| value.wrapping_add(1))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn dec(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    modify_memory(cpu, bus, mode, |value| value.wrapping_sub(1))
}

pub(crate) fn inx(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
    0
}

pub(crate) fn iny(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
    0
}

pub(crate) fn dex(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
    0
}

pub(crate) fn dey(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
    0
}
