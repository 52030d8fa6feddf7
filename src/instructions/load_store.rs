//! # Load and Store Instructions
//!
//! This module implements register loads and stores:
//! - LDA, LDX, LDY: Load a register from memory, updating Z and N
//! - STA, STX, STY: Store a register to memory, no flags affected
//!
//! Loads pay +1 cycle when an indexed address crosses a page. Stores never do;
//! their indexed forms carry the extra cycle in the base cost.

use super::page_penalty;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn lda(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.a = value;
    cpu.set_zn(value);
    page_penalty(page_crossed)
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn ldx(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.x = value;
    cpu.set_zn(value);
    page_penalty(page_crossed)
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn ldy(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.y = value;
    cpu.set_zn(value);
    page_penalty(page_crossed)
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn sta(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let address = cpu.effective_address(bus, mode).address;
    bus.write(address, cpu.a);
    0
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn stx(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let address = cpu.effective_address(bus, mode).address;
    bus.write(address, cpu.x);
    0
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn sty(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let address = cpu.effective_address(bus, mode).address;
    bus.write(address, cpu.y);
    0
}
