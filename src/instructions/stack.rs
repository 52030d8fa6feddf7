//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. The stack lives at 0x0100-0x01FF and grows downward;
//! SP wraps within that page.

use crate::cpu::{FLAG_BREAK, FLAG_UNUSED};
use crate::{AddressingMode, MemoryBus, CPU};

/// PHA: push accumulator.
pub(crate) fn pha(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let value = cpu.a;
    cpu.push(bus, value);
    0
}

/// PHP: push status with B and bit 5 set in the pushed copy.
pub(crate) fn php(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let status = cpu.status() | FLAG_BREAK | FLAG_UNUSED;
    cpu.push(bus, status);
    0
}

/// PLA: pull accumulator, updating Z and N.
pub(crate) fn pla(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let value = cpu.pull(bus);
    cpu.a = value;
    cpu.set_zn(value);
    0
}

/// PLP: pull status. B is discarded; bit 5 always reads back as 1.
pub(crate) fn plp(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let status = cpu.pull(bus);
    cpu.set_status(status & !FLAG_BREAK);
    0
}
