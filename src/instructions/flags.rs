//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED. Each takes 2 cycles and touches only the
//! named flag.

use crate::{AddressingMode, MemoryBus, CPU};

/// CLC: clear carry.
pub(crate) fn clc(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_c = false;
    0
}

/// SEC: set carry.
pub(crate) fn sec(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_c = true;
    0
}

/// CLI: clear interrupt disable.
pub(crate) fn cli(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_i = false;
    0
}

/// SEI: set interrupt disable.
pub(crate) fn sei(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_i = true;
    0
}

/// CLV: clear overflow. There is no SEV.
pub(crate) fn clv(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_v = false;
    0
}

/// CLD: clear decimal mode.
pub(crate) fn cld(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_d = false;
    0
}

/// SED: set decimal mode. ADC and SBC switch to BCD arithmetic.
pub(crate) fn sed(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.flag_d = true;
    0
}
