//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX update Z and N from the copied value. TXS does not
//! touch any flag.

use crate::{AddressingMode, MemoryBus, CPU};

pub(crate) fn tax(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.x = cpu.a;
    cpu.set_zn(cpu.x);
    0
}

pub(crate) fn tay(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.y = cpu.a;
    cpu.set_zn(cpu.y);
    0
}

pub(crate) fn txa(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.a = cpu.x;
    cpu.set_zn(cpu.a);
    0
}

pub(crate) fn tya(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.a = cpu.y;
    cpu.set_zn(cpu.a);
    0
}

pub(crate) fn tsx(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
    0
}

/// TXS: copy X into SP. No flags.
pub(crate) fn txs(cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.sp = cpu.x;
    0
}
