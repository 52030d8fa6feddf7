//! # Branch Instructions
//!
//! This module implements the eight conditional branches:
//! BPL, BMI, BVC, BVS, BCC, BCS, BNE, BEQ.
//!
//! All branch instructions use relative addressing with a signed 8-bit offset,
//! measured from the address of the instruction that follows the branch.
//! Cycle timing varies based on whether the branch is taken and whether a page
//! boundary is crossed:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::{AddressingMode, MemoryBus, CPU};

/// Reads the offset and, when `condition` holds, moves PC.
///
/// Returns the extra cycles on top of the base 2.
fn branch_if(cpu: &mut CPU, bus: &dyn MemoryBus, condition: bool) -> u8 {
    let offset = cpu.fetch_byte(bus) as i8;

    if !condition {
        return 0;
    }

    let next = cpu.pc;
    let target = next.wrapping_add_signed(offset as i16);
    cpu.pc = target;

    if (next & 0xFF00) != (target & 0xFF00) {
        2
    } else {
        1
    }
}

/// BPL: branch if N = 0.
pub(crate) fn bpl(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = !cpu.flag_n;
    branch_if(cpu, bus, condition)
}

/// BMI: branch if N = 1.
pub(crate) fn bmi(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = cpu.flag_n;
    branch_if(cpu, bus, condition)
}

/// BVC: branch if V = 0.
pub(crate) fn bvc(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = !cpu.flag_v;
    branch_if(cpu, bus, condition)
}

/// BVS: branch if V = 1.
pub(crate) fn bvs(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = cpu.flag_v;
    branch_if(cpu, bus, condition)
}

/// BCC: branch if C = 0.
pub(crate) fn bcc(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = !cpu.flag_c;
    branch_if(cpu, bus, condition)
}

/// BCS: branch if C = 1.
pub(crate) fn bcs(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = cpu.flag_c;
    branch_if(cpu, bus, condition)
}

/// BNE: branch if Z = 0.
pub(crate) fn bne(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = !cpu.flag_z;
    branch_if(cpu, bus, condition)
}

/// BEQ: branch if Z = 1.
pub(crate) fn beq(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let condition = cpu.flag_z;
    branch_if(cpu, bus, condition)
}
