//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump (absolute and indirect)
//! - JSR / RTS: Subroutine call and return
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Pushes PC+2 to the stack (high byte first, then low byte)
//! 2. Pushes processor status to stack with B and bit 5 set
//! 3. Sets the I (interrupt disable) flag
//! 4. Loads PC from IRQ vector at $FFFE/F

use crate::cpu::{FLAG_BREAK, FLAG_UNUSED, IRQ_VECTOR};
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// On entry PC already points past the opcode. The padding byte that follows
/// BRK is skipped, so the pushed return address is the BRK address + 2 and a
/// matching RTI resumes after the padding byte.
///
/// Flags affected:
/// - B: Set in the pushed status byte only
/// - I: Set to 1
pub(crate) fn brk(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let return_address = cpu.pc.wrapping_add(1);
    cpu.push_word(bus, return_address);

    let status = cpu.status() | FLAG_BREAK | FLAG_UNUSED;
    cpu.push(bus, status);

    cpu.flag_i = true;
    cpu.pc = bus.read_word(IRQ_VECTOR);
    0
}

/// Executes the JMP instruction.
///
/// Absolute mode jumps to the operand. Indirect mode jumps through a 16-bit
/// pointer and reproduces the NMOS page-wrap bug: a pointer at $xxFF takes its
/// high byte from $xx00.
pub(crate) fn jmp(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    cpu.pc = cpu.effective_address(bus, mode).address;
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (return address - 1), then
/// jumps.
pub(crate) fn jsr(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let target = cpu.effective_address(bus, mode).address;
    let return_address = cpu.pc.wrapping_sub(1);
    cpu.push_word(bus, return_address);
    cpu.pc = target;
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn rts(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    cpu.pc = cpu.pull_word(bus).wrapping_add(1);
    0
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status (B cleared), then PC. Unlike RTS the pulled PC is used
/// as-is.
pub(crate) fn rti(cpu: &mut CPU, bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    let status = cpu.pull(bus);
    cpu.set_status(status & !FLAG_BREAK);
    cpu.pc = cpu.pull_word(bus);
    0
}

pub(crate) fn nop(_cpu: &mut CPU, _bus: &mut dyn MemoryBus, _mode: AddressingMode) -> u8 {
    0
}
