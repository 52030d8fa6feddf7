//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic on the accumulator
//! - CMP, CPX, CPY: Register comparisons
//! - BIT: Bit test
//!
//! ADC and SBC honour the D flag with NMOS binary-coded-decimal behaviour.

use super::page_penalty;
use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// In binary mode:
/// - C: set if the unsigned sum exceeds 0xFF
/// - V: set if both inputs share a sign and the result does not
/// - Z, N: from the result
///
/// In decimal mode each nibble is a BCD digit. C is the decimal carry out of
/// the high digit. Z comes from the binary sum, while N and V come from the
/// intermediate result before the high digit is adjusted, as on NMOS parts.
pub(crate) fn adc(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);

    if cpu.flag_d {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }

    page_penalty(page_crossed)
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). Flags are those of ADC with the operand
/// inverted; in decimal mode only the accumulator gets the BCD correction.
pub(crate) fn sbc(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);

    if cpu.flag_d {
        let a = cpu.a;
        let carry = cpu.flag_c as i16;
        add_binary(cpu, !value);

        let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 + carry - 1;
        if low < 0 {
            low = ((low - 0x06) & 0x0F) - 0x10;
        }
        let mut result = (a & 0xF0) as i16 - (value & 0xF0) as i16 + low;
        if result < 0 {
            result -= 0x60;
        }
        cpu.a = (result & 0xFF) as u8;
    } else {
        add_binary(cpu, !value);
    }

    page_penalty(page_crossed)
}

fn add_binary(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let sum = a as u16 + value as u16 + cpu.flag_c as u16;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    // Both operands had the same sign but the result does not
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;
    cpu.set_zn(result);
    cpu.a = result;
}

fn add_decimal(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let carry = cpu.flag_c as u16;

    let mut low = (a & 0x0F) as u16 + (value & 0x0F) as u16 + carry;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }
    let mut result = (a & 0xF0) as u16 + (value & 0xF0) as u16 + low;

    let binary = a.wrapping_add(value).wrapping_add(carry as u8);
    cpu.flag_z = binary == 0;
    cpu.flag_n = (result & 0x80) != 0;
    cpu.flag_v = (!(a ^ value) & (a ^ result as u8) & 0x80) != 0;

    if result >= 0xA0 {
        result += 0x60;
    }
    cpu.flag_c = result >= 0x100;
    cpu.a = result as u8;
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn and(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.a &= value;
    cpu.set_zn(cpu.a);
    page_penalty(page_crossed)
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn ora(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.a |= value;
    cpu.set_zn(cpu.a);
    page_penalty(page_crossed)
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn eor(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    cpu.a ^= value;
    cpu.set_zn(cpu.a);
    page_penalty(page_crossed)
}

/// Shared comparison: C = register >= value, Z/N from the difference.
fn compare(cpu: &mut CPU, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn cmp(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, page_crossed) = cpu.read_operand(bus, mode);
    let register = cpu.a;
    compare(cpu, register, value);
    page_penalty(page_crossed)
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn cpx(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, _) = cpu.read_operand(bus, mode);
    let register = cpu.x;
    compare(cpu, register, value);
    0
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn cpy(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, _) = cpu.read_operand(bus, mode);
    let register = cpu.y;
    compare(cpu, register, value);
    0
}

/// Executes the BIT (Bit Test) instruction.
///
/// Z reflects A & M. N and V are copied straight from bits 7 and 6 of the
/// operand. The accumulator is unchanged.
pub(crate) fn bit(cpu: &mut CPU, bus: &mut dyn MemoryBus, mode: AddressingMode) -> u8 {
    let (value, _) = cpu.read_operand(bus, mode);
    cpu.flag_z = (cpu.a & value) == 0;
    cpu.flag_n = (value & 0x80) != 0;
    cpu.flag_v = (value & 0x40) != 0;
    0
}
