//! Tests for the ADC (Add with Carry) instruction.
//!
//! Tests cover:
//! - Binary addition with and without carry in
//! - Flag updates (C, Z, V, N)
//! - Addressing modes and page-crossing cycle penalties
//! - Decimal (BCD) mode

use lib2600::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== Binary Mode ==========

#[test]
fn test_adc_immediate_basic() {
    let (mut cpu, mut memory) = setup_cpu();

    // ADC #$05
    memory.load(0x8000, &[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag_c(false);

    assert_eq!(cpu.step(&mut memory), Ok(2));

    assert_eq!(cpu.a(), 0x15);
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_v());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_with_carry_in() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x05]);
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x16);
}

#[test]
fn test_adc_signed_overflow_positive() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0x7F);
    cpu.set_flag_c(false);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_signed_overflow_negative() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x80]);
    cpu.set_a(0x80);

    cpu.step(&mut memory).unwrap();

    // -128 + -128 wraps to 0 with carry and overflow
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_carry_out_without_overflow() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x01]);
    cpu.set_a(0xFF);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_v());
}

// ========== Addressing Modes ==========

#[test]
fn test_adc_zero_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x65, 0x42]);
    memory.write(0x0042, 0x20);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert_eq!(cpu.a(), 0x21);
}

#[test]
fn test_adc_zero_page_x_wraps() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x75, 0xF0]);
    memory.write(0x0010, 0x05);
    cpu.set_x(0x20);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(cpu.a(), 0x06);
}

#[test]
fn test_adc_absolute_x_page_cross_penalty() {
    let (mut cpu, mut memory) = setup_cpu();

    // ADC $12F0,X with X=0x20 -> $1310
    memory.load(0x8000, &[0x7D, 0xF0, 0x12]);
    memory.write(0x1310, 0x03);
    cpu.set_x(0x20);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.a(), 0x04);
}

#[test]
fn test_adc_absolute_y_same_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x79, 0x00, 0x12]);
    memory.write(0x1205, 0x03);
    cpu.set_y(0x05);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(cpu.a(), 0x03);
}

#[test]
fn test_adc_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x61, 0x40]);
    memory.write(0x0044, 0x00);
    memory.write(0x0045, 0x30);
    memory.write(0x3000, 0x11);
    cpu.set_x(0x04);
    cpu.set_a(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.a(), 0x12);
}

#[test]
fn test_adc_indirect_y_page_cross_penalty() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x71, 0x40]);
    memory.write(0x0040, 0xFF);
    memory.write(0x0041, 0x30);
    memory.write(0x3100, 0x22);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.a(), 0x22);
}

// ========== Decimal Mode ==========

#[test]
fn test_adc_decimal_digit_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x01]);
    cpu.set_flag_d(true);
    cpu.set_a(0x09);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x10);
    assert!(!cpu.flag_c());
}

#[test]
fn test_adc_decimal_wraps_with_carry() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x01]);
    cpu.set_flag_d(true);
    cpu.set_a(0x99);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_c());
}

#[test]
fn test_adc_decimal_with_carry_in() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x69, 0x27]);
    cpu.set_flag_d(true);
    cpu.set_flag_c(true);
    cpu.set_a(0x15);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x43);
    assert!(!cpu.flag_c());
}
