//! Tests for LDA, LDX, LDY, STA, STX and STY.

use lib2600::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new();
    cpu.reset(&memory);
    (cpu, memory)
}

// ========== Loads ==========

#[test]
fn test_lda_immediate_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xA9, 0x00, 0xA9, 0x80]);

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n());
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xBD, 0x80, 0x30]);
    memory.write(0x3100, 0x42);
    cpu.set_x(0x80);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_lda_indirect_x() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xA1, 0x20]);
    memory.write(0x0024, 0x34);
    memory.write(0x0025, 0x12);
    memory.write(0x1234, 0x99);
    cpu.set_x(0x04);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_ldx_zero_page_y() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xB6, 0xFE]);
    memory.write(0x0001, 0x37);
    cpu.set_y(0x03);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(cpu.x(), 0x37);
}

#[test]
fn test_ldx_absolute_y_page_cross() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xBE, 0xFF, 0x30]);
    memory.write(0x3101, 0x11);
    cpu.set_y(0x02);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.x(), 0x11);
}

#[test]
fn test_ldy_absolute_x_same_page() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0xBC, 0x00, 0x30]);
    memory.write(0x3010, 0x80);
    cpu.set_x(0x10);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
}

// ========== Stores ==========

#[test]
fn test_sta_zero_page_leaves_flags() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x85, 0x10]);
    cpu.set_a(0x00);
    cpu.set_flag_z(false);

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert_eq!(memory.read(0x0010), 0x00);
    assert!(!cpu.flag_z());
}

#[test]
fn test_sta_absolute_x_fixed_cost() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x9D, 0x00, 0x30, 0x9D, 0xFF, 0x30]);
    cpu.set_a(0x55);
    cpu.set_x(0x01);

    // Same page and page-crossing both take 5 cycles
    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(memory.read(0x3001), 0x55);
    assert_eq!(memory.read(0x3100), 0x55);
}

#[test]
fn test_sta_indirect_y_fixed_cost() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x91, 0x40]);
    memory.write(0x0040, 0xFF);
    memory.write(0x0041, 0x20);
    cpu.set_a(0xAB);
    cpu.set_y(0x01);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(memory.read(0x2100), 0xAB);
}

#[test]
fn test_stx_zero_page_y() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x96, 0x10]);
    cpu.set_x(0x77);
    cpu.set_y(0x05);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x0015), 0x77);
}

#[test]
fn test_sty_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x8C, 0x34, 0x12]);
    cpu.set_y(0x66);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert_eq!(memory.read(0x1234), 0x66);
}
