//! Tests for JMP absolute and JMP indirect.

use lib2600::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    let mut cpu = CPU::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x4C, 0x34, 0x12]);

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x6C, 0x00, 0x30]);
    memory.write(0x3000, 0x78);
    memory.write(0x3001, 0x56);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.pc(), 0x5678);
}

#[test]
fn test_jmp_indirect_page_wrap_bug() {
    let (mut cpu, mut memory) = setup_cpu();

    // JMP ($10FF) reads the high byte from $1000, not $1100
    memory.load(0x8000, &[0x6C, 0xFF, 0x10]);
    memory.write(0x10FF, 0x34);
    memory.write(0x1000, 0x12);
    memory.write(0x1100, 0x99);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_leaves_flags_alone() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.load(0x8000, &[0x4C, 0x00, 0x90]);
    let status = cpu.status();

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.status(), status);
}
