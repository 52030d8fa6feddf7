//! Tests for BRK and RTI.

use lib2600::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> (CPU, FlatMemory) {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    memory.write(0xFFFE, 0x00);
    memory.write(0xFFFF, 0x90);
    let mut cpu = CPU::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_brk_pushes_state_and_vectors() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x8000, 0x00);
    cpu.set_flag_i(false);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(&mut memory), Ok(7));

    assert_eq!(cpu.pc(), 0x9000);
    assert!(cpu.flag_i());
    assert_eq!(cpu.sp(), 0xFC);

    // Return address is BRK + 2
    assert_eq!(memory.read(0x01FF), 0x80);
    assert_eq!(memory.read(0x01FE), 0x02);

    // Pushed status has B and bit 5 set, I clear as it was before BRK
    assert_eq!(memory.read(0x01FD), 0x20 | 0x10 | 0x01);
    assert!(!cpu.flag_b());
}

#[test]
fn test_brk_then_rti_restores_state() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x8000, 0x00);
    memory.write(0x9000, 0x40); // RTI
    cpu.set_flag_i(false);
    cpu.set_flag_n(true);
    cpu.set_flag_c(true);
    let status_before = cpu.status();

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.step(&mut memory), Ok(6));

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.status(), status_before);
    assert!(!cpu.flag_b());
}

#[test]
fn test_rti_does_not_add_one() {
    let (mut cpu, mut memory) = setup_cpu();
    memory.write(0x8000, 0x40);
    cpu.set_sp(0xFC);
    memory.write(0x01FD, 0xFF); // status with every bit set
    memory.write(0x01FE, 0x34);
    memory.write(0x01FF, 0x12);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert!(!cpu.flag_b());
    assert_eq!(cpu.status(), 0xEF);
}
