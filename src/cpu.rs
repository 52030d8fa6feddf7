//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6507 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//! - **Halt latch**: set when an undocumented opcode is fetched
//!
//! ## Execution Model
//!
//! The CPU does not own memory. Every call that touches the bus borrows it:
//! - `reset()`: Load PC from the reset vector
//! - `step()`: Execute one instruction, returning the cycles it took
//! - `run_for_cycles()`: Execute until a cycle budget is exhausted
//!
//! Decoding goes through [`OPCODE_TABLE`]: the opcode byte indexes the table,
//! the entry's handler executes the instruction and reports any extra cycles
//! (page crossings, taken branches) on top of the entry's base cost.

use crate::trace::{TraceRecord, TraceSink};
use crate::{AddressingMode, ExecutionError, MemoryBus, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub(crate) const STACK_BASE: u16 = 0x0100;

/// Reset vector location (little-endian).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector location (little-endian).
pub const IRQ_VECTOR: u16 = 0xFFFE;

pub(crate) const FLAG_CARRY: u8 = 0b0000_0001;
pub(crate) const FLAG_ZERO: u8 = 0b0000_0010;
pub(crate) const FLAG_INTERRUPT: u8 = 0b0000_0100;
pub(crate) const FLAG_DECIMAL: u8 = 0b0000_1000;
pub(crate) const FLAG_BREAK: u8 = 0b0001_0000;
pub(crate) const FLAG_UNUSED: u8 = 0b0010_0000;
pub(crate) const FLAG_OVERFLOW: u8 = 0b0100_0000;
pub(crate) const FLAG_NEGATIVE: u8 = 0b1000_0000;

/// Status register value after reset: I set, unused bit set.
pub const RESET_STATUS: u8 = FLAG_UNUSED | FLAG_INTERRUPT;

/// Stack pointer value after reset.
pub const RESET_SP: u8 = 0xFF;

/// Effective address produced by an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Operand {
    /// Address the instruction reads or writes
    pub(crate) address: u16,
    /// True when indexing moved the address into a different page
    pub(crate) page_crossed: bool,
}

impl Operand {
    fn direct(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }

    fn indexed(base: u16, index: u8) -> Self {
        let address = base.wrapping_add(index as u16);
        Self {
            address,
            page_crossed: (base & 0xFF00) != (address & 0xFF00),
        }
    }
}

/// 6507 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use lib2600::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0xF0); // PC = 0xF000
/// memory.write(0xF000, 0xEA); // NOP
///
/// let mut cpu = CPU::new();
/// cpu.reset(&memory);
///
/// assert_eq!(cpu.pc(), 0xF000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.step(&mut memory), Ok(2));
/// assert_eq!(cpu.pc(), 0xF001);
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag. Only ever set through `set_status`; BRK and PHP set the
    /// bit in the pushed copy, PLP and RTI clear it.
    pub(crate) flag_b: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    halted: bool,

    tracer: Option<Box<dyn TraceSink>>,
}

impl CPU {
    /// Creates a CPU in its power-on state.
    ///
    /// Registers are zeroed, SP and status hold their reset values, and PC is
    /// 0x0000 until [`reset`](Self::reset) loads the reset vector.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: RESET_SP,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            halted: false,
            tracer: None,
        }
    }

    /// Resets the CPU.
    ///
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFF
    /// - Status is 0x24 (I and the unused bit set)
    /// - A, X, Y and the cycle counter are zeroed
    /// - The halt latch is cleared
    ///
    /// An installed tracer survives the reset.
    pub fn reset(&mut self, bus: &impl MemoryBus) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = RESET_SP;
        self.set_status(RESET_STATUS);
        self.cycles = 0;
        self.halted = false;
        self.pc = bus.read_word(RESET_VECTOR);

        log::debug!("CPU reset, PC loaded from vector: 0x{:04X}", self.pc);
    }

    /// Executes one instruction and returns the number of cycles it consumed.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC and advance PC
    /// 2. Look the opcode up in [`OPCODE_TABLE`]
    /// 3. Run its handler, which fetches operands and executes
    /// 4. Add base cycles plus any page-cross/branch penalty
    ///
    /// # Errors
    ///
    /// - [`ExecutionError::UnimplementedOpcode`] when the byte has no handler.
    ///   The CPU halts; PC has moved past the opcode byte and nothing else
    ///   changed.
    /// - [`ExecutionError::Halted`] on every call after that, until `reset`.
    pub fn step(&mut self, bus: &mut impl MemoryBus) -> Result<u8, ExecutionError> {
        if self.halted {
            return Err(ExecutionError::Halted);
        }

        let bus: &mut dyn MemoryBus = bus;
        let address = self.pc;
        let opcode = bus.read(address);
        let metadata = &OPCODE_TABLE[opcode as usize];

        if self.tracer.is_some() {
            let record = TraceRecord::capture(self, bus, address, metadata);
            if let Some(tracer) = self.tracer.as_mut() {
                tracer.trace(&record);
            }
        }

        self.pc = self.pc.wrapping_add(1);

        let Some(execute) = metadata.handler else {
            self.halted = true;
            log::warn!(
                "Halting on unimplemented opcode 0x{:02X} at 0x{:04X}",
                opcode,
                address
            );
            return Err(ExecutionError::UnimplementedOpcode { opcode, address });
        };

        let cycles = metadata.base_cycles + execute(self, bus, metadata.addressing_mode);
        self.cycles += cycles as u64;

        Ok(cycles)
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error occurs.
    /// Returns the actual number of cycles consumed (may be slightly more than budget
    /// due to instruction granularity).
    pub fn run_for_cycles(
        &mut self,
        bus: &mut impl MemoryBus,
        cycle_budget: u64,
    ) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step(bus)?;
        }

        Ok(self.cycles - start_cycles)
    }

    /// Installs a trace sink that sees every instruction before it executes.
    pub fn set_tracer(&mut self, tracer: Box<dyn TraceSink>) {
        self.tracer = Some(tracer);
    }

    /// Removes and returns the installed trace sink.
    pub fn take_tracer(&mut self) -> Option<Box<dyn TraceSink>> {
        self.tracer.take()
    }

    // ========== Operand Fetch and Addressing ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self, bus: &dyn MemoryBus) -> u8 {
        let value = bus.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self, bus: &dyn MemoryBus) -> u16 {
        let low = self.fetch_byte(bus) as u16;
        let high = self.fetch_byte(bus) as u16;
        (high << 8) | low
    }

    /// Reads a pointer from zero page; the high byte wraps within page zero.
    fn read_zero_page_word(bus: &dyn MemoryBus, pointer: u8) -> u16 {
        let low = bus.read(pointer as u16) as u16;
        let high = bus.read(pointer.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    /// Consumes the operand bytes for `mode` and returns the effective address.
    ///
    /// Immediate mode yields the address of the operand byte itself.
    pub(crate) fn effective_address(
        &mut self,
        bus: &dyn MemoryBus,
        mode: AddressingMode,
    ) -> Operand {
        match mode {
            AddressingMode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::direct(address)
            }
            AddressingMode::ZeroPage => Operand::direct(self.fetch_byte(bus) as u16),
            AddressingMode::ZeroPageX => {
                Operand::direct(self.fetch_byte(bus).wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::direct(self.fetch_byte(bus).wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::direct(self.fetch_word(bus)),
            AddressingMode::AbsoluteX => Operand::indexed(self.fetch_word(bus), self.x),
            AddressingMode::AbsoluteY => Operand::indexed(self.fetch_word(bus), self.y),
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(bus);
                let low = bus.read(pointer) as u16;
                // Page-wrap bug: the high byte never leaves the pointer's page
                let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let high = bus.read(high_addr) as u16;
                Operand::direct((high << 8) | low)
            }
            AddressingMode::IndirectX => {
                let pointer = self.fetch_byte(bus).wrapping_add(self.x);
                Operand::direct(Self::read_zero_page_word(bus, pointer))
            }
            AddressingMode::IndirectY => {
                let pointer = self.fetch_byte(bus);
                Operand::indexed(Self::read_zero_page_word(bus, pointer), self.y)
            }
            AddressingMode::Implicit | AddressingMode::Accumulator | AddressingMode::Relative => {
                unreachable!("{mode:?} has no effective address")
            }
        }
    }

    /// Fetches the operand value for a read-class instruction.
    ///
    /// Returns the value and whether a page boundary was crossed.
    pub(crate) fn read_operand(&mut self, bus: &dyn MemoryBus, mode: AddressingMode) -> (u8, bool) {
        if mode == AddressingMode::Accumulator {
            return (self.a, false);
        }
        let operand = self.effective_address(bus, mode);
        (bus.read(operand.address), operand.page_crossed)
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, bus: &mut dyn MemoryBus, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self, bus: &dyn MemoryBus) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    pub(crate) fn push_word(&mut self, bus: &mut dyn MemoryBus, value: u16) {
        self.push(bus, (value >> 8) as u8);
        self.push(bus, (value & 0xFF) as u8);
    }

    pub(crate) fn pull_word(&mut self, bus: &dyn MemoryBus) -> u16 {
        let low = self.pull(bus) as u16;
        let high = self.pull(bus) as u16;
        (high << 8) | low
    }

    // ========== Flags ==========

    /// Updates Z and N from a result byte.
    ///
    /// Every instruction that writes a register or memory result goes through
    /// here.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status = FLAG_UNUSED;

        if self.flag_n {
            status |= FLAG_NEGATIVE;
        }
        if self.flag_v {
            status |= FLAG_OVERFLOW;
        }
        if self.flag_b {
            status |= FLAG_BREAK;
        }
        if self.flag_d {
            status |= FLAG_DECIMAL;
        }
        if self.flag_i {
            status |= FLAG_INTERRUPT;
        }
        if self.flag_z {
            status |= FLAG_ZERO;
        }
        if self.flag_c {
            status |= FLAG_CARRY;
        }

        status
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns true once an unimplemented opcode has halted the CPU.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Setters (test and debugger support) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Loads every flag from a packed status byte. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = (value & FLAG_NEGATIVE) != 0;
        self.flag_v = (value & FLAG_OVERFLOW) != 0;
        self.flag_b = (value & FLAG_BREAK) != 0;
        self.flag_d = (value & FLAG_DECIMAL) != 0;
        self.flag_i = (value & FLAG_INTERRUPT) != 0;
        self.flag_z = (value & FLAG_ZERO) != 0;
        self.flag_c = (value & FLAG_CARRY) != 0;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
