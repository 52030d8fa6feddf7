//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Every handler has the [`Handler`](crate::opcodes::Handler)
//! shape: it receives the CPU with PC already past the opcode byte, the bus and
//! the addressing mode from the opcode table, and returns any cycles spent on top
//! of the table's base cost.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub(crate) mod alu;
pub(crate) mod branches;
pub(crate) mod control;
pub(crate) mod flags;
pub(crate) mod inc_dec;
pub(crate) mod load_store;
pub(crate) mod shifts;
pub(crate) mod stack;
pub(crate) mod transfer;

/// Extra cycle owed by read instructions whose indexed address crossed a page.
#[inline]
pub(crate) fn page_penalty(page_crossed: bool) -> u8 {
    u8::from(page_crossed)
}
