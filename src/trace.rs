//! Per-instruction execution tracing.
//!
//! A [`TraceSink`] installed on the CPU sees a [`TraceRecord`] for every
//! instruction just before it executes. Tracing never changes emulation
//! results; with no sink installed nothing is captured.

use std::fmt;

use crate::{MemoryBus, OpcodeMetadata, CPU};

/// CPU state at the start of one instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    /// Address of the opcode byte.
    pub pc: u16,
    /// The opcode byte.
    pub opcode: u8,
    /// Mnemonic from the opcode table ("???" for undocumented opcodes).
    pub mnemonic: &'static str,
    /// Operand bytes following the opcode (0, 1 or 2 of them).
    pub operands: Vec<u8>,
    /// Accumulator.
    pub a: u8,
    /// X register.
    pub x: u8,
    /// Y register.
    pub y: u8,
    /// Stack pointer.
    pub sp: u8,
    /// Packed status byte.
    pub p: u8,
    /// Cycle counter before the instruction runs.
    pub cycles: u64,
}

impl TraceRecord {
    pub(crate) fn capture(
        cpu: &CPU,
        bus: &dyn MemoryBus,
        pc: u16,
        metadata: &OpcodeMetadata,
    ) -> Self {
        let operands = (1..metadata.size_bytes as u16)
            .map(|i| bus.read(pc.wrapping_add(i)))
            .collect();

        Self {
            pc,
            opcode: bus.read(pc),
            mnemonic: metadata.mnemonic,
            operands,
            a: cpu.a(),
            x: cpu.x(),
            y: cpu.y(),
            sp: cpu.sp(),
            p: cpu.status(),
            cycles: cpu.cycles(),
        }
    }
}

impl fmt::Display for TraceRecord {
    /// `F000  A9 01     LDA   A:00 X:00 Y:00 P:24 SP:FF CYC:0`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = format!("{:02X}", self.opcode);
        for operand in &self.operands {
            bytes.push_str(&format!(" {:02X}", operand));
        }

        write!(
            f,
            "{:04X}  {:<8}  {:<4}  A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            self.pc, bytes, self.mnemonic, self.a, self.x, self.y, self.p, self.sp, self.cycles
        )
    }
}

/// Receives one record per executed instruction.
///
/// Any `FnMut(&TraceRecord)` closure is a sink.
pub trait TraceSink {
    fn trace(&mut self, record: &TraceRecord);
}

impl<F> TraceSink for F
where
    F: FnMut(&TraceRecord),
{
    fn trace(&mut self, record: &TraceRecord) {
        self(record)
    }
}

/// Sink that forwards every record to `log::trace!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl TraceSink for LogTracer {
    fn trace(&mut self, record: &TraceRecord) {
        log::trace!("{}", record);
    }
}
