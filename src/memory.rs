//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the machine it runs in. The
//! CPU borrows a bus for each `step`; it never owns one.
//!
//! Two implementations ship with the crate:
//!
//! - [`AtariBus`](crate::AtariBus): the 6507 address decoder with TIA, RIOT and
//!   cartridge behind it
//! - [`FlatMemory`]: 64KB of plain RAM, handy for exercising the CPU alone
//!
//! ## Design Principles
//!
//! Buses follow 6502 hardware behaviour:
//! - No bus errors - reads/writes always succeed
//! - Unmapped reads return whatever the bus floats to
//! - Writes to ROM/unmapped regions are ignored

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use lib2600::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic. Unmapped addresses return the open-bus value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Read-only and unmapped addresses ignore the write.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping at 0xFFFF).
    ///
    /// ```
    /// use lib2600::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0xF0);
    /// assert_eq!(mem.read_word(0xFFFC), 0xF000);
    /// ```
    fn read_word(&self, addr: u16) -> u16 {
        let low = self.read(addr) as u16;
        let high = self.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }
}

/// Simple 64KB flat memory implementation.
///
/// Every address is writable RAM initialised to 0x00. Used to test the CPU in
/// isolation, where the 6507's 13-bit decode would only get in the way.
///
/// # Examples
///
/// ```
/// use lib2600::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80);
///
/// let mut cpu = CPU::new();
/// cpu.reset(&memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `addr`, wrapping at 0xFFFF.
    pub fn load(&mut self, addr: u16, bytes: &[u8]) {
        for (i, &byte) in bytes.iter().enumerate() {
            self.data[addr.wrapping_add(i as u16) as usize] = byte;
        }
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_memory_read_write() {
        let mut mem = FlatMemory::new();

        assert_eq!(mem.read(0x0000), 0x00);
        assert_eq!(mem.read(0xFFFF), 0x00);

        mem.write(0x1234, 0x42);
        assert_eq!(mem.read(0x1234), 0x42);

        // Neighbours untouched
        assert_eq!(mem.read(0x1233), 0x00);
        assert_eq!(mem.read(0x1235), 0x00);
    }

    #[test]
    fn test_read_word_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write(0x0200, 0x34);
        mem.write(0x0201, 0x12);
        assert_eq!(mem.read_word(0x0200), 0x1234);
    }

    #[test]
    fn test_read_word_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFF, 0xCD);
        mem.write(0x0000, 0xAB);
        assert_eq!(mem.read_word(0xFFFF), 0xABCD);
    }

    #[test]
    fn test_load_copies_bytes() {
        let mut mem = FlatMemory::new();
        mem.load(0x8000, &[0xA9, 0x01, 0xEA]);
        assert_eq!(mem.read(0x8000), 0xA9);
        assert_eq!(mem.read(0x8001), 0x01);
        assert_eq!(mem.read(0x8002), 0xEA);
    }
}
