//! RIOT (6532 RAM-I/O-Timer) modelled as a flat 128-byte bank.
//!
//! Only the RAM half of the chip exists here: no interval timer, no I/O ports,
//! no interrupts. The bus mirrors this bank across 0x0080-0x01FF, so both
//! zero-page variables and the stack land in it.

use super::{Device, NoHook, WriteHook};

/// Number of bytes in the RIOT bank.
pub const RIOT_SIZE: usize = 128;

/// RIOT RAM bank.
pub struct Riot {
    ram: [u8; RIOT_SIZE],
    hook: Box<dyn WriteHook>,
}

impl Riot {
    /// Creates a zeroed RIOT with no write hook.
    pub fn new() -> Self {
        Self::with_hook(NoHook)
    }

    /// Creates a RIOT that reports every write to `hook`.
    pub fn with_hook(hook: impl WriteHook + 'static) -> Self {
        Self {
            ram: [0; RIOT_SIZE],
            hook: Box::new(hook),
        }
    }

    /// Replaces the write hook.
    pub fn set_hook(&mut self, hook: impl WriteHook + 'static) {
        self.hook = Box::new(hook);
    }

    /// Reads one RAM byte.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is 128 or more.
    pub fn read_register(&self, offset: u16) -> u8 {
        assert!(
            (offset as usize) < RIOT_SIZE,
            "RIOT offset 0x{offset:02X} out of range"
        );
        self.ram[offset as usize]
    }

    /// Stores `value`, then notifies the write hook.
    ///
    /// # Panics
    ///
    /// Panics if `offset` is 128 or more.
    pub fn write_register(&mut self, offset: u16, value: u8) {
        assert!(
            (offset as usize) < RIOT_SIZE,
            "RIOT offset 0x{offset:02X} out of range"
        );
        self.ram[offset as usize] = value;
        self.hook.on_write(offset, value);
    }

    /// Zeroes the RAM. The hook is kept and not notified.
    pub fn reset(&mut self) {
        self.ram = [0; RIOT_SIZE];
    }

    /// Read-only view of the RAM.
    pub fn ram(&self) -> &[u8; RIOT_SIZE] {
        &self.ram
    }
}

impl Default for Riot {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Riot {
    fn read(&self, offset: u16) -> u8 {
        self.read_register(offset)
    }

    fn write(&mut self, offset: u16, value: u8) {
        self.write_register(offset, value);
    }

    fn size(&self) -> u16 {
        RIOT_SIZE as u16
    }
}
