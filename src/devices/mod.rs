//! Chips on the Atari 2600 bus.
//!
//! Each chip sees only offsets within its own window; [`AtariBus`](crate::AtariBus)
//! does the address decoding and hands the chip a zero-based offset.
//!
//! # Architecture
//!
//! - **Device trait**: offset-based read/write interface shared by every chip
//! - **WriteHook**: side-effect callback a chip invokes after storing a write
//! - **Device implementations**: TIA register bank, RIOT RAM bank, cartridge ROM
//!
//! # Example
//!
//! ```rust
//! use lib2600::{Device, Tia};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let log = Rc::clone(&seen);
//! let mut tia = Tia::with_hook(move |offset, value| log.borrow_mut().push((offset, value)));
//!
//! tia.write(0x09, 0x84); // COLUBK
//! assert_eq!(tia.read(0x09), 0x84);
//! assert_eq!(*seen.borrow(), vec![(0x09, 0x84)]);
//! ```

pub mod cartridge;
pub mod riot;
pub mod tia;

pub use cartridge::Cartridge;
pub use riot::Riot;
pub use tia::Tia;

/// Abstract interface for memory-mapped chips.
///
/// The bus calls these methods with offset-based addressing (0 to size-1) so
/// chips stay independent of where they are mapped.
///
/// # Design
///
/// - **Offset-based**: Device receives offset (0 to size-1), not absolute address
/// - **Immutable read**: Reads have no side effects on this machine
/// - **Mutable write**: Explicit side effects (register updates, hook calls)
///
/// # Examples
///
/// ```rust
/// use lib2600::Device;
///
/// struct Latch {
///     value: u8,
/// }
///
/// impl Device for Latch {
///     fn read(&self, _offset: u16) -> u8 {
///         self.value
///     }
///
///     fn write(&mut self, _offset: u16, value: u8) {
///         self.value = value;
///     }
///
///     fn size(&self) -> u16 {
///         1
///     }
/// }
/// ```
pub trait Device {
    /// Read byte from device at offset relative to device base address.
    ///
    /// * `offset` - Offset within device's address space (0 to size-1)
    fn read(&self, offset: u16) -> u8;

    /// Write byte to device at offset relative to device base address.
    ///
    /// * `offset` - Offset within device's address space (0 to size-1)
    /// * `value` - Byte value to write
    fn write(&mut self, offset: u16, value: u8);

    /// Return size of device's address space in bytes.
    fn size(&self) -> u16;
}

/// Observer for chip register writes.
///
/// A chip stores the value first and then calls `on_write`, so a hook that
/// reads the register back sees the new value. Hooks run synchronously, at the
/// moment of the write, in the middle of the instruction that made it.
///
/// Any `FnMut(u16, u8)` closure is a hook.
pub trait WriteHook {
    /// Called with the offset within the chip's window and the stored value.
    fn on_write(&mut self, offset: u16, value: u8);
}

impl<F> WriteHook for F
where
    F: FnMut(u16, u8),
{
    fn on_write(&mut self, offset: u16, value: u8) {
        self(offset, value)
    }
}

/// Hook that ignores every write. Chips use it unless given another one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHook;

impl WriteHook for NoHook {
    fn on_write(&mut self, _offset: u16, _value: u8) {}
}
