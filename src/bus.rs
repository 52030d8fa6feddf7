//! Atari 2600 address decoding.
//!
//! The 6507 drives only 13 address lines, so every 16-bit address is masked to
//! 0x0000-0x1FFF before it is decoded:
//!
//! | Range         | Target                                  |
//! |---------------|-----------------------------------------|
//! | 0x0000-0x007F | TIA registers (64, mirrored)            |
//! | 0x0080-0x01FF | RIOT RAM (128 bytes, mirrored)          |
//! | 0x0200-0x0FFF | open bus                                |
//! | 0x1000-0x1FFF | cartridge ROM                           |
//!
//! The RIOT mirror at 0x0100-0x01FF puts the 6502 stack page on top of the
//! same 128 bytes as zero-page RAM: SP=0xFF addresses 0x01FF, which aliases
//! 0x00FF. The TIA ignores A6, so 0x0040-0x007F repeats its 64 registers.
//! Open-bus reads return 0xFF and open-bus writes are dropped.

use crate::devices::{Cartridge, Device, Riot, Tia, WriteHook};
use crate::MemoryBus;

/// Mask applied to every address: the 6507 has 13 address lines.
pub const ADDRESS_MASK: u16 = 0x1FFF;

/// Value read from addresses no chip answers.
pub const OPEN_BUS: u8 = 0xFF;

const TIA_END: u16 = 0x007F;
const TIA_MASK: u16 = 0x003F;
const RIOT_START: u16 = 0x0080;
const RIOT_END: u16 = 0x01FF;
const ROM_START: u16 = 0x1000;

/// Where a masked address lands, with the offset inside that chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// TIA register offset, 0x00-0x3F.
    Tia(u16),
    /// RIOT RAM offset, 0x00-0x7F.
    Riot(u16),
    /// Cartridge offset, 0x000-0xFFF.
    Rom(u16),
    /// No chip answers.
    OpenBus,
}

impl Region {
    /// Decodes a CPU address.
    ///
    /// ```
    /// use lib2600::bus::Region;
    ///
    /// assert_eq!(Region::decode(0x0009), Region::Tia(0x09));
    /// assert_eq!(Region::decode(0x0049), Region::Tia(0x09));
    /// assert_eq!(Region::decode(0x01FF), Region::Riot(0x7F));
    /// assert_eq!(Region::decode(0xFFFC), Region::Rom(0x0FFC));
    /// assert_eq!(Region::decode(0x0280), Region::OpenBus);
    /// ```
    pub fn decode(addr: u16) -> Self {
        let addr = addr & ADDRESS_MASK;
        match addr {
            0x0000..=TIA_END => Region::Tia(addr & TIA_MASK),
            RIOT_START..=RIOT_END => Region::Riot((addr - RIOT_START) % 128),
            ROM_START..=ADDRESS_MASK => Region::Rom(addr - ROM_START),
            _ => Region::OpenBus,
        }
    }
}

/// The 6507's view of the machine: TIA, RIOT and cartridge behind a 13-bit
/// decoder.
///
/// # Examples
///
/// ```
/// use lib2600::{AtariBus, MemoryBus};
///
/// let mut bus = AtariBus::new();
/// bus.write(0x0080, 0x42);
/// assert_eq!(bus.read(0x0180), 0x42); // stack page mirrors RIOT RAM
/// assert_eq!(bus.read(0x2080), 0x42); // A13-A15 are not connected
/// assert_eq!(bus.read(0x0200), 0xFF); // open bus
/// ```
pub struct AtariBus {
    tia: Tia,
    riot: Riot,
    cartridge: Cartridge,
}

impl AtariBus {
    /// Creates a bus with zeroed chips, an empty cartridge and no write hooks.
    pub fn new() -> Self {
        Self {
            tia: Tia::new(),
            riot: Riot::new(),
            cartridge: Cartridge::new(),
        }
    }

    /// Creates a bus whose TIA and RIOT report writes to the given hooks.
    pub fn with_hooks(
        tia_hook: impl WriteHook + 'static,
        riot_hook: impl WriteHook + 'static,
    ) -> Self {
        Self {
            tia: Tia::with_hook(tia_hook),
            riot: Riot::with_hook(riot_hook),
            cartridge: Cartridge::new(),
        }
    }

    /// Loads a cartridge image. See [`Cartridge::load`] for truncation and
    /// padding. Returns the number of bytes loaded.
    pub fn load_rom(&mut self, bytes: &[u8]) -> usize {
        let loaded = self.cartridge.load(bytes);
        if loaded < bytes.len() {
            log::info!("Loaded ROM: {} bytes, truncated to {}", bytes.len(), loaded);
        } else {
            log::info!("Loaded ROM: {} bytes", loaded);
        }
        loaded
    }

    /// Clears the TIA and RIOT banks. The cartridge is left alone.
    pub fn reset(&mut self) {
        self.tia.reset();
        self.riot.reset();
    }

    pub fn tia(&self) -> &Tia {
        &self.tia
    }

    pub fn tia_mut(&mut self) -> &mut Tia {
        &mut self.tia
    }

    pub fn riot(&self) -> &Riot {
        &self.riot
    }

    pub fn riot_mut(&mut self) -> &mut Riot {
        &mut self.riot
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }
}

impl Default for AtariBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for AtariBus {
    fn read(&self, addr: u16) -> u8 {
        match Region::decode(addr) {
            Region::Tia(offset) => self.tia.read(offset),
            Region::Riot(offset) => self.riot.read(offset),
            Region::Rom(offset) => self.cartridge.read(offset),
            Region::OpenBus => OPEN_BUS,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match Region::decode(addr) {
            Region::Tia(offset) => self.tia.write(offset, value),
            Region::Riot(offset) => self.riot.write(offset, value),
            Region::Rom(offset) => {
                log::trace!(
                    "Dropped write of 0x{:02X} to ROM offset 0x{:03X}",
                    value,
                    offset
                );
            }
            Region::OpenBus => {
                log::trace!("Open-bus write of 0x{:02X} to 0x{:04X}", value, addr);
            }
        }
    }
}
