use bitfield_struct::bitfield;

use super::mnemonics;
use crate::{CrcWidth, InterruptMode, StatusFlags};

/// The CONFIG register.
///
/// The 3 IRQ bits are "mask" bits: a set bit keeps the event off the IRQ pin.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    #[bits(1, access = None)]
    mask_rx_dr: bool,

    #[bits(1, access = None)]
    mask_tx_ds: bool,

    #[bits(1, access = None)]
    mask_max_rt: bool,

    #[bits(2, access = None)]
    crc: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc(&self) -> CrcWidth {
        CrcWidth::from_bits(self.into_bits())
    }

    pub const fn with_crc(self, width: CrcWidth) -> Self {
        Self::from_bits(self.into_bits() & !CrcWidth::MASK | width.into_bits())
    }

    /// Mask every IRQ event that is not part of `mode`.
    pub const fn with_interrupt(self, mode: InterruptMode) -> Self {
        let masked = StatusFlags::IRQ_MASK & !mode.event_bits();
        Self::from_bits(self.into_bits() & !StatusFlags::IRQ_MASK | masked)
    }

    /// Do all events of `mode` reach the IRQ pin?
    #[cfg(any(
        test,
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    ))]
    pub const fn irq_enabled(&self, mode: InterruptMode) -> bool {
        self.into_bits() & mode.event_bits() == 0
    }

    /// Power up with `PRIM_RX` set (`rx`) or cleared; bits 2 to 7 are left as they are.
    pub const fn with_power_and_rx(self, rx: bool) -> Self {
        let prim_rx = if rx { mnemonics::PRIM_RX } else { 0 };
        Self::from_bits(self.into_bits() & 0xFC | mnemonics::PWR_UP | prim_rx)
    }
}

/// The FIFO_STATUS register.
#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _padding: u8,

    #[bits(1, access = None)]
    tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

/// The FEATURE register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _padding: u8,

    pub dynamic_payloads: bool,

    pub ack_payloads: bool,

    #[bits(1, access = None)]
    dynamic_ack: bool,
}
