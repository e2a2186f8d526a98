//! This module defines the value types used by the radio's traits.
//! Each type knows how it is encoded in the radio's registers.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// The radio's operating mode.
///
/// The nRF24L01 has no register holding this directly. It is derived from the
/// `PWR_UP` and `PRIM_RX` bits of the CONFIG register and from the level of the CE pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationMode {
    /// The radio is asleep. Registers keep their values but nothing is sent or received.
    PowerDown,
    /// The radio is powered up with `PRIM_RX` cleared (standby, ready to transmit).
    Transceiver,
    /// The radio is powered up with `PRIM_RX` set (listening while CE is high).
    Receiver,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for OperationMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OperationMode::PowerDown => defmt::write!(fmt, "power down"),
            OperationMode::Transceiver => defmt::write!(fmt, "transceiver"),
            OperationMode::Receiver => defmt::write!(fmt, "receiver"),
        }
    }
}

impl Display for OperationMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            OperationMode::PowerDown => write!(f, "power down"),
            OperationMode::Transceiver => write!(f, "transceiver"),
            OperationMode::Receiver => write!(f, "receiver"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 250 Kbps
    Kbps250,
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
}

impl DataRate {
    /// `RF_DR_LOW` (bit 5) and `RF_DR_HIGH` (bit 3) of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Kbps250 => 0x20,
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x08,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x08 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Kbps250 => write!(f, "250 Kbps"),
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
        }
    }
}

/// The power of the transmitter's output stage, in dBm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RfOutputPower {
    /// -18 dBm
    Minus18Dbm,
    /// -12 dBm
    Minus12Dbm,
    /// -6 dBm
    Minus6Dbm,
    /// 0 dBm, the chip's reset value
    ZeroDbm,
}

impl RfOutputPower {
    /// `RF_PWR` (bits 2:1) of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0b110;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            RfOutputPower::Minus18Dbm => 0,
            RfOutputPower::Minus12Dbm => 2,
            RfOutputPower::Minus6Dbm => 4,
            RfOutputPower::ZeroDbm => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => RfOutputPower::Minus18Dbm,
            2 => RfOutputPower::Minus12Dbm,
            4 => RfOutputPower::Minus6Dbm,
            _ => RfOutputPower::ZeroDbm,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for RfOutputPower {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            RfOutputPower::Minus18Dbm => defmt::write!(fmt, "-18 dBm"),
            RfOutputPower::Minus12Dbm => defmt::write!(fmt, "-12 dBm"),
            RfOutputPower::Minus6Dbm => defmt::write!(fmt, "-6 dBm"),
            RfOutputPower::ZeroDbm => defmt::write!(fmt, "0 dBm"),
        }
    }
}

impl Display for RfOutputPower {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RfOutputPower::Minus18Dbm => write!(f, "-18 dBm"),
            RfOutputPower::Minus12Dbm => write!(f, "-12 dBm"),
            RfOutputPower::Minus6Dbm => write!(f, "-6 dBm"),
            RfOutputPower::ZeroDbm => write!(f, "0 dBm"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
/// The hardware forces CRC on while auto-acknowledgement is enabled on any pipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcWidth {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcWidth {
    /// `EN_CRC` (bit 3) and `CRCO` (bit 2) of the CONFIG register.
    pub(crate) const MASK: u8 = 0b1100;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcWidth::Disabled => 0,
            CrcWidth::Bit8 => 8,
            CrcWidth::Bit16 => 12,
        }
    }

    /// `CRCO` means nothing while `EN_CRC` is cleared.
    pub(crate) const fn from_bits(value: u8) -> Self {
        if value & 8 == 0 {
            CrcWidth::Disabled
        } else if value & 4 == 0 {
            CrcWidth::Bit8
        } else {
            CrcWidth::Bit16
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcWidth {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcWidth::Disabled => defmt::write!(fmt, "disabled"),
            CrcWidth::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcWidth::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcWidth {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcWidth::Disabled => write!(f, "disabled"),
            CrcWidth::Bit8 => write!(f, "8 bit"),
            CrcWidth::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The set of hardware events that pull the IRQ pin low.
///
/// Events left out of the set are still recorded in the STATUS register;
/// they just do not assert the IRQ pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptMode {
    /// No event asserts the IRQ pin.
    Disabled,
    /// Only "RX data ready".
    RxOnly,
    /// Only "TX data sent".
    TxOnly,
    /// "RX data ready" and "TX data sent".
    RxAndTx,
    /// Only "maximum retransmits reached".
    RetransmitOnly,
    /// "TX data sent" and "maximum retransmits reached".
    TxAndRetransmit,
}

impl InterruptMode {
    /// The STATUS/CONFIG bits of the events in this set.
    pub(crate) const fn event_bits(self) -> u8 {
        match self {
            InterruptMode::Disabled => 0,
            InterruptMode::RxOnly => 0x40,
            InterruptMode::TxOnly => 0x20,
            InterruptMode::RxAndTx => 0x60,
            InterruptMode::RetransmitOnly => 0x10,
            InterruptMode::TxAndRetransmit => 0x30,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for InterruptMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            InterruptMode::Disabled => defmt::write!(fmt, "disabled"),
            InterruptMode::RxOnly => defmt::write!(fmt, "RX"),
            InterruptMode::TxOnly => defmt::write!(fmt, "TX"),
            InterruptMode::RxAndTx => defmt::write!(fmt, "RX+TX"),
            InterruptMode::RetransmitOnly => defmt::write!(fmt, "MAX_RT"),
            InterruptMode::TxAndRetransmit => defmt::write!(fmt, "TX+MAX_RT"),
        }
    }
}

impl Display for InterruptMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            InterruptMode::Disabled => write!(f, "disabled"),
            InterruptMode::RxOnly => write!(f, "RX"),
            InterruptMode::TxOnly => write!(f, "TX"),
            InterruptMode::RxAndTx => write!(f, "RX+TX"),
            InterruptMode::RetransmitOnly => write!(f, "MAX_RT"),
            InterruptMode::TxAndRetransmit => write!(f, "TX+MAX_RT"),
        }
    }
}

/// One of the radio's six receive data pipes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RxPipe {
    /// pipe 0, also used to receive auto-ack packets while transmitting
    P0,
    /// pipe 1
    P1,
    /// pipe 2
    P2,
    /// pipe 3
    P3,
    /// pipe 4
    P4,
    /// pipe 5
    P5,
}

impl RxPipe {
    /// The pipe's number, which is also its bit index in EN_AA, EN_RXADDR and DYNPD.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub(crate) const fn mask(self) -> u8 {
        1 << self.index()
    }
}

impl TryFrom<u8> for RxPipe {
    type Error = u8;

    /// Fails with the given number if it is not in range [0, 5].
    fn try_from(value: u8) -> core::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(RxPipe::P0),
            1 => Ok(RxPipe::P1),
            2 => Ok(RxPipe::P2),
            3 => Ok(RxPipe::P3),
            4 => Ok(RxPipe::P4),
            5 => Ok(RxPipe::P5),
            _ => Err(value),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for RxPipe {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "pipe {=u8}", self.index())
    }
}

impl Display for RxPipe {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "pipe {}", self.index())
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The STATUS register, as clocked back in the first byte of every SPI transaction.
#[bitfield(u8, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    #[bits(3, access = None)]
    rx_pipe_number: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the IRQ flags. Useful for STATUS and CONFIG registers.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// The pipe whose payload is at the head of the RX FIFO.
    ///
    /// Returns [`None`] when the RX FIFO is empty.
    pub const fn rx_pipe(&self) -> Option<RxPipe> {
        match (self.into_bits() >> 1) & 7 {
            0 => Some(RxPipe::P0),
            1 => Some(RxPipe::P1),
            2 => Some(RxPipe::P2),
            3 => Some(RxPipe::P3),
            4 => Some(RxPipe::P4),
            5 => Some(RxPipe::P5),
            _ => None,
        }
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}
