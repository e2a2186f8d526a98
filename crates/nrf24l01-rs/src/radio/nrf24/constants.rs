/// Max size in bytes of a single payload to be sent or received.
pub const MAX_PAYLOAD_SIZE: u8 = 32;
/// The width in bytes of the TX_ADDR and RX_ADDR_Px registers.
pub(crate) const ADDRESS_WIDTH: usize = 5;
/// The lowest RF frequency in MHz (channel 0).
pub(crate) const MIN_RF_FREQUENCY: u16 = 2400;
/// The highest RF frequency in MHz accepted by `set_rf_frequency()`.
pub(crate) const MAX_RF_FREQUENCY: u16 = 2525;
/// Used when `set_rf_frequency()` is given something out of range (channel 2).
pub(crate) const DEFAULT_RF_FREQUENCY: u16 = 2402;
/// The highest channel number that fits in RF_CH.
pub(crate) const MAX_CHANNEL: u8 = 127;
/// How long CE is held high to send the payload(s) loaded in the TX FIFO.
/// The datasheet asks for at least 10 microseconds.
pub(crate) const CE_PULSE_US: u32 = 20;
/// Settling time after CE is raised.
pub(crate) const CE_SETTLE_US: u32 = 4;

/// The address of each register in the radio's register map.
///
/// All addresses fit in 5 bits; see [`frame()`].
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    CONFIG = 0x00,
    EN_AA = 0x01,
    EN_RXADDR = 0x02,
    SETUP_AW = 0x03,
    SETUP_RETR = 0x04,
    RF_CH = 0x05,
    RF_SETUP = 0x06,
    STATUS = 0x07,
    OBSERVE_TX = 0x08,
    RPD = 0x09,
    RX_ADDR_P0 = 0x0A,
    RX_ADDR_P1 = 0x0B,
    RX_ADDR_P2 = 0x0C,
    RX_ADDR_P3 = 0x0D,
    RX_ADDR_P4 = 0x0E,
    RX_ADDR_P5 = 0x0F,
    TX_ADDR = 0x10,
    RX_PW_P0 = 0x11,
    RX_PW_P1 = 0x12,
    RX_PW_P2 = 0x13,
    RX_PW_P3 = 0x14,
    RX_PW_P4 = 0x15,
    RX_PW_P5 = 0x16,
    FIFO_STATUS = 0x17,
    DYNPD = 0x1C,
    FEATURE = 0x1D,
}

impl Register {
    /// The register's 5-bit address.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// How many bytes the register holds.
    pub const fn width(self) -> usize {
        match self {
            Register::RX_ADDR_P0
            | Register::RX_ADDR_P1
            | Register::RX_ADDR_P2
            | Register::RX_ADDR_P3
            | Register::RX_ADDR_P4
            | Register::RX_ADDR_P5
            | Register::TX_ADDR => ADDRESS_WIDTH,
            _ => 1,
        }
    }

    /// The address register of a receive `pipe`.
    pub const fn rx_addr(pipe: crate::RxPipe) -> Self {
        match pipe {
            crate::RxPipe::P0 => Register::RX_ADDR_P0,
            crate::RxPipe::P1 => Register::RX_ADDR_P1,
            crate::RxPipe::P2 => Register::RX_ADDR_P2,
            crate::RxPipe::P3 => Register::RX_ADDR_P3,
            crate::RxPipe::P4 => Register::RX_ADDR_P4,
            crate::RxPipe::P5 => Register::RX_ADDR_P5,
        }
    }

    /// The payload width register of a receive `pipe`.
    pub const fn rx_pw(pipe: crate::RxPipe) -> Self {
        match pipe {
            crate::RxPipe::P0 => Register::RX_PW_P0,
            crate::RxPipe::P1 => Register::RX_PW_P1,
            crate::RxPipe::P2 => Register::RX_PW_P2,
            crate::RxPipe::P3 => Register::RX_PW_P3,
            crate::RxPipe::P4 => Register::RX_PW_P4,
            crate::RxPipe::P5 => Register::RX_PW_P5,
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    /// Fails with the given value if it is wider than 5 bits or not a register's address.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0x00 => Register::CONFIG,
            0x01 => Register::EN_AA,
            0x02 => Register::EN_RXADDR,
            0x03 => Register::SETUP_AW,
            0x04 => Register::SETUP_RETR,
            0x05 => Register::RF_CH,
            0x06 => Register::RF_SETUP,
            0x07 => Register::STATUS,
            0x08 => Register::OBSERVE_TX,
            0x09 => Register::RPD,
            0x0A => Register::RX_ADDR_P0,
            0x0B => Register::RX_ADDR_P1,
            0x0C => Register::RX_ADDR_P2,
            0x0D => Register::RX_ADDR_P3,
            0x0E => Register::RX_ADDR_P4,
            0x0F => Register::RX_ADDR_P5,
            0x10 => Register::TX_ADDR,
            0x11 => Register::RX_PW_P0,
            0x12 => Register::RX_PW_P1,
            0x13 => Register::RX_PW_P2,
            0x14 => Register::RX_PW_P3,
            0x15 => Register::RX_PW_P4,
            0x16 => Register::RX_PW_P5,
            0x17 => Register::FIFO_STATUS,
            0x1C => Register::DYNPD,
            0x1D => Register::FEATURE,
            _ => return Err(value),
        })
    }
}

/// The SPI commands understood by the radio.
///
/// `Read` and `Write` are combined with a [`Register`] by [`frame()`];
/// the others are sent as they are, except `WriteAckPayload` which is combined
/// with a pipe number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// `R_REGISTER`
    Read = 0x00,
    /// `W_REGISTER`, only allowed in power down or standby modes
    Write = 0x20,
    /// `R_RX_PL_WID`
    ReadRxPayloadWidth = 0x60,
    /// `R_RX_PAYLOAD`
    ReadRxPayload = 0x61,
    /// `W_TX_PAYLOAD`
    WriteTxPayload = 0xA0,
    /// `W_ACK_PAYLOAD`, the pipe number goes in the 3 low bits
    WriteAckPayload = 0xA8,
    /// `FLUSH_TX`
    FlushTx = 0xE1,
    /// `FLUSH_RX`
    FlushRx = 0xE2,
    /// `NOP`, used to fetch the STATUS register
    Nop = 0xFF,
}

impl Command {
    pub const fn opcode(self) -> u8 {
        self as u8
    }
}

/// Build the first byte of a register access: `command | address`.
///
/// The address occupies the low 5 bits and the `Read`/`Write` opcodes never touch
/// them, so the combination is lossless.
pub const fn frame(command: Command, register: Register) -> u8 {
    debug_assert!(register.addr() < 0x20);
    command.opcode() | (register.addr() & 0x1F)
}

/// A private module to encapsulate bit mnemonics
pub(crate) mod mnemonics {
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;
    /// Written to STATUS to clear RX_DR, TX_DS and MAX_RT.
    pub const CLEAR_IRQ_FLAGS: u8 = 0x7E;
    /// All 6 pipes in EN_AA, EN_RXADDR or DYNPD.
    pub const ALL_PIPES: u8 = 0x3F;
}
