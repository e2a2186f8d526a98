//! This module defines the traits that need to be imported to use the radio.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use crate::types::{
    CrcWidth, DataRate, FifoState, InterruptMode, OperationMode, RfOutputPower, RxPipe,
    StatusFlags,
};

use super::RadioConfig;

/// A trait to represent bringing the radio into a known configuration.
pub trait Nrf24Init {
    type ConfigErrorType;

    /// Disable auto-acknowledgement, set the RF frequency, data rate and CRC (disabled),
    /// then power up the radio in the given `mode`.
    ///
    /// This is [`Nrf24Init::with_config()`] using [`RadioConfig::default()`] with
    /// the given `mode`, `data_rate` and `rf_frequency`.
    fn initialize(
        &mut self,
        mode: OperationMode,
        data_rate: DataRate,
        rf_frequency: u16,
    ) -> Result<(), Self::ConfigErrorType>;

    /// Apply every setting of the given `config`.
    ///
    /// The settings are written in this order: auto-acknowledgement, RF frequency,
    /// data rate, CRC, power and mode, then the RF output power and the interrupt
    /// mask if `config` specifies them.
    /// The RF output power is only applied if `config` asks for
    /// [`OperationMode::Transceiver`].
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent the radio's power and mode state machine.
pub trait Nrf24Power {
    type PowerErrorType;

    /// Set the `PWR_UP` bit of the CONFIG register.
    ///
    /// The recorded mode becomes [`OperationMode::Receiver`] or
    /// [`OperationMode::Transceiver`] depending on the `PRIM_RX` bit.
    ///
    /// The radio needs about 1.5 ms (up to 5 ms) in standby before it can
    /// send or receive; this function does not wait.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Drive CE low and clear the `PWR_UP` bit of the CONFIG register.
    ///
    /// In power down mode the radio consumes about 900 nA.
    /// Register values are kept.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Set (or clear) the `PRIM_RX` bit without touching the `PWR_UP` bit.
    ///
    /// The radio should be powered up first; the requested mode is only
    /// recorded if it is. Passing [`OperationMode::PowerDown`] is the same as
    /// calling [`Nrf24Power::power_down()`].
    fn set_mode(&mut self, mode: OperationMode) -> Result<(), Self::PowerErrorType>;

    /// The mode recorded by the last power or mode change.
    fn mode(&self) -> OperationMode;

    /// Power up and select the `mode` with a single write to the CONFIG register.
    ///
    /// The CRC and IRQ mask bits are left as they are.
    /// Passing [`OperationMode::PowerDown`] is the same as calling
    /// [`Nrf24Power::power_down()`].
    fn set_power_up_and_mode(&mut self, mode: OperationMode) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up (as far as the driver knows)?
    fn is_powered(&self) -> bool;
}

/// A trait to represent manipulation of a channel (aka frequency).
pub trait Nrf24Channel {
    type ChannelErrorType;

    /// Set the radio's RF channel.
    ///
    /// The channel is an offset in MHz from 2400 MHz.
    /// Any `channel` above 127 is saturated to 127.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the RF channel from the radio's RF_CH register.
    fn channel(&mut self) -> Result<u8, Self::ChannelErrorType>;

    /// Set the RF frequency in MHz.
    ///
    /// A `rf_frequency` outside the range [2400, 2525] falls back to 2402 MHz (channel 2).
    fn set_rf_frequency(&mut self, rf_frequency: u16) -> Result<(), Self::ChannelErrorType>;

    /// The RF frequency in MHz, as recorded by the last channel or frequency change.
    ///
    /// After [`Nrf24Channel::set_channel()`] with channel 126 or 127 this is 2526 or
    /// 2527 MHz, which [`Nrf24Channel::set_rf_frequency()`] does not accept. Use
    /// [`Nrf24Channel::channel()`] to restore such a channel.
    fn rf_frequency(&self) -> u16;
}

/// A trait to represent manipulation of data rate.
pub trait Nrf24DataRate {
    type DataRateErrorType;

    /// Set the radio's data rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;

    /// Get the radio's data rate from the RF_SETUP register.
    ///
    /// Both `RF_DR` bits set is a reserved encoding and is reported as
    /// [`Nrf24Error::BinaryCorruption`](crate::radio::Nrf24Error::BinaryCorruption).
    fn data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;
}

/// A trait to represent manipulation of the transmitter's output power.
pub trait Nrf24OutputPower {
    type OutputPowerErrorType;

    /// Set the RF output power.
    ///
    /// This is refused with
    /// [`Nrf24Error::NotAsTx`](crate::radio::Nrf24Error::NotAsTx) unless the radio is
    /// powered up in [`OperationMode::Transceiver`] mode.
    fn set_rf_output_power(
        &mut self,
        output_power: RfOutputPower,
    ) -> Result<(), Self::OutputPowerErrorType>;

    /// Get the RF output power from the RF_SETUP register.
    fn rf_output_power(&mut self) -> Result<RfOutputPower, Self::OutputPowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checking.
pub trait Nrf24Crc {
    type CrcErrorType;

    /// Set the CRC width (or disable it).
    ///
    /// The radio ignores [`CrcWidth::Disabled`] while auto-acknowledgement is
    /// enabled on any pipe.
    fn set_crc(&mut self, width: CrcWidth) -> Result<(), Self::CrcErrorType>;

    /// Get the CRC width from the CONFIG register.
    fn crc(&mut self) -> Result<CrcWidth, Self::CrcErrorType>;
}

/// A trait to represent manipulation of the hardware's automatic acknowledgement.
pub trait Nrf24AutoAck {
    type AutoAckErrorType;

    /// Enable or disable auto-acknowledgement on all pipes.
    fn set_auto_acknowledgement(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable auto-acknowledgement on the given `pipe` only.
    ///
    /// A `pipe` above 5 is refused with
    /// [`Nrf24Error::InvalidPipe`](crate::radio::Nrf24Error::InvalidPipe)
    /// and nothing is written.
    fn set_auto_acknowledgement_pipe(
        &mut self,
        enable: bool,
        pipe: u8,
    ) -> Result<(), Self::AutoAckErrorType>;

    /// Set how many times a packet is retransmitted before giving up.
    ///
    /// The `count` is saturated to 15. The retransmit delay is left as it is.
    fn set_auto_retransmit_max_count(&mut self, count: u8)
        -> Result<(), Self::AutoAckErrorType>;

    /// Allow (or disallow) payloads attached to acknowledgement packets.
    ///
    /// ACK payloads also require dynamic payloads
    /// (see [`Nrf24PayloadSize::enable_dynamic_payload()`]).
    fn enable_payload_ack_mode(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Load a payload to be attached to the next acknowledgement sent on `pipe`.
    ///
    /// At most 32 bytes of `buf` are used.
    fn load_auto_ack_payload(
        &mut self,
        pipe: RxPipe,
        buf: &[u8],
    ) -> Result<(), Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of data pipes and addresses.
///
/// Addresses are 5 bytes long, least significant byte first.
/// Pipes 2 to 5 only store their first byte and borrow the other 4 from pipe 1.
pub trait Nrf24Pipe {
    type PipeErrorType;

    /// Write the `address` of `pipe` and enable the pipe in the EN_RXADDR register.
    ///
    /// Other pipes are left enabled or disabled as they were.
    fn attach_receive_address_to_pipe(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
    ) -> Result<(), Self::PipeErrorType>;

    /// Fully configure `pipe` for receiving: address, enable bit and payload size.
    fn attach_receive_payload(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
        payload_size: u8,
    ) -> Result<(), Self::PipeErrorType>;

    /// Fully configure the radio for transmitting to `address`.
    ///
    /// `pipe` is bound and enabled with the same `address`, then TX_ADDR is
    /// written, then `pipe` gets the `payload_size`. Auto-acknowledgements only
    /// arrive on [`RxPipe::P0`], so that is the usual choice.
    fn attach_transmitting_payload(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
        payload_size: u8,
    ) -> Result<(), Self::PipeErrorType>;

    /// Clear the `pipe`'s bit in the EN_RXADDR register.
    fn detach_receive_pipe(&mut self, pipe: RxPipe) -> Result<(), Self::PipeErrorType>;

    /// Write the TX_ADDR register.
    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType>;

    /// Read the TX_ADDR register.
    fn tx_address(&mut self) -> Result<[u8; 5], Self::PipeErrorType>;

    /// Read the address register of `pipe`.
    ///
    /// Pipes 2 to 5 only hold the first byte; the other 4 bytes are whatever the
    /// radio clocks out after it.
    fn rx_address(&mut self, pipe: RxPipe) -> Result<[u8; 5], Self::PipeErrorType>;
}

/// A trait to represent manipulation of payload sizes.
pub trait Nrf24PayloadSize {
    type PayloadSizeErrorType;

    /// Set the static payload size of `pipe`.
    ///
    /// A `size` above 32 is saturated to 32. A `size` of 0 disables the pipe
    /// for static payloads.
    fn set_payload_size(&mut self, pipe: RxPipe, size: u8)
        -> Result<(), Self::PayloadSizeErrorType>;

    /// The payload size last given to [`Nrf24PayloadSize::set_payload_size()`].
    fn payload_size(&self) -> u8;

    /// Enable (or disable) dynamic payload sizes on all pipes.
    fn enable_dynamic_payload(&mut self, enable: bool) -> Result<(), Self::PayloadSizeErrorType>;

    /// The size of the payload at the head of the RX FIFO, when dynamic payloads are enabled.
    ///
    /// A size above 32 means the payload is corrupt; it is reported as
    /// [`Nrf24Error::BinaryCorruption`](crate::radio::Nrf24Error::BinaryCorruption)
    /// and the RX FIFO should be flushed.
    fn dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadSizeErrorType>;
}

/// A trait to represent manipulation of the radio's FIFOs.
pub trait Nrf24Fifo {
    type FifoErrorType;

    /// Discard all 3 levels of the RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard all 3 levels of the TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Read the raw FIFO_STATUS register.
    fn fifo_status_register(&mut self) -> Result<u8, Self::FifoErrorType>;

    /// Get the state of the TX FIFO (`about_tx` is `true`) or the RX FIFO.
    fn fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a payload waiting in the RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent sending and receiving packets.
pub trait Nrf24Packet {
    type PacketErrorType;

    /// Load `buf` into the TX FIFO and pulse CE to transmit it.
    ///
    /// At most 32 bytes of `buf` are sent. This returns once the payload is loaded;
    /// completion is signaled later by the `TX_DS` (or `MAX_RT`) flag.
    fn send_packet(&mut self, buf: &[u8]) -> Result<(), Self::PacketErrorType>;

    /// Pulse CE high for at least 10 microseconds, which transmits the loaded payload(s).
    fn start_transfer(&mut self) -> Result<(), Self::PacketErrorType>;

    /// Read the payload at the head of the RX FIFO into `buf`.
    ///
    /// At most 32 bytes are read. Returns how many bytes were read; if `buf` is
    /// empty, nothing is sent to the radio.
    /// The driver does not check that a payload is available first; see
    /// [`Nrf24Fifo::available()`] or the `RX_DR` flag.
    fn read_packet(&mut self, buf: &mut [u8]) -> Result<u8, Self::PacketErrorType>;

    /// Flush both FIFOs and drive CE high to start listening.
    fn start_listening(&mut self) -> Result<(), Self::PacketErrorType>;

    /// Drive CE low and flush both FIFOs.
    fn stop_listening(&mut self) -> Result<(), Self::PacketErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`] and the IRQ line.
pub trait Nrf24Status {
    type StatusErrorType;

    /// Fetch the STATUS register (using a `NOP` command).
    fn status_register(&mut self) -> Result<u8, Self::StatusErrorType>;

    /// The [`StatusFlags`] cached from the latest SPI transaction.
    fn status_flags(&self) -> StatusFlags;

    /// Read the raw CONFIG register.
    fn config_status_register(&mut self) -> Result<u8, Self::StatusErrorType>;

    /// Clear the `RX_DR`, `TX_DS` and `MAX_RT` flags.
    ///
    /// This needs to be done after an event has been handled, or the IRQ pin stays low.
    fn clear_interrupt_flags(&mut self) -> Result<(), Self::StatusErrorType>;

    /// Select which events pull the IRQ pin low.
    fn set_interrupt(&mut self, mode: InterruptMode) -> Result<(), Self::StatusErrorType>;

    /// Run `handler` on every falling edge of the IRQ pin.
    ///
    /// Passing [`None`] detaches any previous handler.
    /// The handler carries no data; it should only record that an event happened.
    fn attach(&mut self, handler: Option<fn()>);
}

/// A trait to represent debug output.
pub trait Nrf24Details {
    type DetailsErrorType;

    /// Print the radio's configuration.
    ///
    /// This uses `defmt::println!` with the `defmt` feature (on bare-metal targets),
    /// or `std::println!` with the `std` feature. Otherwise it does nothing.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
