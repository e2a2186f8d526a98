#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::with_chip_select()`](fn@crate::radio::Nrf24l01::with_chip_select)
//! - [`Nrf24l01::initialize()`](radio/struct.Nrf24l01.html#method.initialize)
//! - [`Nrf24l01::set_tx_address()`](radio/struct.Nrf24l01.html#method.set_tx_address)
//! - [`Nrf24l01::attach_receive_payload()`](radio/struct.Nrf24l01.html#method.attach_receive_payload)
//! - [`Nrf24l01::attach_transmitting_payload()`](radio/struct.Nrf24l01.html#method.attach_transmitting_payload)
//! - [`Nrf24l01::send_packet()`](radio/struct.Nrf24l01.html#method.send_packet)
//! - [`Nrf24l01::read_packet()`](radio/struct.Nrf24l01.html#method.read_packet)
//! - [`Nrf24l01::start_listening()`](radio/struct.Nrf24l01.html#method.start_listening)
//! - [`Nrf24l01::stop_listening()`](radio/struct.Nrf24l01.html#method.stop_listening)
//! - [`Nrf24l01::set_channel()`](radio/struct.Nrf24l01.html#method.set_channel)
//! - [`Nrf24l01::set_rf_frequency()`](radio/struct.Nrf24l01.html#method.set_rf_frequency)
//!
//! ## Interrupt API
//!
//! - [`Nrf24l01::attach()`](radio/struct.Nrf24l01.html#method.attach)
//! - [`Nrf24l01::set_interrupt()`](radio/struct.Nrf24l01.html#method.set_interrupt)
//! - [`Nrf24l01::clear_interrupt_flags()`](radio/struct.Nrf24l01.html#method.clear_interrupt_flags)
//! - [`Nrf24l01::status_register()`](radio/struct.Nrf24l01.html#method.status_register)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01::with_config()`](radio/struct.Nrf24l01.html#method.with_config)
//! - [`Nrf24l01::power_up()`](radio/struct.Nrf24l01.html#method.power_up)
//! - [`Nrf24l01::power_down()`](radio/struct.Nrf24l01.html#method.power_down)
//! - [`Nrf24l01::set_mode()`](radio/struct.Nrf24l01.html#method.set_mode)
//! - [`Nrf24l01::set_power_up_and_mode()`](radio/struct.Nrf24l01.html#method.set_power_up_and_mode)
//! - [`Nrf24l01::set_data_rate()`](radio/struct.Nrf24l01.html#method.set_data_rate)
//! - [`Nrf24l01::set_rf_output_power()`](radio/struct.Nrf24l01.html#method.set_rf_output_power)
//! - [`Nrf24l01::set_crc()`](radio/struct.Nrf24l01.html#method.set_crc)
//! - [`Nrf24l01::set_auto_acknowledgement()`](radio/struct.Nrf24l01.html#method.set_auto_acknowledgement)
//! - [`Nrf24l01::set_auto_acknowledgement_pipe()`](radio/struct.Nrf24l01.html#method.set_auto_acknowledgement_pipe)
//! - [`Nrf24l01::set_payload_size()`](radio/struct.Nrf24l01.html#method.set_payload_size)
//! - [`Nrf24l01::enable_dynamic_payload()`](radio/struct.Nrf24l01.html#method.enable_dynamic_payload)
//! - [`Nrf24l01::enable_payload_ack_mode()`](radio/struct.Nrf24l01.html#method.enable_payload_ack_mode)
//!
#![no_std]

mod types;
pub use types::{
    CrcWidth, DataRate, FifoState, InterruptMode, OperationMode, RfOutputPower, RxPipe,
    StatusFlags,
};
pub mod radio;
