use crate::{CrcWidth, DataRate, InterruptMode, OperationMode, RfOutputPower};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01::{radio::RadioConfig, DataRate, OperationMode};
///
/// let config = RadioConfig::default()
///     .with_mode(OperationMode::Receiver)
///     .with_data_rate(DataRate::Kbps250)
///     .with_rf_frequency(2476);
/// assert_eq!(config.rf_frequency(), 2476);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    mode: OperationMode,
    data_rate: DataRate,
    rf_frequency: u16,
    crc: CrcWidth,
    auto_ack: bool,
    output_power: Option<RfOutputPower>,
    interrupt: Option<InterruptMode>,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::mode()`] | [`OperationMode::Transceiver`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps2`] |
    /// | [`RadioConfig::rf_frequency()`] | `2402` |
    /// | [`RadioConfig::crc()`] | [`CrcWidth::Disabled`] |
    /// | [`RadioConfig::auto_ack()`] | `false` |
    /// | [`RadioConfig::output_power()`] | [`None`] (left as it is) |
    /// | [`RadioConfig::interrupt()`] | [`None`] (left as it is) |
    fn default() -> Self {
        Self::new()
    }
}

impl RadioConfig {
    /// Same as [`RadioConfig::default()`], usable in `const` contexts.
    pub const fn new() -> Self {
        Self {
            mode: OperationMode::Transceiver,
            data_rate: DataRate::Mbps2,
            rf_frequency: 2402,
            crc: CrcWidth::Disabled,
            auto_ack: false,
            output_power: None,
            interrupt: None,
        }
    }

    /// Returns the value set by [`RadioConfig::with_mode()`].
    pub const fn mode(&self) -> OperationMode {
        self.mode
    }

    /// The mode to power up in.
    ///
    /// [`OperationMode::PowerDown`] leaves the radio powered down.
    pub const fn with_mode(self, mode: OperationMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    ///
    /// See [`Nrf24DataRate::set_data_rate()`](fn@crate::radio::prelude::Nrf24DataRate::set_data_rate).
    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_rf_frequency()`].
    pub const fn rf_frequency(&self) -> u16 {
        self.rf_frequency
    }

    /// The RF frequency in MHz.
    ///
    /// See [`Nrf24Channel::set_rf_frequency()`](fn@crate::radio::prelude::Nrf24Channel::set_rf_frequency)
    /// about out of range values.
    pub const fn with_rf_frequency(self, rf_frequency: u16) -> Self {
        Self {
            rf_frequency,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_crc()`].
    pub const fn crc(&self) -> CrcWidth {
        self.crc
    }

    /// The Cyclical Redundancy Checksum (CRC) width.
    pub const fn with_crc(self, crc: CrcWidth) -> Self {
        Self { crc, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> bool {
        self.auto_ack
    }

    /// Enable or disable auto-acknowledgement on all pipes.
    pub const fn with_auto_ack(self, enable: bool) -> Self {
        Self {
            auto_ack: enable,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_output_power()`].
    pub const fn output_power(&self) -> Option<RfOutputPower> {
        self.output_power
    }

    /// The RF output power, only applied in [`OperationMode::Transceiver`] mode.
    pub const fn with_output_power(self, output_power: RfOutputPower) -> Self {
        Self {
            output_power: Some(output_power),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_interrupt()`].
    pub const fn interrupt(&self) -> Option<InterruptMode> {
        self.interrupt
    }

    /// The events that pull the IRQ pin low.
    pub const fn with_interrupt(self, mode: InterruptMode) -> Self {
        Self {
            interrupt: Some(mode),
            ..self
        }
    }
}
