use crate::{DataRate, OperationMode, RfOutputPower};

use super::nrf24::{DEFAULT_RF_FREQUENCY, MAX_CHANNEL, MAX_PAYLOAD_SIZE, MIN_RF_FREQUENCY};

/// What the driver knows about the radio without asking it.
///
/// [`Nrf24l01`](crate::radio::Nrf24l01) owns exactly one of these. Every
/// operation that changes the radio's configuration replaces it with an updated
/// copy built by the `with_*()` functions below, so the value returned by
/// [`Nrf24l01::state()`](fn@crate::radio::Nrf24l01::state) always reflects the
/// last completed operation.
///
/// The radio's registers are volatile; they (and this state) are only
/// meaningful until the radio is power cycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceState {
    mode: OperationMode,
    data_rate: DataRate,
    output_power: RfOutputPower,
    rf_frequency: u16,
    payload_size: u8,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceState {
    /// The state of a radio that was just wired up: powered down, 2 Mbps, 0 dBm,
    /// 2402 MHz and 32 byte payloads.
    pub const fn new() -> Self {
        Self {
            mode: OperationMode::PowerDown,
            data_rate: DataRate::Mbps2,
            output_power: RfOutputPower::ZeroDbm,
            rf_frequency: DEFAULT_RF_FREQUENCY,
            payload_size: MAX_PAYLOAD_SIZE,
        }
    }

    pub const fn mode(&self) -> OperationMode {
        self.mode
    }

    pub const fn with_mode(self, mode: OperationMode) -> Self {
        Self { mode, ..self }
    }

    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    pub const fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    pub const fn output_power(&self) -> RfOutputPower {
        self.output_power
    }

    pub const fn with_output_power(self, output_power: RfOutputPower) -> Self {
        Self {
            output_power,
            ..self
        }
    }

    /// The RF frequency in MHz.
    pub const fn rf_frequency(&self) -> u16 {
        self.rf_frequency
    }

    /// The `rf_frequency` is saturated to the range [2400, 2527] MHz
    /// (the frequencies reachable with a 7-bit channel).
    pub const fn with_rf_frequency(self, rf_frequency: u16) -> Self {
        let rf_frequency = if rf_frequency < MIN_RF_FREQUENCY {
            MIN_RF_FREQUENCY
        } else if rf_frequency > MIN_RF_FREQUENCY + MAX_CHANNEL as u16 {
            MIN_RF_FREQUENCY + MAX_CHANNEL as u16
        } else {
            rf_frequency
        };
        Self {
            rf_frequency,
            ..self
        }
    }

    /// The payload size last given to any pipe.
    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// The `payload_size` is clamped to [`MAX_PAYLOAD_SIZE`].
    pub const fn with_payload_size(self, payload_size: u8) -> Self {
        let payload_size = if payload_size > MAX_PAYLOAD_SIZE {
            MAX_PAYLOAD_SIZE
        } else {
            payload_size
        };
        Self {
            payload_size,
            ..self
        }
    }

    /// Is the radio able to transmit (powered up with `PRIM_RX` cleared)?
    pub const fn is_tx(&self) -> bool {
        matches!(self.mode, OperationMode::Transceiver)
    }
}

#[cfg(test)]
mod test {
    use super::DeviceState;
    use crate::{DataRate, OperationMode};

    #[test]
    fn defaults() {
        let state = DeviceState::default();
        assert_eq!(state.mode(), OperationMode::PowerDown);
        assert_eq!(state.data_rate(), DataRate::Mbps2);
        assert_eq!(state.rf_frequency(), 2402);
        assert_eq!(state.payload_size(), 32);
        assert!(!state.is_tx());
    }

    #[test]
    fn updates_are_copies() {
        let before = DeviceState::new();
        let after = before
            .with_mode(OperationMode::Transceiver)
            .with_payload_size(40)
            .with_rf_frequency(3000);
        assert_eq!(before, DeviceState::new());
        assert!(after.is_tx());
        assert_eq!(after.payload_size(), 32);
        assert_eq!(after.rf_frequency(), 2527);
    }
}
