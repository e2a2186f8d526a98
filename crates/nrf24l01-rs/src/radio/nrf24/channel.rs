use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{
    Nrf24Error, Nrf24l01, Register, DEFAULT_RF_FREQUENCY, MAX_CHANNEL, MAX_RF_FREQUENCY,
    MIN_RF_FREQUENCY,
};
use crate::radio::{prelude::Nrf24Channel, EdgeInterrupt, Transport};

impl<T, CE, DELAY, IRQ> Nrf24Channel for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type ChannelErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        let channel = channel.min(MAX_CHANNEL);
        self.write_register(Register::RF_CH, channel)?;
        self._state = self
            ._state
            .with_rf_frequency(MIN_RF_FREQUENCY + channel as u16);
        Ok(())
    }

    fn channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.read_register(Register::RF_CH)
    }

    fn set_rf_frequency(&mut self, rf_frequency: u16) -> Result<(), Self::ChannelErrorType> {
        let rf_frequency = if (MIN_RF_FREQUENCY..=MAX_RF_FREQUENCY).contains(&rf_frequency) {
            rf_frequency
        } else {
            DEFAULT_RF_FREQUENCY
        };
        self.write_register(Register::RF_CH, (rf_frequency - MIN_RF_FREQUENCY) as u8)?;
        self._state = self._state.with_rf_frequency(rf_frequency);
        Ok(())
    }

    fn rf_frequency(&self) -> u16 {
        self._state.rf_frequency()
    }
}
