use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{bit_fields::Config, Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24Power, EdgeInterrupt, Transport},
    OperationMode,
};

impl<T, CE, DELAY, IRQ> Nrf24Power for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type PowerErrorType = Nrf24Error<T::Error, CE::Error>;

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(Register::CONFIG)?).with_power(true);
        self.write_register(Register::CONFIG, config.into_bits())?;
        let mode = if config.is_rx() {
            OperationMode::Receiver
        } else {
            OperationMode::Transceiver
        };
        self._state = self._state.with_mode(mode);
        Ok(())
    }

    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_ce(false)?; // Guarantee CE is low on power down
        let config = Config::from_bits(self.read_register(Register::CONFIG)?).with_power(false);
        self.write_register(Register::CONFIG, config.into_bits())?;
        self._state = self._state.with_mode(OperationMode::PowerDown);
        Ok(())
    }

    fn set_mode(&mut self, mode: OperationMode) -> Result<(), Self::PowerErrorType> {
        if mode == OperationMode::PowerDown {
            return self.power_down();
        }
        let config = Config::from_bits(self.read_register(Register::CONFIG)?)
            .with_is_rx(mode == OperationMode::Receiver);
        self.write_register(Register::CONFIG, config.into_bits())?;
        if config.power() {
            self._state = self._state.with_mode(mode);
        }
        Ok(())
    }

    fn mode(&self) -> OperationMode {
        self._state.mode()
    }

    fn set_power_up_and_mode(&mut self, mode: OperationMode) -> Result<(), Self::PowerErrorType> {
        if mode == OperationMode::PowerDown {
            return self.power_down();
        }
        let config = Config::from_bits(self.read_register(Register::CONFIG)?)
            .with_power_and_rx(mode == OperationMode::Receiver);
        self.write_register(Register::CONFIG, config.into_bits())?;
        self._state = self._state.with_mode(mode);
        Ok(())
    }

    fn is_powered(&self) -> bool {
        self._state.mode() != OperationMode::PowerDown
    }
}
