use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24OutputPower, EdgeInterrupt, Transport},
    RfOutputPower,
};

impl<T, CE, DELAY, IRQ> Nrf24OutputPower for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type OutputPowerErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_rf_output_power(
        &mut self,
        output_power: RfOutputPower,
    ) -> Result<(), Self::OutputPowerErrorType> {
        if !self._state.is_tx() {
            return Err(Nrf24Error::NotAsTx);
        }
        let rf_setup = self.read_register(Register::RF_SETUP)? & !RfOutputPower::MASK;
        self.write_register(Register::RF_SETUP, rf_setup | output_power.into_bits())?;
        self._state = self._state.with_output_power(output_power);
        Ok(())
    }

    fn rf_output_power(&mut self) -> Result<RfOutputPower, Self::OutputPowerErrorType> {
        Ok(RfOutputPower::from_bits(
            self.read_register(Register::RF_SETUP)?,
        ))
    }
}
