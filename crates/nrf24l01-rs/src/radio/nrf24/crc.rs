use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{bit_fields::Config, Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24Crc, EdgeInterrupt, Transport},
    CrcWidth,
};

impl<T, CE, DELAY, IRQ> Nrf24Crc for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type CrcErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_crc(&mut self, width: CrcWidth) -> Result<(), Self::CrcErrorType> {
        let config = Config::from_bits(self.read_register(Register::CONFIG)?).with_crc(width);
        self.write_register(Register::CONFIG, config.into_bits())
    }

    fn crc(&mut self) -> Result<CrcWidth, Self::CrcErrorType> {
        Ok(Config::from_bits(self.read_register(Register::CONFIG)?).crc())
    }
}
