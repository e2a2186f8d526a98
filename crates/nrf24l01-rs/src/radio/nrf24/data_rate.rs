use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24DataRate, EdgeInterrupt, Transport},
    DataRate,
};

impl<T, CE, DELAY, IRQ> Nrf24DataRate for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type DataRateErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let rf_setup = self.read_register(Register::RF_SETUP)? & !DataRate::MASK;
        self.write_register(Register::RF_SETUP, rf_setup | data_rate.into_bits())?;
        self._state = self._state.with_data_rate(data_rate);
        Ok(())
    }

    fn data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let rf_setup = self.read_register(Register::RF_SETUP)?;
        if rf_setup & DataRate::MASK == DataRate::MASK {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(DataRate::from_bits(rf_setup))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Nrf24DataRate, Register};
    use crate::{
        radio::{
            nrf24::{frame, Command},
            Nrf24Error,
        },
        spi_test_expects,
        test::mk_radio,
        DataRate,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    fn set_data_rate(data_rate: DataRate, expected: u8) {
        let spi_expectations = spi_test_expects![
            // RF_SETUP with both data rate bits set and every other bit set
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0xFFu8]),
            (
                vec![frame(Command::Write, Register::RF_SETUP), expected],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_data_rate(data_rate).unwrap();
        assert_eq!(radio.state().data_rate(), data_rate);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn data_rate_1mbps() {
        set_data_rate(DataRate::Mbps1, 0xD7);
    }

    #[test]
    fn data_rate_2mbps() {
        set_data_rate(DataRate::Mbps2, 0xDF);
    }

    #[test]
    fn data_rate_250kbps() {
        set_data_rate(DataRate::Kbps250, 0xF7);
    }

    #[test]
    pub fn get_data_rate() {
        let spi_expectations = spi_test_expects![
            // get the RF_SETUP register value for each possible result
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x07u8]),
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x0Fu8]),
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x27u8]),
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x2Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.data_rate().unwrap(), DataRate::Mbps1);
        assert_eq!(radio.data_rate().unwrap(), DataRate::Mbps2);
        assert_eq!(radio.data_rate().unwrap(), DataRate::Kbps250);
        assert!(matches!(
            radio.data_rate(),
            Err(Nrf24Error::BinaryCorruption)
        ));
        spi.done();
        ce_pin.done();
    }
}
