use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{bit_fields::FifoStatus, Command, Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24Fifo, EdgeInterrupt, Transport},
    FifoState,
};

impl<T, CE, DELAY, IRQ> Nrf24Fifo for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type FifoErrorType = Nrf24Error<T::Error, CE::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command(Command::FlushRx)?;
        Ok(())
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_command(Command::FlushTx)?;
        Ok(())
    }

    fn fifo_status_register(&mut self) -> Result<u8, Self::FifoErrorType> {
        self.read_register(Register::FIFO_STATUS)
    }

    fn fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let status = FifoStatus::from_bits(self.fifo_status_register()?);
        let (full, empty) = if about_tx {
            (status.tx_full(), status.tx_empty())
        } else {
            (status.rx_full(), status.rx_empty())
        };
        Ok(if full {
            FifoState::Full
        } else if empty {
            FifoState::Empty
        } else {
            FifoState::Occupied
        })
    }

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!FifoStatus::from_bits(self.fifo_status_register()?).rx_empty())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Command, Nrf24Fifo, Register};
    use crate::{spi_test_expects, test::mk_radio, FifoState};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn flush() {
        let spi_expectations = spi_test_expects![
            (vec![Command::FlushRx.opcode()], vec![0xEu8]),
            (vec![Command::FlushTx.opcode()], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_fifo_state() {
        let spi_expectations = spi_test_expects![
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0x10u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0x20u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 1u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 2u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.fifo_state(true).unwrap(), FifoState::Empty);
        assert_eq!(radio.fifo_state(true).unwrap(), FifoState::Full);
        assert_eq!(radio.fifo_state(true).unwrap(), FifoState::Occupied);
        assert_eq!(radio.fifo_state(false).unwrap(), FifoState::Empty);
        assert_eq!(radio.fifo_state(false).unwrap(), FifoState::Full);
        assert_eq!(radio.fifo_state(false).unwrap(), FifoState::Occupied);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn available() {
        let spi_expectations = spi_test_expects![
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0x11u8]),
            (vec![Register::FIFO_STATUS.addr(), 0xFF], vec![0xEu8, 0x10u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(!radio.available().unwrap());
        assert!(radio.available().unwrap());
        spi.done();
        ce_pin.done();
    }
}
