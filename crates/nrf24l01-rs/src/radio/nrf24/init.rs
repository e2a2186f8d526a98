use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{Nrf24Error, Nrf24l01};
use crate::{
    radio::{
        prelude::{
            Nrf24AutoAck, Nrf24Channel, Nrf24Crc, Nrf24DataRate, Nrf24Init, Nrf24OutputPower,
            Nrf24Power, Nrf24Status,
        },
        EdgeInterrupt, RadioConfig, Transport,
    },
    DataRate, OperationMode,
};

impl<T, CE, DELAY, IRQ> Nrf24Init for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type ConfigErrorType = Nrf24Error<T::Error, CE::Error>;

    fn initialize(
        &mut self,
        mode: OperationMode,
        data_rate: DataRate,
        rf_frequency: u16,
    ) -> Result<(), Self::ConfigErrorType> {
        self.with_config(
            &RadioConfig::default()
                .with_mode(mode)
                .with_data_rate(data_rate)
                .with_rf_frequency(rf_frequency),
        )
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.set_auto_acknowledgement(config.auto_ack())?;
        self.set_rf_frequency(config.rf_frequency())?;
        self.set_data_rate(config.data_rate())?;
        self.set_crc(config.crc())?;
        self.set_power_up_and_mode(config.mode())?;
        if let Some(output_power) = config.output_power() {
            if config.mode() == OperationMode::Transceiver {
                self.set_rf_output_power(output_power)?;
            }
        }
        if let Some(interrupt) = config.interrupt() {
            self.set_interrupt(interrupt)?;
        }
        Ok(())
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Nrf24Init, RadioConfig};
    use crate::{
        radio::nrf24::{frame, Command, Register},
        spi_test_expects,
        test::mk_radio,
        CrcWidth, DataRate, InterruptMode, OperationMode, RfOutputPower,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn with_config_as_tx() {
        let spi_expectations = spi_test_expects![
            (vec![frame(Command::Write, Register::EN_AA), 0x3Fu8], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::RF_CH), 76u8], vec![0xEu8, 0u8]),
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x0Fu8]),
            (
                vec![frame(Command::Write, Register::RF_SETUP), 0x27u8],
                vec![0xEu8, 0u8],
            ),
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0x08u8]),
            (vec![frame(Command::Write, Register::CONFIG), 0x0Cu8], vec![0xEu8, 0u8]),
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0x0Cu8]),
            (vec![frame(Command::Write, Register::CONFIG), 0x0Eu8], vec![0xEu8, 0u8]),
            // RF output power
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x27u8]),
            (
                vec![frame(Command::Write, Register::RF_SETUP), 0x21u8],
                vec![0xEu8, 0u8],
            ),
            // interrupt mask
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0x0Eu8]),
            (vec![frame(Command::Write, Register::CONFIG), 0x4Eu8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let config = RadioConfig::default()
            .with_auto_ack(true)
            .with_rf_frequency(2476)
            .with_data_rate(DataRate::Kbps250)
            .with_crc(CrcWidth::Bit16)
            .with_output_power(RfOutputPower::Minus18Dbm)
            .with_interrupt(InterruptMode::TxAndRetransmit);
        radio.with_config(&config).unwrap();
        let state = radio.state();
        assert_eq!(state.mode(), OperationMode::Transceiver);
        assert_eq!(state.data_rate(), DataRate::Kbps250);
        assert_eq!(state.output_power(), RfOutputPower::Minus18Dbm);
        assert_eq!(state.rf_frequency(), 2476);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn initialize_as_rx() {
        let spi_expectations = spi_test_expects![
            (vec![frame(Command::Write, Register::EN_AA), 0u8], vec![0xEu8, 0u8]),
            // out of range frequency
            (vec![frame(Command::Write, Register::RF_CH), 2u8], vec![0xEu8, 0u8]),
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x0Fu8]),
            (
                vec![frame(Command::Write, Register::RF_SETUP), 0x07u8],
                vec![0xEu8, 0u8],
            ),
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0x08u8]),
            (vec![frame(Command::Write, Register::CONFIG), 0u8], vec![0xEu8, 0u8]),
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::CONFIG), 3u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio
            .initialize(OperationMode::Receiver, DataRate::Mbps1, 2600)
            .unwrap();
        assert_eq!(radio.state().mode(), OperationMode::Receiver);
        assert_eq!(radio.state().rf_frequency(), 2402);
        spi.done();
        ce_pin.done();
    }
}
