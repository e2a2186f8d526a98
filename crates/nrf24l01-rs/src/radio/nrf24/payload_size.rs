use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{
    bit_fields::Feature, mnemonics, Command, Nrf24Error, Nrf24l01, Register, MAX_PAYLOAD_SIZE,
};
use crate::{
    radio::{prelude::Nrf24PayloadSize, EdgeInterrupt, Transport},
    RxPipe,
};

impl<T, CE, DELAY, IRQ> Nrf24PayloadSize for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type PayloadSizeErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_payload_size(
        &mut self,
        pipe: RxPipe,
        size: u8,
    ) -> Result<(), Self::PayloadSizeErrorType> {
        let size = size.min(MAX_PAYLOAD_SIZE);
        self.write_register(Register::rx_pw(pipe), size)?;
        self._state = self._state.with_payload_size(size);
        Ok(())
    }

    fn payload_size(&self) -> u8 {
        self._state.payload_size()
    }

    fn enable_dynamic_payload(&mut self, enable: bool) -> Result<(), Self::PayloadSizeErrorType> {
        let feature = Feature::from_bits(self.read_register(Register::FEATURE)?)
            .with_dynamic_payloads(enable);
        self.write_register(Register::FEATURE, feature.into_bits())?;
        self.write_register(
            Register::DYNPD,
            if enable { mnemonics::ALL_PIPES } else { 0 },
        )
    }

    fn dynamic_payload_length(&mut self) -> Result<u8, Self::PayloadSizeErrorType> {
        self.spi_read(1, Command::ReadRxPayloadWidth.opcode())?;
        let result = self._buf[1];
        if result > MAX_PAYLOAD_SIZE {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(result)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{Command, Nrf24PayloadSize, Register};
    use crate::{
        radio::{nrf24::frame, Nrf24Error},
        spi_test_expects,
        test::mk_radio,
        RxPipe,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_payload_size() {
        let spi_expectations = spi_test_expects![
            (vec![frame(Command::Write, Register::RX_PW_P1), 0u8], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::RX_PW_P1), 32u8], vec![0xEu8, 0u8]),
            // clamped
            (vec![frame(Command::Write, Register::RX_PW_P5), 32u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_payload_size(RxPipe::P1, 0).unwrap();
        assert_eq!(radio.payload_size(), 0);
        radio.set_payload_size(RxPipe::P1, 32).unwrap();
        radio.set_payload_size(RxPipe::P5, 33).unwrap();
        assert_eq!(radio.payload_size(), 32);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn dynamic_payloads() {
        let spi_expectations = spi_test_expects![
            (vec![Register::FEATURE.addr(), 0xFF], vec![0xEu8, 1u8]),
            (vec![frame(Command::Write, Register::FEATURE), 5u8], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::DYNPD), 0x3Fu8], vec![0xEu8, 0u8]),
            (vec![Register::FEATURE.addr(), 0xFF], vec![0xEu8, 5u8]),
            (vec![frame(Command::Write, Register::FEATURE), 1u8], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::DYNPD), 0u8], vec![0xEu8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.enable_dynamic_payload(true).unwrap();
        radio.enable_dynamic_payload(false).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn dynamic_payload_length() {
        let spi_expectations = spi_test_expects![
            (vec![Command::ReadRxPayloadWidth.opcode(), 0xFF], vec![0xEu8, 12u8]),
            (vec![Command::ReadRxPayloadWidth.opcode(), 0xFF], vec![0xEu8, 33u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.dynamic_payload_length().unwrap(), 12);
        assert!(matches!(
            radio.dynamic_payload_length(),
            Err(Nrf24Error::BinaryCorruption)
        ));
        spi.done();
        ce_pin.done();
    }
}
