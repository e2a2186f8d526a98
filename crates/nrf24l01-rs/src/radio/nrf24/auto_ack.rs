use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{bit_fields::Feature, mnemonics, Command, Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24AutoAck, EdgeInterrupt, Transport},
    RxPipe,
};

impl<T, CE, DELAY, IRQ> Nrf24AutoAck for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type AutoAckErrorType = Nrf24Error<T::Error, CE::Error>;

    fn set_auto_acknowledgement(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register(
            Register::EN_AA,
            if enable { mnemonics::ALL_PIPES } else { 0 },
        )
    }

    fn set_auto_acknowledgement_pipe(
        &mut self,
        enable: bool,
        pipe: u8,
    ) -> Result<(), Self::AutoAckErrorType> {
        let mask = RxPipe::try_from(pipe)
            .map_err(Nrf24Error::InvalidPipe)?
            .mask();
        let en_aa = self.read_register(Register::EN_AA)?;
        let en_aa = if enable { en_aa | mask } else { en_aa & !mask };
        self.write_register(Register::EN_AA, en_aa)
    }

    fn set_auto_retransmit_max_count(
        &mut self,
        count: u8,
    ) -> Result<(), Self::AutoAckErrorType> {
        // the high nibble is the retransmit delay
        let setup_retr = self.read_register(Register::SETUP_RETR)? & 0xF0;
        self.write_register(Register::SETUP_RETR, setup_retr | count.min(15))
    }

    fn enable_payload_ack_mode(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        let feature =
            Feature::from_bits(self.read_register(Register::FEATURE)?).with_ack_payloads(enable);
        self.write_register(Register::FEATURE, feature.into_bits())
    }

    fn load_auto_ack_payload(
        &mut self,
        pipe: RxPipe,
        buf: &[u8],
    ) -> Result<(), Self::AutoAckErrorType> {
        let len = buf.len().min(super::MAX_PAYLOAD_SIZE as usize);
        self.spi_write_buf(
            Command::WriteAckPayload.opcode() | pipe.index(),
            &buf[..len],
        )
    }
}
