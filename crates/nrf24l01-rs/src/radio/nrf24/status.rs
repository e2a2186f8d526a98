use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{bit_fields::Config, mnemonics, Command, Nrf24Error, Nrf24l01, Register};
use crate::{
    radio::{prelude::Nrf24Status, EdgeInterrupt, Transport},
    InterruptMode, StatusFlags,
};

impl<T, CE, DELAY, IRQ> Nrf24Status for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type StatusErrorType = Nrf24Error<T::Error, CE::Error>;

    fn status_register(&mut self) -> Result<u8, Self::StatusErrorType> {
        self.spi_command(Command::Nop)
    }

    fn status_flags(&self) -> StatusFlags {
        self._status
    }

    fn config_status_register(&mut self) -> Result<u8, Self::StatusErrorType> {
        self.read_register(Register::CONFIG)
    }

    fn clear_interrupt_flags(&mut self) -> Result<(), Self::StatusErrorType> {
        // the flags are cleared by writing 1 to them
        self.write_register(Register::STATUS, mnemonics::CLEAR_IRQ_FLAGS)
    }

    fn set_interrupt(&mut self, mode: InterruptMode) -> Result<(), Self::StatusErrorType> {
        let config = Config::from_bits(self.read_register(Register::CONFIG)?).with_interrupt(mode);
        self.write_register(Register::CONFIG, config.into_bits())
    }

    fn attach(&mut self, handler: Option<fn()>) {
        match handler {
            Some(handler) => self._irq.listen(handler),
            None => self._irq.unlisten(),
        }
    }
}
