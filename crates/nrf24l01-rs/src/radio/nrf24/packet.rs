use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{Command, Nrf24Error, Nrf24l01, CE_PULSE_US, MAX_PAYLOAD_SIZE};
use crate::radio::{
    prelude::{Nrf24Fifo, Nrf24Packet},
    EdgeInterrupt, Transport,
};

impl<T, CE, DELAY, IRQ> Nrf24Packet for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type PacketErrorType = Nrf24Error<T::Error, CE::Error>;

    fn send_packet(&mut self, buf: &[u8]) -> Result<(), Self::PacketErrorType> {
        self.set_ce(false)?;
        let len = buf.len().min(MAX_PAYLOAD_SIZE as usize);
        self.spi_write_buf(Command::WriteTxPayload.opcode(), &buf[..len])?;
        self.start_transfer()
    }

    fn start_transfer(&mut self) -> Result<(), Self::PacketErrorType> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        self._delay_impl.delay_us(CE_PULSE_US);
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    fn read_packet(&mut self, buf: &mut [u8]) -> Result<u8, Self::PacketErrorType> {
        let len = buf.len().min(MAX_PAYLOAD_SIZE as usize);
        if len == 0 {
            return Ok(0);
        }
        self.spi_read(len, Command::ReadRxPayload.opcode())?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(len as u8)
    }

    fn start_listening(&mut self) -> Result<(), Self::PacketErrorType> {
        self.flush_rx()?;
        self.flush_tx()?;
        self.set_ce(true)
    }

    fn stop_listening(&mut self) -> Result<(), Self::PacketErrorType> {
        self.set_ce(false)?;
        self.flush_tx()?;
        self.flush_rx()
    }
}
