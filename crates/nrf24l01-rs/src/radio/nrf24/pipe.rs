use embedded_hal::{delay::DelayNs, digital::OutputPin};

use super::{Nrf24Error, Nrf24l01, Register, ADDRESS_WIDTH};
use crate::{
    radio::{
        prelude::{Nrf24PayloadSize, Nrf24Pipe},
        EdgeInterrupt, Transport,
    },
    RxPipe,
};

impl<T, CE, DELAY, IRQ> Nrf24Pipe for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type PipeErrorType = Nrf24Error<T::Error, CE::Error>;

    fn attach_receive_address_to_pipe(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
    ) -> Result<(), Self::PipeErrorType> {
        self.write_register_buf(Register::rx_addr(pipe), address)?;
        let en_rxaddr = self.read_register(Register::EN_RXADDR)?;
        self.write_register(Register::EN_RXADDR, en_rxaddr | pipe.mask())
    }

    fn attach_receive_payload(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
        payload_size: u8,
    ) -> Result<(), Self::PipeErrorType> {
        self.attach_receive_address_to_pipe(pipe, address)?;
        self.set_payload_size(pipe, payload_size)
    }

    fn attach_transmitting_payload(
        &mut self,
        pipe: RxPipe,
        address: &[u8; 5],
        payload_size: u8,
    ) -> Result<(), Self::PipeErrorType> {
        self.attach_receive_address_to_pipe(pipe, address)?;
        self.set_tx_address(address)?;
        self.set_payload_size(pipe, payload_size)
    }

    fn detach_receive_pipe(&mut self, pipe: RxPipe) -> Result<(), Self::PipeErrorType> {
        let en_rxaddr = self.read_register(Register::EN_RXADDR)?;
        self.write_register(Register::EN_RXADDR, en_rxaddr & !pipe.mask())
    }

    fn set_tx_address(&mut self, address: &[u8; 5]) -> Result<(), Self::PipeErrorType> {
        self.write_register_buf(Register::TX_ADDR, address)
    }

    fn tx_address(&mut self) -> Result<[u8; 5], Self::PipeErrorType> {
        let mut address = [0u8; ADDRESS_WIDTH];
        self.read_register_buf(Register::TX_ADDR, &mut address)?;
        Ok(address)
    }

    fn rx_address(&mut self, pipe: RxPipe) -> Result<[u8; 5], Self::PipeErrorType> {
        let mut address = [0u8; ADDRESS_WIDTH];
        self.read_register_buf(Register::rx_addr(pipe), &mut address)?;
        Ok(address)
    }
}
