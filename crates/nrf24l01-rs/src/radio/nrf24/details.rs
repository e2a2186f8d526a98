use super::{Nrf24Error, Nrf24l01};
use crate::radio::{prelude::Nrf24Details, EdgeInterrupt, Transport};
use embedded_hal::{delay::DelayNs, digital::OutputPin};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{bit_fields::Config, Register, ADDRESS_WIDTH};
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::{
    radio::prelude::{
        Nrf24Channel, Nrf24Crc, Nrf24DataRate, Nrf24Fifo, Nrf24OutputPower, Nrf24PayloadSize,
        Nrf24Pipe, Nrf24Power,
    },
    InterruptMode, RxPipe,
};

#[cfg(feature = "std")]
extern crate std;

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
const PIPES: [RxPipe; 6] = [
    RxPipe::P0,
    RxPipe::P1,
    RxPipe::P2,
    RxPipe::P3,
    RxPipe::P4,
    RxPipe::P5,
];

impl<T, CE, DELAY, IRQ> Nrf24Details for Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    type DetailsErrorType = Nrf24Error<T::Error, CE::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        defmt::println!("Mode______________________{}", self.mode());
        defmt::println!("Powered Up________________{=bool}", self.is_powered());

        let channel = self.channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.data_rate()?);
        defmt::println!("RF Output Power___________{}", self.rf_output_power()?);
        defmt::println!("CRC Width_________________{}", self.crc()?);
        defmt::println!(
            "Payload size______________{=u8} bytes",
            self.payload_size()
        );

        let retry_setup = self.read_register(Register::SETUP_RETR)?;
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            retry_setup & 0x0F
        );
        let observer = self.read_register(Register::OBSERVE_TX)?;
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            observer >> 4
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            observer & 0xF
        );

        let config = Config::from_bits(self.read_register(Register::CONFIG)?);
        defmt::println!(
            "IRQ on Data Ready_________{=bool}",
            config.irq_enabled(InterruptMode::RxOnly)
        );
        defmt::println!("    Data Ready triggered__{=bool}", self._status.rx_dr());
        defmt::println!(
            "IRQ on Data Sent__________{=bool}",
            config.irq_enabled(InterruptMode::TxOnly)
        );
        defmt::println!("    Data Sent triggered___{=bool}", self._status.tx_ds());
        defmt::println!(
            "IRQ on Data Fail__________{=bool}",
            config.irq_enabled(InterruptMode::RetransmitOnly)
        );
        defmt::println!("    Data Fail triggered___{=bool}", self._status.max_rt());

        defmt::println!("TX FIFO___________________{}", self.fifo_state(true)?);
        defmt::println!("RX FIFO___________________{}", self.fifo_state(false)?);

        let features = self.read_register(Register::FEATURE)?;
        defmt::println!("Dynamic payloads enabled__{=bool}", features & 4 > 0);
        defmt::println!("ACK Payload enabled_______{=bool}", features & 2 > 0);
        defmt::println!(
            "Dynamic Payloads__________0b{=0..8}",
            self.read_register(Register::DYNPD)?
        );
        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_register(Register::EN_AA)?
        );

        let address = self.tx_address()?;
        defmt::println!("TX address________________{=[u8; 5]:02X}", address);
        let open_pipes = self.read_register(Register::EN_RXADDR)?;
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in PIPES {
            let mut address = [0u8; ADDRESS_WIDTH];
            self.read_register_buf(Register::rx_addr(pipe), &mut address)?;
            defmt::println!(
                "{} ({=istr}) bound to {=[u8; 5]:02X}",
                pipe,
                if open_pipes & (1u8 << pipe.index()) > 0 {
                    opened
                } else {
                    closed
                },
                address,
            );
        }
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        std::println!("Mode______________________{}", self.mode());
        std::println!("Powered Up________________{}", self.is_powered());

        let channel = self.channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.data_rate()?);
        std::println!("RF Output Power___________{}", self.rf_output_power()?);
        std::println!("CRC Width_________________{}", self.crc()?);
        std::println!("Payload size______________{} bytes", self.payload_size());

        let retry_setup = self.read_register(Register::SETUP_RETR)?;
        std::println!(
            "Auto retry delay__________{} microseconds",
            (retry_setup >> 4) as u16 * 250 + 250
        );
        std::println!("Auto retry attempts_______{} maximum", retry_setup & 0x0F);
        let observer = self.read_register(Register::OBSERVE_TX)?;
        std::println!("Packets lost\n    on current channel____{}", observer >> 4);
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            observer & 0xF
        );

        let config = Config::from_bits(self.read_register(Register::CONFIG)?);
        std::println!(
            "IRQ on Data Ready_________{}",
            config.irq_enabled(InterruptMode::RxOnly)
        );
        std::println!("    Data Ready triggered__{}", self._status.rx_dr());
        std::println!(
            "IRQ on Data Sent__________{}",
            config.irq_enabled(InterruptMode::TxOnly)
        );
        std::println!("    Data Sent triggered___{}", self._status.tx_ds());
        std::println!(
            "IRQ on Data Fail__________{}",
            config.irq_enabled(InterruptMode::RetransmitOnly)
        );
        std::println!("    Data Fail triggered___{}", self._status.max_rt());

        std::println!("TX FIFO___________________{}", self.fifo_state(true)?);
        std::println!("RX FIFO___________________{}", self.fifo_state(false)?);

        let features = self.read_register(Register::FEATURE)?;
        std::println!("Dynamic payloads enabled__{}", features & 4 > 0);
        std::println!("ACK Payload enabled_______{}", features & 2 > 0);
        std::println!(
            "Dynamic Payloads__________{:#010b}",
            self.read_register(Register::DYNPD)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_register(Register::EN_AA)?
        );

        std::println!("TX address________________{:02X?}", self.tx_address()?);
        let open_pipes = self.read_register(Register::EN_RXADDR)?;
        for pipe in PIPES {
            let mut address = [0u8; ADDRESS_WIDTH];
            self.read_register_buf(Register::rx_addr(pipe), &mut address)?;
            std::println!(
                "{pipe} ({}) bound to {:02X?}",
                if open_pipes & (1u8 << pipe.index()) > 0 {
                    " open "
                } else {
                    "closed"
                },
                address,
            );
        }
        Ok(())
    }
}
