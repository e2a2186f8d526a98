use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{SpiBus, SpiDevice},
};
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc;
mod data_rate;
mod details;
mod fifo;
mod init;
mod output_power;
mod packet;
mod payload_size;
mod pipe;
mod power;
mod status;
pub use constants::{frame, Command, Register, MAX_PAYLOAD_SIZE};
pub(crate) use constants::{
    mnemonics, ADDRESS_WIDTH, CE_PULSE_US, CE_SETTLE_US, DEFAULT_RF_FREQUENCY, MAX_CHANNEL,
    MAX_RF_FREQUENCY, MIN_RF_FREQUENCY,
};

use super::{
    transport::{DeviceTransport, ManagedCsTransport, Transport, TransportError},
    DeviceState, EdgeInterrupt,
};
use crate::StatusFlags;

/// A collection of error types to describe hardware malfunctions and misuse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    ///
    /// The radio's registers may be in any state afterwards; re-initialize it.
    Spi(SPI),
    /// Represents a DigitalOutput error (the CE pin).
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO)
    BinaryCorruption,
    /// A pipe number outside the range [0, 5] was given.
    InvalidPipe(u8),
    /// The RF output power can only be changed while the radio is in
    /// [`OperationMode::Transceiver`](crate::OperationMode::Transceiver) mode.
    NotAsTx,
}

/// A driver for the nRF24L01 transceiver.
///
/// The radio's operations are grouped into the traits of
/// [`prelude`](mod@crate::radio::prelude), which this struct implements.
/// The register level access used by those traits is also public.
///
/// Every method takes `&mut self`: one transaction is always finished before the
/// next one starts. Share the radio between contexts (e.g. with an interrupt
/// handler) only through a lock that covers whole method calls.
pub struct Nrf24l01<T, CE, DELAY, IRQ> {
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to use [`Nrf24l01::start_listening()`] and
    /// [`Nrf24l01::send_packet()`] because those methods guarantee proper CE timing.
    pub ce_pin: CE,
    _transport: T,
    _delay_impl: DELAY,
    _irq: IRQ,
    _buf: [u8; 33],
    _status: StatusFlags,
    _state: DeviceState,
}

impl<SPI, CE, DELAY, IRQ> Nrf24l01<DeviceTransport<SPI>, CE, DELAY, IRQ>
where
    SPI: SpiDevice,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    /// Instantiate a [`Nrf24l01`] object for use on the specified
    /// `spi` device with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// Pass `()` as `irq` if the radio's IRQ pin is not used.
    pub fn new(spi: SPI, ce_pin: CE, delay_impl: DELAY, irq: IRQ) -> Self {
        Self::from_transport(DeviceTransport::new(spi), ce_pin, delay_impl, irq)
    }
}

impl<BUS, CS, CE, DELAY, IRQ> Nrf24l01<ManagedCsTransport<BUS, CS>, CE, DELAY, IRQ>
where
    BUS: SpiBus,
    CS: OutputPin,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    /// Instantiate a [`Nrf24l01`] object that drives the radio's CSN pin itself
    /// around each transaction on a `bus` it does not share.
    pub fn with_chip_select(
        bus: BUS,
        csn_pin: CS,
        ce_pin: CE,
        delay_impl: DELAY,
        irq: IRQ,
    ) -> Result<Self, Nrf24Error<TransportError<BUS::Error, CS::Error>, CE::Error>> {
        let transport = ManagedCsTransport::new(bus, csn_pin)
            .map_err(|e| Nrf24Error::Spi(TransportError::ChipSelect(e)))?;
        Ok(Self::from_transport(transport, ce_pin, delay_impl, irq))
    }
}

impl<T, CE, DELAY, IRQ> Nrf24l01<T, CE, DELAY, IRQ>
where
    T: Transport,
    CE: OutputPin,
    DELAY: DelayNs,
    IRQ: EdgeInterrupt,
{
    /// Instantiate a [`Nrf24l01`] object over any [`Transport`].
    ///
    /// Nothing is sent to the radio until an operation is called; the driver
    /// assumes the radio is powered down.
    pub fn from_transport(transport: T, ce_pin: CE, delay_impl: DELAY, irq: IRQ) -> Self {
        Nrf24l01 {
            ce_pin,
            _transport: transport,
            _delay_impl: delay_impl,
            _irq: irq,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _state: DeviceState::new(),
        }
    }

    /// What the driver knows about the radio, as of the last completed operation.
    pub fn state(&self) -> DeviceState {
        self._state
    }

    /// Give back the transport, the CE pin, the delay and the IRQ source.
    pub fn release(self) -> (T, CE, DELAY, IRQ) {
        (self._transport, self.ce_pin, self._delay_impl, self._irq)
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        self._transport
            .transfer(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Send `command` followed by `len` NOP bytes.
    /// The `len` bytes clocked back are left in `self._buf[1..=len]`.
    ///
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, Command::FlushRx.opcode())?;
    /// ```
    fn spi_read(&mut self, len: usize, command: u8) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        self._buf[0] = command;
        self._buf[1..=len].fill(Command::Nop.opcode());
        self.spi_transfer(len + 1)
    }

    /// Send `command` followed by `buf` (at most 32 bytes).
    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        let len = buf.len();
        self._buf[0] = command;
        self._buf[1..=len].copy_from_slice(buf);
        self.spi_transfer(len + 1)
    }

    /// Send a command that has no data bytes and return the STATUS byte clocked back.
    fn spi_command(&mut self, command: Command) -> Result<u8, Nrf24Error<T::Error, CE::Error>> {
        self.spi_read(0, command.opcode())?;
        Ok(self._buf[0])
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        if high {
            self.ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
            self._delay_impl.delay_us(CE_SETTLE_US);
            Ok(())
        } else {
            self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
        }
    }

    /// Read a single byte `register`.
    pub fn read_register(
        &mut self,
        register: Register,
    ) -> Result<u8, Nrf24Error<T::Error, CE::Error>> {
        self.spi_read(1, frame(Command::Read, register))?;
        Ok(self._buf[1])
    }

    /// Read a multi-byte `register` into `buf`.
    ///
    /// At most [`Register::width()`] bytes are read; `buf` should be exactly that long.
    pub fn read_register_buf(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        let len = buf.len().min(register.width());
        self.spi_read(len, frame(Command::Read, register))?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Write a single byte `register`.
    ///
    /// The radio only accepts register writes in power down and standby modes.
    pub fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        self._buf[0] = frame(Command::Write, register);
        self._buf[1] = value;
        self.spi_transfer(2)
    }

    /// Write a multi-byte `register` from `buf`.
    ///
    /// `buf` is truncated to [`Register::width()`] bytes.
    pub fn write_register_buf(
        &mut self,
        register: Register,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<T::Error, CE::Error>> {
        let len = buf.len().min(register.width());
        self.spi_write_buf(frame(Command::Write, register), &buf[..len])
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{frame, mnemonics, Command, Nrf24Error, Nrf24l01, Register};
    use crate::{
        radio::{
            prelude::{Nrf24Channel, Nrf24Init, Nrf24Packet, Nrf24Pipe, Nrf24Status},
            TransportError,
        },
        spi_test_expects,
        test::{mk_radio, BrokenBus, BrokenPin},
        DataRate, OperationMode, StatusFlags,
    };
    use embedded_hal::{digital, spi::ErrorKind};
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec;

    #[test]
    fn register_access_framing() {
        let spi_expectations = spi_test_expects![
            // read RF_CH
            (vec![Register::RF_CH.addr(), 0xFF], vec![0xEu8, 76u8]),
            // write RF_CH
            (vec![0x20 | Register::RF_CH.addr(), 40u8], vec![0xEu8, 0u8]),
            // read TX_ADDR, only 5 bytes even though the buffer is longer
            (
                vec![Register::TX_ADDR.addr(), 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 1u8, 2u8, 3u8, 4u8, 5u8],
            ),
            // write RX_ADDR_P1, truncated to 5 bytes
            (
                vec![0x20 | Register::RX_ADDR_P1.addr(), 1u8, 2u8, 3u8, 4u8, 5u8],
                vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.read_register(Register::RF_CH).unwrap(), 76);
        radio.write_register(Register::RF_CH, 40).unwrap();
        let mut buf = [0u8; 7];
        radio.read_register_buf(Register::TX_ADDR, &mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5, 0, 0]);
        radio
            .write_register_buf(Register::RX_ADDR_P1, &[1, 2, 3, 4, 5, 6, 7])
            .unwrap();
        assert_eq!(radio.status_flags().into_bits(), 0xE);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn managed_chip_select() {
        let cs_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = [
            SpiTransaction::transfer_in_place(vec![Register::CONFIG.addr(), 0xFF], vec![0xE, 8]),
            SpiTransaction::flush(),
        ];
        let mut bus = SpiMock::new(&spi_expectations);
        let mut cs_pin = PinMock::new(&cs_expectations);
        let mut ce_pin = PinMock::new(&[]);
        let mut radio =
            Nrf24l01::with_chip_select(bus.clone(), cs_pin.clone(), ce_pin.clone(), NoopDelay, ())
                .unwrap();
        assert_eq!(radio.read_register(Register::CONFIG).unwrap(), 8);
        bus.done();
        cs_pin.done();
        ce_pin.done();
    }

    #[test]
    fn transmit_scenario() {
        let ce_expectations = [
            // send_packet()
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let tx_addr = [0x11u8, 0x22, 0x33, 0x44, 0x55];
        let mut tx_addr_expected = vec![frame(Command::Write, Register::TX_ADDR)];
        tx_addr_expected.extend_from_slice(&tx_addr);

        let spi_expectations = spi_test_expects![
            // initialize(): disable auto-ack
            (vec![frame(Command::Write, Register::EN_AA), 0u8], vec![0xEu8, 0u8]),
            // set_rf_frequency(2410) -> channel 10
            (vec![frame(Command::Write, Register::RF_CH), 10u8], vec![0xEu8, 0u8]),
            // set_data_rate(2 Mbps)
            (vec![Register::RF_SETUP.addr(), 0xFF], vec![0xEu8, 0x0Fu8]),
            (
                vec![frame(Command::Write, Register::RF_SETUP), 0x0Fu8],
                vec![0xEu8, 0u8],
            ),
            // set_crc(disabled)
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0x08u8]),
            (vec![frame(Command::Write, Register::CONFIG), 0u8], vec![0xEu8, 0u8]),
            // set_power_up_and_mode(transceiver)
            (vec![Register::CONFIG.addr(), 0xFF], vec![0xEu8, 0u8]),
            (vec![frame(Command::Write, Register::CONFIG), 2u8], vec![0xEu8, 0u8]),
            // set_tx_address()
            (tx_addr_expected, vec![0xEu8, 0u8, 0u8, 0u8, 0u8, 0u8]),
            // send_packet()
            (
                vec![Command::WriteTxPayload.opcode(), 0xAAu8, 0xBBu8],
                vec![0xEu8, 0u8, 0u8],
            ),
        ];
        let mocks = mk_radio(&ce_expectations, &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio
            .initialize(OperationMode::Transceiver, DataRate::Mbps2, 2410)
            .unwrap();
        assert_eq!(radio.state().mode(), OperationMode::Transceiver);
        assert_eq!(radio.state().rf_frequency(), 2410);
        radio.set_tx_address(&tx_addr).unwrap();
        radio.send_packet(&[0xAA, 0xBB]).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn clear_flags_covers_every_event() {
        let flags = StatusFlags::from_bits(mnemonics::CLEAR_IRQ_FLAGS);
        assert!(flags.rx_dr());
        assert!(flags.tx_ds());
        assert!(flags.max_rt());
        assert!(!flags.tx_full());
    }

    #[test]
    fn bus_failure_leaves_state_untouched() {
        let mut ce_pin = PinMock::new(&[]);
        let mut radio = Nrf24l01::new(BrokenBus, ce_pin.clone(), NoopDelay, ());
        assert!(matches!(
            radio.set_rf_frequency(2450),
            Err(Nrf24Error::Spi(ErrorKind::Other))
        ));
        assert!(matches!(
            radio.initialize(OperationMode::Receiver, DataRate::Kbps250, 2480),
            Err(Nrf24Error::Spi(ErrorKind::Other))
        ));
        let state = radio.state();
        assert_eq!(state.rf_frequency(), 2402);
        assert_eq!(state.mode(), OperationMode::PowerDown);
        assert_eq!(state.data_rate(), DataRate::Mbps2);
        assert_eq!(radio.status_flags().into_bits(), 0);
        ce_pin.done();
    }

    #[test]
    fn ce_failure_surfaces_as_gpo() {
        let mut spi = SpiMock::<u8>::new(&[]);
        let mut radio = Nrf24l01::new(spi.clone(), BrokenPin, NoopDelay, ());
        assert!(matches!(
            radio.send_packet(&[1, 2, 3]),
            Err(Nrf24Error::Gpo(digital::ErrorKind::Other))
        ));
        assert!(matches!(
            radio.stop_listening(),
            Err(Nrf24Error::Gpo(digital::ErrorKind::Other))
        ));
        spi.done();
    }

    #[test]
    fn chip_select_failure_at_construction() {
        let mut ce_pin = PinMock::new(&[]);
        let result =
            Nrf24l01::with_chip_select(BrokenBus, BrokenPin, ce_pin.clone(), NoopDelay, ());
        assert!(matches!(
            result,
            Err(Nrf24Error::Spi(TransportError::ChipSelect(
                digital::ErrorKind::Other
            )))
        ));
        ce_pin.done();
    }
}
