//! The bus strategies the driver can talk through.
//!
//! Every register or payload command is one [`Transport::transfer()`]:
//! chip-select is asserted, the whole buffer is clocked out while the reply is
//! clocked back into the same buffer, then chip-select is released. Nothing else
//! may use the bus in between, or the radio will misread the command framing.

use embedded_hal::{
    digital::OutputPin,
    spi::{SpiBus, SpiDevice},
};

/// A full-duplex, chip-select framed byte exchange with the radio.
pub trait Transport {
    /// The error reported when an exchange fails.
    type Error;

    /// Exchange `buf` in place as one transaction.
    ///
    /// On success, `buf[0]` holds the radio's STATUS register.
    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Uses an [`SpiDevice`], which already owns the radio's CSN pin.
///
/// This is the usual choice; most HALs (and `embedded-hal-bus`) hand out
/// [`SpiDevice`] objects that also arbitrate a shared bus.
#[derive(Debug)]
pub struct DeviceTransport<SPI> {
    spi: SPI,
}

impl<SPI> DeviceTransport<SPI> {
    /// Wrap the given `spi` device.
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the wrapped device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> Transport for DeviceTransport<SPI> {
    type Error = SPI::Error;

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.spi.transfer_in_place(buf)
    }
}

/// Errors from a [`ManagedCsTransport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransportError<BUS, CS> {
    /// The SPI bus failed.
    Bus(BUS),
    /// The CSN pin could not be driven.
    ChipSelect(CS),
}

/// Uses a raw [`SpiBus`] and drives the radio's CSN pin itself.
///
/// The driver must be the only user of `bus` for as long as it exists.
#[derive(Debug)]
pub struct ManagedCsTransport<BUS, CS> {
    bus: BUS,
    csn_pin: CS,
}

impl<BUS, CS: OutputPin> ManagedCsTransport<BUS, CS> {
    /// Wrap the given `bus` and take control of `csn_pin`.
    ///
    /// The CSN pin is driven high (deselected) before this returns.
    pub fn new(bus: BUS, mut csn_pin: CS) -> Result<Self, CS::Error> {
        csn_pin.set_high()?;
        Ok(Self { bus, csn_pin })
    }

    /// Give back the wrapped bus and pin.
    pub fn release(self) -> (BUS, CS) {
        (self.bus, self.csn_pin)
    }
}

impl<BUS: SpiBus, CS: OutputPin> Transport for ManagedCsTransport<BUS, CS> {
    type Error = TransportError<BUS::Error, CS::Error>;

    fn transfer(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.csn_pin.set_low().map_err(TransportError::ChipSelect)?;
        let result = self
            .bus
            .transfer_in_place(buf)
            .and_then(|_| self.bus.flush());
        // always deselect, even if the exchange failed
        self.csn_pin.set_high().map_err(TransportError::ChipSelect)?;
        result.map_err(TransportError::Bus)
    }
}

#[cfg(test)]
mod test {
    extern crate std;
    use super::{ManagedCsTransport, Transport, TransportError};
    use crate::test::{BrokenBus, BrokenPin};
    use embedded_hal::{digital, spi::ErrorKind};
    use embedded_hal_mock::eh1::{
        digital::{Mock as PinMock, State as PinState, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };
    use std::vec;

    #[test]
    fn managed_cs_frames_each_transfer() {
        let cs_expectations = [
            // new()
            PinTransaction::set(PinState::High),
            // transfer()
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let spi_expectations = [
            SpiTransaction::transfer_in_place(vec![0x05, 0xFF], vec![0x0E, 76]),
            SpiTransaction::flush(),
        ];
        let mut bus = SpiMock::new(&spi_expectations);
        let mut cs = PinMock::new(&cs_expectations);
        let mut transport = ManagedCsTransport::new(bus.clone(), cs.clone()).unwrap();
        let mut buf = [0x05, 0xFF];
        transport.transfer(&mut buf).unwrap();
        assert_eq!(buf, [0x0E, 76]);
        bus.done();
        cs.done();
    }

    #[test]
    fn managed_cs_released_when_bus_fails() {
        let cs_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ];
        let mut cs = PinMock::new(&cs_expectations);
        let mut transport = ManagedCsTransport::new(BrokenBus, cs.clone()).unwrap();
        let mut buf = [0x05, 0xFF];
        assert!(matches!(
            transport.transfer(&mut buf),
            Err(TransportError::Bus(ErrorKind::Other))
        ));
        cs.done();
    }

    #[test]
    fn managed_cs_reports_pin_failure() {
        assert!(matches!(
            ManagedCsTransport::new(BrokenBus, BrokenPin),
            Err(digital::ErrorKind::Other)
        ));
    }
}
