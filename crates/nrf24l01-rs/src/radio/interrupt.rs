/// The radio's IRQ pin, seen as a source of falling-edge notifications.
///
/// Implement this on top of the HAL's external interrupt support (EXTI line,
/// GPIO interrupt, etc.). The driver never reads the pin; it only hands over or
/// withdraws the handler that runs on a falling edge.
///
/// The handler runs outside of the driver's control (usually in interrupt context).
/// It must not touch the SPI bus unless it can take the same exclusive access the
/// rest of the application uses to call into [`Nrf24l01`](crate::radio::Nrf24l01);
/// a transaction interleaved with another one corrupts the bus framing.
/// Typically the handler only sets a flag, and the owner of the radio then reads
/// [`Nrf24l01::status_register()`](crate::radio::prelude::Nrf24Status::status_register)
/// and calls
/// [`Nrf24l01::clear_interrupt_flags()`](crate::radio::prelude::Nrf24Status::clear_interrupt_flags).
pub trait EdgeInterrupt {
    /// Run `handler` on every falling edge of the IRQ pin, replacing any previous handler.
    fn listen(&mut self, handler: fn());

    /// Stop notifying anything about IRQ edges.
    fn unlisten(&mut self);
}

/// For radios whose IRQ pin is not wired (or is polled instead).
impl EdgeInterrupt for () {
    fn listen(&mut self, _handler: fn()) {}

    fn unlisten(&mut self) {}
}
