//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod nrf24;
pub use nrf24::{frame, Command, Nrf24Error, Nrf24l01, Register, MAX_PAYLOAD_SIZE};

mod config;
pub use config::RadioConfig;

mod interrupt;
pub use interrupt::EdgeInterrupt;

mod state;
pub use state::DeviceState;

mod transport;
pub use transport::{DeviceTransport, ManagedCsTransport, Transport, TransportError};
