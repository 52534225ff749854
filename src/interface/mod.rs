//! Bus and pin abstractions for the MAX17043 driver.

pub mod i2c;
pub mod input;

/// Abstraction over the register transport required by the driver.
///
/// Every call is a single bounded transaction with the gauge. Implementations
/// must not retry on their own.
pub trait FuelGaugeInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes raw bytes to the device, e.g. a register select.
    fn write(&mut self, bytes: &[u8]) -> core::result::Result<(), Self::Error>;

    /// Reads raw bytes from the device at the current register pointer.
    fn read(&mut self, buf: &mut [u8]) -> core::result::Result<(), Self::Error>;

    /// Reads a big-endian 16-bit register.
    fn read_u16(&mut self, register: u8) -> core::result::Result<u16, Self::Error>;

    /// Writes a big-endian 16-bit register.
    fn write_u16(&mut self, register: u8, value: u16) -> core::result::Result<(), Self::Error>;
}

/// The discrete line reporting battery vs. external power.
///
/// Reads are treated as infallible.
pub trait PowerSourceInput {
    /// Puts the line into input mode.
    fn configure_as_input(&mut self);

    /// Returns the current line level.
    fn is_high(&mut self) -> bool;
}
