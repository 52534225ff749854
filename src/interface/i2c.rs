//! I2C interface implementation built on top of `embedded-hal` `I2c`.

use embedded_hal::i2c::I2c;

use super::FuelGaugeInterface;

/// I2C-based register transport bound to a single device address.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Creates a new interface talking to `address`.
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Returns the 7-bit device address.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Provides mutable access to the wrapped bus.
    pub fn i2c_mut(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    /// Consumes the interface and returns the owned bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> FuelGaugeInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, bytes: &[u8]) -> core::result::Result<(), Self::Error> {
        self.i2c.write(self.address, bytes)
    }

    fn read(&mut self, buf: &mut [u8]) -> core::result::Result<(), Self::Error> {
        if buf.is_empty() {
            return Ok(());
        }

        self.i2c.read(self.address, buf)
    }

    fn read_u16(&mut self, register: u8) -> core::result::Result<u16, Self::Error> {
        let mut raw = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut raw)?;
        Ok(u16::from_be_bytes(raw))
    }

    fn write_u16(&mut self, register: u8, value: u16) -> core::result::Result<(), Self::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c.write(self.address, &[register, msb, lsb])
    }
}
