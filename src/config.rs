//! Configuration primitives for the MAX17043 driver.

use crate::params::InputPolarity;
use crate::registers::DEFAULT_ADDRESS;

/// Lowest non-reserved 7-bit I2C address.
const MIN_ADDRESS: u8 = 0x08;
/// Highest non-reserved 7-bit I2C address.
const MAX_ADDRESS: u8 = 0x77;

/// User-facing configuration for the MAX17043 driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C address of the gauge.
    pub address: u8,
    /// Wiring polarity of the power-source input.
    pub polarity: InputPolarity,
}

/// Reasons a [`Config`] can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The address is outside the usable 7-bit range.
    InvalidAddress(u8),
}

impl Config {
    /// Begins building a [`Config`]. The input polarity has no sensible
    /// default and must be provided up front.
    pub fn new(polarity: InputPolarity) -> ConfigBuilder {
        ConfigBuilder::new(polarity)
    }

    /// Checks whether this configuration is usable.
    pub fn validate(&self) -> core::result::Result<(), ConfigError> {
        if !(MIN_ADDRESS..=MAX_ADDRESS).contains(&self.address) {
            return Err(ConfigError::InvalidAddress(self.address));
        }

        Ok(())
    }
}

/// Builder for [`Config`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Creates a new builder using the default bus address.
    pub fn new(polarity: InputPolarity) -> Self {
        Self {
            config: Config {
                address: DEFAULT_ADDRESS,
                polarity,
            },
        }
    }

    /// Overrides the I2C address.
    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Finalizes the builder and returns the [`Config`].
    pub fn build(self) -> Config {
        self.config
    }
}
