//! Strongly typed parameter enumerations for the MAX17043 driver.
//!
//! The power-source input is wired differently across boards, so its polarity
//! is always chosen explicitly when building a [`Config`](crate::config::Config).
//!
//! # Examples
//!
//! ```rust
//! use max17043::params::{InputPolarity, PowerSource};
//!
//! let polarity = InputPolarity::HighOnBattery;
//! assert_eq!(polarity.power_source(true), PowerSource::Battery);
//! assert_eq!(polarity.power_source(false), PowerSource::External);
//! ```

/// Meaning of a high level on the power-source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputPolarity {
    /// High level means the system runs from the cell.
    HighOnBattery,
    /// High level means external power is present.
    HighOnExternal,
}

impl InputPolarity {
    /// Maps a raw line level to the power source it denotes.
    pub const fn power_source(self, level_high: bool) -> PowerSource {
        match (self, level_high) {
            (Self::HighOnBattery, true) | (Self::HighOnExternal, false) => PowerSource::Battery,
            (Self::HighOnBattery, false) | (Self::HighOnExternal, true) => PowerSource::External,
        }
    }
}

/// Where the system is currently drawing power from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerSource {
    /// Running from the cell.
    Battery,
    /// Running from external (AC/USB) power.
    External,
}

impl PowerSource {
    /// Returns `true` when running from the cell.
    pub const fn is_battery(self) -> bool {
        matches!(self, Self::Battery)
    }
}
