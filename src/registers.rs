//! Register map definitions for the MAX17043 fuel gauge.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

/// Register address of `VCELL`.
pub const REG_VCELL: u8 = 0x02;
/// Register address of `SOC`.
pub const REG_SOC: u8 = 0x04;
/// Register address of `CONFIG`.
pub const REG_CONFIG: u8 = 0x0C;

/// Factory default of `CONFIG` after power-up.
pub const CONFIG_POWER_UP_DEFAULT: u16 = 0x971C;
/// Clears the sleep (7), unused (6) and alert (5) bits before identity checks.
pub const CONFIG_SAFE_MASK: u16 = 0xFF1F;
/// `CONFIG.SLEEP` bit.
pub const CONFIG_SLEEP_MASK: u16 = 0x0080;

/// Default 7-bit I2C address of the gauge.
pub const DEFAULT_ADDRESS: u8 = 0x36;

/// Bitfield representation of the `CONFIG` register (address `0x0C`).
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigRegister {
    // Empty-alert threshold, two's complement of the percentage (bits 4:0).
    pub alert_threshold: B5,
    // Alert flag latched by the gauge (bit 5).
    pub alert: bool,
    // Reserved (bit 6).
    pub unused: bool,
    // Sleep request (bit 7).
    pub sleep: bool,
    // Compensation value for the cell model (bits 15:8).
    pub rcomp: u8,
}

impl ConfigRegister {
    /// The register as it reads right after power-up.
    pub fn power_up_default() -> Self {
        Self::from(CONFIG_POWER_UP_DEFAULT)
    }

    /// Power-up default with the sleep bit set.
    pub fn sleep_command() -> Self {
        Self::power_up_default().with_sleep(true)
    }

    /// Drops the bits that may legitimately differ between sessions.
    pub fn masked(self) -> Self {
        self.with_sleep(false).with_unused(false).with_alert(false)
    }

    /// Whether the masked value identifies a freshly powered gauge.
    pub fn is_power_up_default(self) -> bool {
        u16::from(self.masked()) == CONFIG_POWER_UP_DEFAULT
    }
}

impl From<u16> for ConfigRegister {
    fn from(value: u16) -> Self {
        Self::from_bytes(value.to_le_bytes())
    }
}

impl From<ConfigRegister> for u16 {
    fn from(value: ConfigRegister) -> Self {
        u16::from_le_bytes(value.into_bytes())
    }
}
