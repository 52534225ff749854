//! Decoding of the VCELL and SOC registers.

use crate::params::PowerSource;

/// VCELL resolution in millivolts per LSB of the 12-bit reading.
const VCELL_MV_PER_LSB: f32 = 1.25;
/// SOC low-byte resolution, approximately 1/256 %.
const SOC_PERCENT_PER_LSB: f32 = 0.003906;

/// Converts a raw `VCELL` register value to volts.
///
/// Only the upper 12 bits carry the measurement.
pub fn voltage_from_raw(raw: u16) -> f32 {
    VCELL_MV_PER_LSB * f32::from(raw >> 4) / 1000.0
}

/// Converts a raw `SOC` register value to percent.
pub fn percent_from_raw(raw: u16) -> f32 {
    let [whole, fraction] = raw.to_be_bytes();
    f32::from(whole) + SOC_PERCENT_PER_LSB * f32::from(fraction)
}

/// Values published during one update cycle.
///
/// A `None` means the quantity was skipped or could not be read.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// Cell voltage in volts.
    pub voltage: Option<f32>,
    /// State of charge in percent.
    pub battery_percent: Option<f32>,
    /// Current power source.
    pub power_source: Option<PowerSource>,
}
