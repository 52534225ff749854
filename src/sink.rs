//! Output sinks the driver publishes readings into.
//!
//! The driver only borrows sinks; whoever owns them decides how the values are
//! stored or forwarded. Publishing takes `&self` so a sink can be shared with
//! the rest of the application while the driver holds a reference to it.

use core::cell::Cell;

/// Receives numeric readings (volts, percent).
pub trait NumericSink {
    /// Publishes a new value.
    fn publish_numeric(&self, value: f32);
}

/// Receives boolean readings.
pub trait BinarySink {
    /// Publishes a new value.
    fn publish_boolean(&self, value: bool);
}

impl NumericSink for Cell<Option<f32>> {
    fn publish_numeric(&self, value: f32) {
        self.set(Some(value));
    }
}

impl BinarySink for Cell<Option<bool>> {
    fn publish_boolean(&self, value: bool) {
        self.set(Some(value));
    }
}

/// Which sinks are attached to a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SinkSummary {
    /// Battery voltage sink present.
    pub voltage: bool,
    /// Battery level sink present.
    pub battery_percent: bool,
    /// Power source sink present.
    pub power_source: bool,
}
