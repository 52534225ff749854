//! Health reporting consumed by host diagnostics.
//!
//! Faults are fatal and latched by `setup()`. Warnings are recoverable and
//! tracked per source, so one failing register does not hide or clear the
//! condition of another.

/// Recoverable conditions. The driver keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Warning {
    /// Bus access failed while probing the CONFIG register during setup.
    Communication,
    /// `VCELL` could not be read.
    VcellRead,
    /// `SOC` could not be read.
    SocRead,
    /// The sleep bit could not be written.
    SleepWrite,
}

impl Warning {
    /// Human-readable description.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Communication => "communication failed",
            Self::VcellRead => "Unable to read VCELL",
            Self::SocRead => "Unable to read SOC",
            Self::SleepWrite => "Unable to write sleep bit",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::Communication => 1 << 0,
            Self::VcellRead => 1 << 1,
            Self::SocRead => 1 << 2,
            Self::SleepWrite => 1 << 3,
        }
    }
}

/// Fatal conditions reported by `setup()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// The CONFIG register could not be probed.
    Communication,
    /// The masked CONFIG register does not match the power-up default.
    Unrecognised,
    /// Writing the default back to CONFIG failed.
    SleepResetFailed,
}

impl Fault {
    /// Human-readable description.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Communication => "communication failed",
            Self::Unrecognised => "unrecognised",
            Self::SleepResetFailed => "sleep reset failed",
        }
    }
}

/// Tri-state health exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Status {
    /// No outstanding condition.
    Healthy,
    /// At least one recoverable condition is active.
    Warning(Warning),
    /// Setup failed.
    Error(Fault),
}

impl Status {
    /// Message attached to the current status, if any.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Healthy => None,
            Self::Warning(warning) => Some(warning.message()),
            Self::Error(fault) => Some(fault.message()),
        }
    }
}

/// Set of active warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Warnings(u8);

impl Warnings {
    const ORDER: [Warning; 4] = [
        Warning::Communication,
        Warning::VcellRead,
        Warning::SocRead,
        Warning::SleepWrite,
    ];

    pub(crate) fn set(&mut self, warning: Warning) {
        self.0 |= warning.bit();
    }

    pub(crate) fn clear(&mut self, warning: Warning) {
        self.0 &= !warning.bit();
    }

    pub(crate) fn contains(self, warning: Warning) -> bool {
        self.0 & warning.bit() != 0
    }

    /// Highest priority active warning.
    pub(crate) fn first(self) -> Option<Warning> {
        Self::ORDER.into_iter().find(|w| self.contains(*w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_tracked_independently() {
        let mut warnings = Warnings::default();
        assert_eq!(warnings.first(), None);

        warnings.set(Warning::SocRead);
        warnings.set(Warning::VcellRead);
        assert_eq!(warnings.first(), Some(Warning::VcellRead));

        warnings.clear(Warning::VcellRead);
        assert_eq!(warnings.first(), Some(Warning::SocRead));

        warnings.clear(Warning::SocRead);
        assert_eq!(warnings.first(), None);
    }

    #[test]
    fn status_messages() {
        assert_eq!(Status::Healthy.message(), None);
        assert_eq!(
            Status::Warning(Warning::VcellRead).message(),
            Some("Unable to read VCELL")
        );
        assert_eq!(
            Status::Error(Fault::Unrecognised).message(),
            Some("unrecognised")
        );
        assert_eq!(Fault::SleepResetFailed.message(), "sleep reset failed");
    }
}
