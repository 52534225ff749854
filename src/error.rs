//! Error handling primitives for the MAX17043 driver.

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the low-level register helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// The masked CONFIG register did not match the power-up default.
    Unrecognised {
        /// Masked CONFIG value that was read back.
        config: u16,
    },
    /// The provided configuration parameters are invalid.
    InvalidConfig,
    /// The device has not been validated, or validation failed.
    NotReady,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}
