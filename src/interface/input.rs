//! Power-source input built on top of `embedded-hal` `InputPin`.

use embedded_hal::digital::InputPin;

use super::PowerSourceInput;

/// Adapts a HAL input pin to [`PowerSourceInput`].
///
/// HAL pins are put into input mode by their type, so configuring is a no-op.
/// A failed read is logged and reported as a low level.
pub struct InputPinAdapter<P> {
    pin: P,
}

impl<P> InputPinAdapter<P> {
    /// Wraps an already configured input pin.
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Consumes the adapter and returns the owned pin.
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P> PowerSourceInput for InputPinAdapter<P>
where
    P: InputPin,
{
    fn configure_as_input(&mut self) {}

    fn is_high(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(level) => level,
            Err(_) => {
                warn!("power source input read failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InputPinAdapter;
    use crate::interface::PowerSourceInput;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn forwards_pin_level() {
        let expectations = [
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
        ];
        let mut adapter = InputPinAdapter::new(PinMock::new(&expectations));

        adapter.configure_as_input();
        assert!(adapter.is_high());
        assert!(!adapter.is_high());

        adapter.release().done();
    }
}
