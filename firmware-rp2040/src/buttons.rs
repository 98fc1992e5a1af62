//! GPIO button input.

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use pad_core::ButtonInput;

/// Buttons wired from a GPIO to ground, read through the internal pull-up.
pub struct GpioButtons<'d, const N: usize> {
    pins: [Input<'d>; N],
}

impl<'d, const N: usize> GpioButtons<'d, N> {
    /// Configure `pins` as pulled-up inputs with the Schmitt trigger on.
    pub fn new(pins: [Peri<'d, AnyPin>; N]) -> Self {
        Self {
            pins: pins.map(|pin| {
                let mut input = Input::new(pin, Pull::Up);
                input.set_schmitt(true);
                input
            }),
        }
    }
}

impl<const N: usize> ButtonInput for GpioButtons<'_, N> {
    fn button_count(&self) -> usize {
        N
    }

    fn is_pressed(&mut self, index: usize) -> bool {
        self.pins.get(index).is_some_and(|pin| pin.is_low())
    }
}
