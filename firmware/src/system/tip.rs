use crate::system::hal::gpio;

/// The weapon's tip switch, read through the RC-filtered line.
///
/// The point is normally closed, so the filtered level sits high at rest
/// and collapses once the tip lands. The inversion stays here; the
/// detection logic only ever sees "pressed".
pub struct TipSwitch {
    pin: Pin,
}

pub type Pin = gpio::gpiog::PG14<gpio::Input>;

impl TipSwitch {
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn pressed(&self) -> bool {
        self.pin.is_low()
    }
}
