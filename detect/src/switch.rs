//! Debounce the weapon's tip switch.

/// Filter a noisy contact into a stable logical state.
///
/// The raw level is sampled every poll. Any flip restarts the stability
/// clock; only once the level has held for the configured debounce time
/// does `confirmed` follow it. A bounce shorter than that never shows up
/// in `confirmed`.
///
/// `just_pressed` and `just_released` are raised for exactly one poll,
/// on the poll where `confirmed` changed.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switch {
    debounce_ms: u32,
    previous_raw: bool,
    last_change_ms: u32,
    pub confirmed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl Switch {
    #[must_use]
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            ..Self::default()
        }
    }

    pub fn update(&mut self, raw: bool, now_ms: u32) {
        if raw != self.previous_raw {
            self.last_change_ms = now_ms;
            self.previous_raw = raw;
        }

        let was_confirmed = self.confirmed;
        if now_ms.wrapping_sub(self.last_change_ms) >= self.debounce_ms {
            self.confirmed = raw;
        }

        self.just_pressed = !was_confirmed && self.confirmed;
        self.just_released = was_confirmed && !self.confirmed;
    }
}
