//! Turn pulse counts into frequency readings over rolling windows.

/// Windowed frequency estimator.
///
/// Feed it pulse deltas as they are drained from the counter and close
/// the window once the measure period has elapsed. Closing converts the
/// accumulated count into hertz and opens the next window. A window that
/// would close with zero elapsed time is skipped and the last reading
/// stays up.
///
/// All clock arithmetic wraps, so readings stay correct across the u32
/// millisecond rollover.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Estimator {
    window_start_ms: u32,
    pulses: u32,
    frequency_hz: u32,
}

impl Estimator {
    /// Add pulses drained from the counter to the open window.
    pub fn accumulate(&mut self, pulses: u32) {
        self.pulses = self.pulses.wrapping_add(pulses);
    }

    /// How long the current window has been open.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.window_start_ms)
    }

    /// Throw away the open window and start a fresh one.
    ///
    /// Used on a press edge so the measurement covers only pulses counted
    /// after the tip landed.
    pub fn restart(&mut self, now_ms: u32) {
        self.window_start_ms = now_ms;
        self.pulses = 0;
    }

    /// Close the window: refresh the reading and open the next window.
    ///
    /// Returns the new reading, or `None` when no time has elapsed, in
    /// which case the window stays open and the previous reading is kept.
    pub fn close(&mut self, now_ms: u32) -> Option<u32> {
        let elapsed_ms = self.elapsed_ms(now_ms);
        if elapsed_ms == 0 {
            return None;
        }
        self.frequency_hz = (u64::from(self.pulses) * 1_000 / u64::from(elapsed_ms)) as u32;
        self.restart(now_ms);
        Some(self.frequency_hz)
    }

    /// The latest completed reading.
    #[must_use]
    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn when_window_closes_it_scales_the_count_to_hertz() {
        let mut estimator = Estimator::default();
        estimator.restart(0);
        estimator.accumulate(1_250);
        assert_eq!(estimator.close(50), Some(25_000));
        assert_eq!(estimator.frequency_hz(), 25_000);
    }

    #[test]
    fn when_count_accumulates_over_several_drains_the_window_sums_them() {
        let mut estimator = Estimator::default();
        estimator.restart(100);
        for _ in 0..50 {
            estimator.accumulate(25);
        }
        assert_eq!(estimator.close(150), Some(25_000));
    }

    #[test]
    fn when_no_time_elapsed_the_window_is_skipped_and_reading_retained() {
        let mut estimator = Estimator::default();
        estimator.restart(0);
        estimator.accumulate(1_000);
        assert_eq!(estimator.close(50), Some(20_000));

        estimator.accumulate(123);
        assert_eq!(estimator.close(50), None);
        assert_eq!(estimator.frequency_hz(), 20_000);

        // The skipped window stayed open; its pulses are still there.
        assert_eq!(estimator.close(51), Some(123_000));
    }

    #[test]
    fn when_restarted_the_pending_count_is_dropped() {
        let mut estimator = Estimator::default();
        estimator.restart(0);
        estimator.accumulate(9_999);
        estimator.restart(10);
        estimator.accumulate(200);
        assert_eq!(estimator.close(20), Some(20_000));
    }

    #[test]
    fn when_the_clock_wraps_the_window_still_measures() {
        let mut estimator = Estimator::default();
        estimator.restart(u32::MAX - 24);
        estimator.accumulate(1_250);
        // 25 ms before the wrap, 25 ms after.
        assert_eq!(estimator.close(25), Some(25_000));
    }

    #[test]
    fn when_no_pulses_arrive_the_reading_is_zero() {
        let mut estimator = Estimator::default();
        estimator.restart(0);
        assert_eq!(estimator.close(50), Some(0));
    }

    proptest! {
        #[test]
        fn reading_is_count_scaled_by_elapsed(
            pulses in 0u32..1_000_000,
            elapsed_ms in 1u32..100_000,
        ) {
            let mut estimator = Estimator::default();
            estimator.restart(0);
            estimator.accumulate(pulses);
            let expected = (u64::from(pulses) * 1_000 / u64::from(elapsed_ms)) as u32;
            prop_assert_eq!(estimator.close(elapsed_ms), Some(expected));
        }
    }
}
