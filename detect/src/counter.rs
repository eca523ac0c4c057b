//! Count carrier edges arriving from the interrupt context.

use core::sync::atomic::{AtomicU32, Ordering};

/// Accumulator of rising edges seen on the sense line.
///
/// `increment` is meant to be called from the edge interrupt, nothing
/// else; `take_and_reset` from the control loop. Both go through one
/// atomic word, so a pulse arriving while the control loop drains the
/// counter lands in the next window instead of getting lost, and no
/// pulse is ever counted twice. No interrupt masking is involved.
///
/// The count wraps on overflow. At the carrier rates of the prototype
/// (tens of kHz) a window would have to stay open for over a day for
/// that to happen.
#[derive(Debug, Default)]
pub struct PulseCounter {
    pulses: AtomicU32,
}

impl PulseCounter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pulses: AtomicU32::new(0),
        }
    }

    /// Record one rising edge. Safe to call from the interrupt handler.
    pub fn increment(&self) {
        self.pulses.fetch_add(1, Ordering::Relaxed);
    }

    /// Read the count accumulated so far and clear it, indivisibly.
    pub fn take_and_reset(&self) -> u32 {
        self.pulses.swap(0, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_incremented_the_next_take_returns_the_count() {
        let counter = PulseCounter::new();
        counter.increment();
        counter.increment();
        counter.increment();
        assert_eq!(counter.take_and_reset(), 3);
    }

    #[test]
    fn when_taken_the_count_starts_over() {
        let counter = PulseCounter::new();
        counter.increment();
        assert_eq!(counter.take_and_reset(), 1);
        assert_eq!(counter.take_and_reset(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.take_and_reset(), 2);
    }

    #[test]
    fn when_increments_interleave_with_takes_no_pulse_is_lost_or_duplicated() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        const PULSES: u32 = 100_000;

        let counter = Arc::new(PulseCounter::new());
        let done = Arc::new(AtomicBool::new(false));

        let writer = {
            let counter = Arc::clone(&counter);
            let done = Arc::clone(&done);
            std::thread::spawn(move || {
                for _ in 0..PULSES {
                    counter.increment();
                }
                done.store(true, Ordering::Release);
            })
        };

        let mut collected: u64 = 0;
        while !done.load(Ordering::Acquire) {
            collected += u64::from(counter.take_and_reset());
        }
        writer.join().unwrap();
        collected += u64::from(counter.take_and_reset());

        assert_eq!(collected, u64::from(PULSES));
    }
}
