//! Tie tip edges to measurement windows and emit touch events.

use crate::config::Config;
use crate::estimator::Estimator;
use crate::event::{Reading, TouchEvent};
use crate::snapshot::Snapshot;
use crate::switch::Switch;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum State {
    Idle,
    Measuring { press_ms: u32 },
}

/// The touch detector driven by the control loop.
///
/// Every tick takes one [`Snapshot`]. A confirmed press restarts the
/// measurement window, so the frequency of the eventual event covers
/// only pulses counted while the tip was down. A confirmed release
/// closes the window, classifies the reading and emits exactly one
/// [`TouchEvent`]. In between, windows keep closing on the measure
/// period to feed the live readout; while idle the same windows keep
/// monitoring whatever carrier sits on the line.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Detector {
    config: Config,
    switch: Switch,
    estimator: Estimator,
    state: State,
    touches: u32,
}

impl Detector {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            switch: Switch::new(config.debounce_ms),
            config,
            estimator: Estimator::default(),
            state: State::Idle,
            touches: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The live readout the reporter shows between events.
    #[must_use]
    pub fn reading(&self) -> Reading {
        let frequency_hz = self.estimator.frequency_hz();
        Reading {
            frequency_hz,
            label: self.config.classify(frequency_hz),
        }
    }

    /// Dwell accumulated so far, while a press is still held.
    #[must_use]
    pub fn dwell_so_far(&self, now_ms: u32) -> Option<u32> {
        match self.state {
            State::Idle => None,
            State::Measuring { press_ms } => Some(now_ms.wrapping_sub(press_ms)),
        }
    }

    /// Process one tick. Returns the finished event on a release edge.
    pub fn update(&mut self, snapshot: Snapshot) -> Option<TouchEvent> {
        let now_ms = snapshot.now_ms;
        self.estimator.accumulate(snapshot.pulses);
        self.switch.update(snapshot.tip_pressed, now_ms);

        match self.state {
            State::Idle if self.switch.just_pressed => {
                // Pulses counted before the press belong to the old
                // window; the measurement starts clean.
                self.estimator.restart(now_ms);
                self.state = State::Measuring { press_ms: now_ms };
                None
            }
            State::Measuring { press_ms } if self.switch.just_released => {
                self.estimator.close(now_ms);
                let frequency_hz = self.estimator.frequency_hz();
                let dwell_ms = now_ms.wrapping_sub(press_ms);
                self.state = State::Idle;
                self.touches = self.touches.wrapping_add(1);
                Some(TouchEvent {
                    ordinal: self.touches,
                    press_ms,
                    release_ms: now_ms,
                    dwell_ms,
                    frequency_hz,
                    label: self.config.classify(frequency_hz),
                    advisory: dwell_ms < self.config.min_dwell_ms,
                })
            }
            // Covers idle monitoring, the periodic tick while measuring,
            // and a spurious press edge while already measuring.
            _ => {
                if self.estimator.elapsed_ms(now_ms) >= self.config.measure_period_ms {
                    self.estimator.close(now_ms);
                }
                None
            }
        }
    }
}
