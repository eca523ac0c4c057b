//! Timing constants and the band plan of one deployment.

use heapless::Vec;

use crate::band::{Band, Label};

/// How many bands a deployment may configure.
pub const MAX_BANDS: usize = 4;

// Frequency plan of the prototype. Neutral rides on the guard and the
// piste; each fencer's lamé carries its own valid-hit carrier.
const NEUTRAL_HZ: u32 = 20_000;
const VALID_A_HZ: u32 = 25_000;
const VALID_B_HZ: u32 = 40_000;
const TOLERANCE_HZ: u32 = 2_000;

// Counting windows short enough for live feedback, long enough to catch
// a couple thousand carrier periods.
const MEASURE_PERIOD_MS: u32 = 50;
const DISPLAY_PERIOD_MS: u32 = 200;

const DEBOUNCE_MS: u32 = 5;

// FIE material rules: a touch must keep contact for at least 15 ms.
const MIN_DWELL_MS: u32 = 15;

// Below this there is no carrier on the line, only noise.
const NOISE_FLOOR_HZ: u32 = 500;

/// Everything tunable about the detector.
///
/// Pin wiring stays in the firmware; this struct only carries timing and
/// the ordered band list, so every bench setup of the prototype is data
/// over the same code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub measure_period_ms: u32,
    pub display_period_ms: u32,
    pub debounce_ms: u32,
    pub min_dwell_ms: u32,
    pub noise_floor_hz: u32,
    pub bands: Vec<Band, MAX_BANDS>,
}

impl Default for Config {
    fn default() -> Self {
        let mut bands = Vec::new();
        for band in [
            Band {
                label: Label::Neutral,
                center_hz: NEUTRAL_HZ,
                tolerance_hz: TOLERANCE_HZ,
            },
            Band {
                label: Label::ValidA,
                center_hz: VALID_A_HZ,
                tolerance_hz: TOLERANCE_HZ,
            },
            Band {
                label: Label::ValidB,
                center_hz: VALID_B_HZ,
                tolerance_hz: TOLERANCE_HZ,
            },
        ] {
            bands.push(band).ok();
        }
        Self {
            measure_period_ms: MEASURE_PERIOD_MS,
            display_period_ms: DISPLAY_PERIOD_MS,
            debounce_ms: DEBOUNCE_MS,
            min_dwell_ms: MIN_DWELL_MS,
            noise_floor_hz: NOISE_FLOOR_HZ,
            bands,
        }
    }
}

impl Config {
    /// Map a measured frequency to its scoring meaning.
    ///
    /// Bands are tried in their configured order and the first hit wins,
    /// so overlap resolves deterministically. Anything under the noise
    /// floor is a dead line no matter what the bands say.
    #[must_use]
    pub fn classify(&self, frequency_hz: u32) -> Label {
        if frequency_hz < self.noise_floor_hz {
            return Label::None;
        }
        self.bands
            .iter()
            .find(|band| band.contains(frequency_hz))
            .map_or(Label::Unknown, |band| band.label)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn when_frequency_sits_in_a_band_it_gets_that_label() {
        let config = Config::default();
        assert_eq!(config.classify(20_000), Label::Neutral);
        assert_eq!(config.classify(25_000), Label::ValidA);
        assert_eq!(config.classify(40_000), Label::ValidB);
    }

    #[test]
    fn when_frequency_is_below_the_noise_floor_it_is_none() {
        let config = Config::default();
        assert_eq!(config.classify(0), Label::None);
        assert_eq!(config.classify(499), Label::None);
    }

    #[test]
    fn when_frequency_matches_no_band_it_is_unknown() {
        let config = Config::default();
        assert_eq!(config.classify(500), Label::Unknown);
        assert_eq!(config.classify(30_000), Label::Unknown);
        assert_eq!(config.classify(100_000), Label::Unknown);
    }

    #[test]
    fn when_frequency_sits_exactly_on_a_band_edge_it_still_counts() {
        let config = Config::default();
        assert_eq!(config.classify(23_000), Label::ValidA);
        assert_eq!(config.classify(27_000), Label::ValidA);
    }

    #[test]
    fn when_bands_overlap_the_first_configured_one_wins() {
        let mut config = Config::default();
        config.bands.clear();
        config
            .bands
            .push(Band {
                label: Label::ValidA,
                center_hz: 25_000,
                tolerance_hz: 10_000,
            })
            .unwrap();
        config
            .bands
            .push(Band {
                label: Label::ValidB,
                center_hz: 30_000,
                tolerance_hz: 10_000,
            })
            .unwrap();
        assert_eq!(config.classify(28_000), Label::ValidA);
        assert_eq!(config.classify(36_000), Label::ValidB);
    }

    proptest! {
        #[test]
        fn classification_is_total_and_deterministic(frequency_hz: u32) {
            let config = Config::default();
            let first = config.classify(frequency_hz);
            let second = config.classify(frequency_hz);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn any_frequency_within_a_default_band_maps_to_its_label(
            band_index in 0usize..3,
            offset in -2_000i64..=2_000,
        ) {
            let config = Config::default();
            let band = config.bands[band_index];
            let frequency_hz = (i64::from(band.center_hz) + offset) as u32;
            prop_assert_eq!(config.classify(frequency_hz), band.label);
        }
    }
}
