//! Values handed outward to the reporter.

use crate::band::Label;

/// Live readout of the sense line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub frequency_hz: u32,
    pub label: Label,
}

/// One finished touch: a confirmed press followed by a confirmed release.
///
/// Emitted exactly once per pair and immutable from then on; the detector
/// keeps no reference to it. A dwell under the configured minimum sets
/// `advisory` but the event is still emitted, a too-short touch is worth
/// reporting, not hiding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchEvent {
    /// How many touches were seen so far, this one included.
    pub ordinal: u32,
    pub press_ms: u32,
    pub release_ms: u32,
    pub dwell_ms: u32,
    pub frequency_hz: u32,
    pub label: Label,
    pub advisory: bool,
}
