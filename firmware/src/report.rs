//! Human-readable reporting over the debug link.

use touche_detect::event::{Reading, TouchEvent};

/// Periodic readout of the line, with the running dwell while a press
/// is being measured.
pub fn live(reading: Reading, dwell_ms: Option<u32>) {
    if let Some(dwell_ms) = dwell_ms {
        defmt::info!(
            "MEASURING: {=u32} Hz [{}], dwell {=u32} ms",
            reading.frequency_hz,
            reading.label,
            dwell_ms
        );
    } else {
        defmt::info!(
            "LINE: {=u32} Hz [{}]",
            reading.frequency_hz,
            reading.label
        );
    }
}

/// One finished touch.
pub fn touch(event: &TouchEvent) {
    defmt::info!(
        "TOUCH #{=u32}: {=u32} Hz [{}], dwell {=u32} ms",
        event.ordinal,
        event.frequency_hz,
        event.label,
        event.dwell_ms
    );
    if event.advisory {
        defmt::warn!("TOUCH #{=u32}: dwell under the FIE minimum", event.ordinal);
    }
}
