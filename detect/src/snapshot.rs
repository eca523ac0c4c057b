//! Raw per-tick input handed over by the hardware binding.

/// One control-loop tick worth of raw inputs.
///
/// The firmware fills this every tick and passes it to the detector. It
/// carries raw data with two exceptions: the pulse counter has already
/// been drained (that is the one touch of shared state), and the tip
/// level has already been through the board's polarity inversion, so
/// `true` means the tip is mechanically pressed.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Monotonic milliseconds; wraps.
    pub now_ms: u32,
    /// Rising edges counted since the previous tick.
    pub pulses: u32,
    /// Debounce is left to the detector.
    pub tip_pressed: bool,
}
