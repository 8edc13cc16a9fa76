//! Sync-pulse width classification.
//!
//! Base stations encode three bits into the lit width of each
//! omnidirectional sync flash: the skip bit, the rotor of the sweep that
//! follows, and one bit of the over-the-light data stream. Widths cluster
//! around nominal durations 500 ticks apart, so classification is by
//! proximity, never equality.
//!
//! Reference: <https://github.com/nairol/LighthouseRedox/blob/master/docs/Light%20Emissions.md>

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::protocol::PULSE_CLASS_TOLERANCE;
use crate::types::Rotor;

/// Bits carried by a classifiable sync pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseBits {
    /// When set, the pulse marks timing only; no sweep follows from this
    /// station in this slot.
    pub skip: bool,
    /// Rotor of the sweep the pulse opens.
    pub rotor: Rotor,
    /// One bit of the over-the-light data stream. Decoded but unused here.
    pub databit: bool,
}

/// One row of the pulse width table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPulseClass {
    /// Nominal lit duration in ticks. Zero on lookup misses.
    pub duration: u16,
    /// `None` on the bracketing sentinel rows and on lookup misses.
    pub bits: Option<PulseBits>,
}

const fn valid(duration: u16, skip: bool, rotor: Rotor, databit: bool) -> SyncPulseClass {
    SyncPulseClass { duration, bits: Some(PulseBits { skip, rotor, databit }) }
}

const fn sentinel(duration: u16) -> SyncPulseClass {
    SyncPulseClass { duration, bits: None }
}

/// The eight canonical pulse classes plus the two bracketing sentinel rows.
pub const PULSE_TABLE: [SyncPulseClass; 10] = [
    sentinel(2500),
    valid(3000, false, Rotor::Horizontal, false),
    valid(3500, false, Rotor::Vertical, false),
    valid(4000, false, Rotor::Horizontal, true),
    valid(4500, false, Rotor::Vertical, true),
    valid(5000, true, Rotor::Horizontal, false),
    valid(5500, true, Rotor::Vertical, false),
    valid(6000, true, Rotor::Horizontal, true),
    valid(6500, true, Rotor::Vertical, true),
    sentinel(7000),
];

impl SyncPulseClass {
    /// Classify a nominal pulse length by proximity. The first row within
    /// the tolerance wins; unmatched lengths yield a bit-less class.
    pub fn from_length(length: u32) -> SyncPulseClass {
        for row in &PULSE_TABLE {
            let lo = u32::from(row.duration) - u32::from(PULSE_CLASS_TOLERANCE);
            let hi = u32::from(row.duration) + u32::from(PULSE_CLASS_TOLERANCE);
            if length > lo && length < hi {
                return *row;
            }
        }
        debug!(length, "no pulse class for length");
        SyncPulseClass { duration: 0, bits: None }
    }
}
