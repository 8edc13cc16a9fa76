//! Raw light events reported by the headset sensor array.

use serde::{Deserialize, Serialize};

use crate::protocol::SWEEP_LENGTH_MAX;

/// One raw light event: a single photo-sensor lit for some ticks.
///
/// Samples arrive time-ordered from the dump loader and are never mutated
/// by the decoder; groups copy the samples they contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightSample {
    /// Base-station tick count at the start of the lit period.
    pub timestamp: u32,
    /// Reporting photo-sensor, zero-based.
    pub sensor_id: u8,
    /// Lit duration in ticks.
    pub length: u16,
}

impl LightSample {
    pub const fn new(timestamp: u32, sensor_id: u8, length: u16) -> Self {
        Self { timestamp, sensor_id, length }
    }

    /// All-ones filler records carry no information and are removed by
    /// [`sanitize`](crate::sanitize) before any classification.
    pub fn is_sentinel(&self) -> bool {
        self.timestamp == u32::MAX && self.sensor_id == u8::MAX && self.length == u16::MAX
    }

    /// Sweep hits are short; sync pulse samples are long. The length
    /// threshold is the sole discriminator between the two kinds.
    pub fn is_sweep(&self) -> bool {
        self.length < SWEEP_LENGTH_MAX
    }

    pub fn is_pulse(&self) -> bool {
        !self.is_sweep()
    }

    /// Tick count at the end of the lit period, widened so intervals near
    /// the top of the 32-bit tick range stay comparable.
    pub fn end(&self) -> u64 {
        u64::from(self.timestamp) + u64::from(self.length)
    }
}
