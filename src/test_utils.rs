//! Synthetic stream construction for tests and benches.
//!
//! Real captures come from a dump loader that is out of scope here, so the
//! fixtures are generated instead: protocol-correct pulse clusters and
//! sweep hits laid out on the station timing grid, for both the lone-A and
//! the interleaved B/C emission modes.

#![cfg(any(test, feature = "benchmark"))]

use crate::protocol::{Protocol, CHANNEL_SPACE};
use crate::types::LightSample;

/// Width of a non-skip horizontal pulse (skip 0, rotor H, data 0).
pub const PULSE_H: u16 = 3000;
/// Width of a non-skip vertical pulse (skip 0, rotor V, data 0).
pub const PULSE_V: u16 = 3500;
/// Width of a skip pulse (skip 1, rotor H, data 0).
pub const PULSE_SKIP: u16 = 5000;

/// Builder for synthetic light-sample streams.
pub struct StreamBuilder {
    protocol: Protocol,
    samples: Vec<LightSample>,
}

impl StreamBuilder {
    pub fn new(protocol: Protocol) -> Self {
        Self { protocol, samples: Vec::new() }
    }

    /// Finish and take the accumulated samples.
    pub fn samples(self) -> Vec<LightSample> {
        self.samples
    }

    /// Append one raw sample.
    pub fn raw(mut self, sample: LightSample) -> Self {
        self.samples.push(sample);
        self
    }

    /// Append a sentinel filler record.
    pub fn sentinel(self) -> Self {
        self.raw(LightSample::new(u32::MAX, u8::MAX, u16::MAX))
    }

    /// Append a sync-pulse cluster: one event per sensor, starts staggered
    /// by up to two ticks the way real sensors trigger slightly apart.
    ///
    /// With five to eight sensors the stagger pattern makes the median
    /// timestamp land exactly one tick after `t`.
    pub fn pulse(mut self, t: u32, length: u16, sensors: &[u8]) -> Self {
        for (i, &sensor_id) in sensors.iter().enumerate() {
            self.samples.push(LightSample::new(t + (i as u32 % 3), sensor_id, length));
        }
        self
    }

    /// Append sweep hits: one short event per sensor, spread 400 ticks
    /// apart as the plane crosses the sensor array.
    pub fn sweep_hits(mut self, t: u32, length: u16, sensors: &[u8]) -> Self {
        for (i, &sensor_id) in sensors.iter().enumerate() {
            self.samples.push(LightSample::new(t + 400 * i as u32, sensor_id, length));
        }
        self
    }

    /// Append lone-station cycles: an H pulse and its sweep, then a V pulse
    /// and its sweep, one pulse per half-period.
    pub fn a_mode_cycles(mut self, start: u32, cycles: u32, sensors: &[u8]) -> Self {
        let half = self.protocol.half_period() as u32;
        let mut t = start;
        for _ in 0..cycles {
            self = self.pulse(t, PULSE_H, sensors).sweep_hits(t + half / 2, 120, sensors);
            t += half;
            self = self.pulse(t, PULSE_V, sensors).sweep_hits(t + half / 2, 120, sensors);
            t += half;
        }
        self
    }

    /// Append interleaved two-station cycles. Each cycle is four
    /// half-period slots (B sweeps H, C sweeps H, B sweeps V, C sweeps V),
    /// and in every slot the off-duty station emits a skip pulse 20 000
    /// ticks after the on-duty station's pulse.
    pub fn bc_mode_cycles(mut self, start: u32, cycles: u32, sensors: &[u8]) -> Self {
        let half = self.protocol.half_period() as u32;
        let space = CHANNEL_SPACE as u32;
        let mut t = start;
        for _ in 0..cycles {
            self = self
                .pulse(t, PULSE_H, sensors)
                .pulse(t + space, PULSE_SKIP, sensors)
                .sweep_hits(t + half / 2, 120, sensors);
            t += half;
            self = self
                .pulse(t, PULSE_SKIP, sensors)
                .pulse(t + space, PULSE_H, sensors)
                .sweep_hits(t + half / 2 + space, 120, sensors);
            t += half;
            self = self
                .pulse(t, PULSE_V, sensors)
                .pulse(t + space, PULSE_SKIP, sensors)
                .sweep_hits(t + half / 2, 120, sensors);
            t += half;
            self = self
                .pulse(t, PULSE_SKIP, sensors)
                .pulse(t + space, PULSE_V, sensors)
                .sweep_hits(t + half / 2 + space, 120, sensors);
            t += half;
        }
        self
    }
}
