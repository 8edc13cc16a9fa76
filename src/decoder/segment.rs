//! Streaming segmentation of the sanitized sample stream.
//!
//! The stream alternates between bursts of long sync-pulse samples (one per
//! sensor that saw the flash) and runs of short sweep hits. [`Segmenter`]
//! collects consecutive pulse samples whose lit intervals overlap into one
//! pulse set, decodes the set's width class and channel, tracks which sweep
//! is currently in flight and the scanning-cycle sequence number, and emits
//! completed [`GroupEvent`]s in input order.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::decoder::channel::detect_channel;
use crate::decoder::pulse::decode_pulse_set;
use crate::protocol::{Protocol, MIN_PULSE_EVENTS};
use crate::types::{Channel, GroupEvent, LightGroup, LightSample, Rotor};

/// Epoch sentinel predating any real pulse. The first measurable gap is
/// computed against this and never matches a station, which forces the
/// stream to resynchronize on its second pulse set.
const FAR_PAST_EPOCH: f64 = -1e6;

/// Running tally of tolerated stream anomalies.
///
/// Advisory conditions leave decoder state untouched. Recoverable ones drop
/// the offending pulse set and clear the active sweep, so following sweep
/// hits are discarded until the next valid pulse resynchronizes the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyCounters {
    /// Pulse sets containing the same sensor more than once.
    pub duplicate_sensors: u64,
    /// Pulse sets seen with fewer than the minimum event count.
    pub small_pulse_sets: u64,
    /// Pulse events ending before the open pulse set begins.
    pub out_of_order_pulses: u64,
    /// Pulse sets whose median length matched no width class.
    pub unclassified_pulses: u64,
    /// Pulse sets whose timing gap matched no station.
    pub unknown_channels: u64,
    /// Sweep hits dropped while no sweep was in flight.
    pub orphaned_sweep_samples: u64,
}

/// Context of the most recently accepted sync pulse.
#[derive(Debug, Clone, Copy)]
struct ActiveSweep {
    channel: Channel,
    rotor: Rotor,
    epoch: f64,
    seq: u32,
}

/// Streaming pulse/sweep segmenter.
///
/// Feed samples in arrival order with [`push`](Segmenter::push), drain
/// decoded groups with [`poll`](Segmenter::poll), and call
/// [`finish`](Segmenter::finish) once at end of stream. All state is local
/// to the instance; decoding is a pure function of the pushed samples and
/// the injected [`Protocol`].
#[derive(Debug)]
pub struct Segmenter {
    protocol: Protocol,
    pulse_buf: Vec<LightSample>,
    sweep_buf: Vec<LightSample>,
    /// Union of the open pulse set's lit intervals: earliest start,
    /// latest end. Reset to the empty range on every flush.
    pulse_start: u32,
    pulse_end: u64,
    last_pulse_epoch: f64,
    active_sweep: Option<ActiveSweep>,
    seq: u32,
    anomalies: AnomalyCounters,
    ready: VecDeque<GroupEvent>,
}

impl Segmenter {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            protocol,
            pulse_buf: Vec::new(),
            sweep_buf: Vec::new(),
            pulse_start: u32::MAX,
            pulse_end: 0,
            last_pulse_epoch: FAR_PAST_EPOCH,
            active_sweep: None,
            seq: 0,
            anomalies: AnomalyCounters::default(),
            ready: VecDeque::new(),
        }
    }

    /// Sequence number of the current scanning cycle.
    pub fn seq(&self) -> u32 {
        self.seq
    }

    /// Anomaly counts observed so far.
    pub fn anomalies(&self) -> AnomalyCounters {
        self.anomalies
    }

    /// Feed the next sample in arrival order.
    pub fn push(&mut self, sample: LightSample) {
        if sample.is_sweep() {
            self.push_sweep(sample);
        } else {
            self.push_pulse(sample);
        }
    }

    /// Next decoded group, if one is ready.
    pub fn poll(&mut self) -> Option<GroupEvent> {
        self.ready.pop_front()
    }

    /// Flush at end of stream. A pending pulse set is still decoded, but
    /// buffered sweep hits are discarded: no later pulse can stamp their
    /// cycle.
    pub fn finish(&mut self) {
        if !self.pulse_buf.is_empty() {
            self.flush_pulse_set();
        }
        if !self.sweep_buf.is_empty() {
            debug!(samples = self.sweep_buf.len(), "discarding trailing sweep samples");
            self.sweep_buf.clear();
        }
    }

    fn push_sweep(&mut self, sample: LightSample) {
        if !self.pulse_buf.is_empty() {
            self.flush_pulse_set();
        }
        if self.active_sweep.is_none() {
            // Cannot tell which sweep this hit belongs to.
            self.anomalies.orphaned_sweep_samples += 1;
            return;
        }
        self.sweep_buf.push(sample);
    }

    fn push_pulse(&mut self, sample: LightSample) {
        if !self.sweep_buf.is_empty() {
            self.flush_sweep();
        }

        // A pulse belongs to the open set iff its lit interval overlaps the
        // union of the intervals seen so far.
        let overlaps = u64::from(sample.timestamp) <= self.pulse_end
            && sample.end() >= u64::from(self.pulse_start);
        if self.pulse_buf.is_empty() || overlaps {
            self.pulse_start = self.pulse_start.min(sample.timestamp);
            self.pulse_end = self.pulse_end.max(sample.end());
            self.pulse_buf.push(sample);
            return;
        }

        if sample.end() < u64::from(self.pulse_start) {
            warn!(timestamp = sample.timestamp, "out of order pulse");
            self.anomalies.out_of_order_pulses += 1;
        }

        // Two pulse sets back to back, no sweep hits in between.
        self.flush_pulse_set();
        self.pulse_start = sample.timestamp;
        self.pulse_end = sample.end();
        self.pulse_buf.push(sample);
    }

    fn flush_sweep(&mut self) {
        let samples = std::mem::take(&mut self.sweep_buf);
        let Some(active) = self.active_sweep else {
            // push_sweep only buffers while a sweep is in flight and nothing
            // in between clears it, so this is unreachable on any input.
            error!(samples = samples.len(), "sweep hits buffered without a sweep in flight");
            return;
        };
        self.ready.push_back(GroupEvent::Sweep(LightGroup {
            channel: active.channel,
            rotor: active.rotor,
            epoch: active.epoch,
            skip: false,
            seq: active.seq,
            samples,
        }));
    }

    fn flush_pulse_set(&mut self) {
        let samples = std::mem::take(&mut self.pulse_buf);
        self.pulse_start = u32::MAX;
        self.pulse_end = 0;

        let decoded = decode_pulse_set(&samples);
        if decoded.duplicate_sensors != 0 {
            self.anomalies.duplicate_sensors += 1;
        }
        let channel = detect_channel(&self.protocol, self.last_pulse_epoch, decoded.epoch);
        // The epoch advances even when the pulse is rejected, so the next
        // gap is measured from the right place.
        self.last_pulse_epoch = decoded.epoch;

        if samples.len() < MIN_PULSE_EVENTS {
            warn!(
                channel = ?channel,
                epoch = decoded.epoch,
                length = decoded.length,
                samples = samples.len(),
                "small pulse set"
            );
            self.anomalies.small_pulse_sets += 1;
        }

        let (channel, bits) = match (channel, decoded.class.bits) {
            (Some(channel), Some(bits)) if samples.len() >= MIN_PULSE_EVENTS => (channel, bits),
            (channel, bits) => {
                if channel.is_none() {
                    self.anomalies.unknown_channels += 1;
                }
                if bits.is_none() {
                    self.anomalies.unclassified_pulses += 1;
                }
                debug!(
                    ?channel,
                    length = decoded.length,
                    samples = samples.len(),
                    "dropping pulse set, resetting sweep state"
                );
                self.active_sweep = None;
                return;
            }
        };

        if bits.skip {
            // Timing marker only; the sweep in flight, if any, continues.
            return;
        }

        // A valid non-skip pulse opens a new sweep. H of A or B starts a
        // complete scanning cycle; C's sweeps share the cycle its B opened.
        if matches!(channel, Channel::A | Channel::B) && bits.rotor == Rotor::Horizontal {
            self.seq += 1;
        }
        debug!(seq = self.seq, %channel, rotor = %bits.rotor, sensors = samples.len(), "sweep start");

        self.active_sweep =
            Some(ActiveSweep { channel, rotor: bits.rotor, epoch: decoded.epoch, seq: self.seq });
        self.ready.push_back(GroupEvent::Pulse(LightGroup {
            channel,
            rotor: bits.rotor,
            epoch: decoded.epoch,
            skip: false,
            seq: self.seq,
            samples,
        }));
    }
}
