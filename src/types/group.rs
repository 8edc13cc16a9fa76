//! Decoded pulse-groups and sweep-groups.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::LightSample;

/// Base-station identity.
///
/// `A` runs alone and pulses once per half-rotation. `B` and `C` run
/// interleaved, pulsing 20 000 ticks apart within the same slot. The
/// identity is never carried in the pulse payload; it is recovered from
/// inter-pulse timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    A,
    B,
    C,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Channel::A => 'A',
            Channel::B => 'B',
            Channel::C => 'C',
        };
        write!(f, "{letter}")
    }
}

/// Sweep axis: each rotation carries one horizontal and one vertical pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotor {
    Horizontal,
    Vertical,
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Rotor::Horizontal => 'H',
            Rotor::Vertical => 'V',
        };
        write!(f, "{letter}")
    }
}

/// A group of samples that observed one sync pulse, or one sweep pass.
///
/// Pulse-groups and sweep-groups share this record; `rotor`, `epoch` and
/// `seq` are decoded for pulse-groups and inherited by the sweep-group
/// that follows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightGroup {
    pub channel: Channel,
    pub rotor: Rotor,
    /// Pulse timestamp chosen as the zero of the sweep's angle, in ticks.
    /// Median of the member timestamps, so fractional on even counts.
    pub epoch: f64,
    /// Skip bit of the opening pulse. Emitted groups always carry `false`;
    /// skip pulses produce no group at all.
    pub skip: bool,
    /// Scanning-cycle sequence number.
    pub seq: u32,
    /// The input samples making up this group, in arrival order.
    pub samples: Vec<LightSample>,
}

impl LightGroup {
    /// Number of distinct sensors represented in the group.
    pub fn unique_sensors(&self) -> usize {
        self.samples.iter().map(|s| s.sensor_id).collect::<BTreeSet<_>>().len()
    }
}

impl fmt::Display for LightGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "channel {} rotor {} seq {} epoch {} ({} samples)",
            self.channel,
            self.rotor,
            self.seq,
            FmtEpoch(self.epoch),
            self.samples.len()
        )
    }
}

/// Epochs are medians: print whole ticks plainly, half-ticks with one decimal.
struct FmtEpoch(f64);

impl fmt::Display for FmtEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

/// Item of the decoded group stream, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GroupEvent {
    /// A sync-pulse group that opened a sweep.
    Pulse(LightGroup),
    /// A completed sweep.
    Sweep(LightGroup),
}

impl GroupEvent {
    pub fn group(&self) -> &LightGroup {
        match self {
            GroupEvent::Pulse(group) | GroupEvent::Sweep(group) => group,
        }
    }

    pub fn is_pulse(&self) -> bool {
        matches!(self, GroupEvent::Pulse(_))
    }
}
