//! Sync-pulse set decoding.

use std::collections::BTreeSet;

use tracing::warn;

use crate::types::{LightSample, SyncPulseClass};

/// Median of the member timestamps, as the pulse-group epoch.
///
/// The lit duration varies with the over-the-light data bit and a few
/// sensors trigger slightly late, so neither the earliest start nor any one
/// sensor is a reliable anchor; the median start is robust against both.
/// Even counts average the two central values, so epochs can be half-ticks.
pub(crate) fn median_timestamp(samples: &[LightSample]) -> f64 {
    let mut timestamps: Vec<f64> = samples.iter().map(|s| f64::from(s.timestamp)).collect();
    timestamps.sort_by(|a, b| a.total_cmp(b));
    let n = timestamps.len();
    if n % 2 == 0 {
        (timestamps[n / 2 - 1] + timestamps[n / 2]) / 2.0
    } else {
        timestamps[n / 2]
    }
}

/// Median lit length over the members, in integer arithmetic.
pub(crate) fn median_length(samples: &[LightSample]) -> u32 {
    let mut lengths: Vec<u32> = samples.iter().map(|s| u32::from(s.length)).collect();
    lengths.sort_unstable();
    let n = lengths.len();
    if n % 2 == 0 {
        (lengths[n / 2 - 1] + lengths[n / 2]) / 2
    } else {
        lengths[n / 2]
    }
}

pub(crate) fn unique_sensors(samples: &[LightSample]) -> usize {
    samples.iter().map(|s| s.sensor_id).collect::<BTreeSet<_>>().len()
}

/// Result of decoding one pulse set's width and timing.
pub(crate) struct DecodedPulse {
    pub epoch: f64,
    pub length: u32,
    pub class: SyncPulseClass,
    pub duplicate_sensors: usize,
}

/// Decode a pulse set: duplicate-sensor check, median length, width class,
/// median epoch. Channel detection happens in the segmenter, which owns the
/// previous pulse epoch.
pub(crate) fn decode_pulse_set(samples: &[LightSample]) -> DecodedPulse {
    let duplicate_sensors = samples.len() - unique_sensors(samples);
    // not fatal
    if duplicate_sensors != 0 {
        warn!(duplicates = duplicate_sensors, "duplicate sensors in pulse set");
    }

    let length = median_length(samples);
    let class = SyncPulseClass::from_length(length);
    let epoch = median_timestamp(samples);

    DecodedPulse { epoch, length, class, duplicate_sensors }
}
