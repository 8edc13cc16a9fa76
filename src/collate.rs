//! Pairing horizontal and vertical sweeps into per-sensor angles.
//!
//! A post-pass over the materialized sweep list: for one station, each
//! scanning cycle should contain exactly one horizontal and one vertical
//! sweep. Sensors seen in both contribute one `(x, y, t)` reading per
//! cycle, expressed in angle ticks relative to the sweep epochs.

use std::collections::BTreeMap;

use tracing::{error, warn};

use crate::protocol::MAX_SENSORS;
use crate::types::{Channel, LightGroup, LightSample, Rotor, SensorAngles};

/// Convert one sweep hit to angle ticks relative to the sweep epoch.
///
/// The timestamp is advanced to the middle of the lit period first: the
/// laser line's cross-section power profile is symmetric, so the center is
/// insensitive to line-width variation at the sensor, while the leading
/// edge moves with it. Arithmetic wraps with the 32-bit tick counter.
fn sample_to_angle_ticks(sample: &LightSample, epoch: u32) -> u32 {
    sample.timestamp.wrapping_add(u32::from(sample.length) / 2).wrapping_sub(epoch)
}

fn sweeps_matching(
    sweeps: &[LightGroup],
    station: Channel,
    seq: u32,
    rotor: Rotor,
) -> Vec<&LightGroup> {
    sweeps
        .iter()
        .filter(|g| g.channel == station && g.seq == seq && g.rotor == rotor)
        .collect()
}

/// Collect all readings of `station` into per-sensor angle series.
///
/// Cycles run from sequence 1 up to, but not including, the highest
/// sequence seen: the cycle in progress when the stream ended is assumed
/// truncated, as is everything after the first cycle with a missing sweep.
/// Duplicate sweeps or duplicate sensor hits are reported loudly and
/// resolved by taking the first occurrence.
pub fn collect_angles(station: Channel, sweeps: &[LightGroup]) -> BTreeMap<u8, SensorAngles> {
    let mut readings: BTreeMap<u8, SensorAngles> = BTreeMap::new();

    let Some(max_seq) = sweeps.iter().map(|g| g.seq).max() else {
        error!("sweep list is empty");
        return readings;
    };

    for seq in 1..max_seq {
        let x_sweeps = sweeps_matching(sweeps, station, seq, Rotor::Horizontal);
        let y_sweeps = sweeps_matching(sweeps, station, seq, Rotor::Vertical);

        if x_sweeps.is_empty() || y_sweeps.is_empty() {
            // The remaining cycles are assumed truncated.
            warn!(%station, seq, "missing sweep for cycle, stopping collation");
            break;
        }
        if x_sweeps.len() != 1 || y_sweeps.len() != 1 {
            error!(
                %station,
                seq,
                horizontal = x_sweeps.len(),
                vertical = y_sweeps.len(),
                "expected exactly one sweep per axis"
            );
        }

        let x_sweep = x_sweeps[0];
        let y_sweep = y_sweeps[0];
        let x_epoch = x_sweep.epoch as u32;
        let y_epoch = y_sweep.epoch as u32;

        // Only sensors seen on both axes produce a reading.
        for sensor_id in 0..MAX_SENSORS {
            let xs: Vec<&LightSample> =
                x_sweep.samples.iter().filter(|s| s.sensor_id == sensor_id).collect();
            let ys: Vec<&LightSample> =
                y_sweep.samples.iter().filter(|s| s.sensor_id == sensor_id).collect();

            if xs.len() > 1 || ys.len() > 1 {
                error!(sensor_id, "sensor sampled more than once in one sweep");
            }
            let (Some(x), Some(y)) = (xs.first(), ys.first()) else {
                continue;
            };

            readings.entry(sensor_id).or_default().push(
                sample_to_angle_ticks(x, x_epoch),
                sample_to_angle_ticks(y, y_epoch),
                x_sweep.epoch,
            );
        }
    }

    readings
}
