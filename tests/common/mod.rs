//! Shared stream fixtures for the integration tests.
//!
//! Streams follow the Vive timing grid: 400 000 ticks per rotor
//! half-period, 20 000 ticks between the interleaved B and C pulses.
//! Pulse clusters stagger sensor starts by up to two ticks, which puts the
//! median timestamp exactly one tick after the cluster origin for five to
//! eight sensors.

// Not every test binary uses every helper.
#![allow(dead_code)]

use lightsweep::{LightSample, Protocol};

pub const SENSORS: [u8; 8] = [0, 1, 2, 3, 4, 5, 6, 7];
pub const HALF_PERIOD: u32 = 400_000;
pub const SPACE: u32 = 20_000;

/// Non-skip H pulse width (skip 0, rotor H, data 0).
pub const PULSE_H: u16 = 3000;
/// Non-skip V pulse width (skip 0, rotor V, data 0).
pub const PULSE_V: u16 = 3500;
/// Skip pulse width (skip 1).
pub const PULSE_SKIP: u16 = 5000;

pub fn protocol() -> Protocol {
    Protocol::VIVE
}

pub fn pulse_cluster(out: &mut Vec<LightSample>, t: u32, length: u16, sensors: &[u8]) {
    for (i, &sensor_id) in sensors.iter().enumerate() {
        out.push(LightSample::new(t + (i as u32 % 3), sensor_id, length));
    }
}

pub fn sweep_hits(out: &mut Vec<LightSample>, t: u32, sensors: &[u8]) {
    for (i, &sensor_id) in sensors.iter().enumerate() {
        out.push(LightSample::new(t + 400 * i as u32, sensor_id, 120));
    }
}

/// Lone-station cycles: H pulse + sweep, V pulse + sweep per cycle.
pub fn a_mode_stream(start: u32, cycles: u32) -> Vec<LightSample> {
    let mut out = Vec::new();
    let mut t = start;
    for _ in 0..cycles {
        pulse_cluster(&mut out, t, PULSE_H, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2, &SENSORS);
        t += HALF_PERIOD;
        pulse_cluster(&mut out, t, PULSE_V, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2, &SENSORS);
        t += HALF_PERIOD;
    }
    out
}

/// Interleaved two-station cycles: four half-period slots per cycle
/// (B sweeps H, C sweeps H, B sweeps V, C sweeps V); the off-duty station
/// emits a skip pulse 20 000 ticks after the on-duty pulse.
pub fn bc_mode_stream(start: u32, cycles: u32) -> Vec<LightSample> {
    let mut out = Vec::new();
    let mut t = start;
    for _ in 0..cycles {
        pulse_cluster(&mut out, t, PULSE_H, &SENSORS);
        pulse_cluster(&mut out, t + SPACE, PULSE_SKIP, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2, &SENSORS);
        t += HALF_PERIOD;

        pulse_cluster(&mut out, t, PULSE_SKIP, &SENSORS);
        pulse_cluster(&mut out, t + SPACE, PULSE_H, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2 + SPACE, &SENSORS);
        t += HALF_PERIOD;

        pulse_cluster(&mut out, t, PULSE_V, &SENSORS);
        pulse_cluster(&mut out, t + SPACE, PULSE_SKIP, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2, &SENSORS);
        t += HALF_PERIOD;

        pulse_cluster(&mut out, t, PULSE_SKIP, &SENSORS);
        pulse_cluster(&mut out, t + SPACE, PULSE_V, &SENSORS);
        sweep_hits(&mut out, t + HALF_PERIOD / 2 + SPACE, &SENSORS);
        t += HALF_PERIOD;
    }
    out
}
