//! End-to-end segmentation over full emission-mode streams.
//!
//! Expected channels, sequence numbers and epochs are worked out by hand
//! from the stream layout in `common`. The first pulse of any stream has no
//! measurable gap, so it always resynchronizes rather than decodes; the
//! groups start flowing one slot later.

mod common;

use anyhow::{ensure, Result};
use common::{a_mode_stream, bc_mode_stream, protocol, pulse_cluster, sweep_hits, SENSORS};
use lightsweep::{Channel, LightDecoder, LightGroup, LightSample, Rotor};

fn identities(groups: &[LightGroup]) -> Vec<(Channel, Rotor, u32)> {
    groups.iter().map(|g| (g.channel, g.rotor, g.seq)).collect()
}

#[test]
fn a_mode_three_cycles() -> Result<()> {
    let decoder = LightDecoder::new(protocol());
    let output = decoder.decode(&a_mode_stream(1_000_000, 3));

    use Rotor::{Horizontal as H, Vertical as V};
    let a = Channel::A;
    ensure!(
        identities(&output.pulses)
            == vec![(a, V, 0), (a, H, 1), (a, V, 1), (a, H, 2), (a, V, 2)],
        "unexpected pulse identities: {:?}",
        identities(&output.pulses)
    );
    // The trailing sweep run has no closing pulse and is discarded.
    ensure!(
        identities(&output.sweeps) == vec![(a, V, 0), (a, H, 1), (a, V, 1), (a, H, 2)],
        "unexpected sweep identities: {:?}",
        identities(&output.sweeps)
    );

    // Cluster medians land one tick after each slot origin.
    let epochs: Vec<f64> = output.pulses.iter().map(|g| g.epoch).collect();
    ensure!(
        epochs == vec![1_400_001.0, 1_800_001.0, 2_200_001.0, 2_600_001.0, 3_000_001.0],
        "unexpected pulse epochs: {epochs:?}"
    );

    for sweep in &output.sweeps {
        ensure!(sweep.samples.len() == SENSORS.len());
        ensure!(sweep.samples.iter().all(|s| s.is_sweep()));
    }

    ensure!(output.anomalies.unknown_channels == 1, "only the first pulse resynchronizes");
    ensure!(output.anomalies.orphaned_sweep_samples == SENSORS.len() as u64);
    ensure!(output.anomalies.small_pulse_sets == 0);
    Ok(())
}

#[test]
fn bc_mode_three_cycles() -> Result<()> {
    let decoder = LightDecoder::new(protocol());
    let output = decoder.decode(&bc_mode_stream(1_000_000, 3));

    use Channel::{B, C};
    use Rotor::{Horizontal as H, Vertical as V};

    // Skip pulses emit nothing; the cycle counter bumps on B's H pulse.
    let expected_pulses = vec![
        (C, H, 0),
        (B, V, 0),
        (C, V, 0),
        (B, H, 1),
        (C, H, 1),
        (B, V, 1),
        (C, V, 1),
        (B, H, 2),
        (C, H, 2),
        (B, V, 2),
        (C, V, 2),
    ];
    ensure!(
        identities(&output.pulses) == expected_pulses,
        "unexpected pulse identities: {:?}",
        identities(&output.pulses)
    );

    let mut expected_sweeps = expected_pulses;
    expected_sweeps.pop(); // the last sweep run is trailing and discarded
    ensure!(
        identities(&output.sweeps) == expected_sweeps,
        "unexpected sweep identities: {:?}",
        identities(&output.sweeps)
    );

    // Every sweep inherits its identity from an earlier pulse-group.
    for sweep in &output.sweeps {
        ensure!(
            output.pulses.iter().any(|p| (p.channel, p.rotor, p.epoch, p.seq)
                == (sweep.channel, sweep.rotor, sweep.epoch, sweep.seq)),
            "sweep without a matching pulse: {sweep}"
        );
    }

    ensure!(output.anomalies.unknown_channels == 1);
    ensure!(output.anomalies.orphaned_sweep_samples == SENSORS.len() as u64);
    Ok(())
}

#[test]
fn sentinel_records_do_not_change_the_decode() -> Result<()> {
    let decoder = LightDecoder::new(protocol());
    let clean = bc_mode_stream(1_000_000, 2);

    // Sprinkle sentinels throughout, including front and back.
    let sentinel = LightSample::new(u32::MAX, u8::MAX, u16::MAX);
    let mut dirty = vec![sentinel];
    for (i, sample) in clean.iter().enumerate() {
        dirty.push(*sample);
        if i % 7 == 0 {
            dirty.push(sentinel);
        }
    }
    dirty.push(sentinel);

    let from_clean = decoder.decode(&clean);
    let from_dirty = decoder.decode(&dirty);
    ensure!(from_clean == from_dirty, "sentinels leaked into the decode");
    Ok(())
}

#[test]
fn duplicate_sensor_in_a_pulse_set_is_advisory_only() -> Result<()> {
    let mut samples = Vec::new();
    pulse_cluster(&mut samples, 1_000_000, common::PULSE_H, &SENSORS);
    // Same sensor twice in the second cluster.
    pulse_cluster(&mut samples, 1_400_000, common::PULSE_H, &[0, 0, 1, 2, 3, 4]);
    sweep_hits(&mut samples, 1_600_000, &SENSORS);
    pulse_cluster(&mut samples, 1_800_000, common::PULSE_V, &SENSORS);

    let output = LightDecoder::new(protocol()).decode(&samples);

    ensure!(output.anomalies.duplicate_sensors == 1);
    // The duplicated cluster still decodes and its sweep still emits.
    ensure!(output.pulses.len() == 2);
    ensure!(output.sweeps.len() == 1);
    ensure!(output.sweeps[0].seq == 1, "H pulse of channel A opens cycle 1");
    Ok(())
}

#[test]
fn seq_is_monotone_across_the_emission_order() -> Result<()> {
    let decoder = LightDecoder::new(protocol());
    let samples = bc_mode_stream(1_000_000, 4);

    let mut last = 0u32;
    for event in decoder.stream(samples) {
        let seq = event.group().seq;
        ensure!(seq >= last, "sequence went backwards: {last} -> {seq}");
        last = seq;
    }
    ensure!(last == 3, "four cycles bump the counter three times after resync");
    Ok(())
}
