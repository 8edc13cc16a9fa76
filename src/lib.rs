//! Decoder for Vive Lighthouse optical tracking light pulses.
//!
//! Two rotating base stations flood the tracked volume with omnidirectional
//! sync flashes and swept laser planes. Headset photo-sensors report each
//! lit period as a `(timestamp, sensor_id, length)` record; this crate
//! segments that stream into sync-pulse groups and sweep groups, identifies
//! the emitting station and rotor from pulse timing and width, counts
//! scanning cycles, and collates per-sensor horizontal/vertical angle pairs
//! for a downstream pose solver.
//!
//! # Quick start
//!
//! ```
//! use lightsweep::{collect_angles, Channel, LightDecoder, LightSample, Protocol};
//!
//! let samples: Vec<LightSample> = vec![/* from a dump loader */];
//!
//! let decoder = LightDecoder::new(Protocol::VIVE);
//! let output = decoder.decode(&samples);
//!
//! let angles = collect_angles(Channel::B, &output.sweeps);
//! for (sensor_id, series) in &angles {
//!     println!("sensor {sensor_id}: {} readings", series.len());
//! }
//! ```
//!
//! The decoder is a pure function of the sample stream and the injected
//! [`Protocol`] timing; it performs no I/O, holds no global state, and
//! never aborts on malformed input. Anomalies are logged via `tracing`
//! and tallied in [`AnomalyCounters`].

// Data model and error handling
mod error;
pub mod protocol;
pub mod types;

// Stream decoding pipeline
pub mod collate;
pub mod decoder;
pub mod export;

#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

pub use collate::collect_angles;
pub use decoder::{detect_channel, sanitize, AnomalyCounters, GroupStream, Segmenter};
pub use error::{DecodeError, Result};
pub use protocol::Protocol;
pub use types::{
    Channel, GroupEvent, LightGroup, LightSample, PulseBits, Rotor, SensorAngles, SyncPulseClass,
};

/// Everything the stream decoder emitted, split by kind in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutput {
    pub pulses: Vec<LightGroup>,
    pub sweeps: Vec<LightGroup>,
    pub anomalies: AnomalyCounters,
}

/// Batch decoding facade.
///
/// Owns the injected [`Protocol`] timing and runs the full pipeline
/// (sanitize, segment, decode) over a finite sample slice. For lazy
/// processing of large dumps use [`LightDecoder::stream`] instead.
#[derive(Debug, Clone, Copy)]
pub struct LightDecoder {
    protocol: Protocol,
}

impl LightDecoder {
    pub fn new(protocol: Protocol) -> Self {
        Self { protocol }
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Lazily decode a sample sequence into a [`GroupStream`].
    pub fn stream<I>(&self, samples: I) -> GroupStream<impl Iterator<Item = LightSample>>
    where
        I: IntoIterator<Item = LightSample>,
    {
        GroupStream::new(self.protocol, sanitize(samples))
    }

    /// Decode a finite sample slice into pulse-groups and sweep-groups.
    pub fn decode(&self, samples: &[LightSample]) -> DecodeOutput {
        let mut pulses = Vec::new();
        let mut sweeps = Vec::new();

        let mut stream = self.stream(samples.iter().copied());
        for event in stream.by_ref() {
            match event {
                GroupEvent::Pulse(group) => pulses.push(group),
                GroupEvent::Sweep(group) => sweeps.push(group),
            }
        }

        DecodeOutput { pulses, sweeps, anomalies: stream.anomalies() }
    }
}
