//! Station identification from inter-pulse timing.
//!
//! A sync pulse does not say which station emitted it. The gap to the
//! previous pulse does: a lone A station pulses once per rotor half-period,
//! while interleaved B and C stations pulse 20 000 ticks apart, which makes
//! the gaps `period`, `period − space` and `space` distinctive.

use crate::protocol::{Protocol, CHANNEL_SPACE, CHANNEL_TOLERANCE};
use crate::types::Channel;

/// Classify the gap from the previous pulse epoch to `new_pulse_time`.
///
/// `last_pulse_time` must be the epoch of the immediately preceding pulse
/// set; the segmenter keeps it current across skip and reject paths so
/// every gap stays measurable. Returns `None` for unrecognized gaps.
pub fn detect_channel(
    protocol: &Protocol,
    last_pulse_time: f64,
    new_pulse_time: f64,
) -> Option<Channel> {
    let period = protocol.half_period();
    let dt = new_pulse_time - last_pulse_time;

    if (dt - period).abs() < CHANNEL_TOLERANCE {
        Some(Channel::A)
    } else if (dt - (period - CHANNEL_SPACE)).abs() < CHANNEL_TOLERANCE {
        Some(Channel::B)
    } else if (dt - CHANNEL_SPACE).abs() < CHANNEL_TOLERANCE {
        Some(Channel::C)
    } else {
        None
    }
}
