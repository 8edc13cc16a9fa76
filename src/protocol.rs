//! Base-station timing configuration and fixed protocol thresholds.
//!
//! The decoder needs two numbers that describe the tracked hardware (the
//! base station's tick rate and its rotor speed) and a handful of fixed
//! thresholds baked into the light protocol itself. The former vary between
//! hardware generations and are injected through [`Protocol`]; the latter
//! are constants of the emission scheme and live here as module constants.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};

/// Strict upper bound on a sweep event's lit length, in ticks.
///
/// The length is the sole discriminator between event kinds: anything at or
/// above this is a sync pulse sample, anything below is a sweep hit.
pub const SWEEP_LENGTH_MAX: u16 = 2000;

/// Half-width of the sync-pulse width-class matching window, in ticks.
pub const PULSE_CLASS_TOLERANCE: u16 = 250;

/// Half-width of the channel-gap matching window, in ticks.
pub const CHANNEL_TOLERANCE: f64 = 4000.0;

/// Spacing between the B and C stations' pulses within one cycle, in ticks.
pub const CHANNEL_SPACE: f64 = 20_000.0;

/// Minimum number of events for a pulse-group to be accepted.
pub const MIN_PULSE_EVENTS: usize = 5;

/// Exclusive upper bound on sensor ids the collator scans.
pub const MAX_SENSORS: u8 = 32;

/// Injected base-station timing.
///
/// Both values are protocol constants of the tracked hardware. The decoder
/// never infers them from the stream; callers supply them at construction
/// so test streams can run at arbitrary tick bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    /// Ticks per second counted by the base-station clock.
    pub tick_rate: u32,
    /// Rotor revolutions per second.
    pub rotor_rps: u32,
}

impl Protocol {
    /// Timing of the production Vive base stations: 48 MHz clock, 60 rps rotors.
    pub const VIVE: Protocol = Protocol { tick_rate: 48_000_000, rotor_rps: 60 };

    /// Create a configuration, rejecting zero rates.
    pub fn new(tick_rate: u32, rotor_rps: u32) -> Result<Self> {
        if tick_rate == 0 || rotor_rps == 0 {
            return Err(DecodeError::InvalidProtocol { tick_rate, rotor_rps });
        }
        Ok(Self { tick_rate, rotor_rps })
    }

    /// Ticks in one rotor half-period.
    ///
    /// Each rotation carries two sweeps, so this is the nominal gap between
    /// consecutive sync pulses of a single station.
    pub fn half_period(&self) -> f64 {
        (self.tick_rate / self.rotor_rps / 2) as f64
    }
}
