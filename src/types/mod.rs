//! Core types for the light-event data model.
//!
//! The decoder manipulates four entity kinds:
//! - [`LightSample`] is the immutable input record from the dump loader,
//!   one per sensor per lit period.
//! - [`SyncPulseClass`] is a row of the static pulse-width table; valid
//!   rows carry [`PulseBits`] (skip, rotor, databit).
//! - [`LightGroup`] is the shared record for decoded pulse-groups and
//!   sweep-groups, streamed as tagged [`GroupEvent`] items.
//! - [`SensorAngles`] holds the collated per-sensor angle series for one
//!   station.

mod angles;
mod group;
mod sample;
mod sync_class;

pub use angles::SensorAngles;
pub use group::{Channel, GroupEvent, LightGroup, Rotor};
pub use sample::LightSample;
pub use sync_class::{PulseBits, SyncPulseClass, PULSE_TABLE};
