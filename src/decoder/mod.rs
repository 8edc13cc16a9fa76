//! The pulse/sweep decoding core.
//!
//! Stages, leaves first: [`sanitize`] drops filler records; pulse-width
//! classification and gap-based [`detect_channel`] label each pulse set;
//! the [`Segmenter`] partitions the stream into alternating pulse sets and
//! sweeps while tracking the scanning cycle; [`GroupStream`] wraps it all
//! into a lazy iterator.

mod channel;
mod pulse;
mod segment;
mod stream;

pub use channel::detect_channel;
pub use segment::{AnomalyCounters, Segmenter};
pub use stream::{sanitize, GroupStream};
