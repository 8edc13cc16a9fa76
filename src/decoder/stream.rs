//! Lazy decoding over sample iterators.

use crate::decoder::segment::{AnomalyCounters, Segmenter};
use crate::protocol::Protocol;
use crate::types::{GroupEvent, LightSample};

/// Drop sentinel filler records, preserving order.
///
/// Pure and idempotent; the batch facade applies it before segmentation and
/// callers may apply it again freely.
pub fn sanitize<I>(samples: I) -> impl Iterator<Item = LightSample>
where
    I: IntoIterator<Item = LightSample>,
{
    samples.into_iter().filter(|s| !s.is_sentinel())
}

/// Pull-based decoded group sequence.
///
/// Wraps a sample iterator and yields groups as the underlying
/// [`Segmenter`] completes them, in input order. The sequence is finite and
/// not restartable; once the samples run out the segmenter is flushed and
/// the iterator ends.
pub struct GroupStream<I> {
    samples: I,
    segmenter: Segmenter,
    exhausted: bool,
}

impl<I> GroupStream<I>
where
    I: Iterator<Item = LightSample>,
{
    pub fn new(protocol: Protocol, samples: I) -> Self {
        Self { samples, segmenter: Segmenter::new(protocol), exhausted: false }
    }

    /// Anomaly counts observed so far.
    pub fn anomalies(&self) -> AnomalyCounters {
        self.segmenter.anomalies()
    }
}

impl<I> Iterator for GroupStream<I>
where
    I: Iterator<Item = LightSample>,
{
    type Item = GroupEvent;

    fn next(&mut self) -> Option<GroupEvent> {
        loop {
            if let Some(event) = self.segmenter.poll() {
                return Some(event);
            }
            if self.exhausted {
                return None;
            }
            match self.samples.next() {
                Some(sample) => self.segmenter.push(sample),
                None => {
                    self.segmenter.finish();
                    self.exhausted = true;
                }
            }
        }
    }
}
