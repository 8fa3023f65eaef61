//! Rolling-average sample streams
//!
//! One stream exists per measured quantity (battery voltage,
//! temperature). A stream holds the N most recent samples and exposes
//! their arithmetic mean, or nothing at all before the first feed.
//! The deployed node uses N = 1, so "average" degenerates to "latest
//! sample", but the window is a type parameter.

/// Fixed-capacity FIFO of the most recent float samples
///
/// The stream is the sole authority on missing vs present: NaN is
/// dropped at the door so the mean can never be poisoned, and
/// `average` returns `None` until a sample has been accepted.
#[derive(Debug, Clone)]
pub struct SampleStream<const N: usize> {
    samples: [f32; N],
    /// Next write position
    head: usize,
    /// Number of valid samples (saturates at N)
    len: usize,
}

impl<const N: usize> SampleStream<N> {
    /// Create an empty stream
    pub const fn new() -> Self {
        Self {
            samples: [0.0; N],
            head: 0,
            len: 0,
        }
    }

    /// Feed one sample, evicting the oldest when the window is full
    ///
    /// NaN is silently discarded.
    pub fn feed(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.samples[self.head] = value;
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Arithmetic mean of the held samples, `None` when empty
    pub fn average(&self) -> Option<f32> {
        if self.len == 0 {
            return None;
        }
        let sum: f32 = self.samples[..self.len].iter().sum();
        Some(sum / self.len as f32)
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.len
    }

    /// True before the first accepted sample
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }
}

impl<const N: usize> Default for SampleStream<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_stream_has_no_average() {
        let stream = SampleStream::<4>::new();
        assert_eq!(stream.average(), None);
        assert!(stream.is_empty());
    }

    #[test]
    fn test_single_sample_window() {
        // Deployment configuration: the average is the latest sample
        let mut stream = SampleStream::<1>::new();
        stream.feed(3.7);
        assert_eq!(stream.average(), Some(3.7));
        stream.feed(3.5);
        assert_eq!(stream.average(), Some(3.5));
    }

    #[test]
    fn test_partial_window_mean() {
        let mut stream = SampleStream::<4>::new();
        stream.feed(1.0);
        stream.feed(2.0);
        stream.feed(3.0);
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.average(), Some(2.0));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut stream = SampleStream::<3>::new();
        for v in [1.0, 2.0, 3.0, 4.0] {
            stream.feed(v);
        }
        // 1.0 evicted; mean of 2, 3, 4
        assert_eq!(stream.len(), 3);
        assert_eq!(stream.average(), Some(3.0));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut stream = SampleStream::<2>::new();
        stream.feed(f32::NAN);
        assert_eq!(stream.average(), None);

        stream.feed(21.5);
        stream.feed(f32::NAN);
        assert_eq!(stream.average(), Some(21.5));
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut stream = SampleStream::<2>::new();
        stream.feed(1.0);
        stream.clear();
        assert_eq!(stream.average(), None);
        stream.feed(5.0);
        assert_eq!(stream.average(), Some(5.0));
    }

    proptest! {
        #[test]
        fn prop_average_stays_within_sample_bounds(
            values in proptest::collection::vec(-100.0f32..100.0, 1..16)
        ) {
            let mut stream = SampleStream::<4>::new();
            for &v in &values {
                stream.feed(v);
            }
            let tail = &values[values.len().saturating_sub(4)..];
            let lo = tail.iter().cloned().fold(f32::INFINITY, f32::min);
            let hi = tail.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            let avg = stream.average().unwrap();
            prop_assert!(avg >= lo - 1e-4 && avg <= hi + 1e-4);
        }
    }
}
