// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use rand::Rng;
use std::fmt::{self, Write};
use std::panic::RefUnwindSafe;

/// Source of uniformly distributed draws in the closed range `[0, 1]` used
/// to decide whether a sampled metric is sent.
///
/// Implementations must be safe to share between threads. Any
/// `Fn() -> f64` closure is a valid source, which makes it easy to supply
/// a fixed sequence of draws in tests of your own code.
///
/// # Example
///
/// ```
/// use tempo::prelude::*;
/// use tempo::{NopMetricSink, StatsdClient};
///
/// // Every sampled metric is kept as long as its rate is at least 0.25
/// let client = StatsdClient::builder("my.prefix.", NopMetricSink)
///     .with_random_source(|| 0.25)
///     .build();
///
/// client.increment_sampled("some.counter", 0.5);
/// ```
pub trait RandomSource {
    /// Return the next draw, between 0.0 and 1.0 inclusive
    fn draw(&self) -> f64;
}

impl<F> RandomSource for F
where
    F: Fn() -> f64,
{
    fn draw(&self) -> f64 {
        (self)()
    }
}

/// Default `RandomSource` backed by the thread local RNG of `rand`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..=1.0)
    }
}

pub(crate) struct Sampler {
    source: Box<dyn RandomSource + Sync + Send + RefUnwindSafe>,
}

impl Sampler {
    const RATE_PREFIX: &'static str = "|@";

    pub(crate) fn new(source: Box<dyn RandomSource + Sync + Send + RefUnwindSafe>) -> Self {
        Sampler { source }
    }

    /// Keep each line independently with probability `rate`, marking kept
    /// lines with the rate so the server can scale them back up.
    ///
    /// A rate that isn't below 1.0 disables sampling and leaves lines as-is.
    /// Rates are not validated: a draw is kept when it is `<=` the rate, so a
    /// rate of 0.0 still keeps a draw of exactly 0.0 and negative rates keep
    /// nothing.
    pub(crate) fn sample(&self, lines: Vec<String>, rate: f64) -> Vec<String> {
        if rate < 1.0 {
            lines
                .into_iter()
                .filter(|_| self.source.draw() <= rate)
                .map(|mut line| {
                    line.push_str(Self::RATE_PREFIX);
                    let _ = write!(line, "{}", rate);
                    line
                })
                .collect()
        } else {
            lines
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Sampler::new(Box::new(ThreadRandom))
    }
}

impl fmt::Debug for Sampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sampler {{ source: ... }}")
    }
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, Sampler, ThreadRandom};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn lines(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| format!("{}:1|c", k)).collect()
    }

    #[test]
    fn test_thread_random_draw_in_range() {
        for _ in 0..1000 {
            let draw = ThreadRandom.draw();
            assert!((0.0..=1.0).contains(&draw), "draw out of range: {}", draw);
        }
    }

    #[test]
    fn test_sample_rate_one_passes_everything_unchanged() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_ref = calls.clone();
        let sampler = Sampler::new(Box::new(move || {
            calls_ref.fetch_add(1, Ordering::Relaxed);
            1.0
        }));

        let out = sampler.sample(lines(&["a", "b", "c"]), 1.0);

        assert_eq!(vec!["a:1|c", "b:1|c", "c:1|c"], out);
        assert_eq!(0, calls.load(Ordering::Relaxed), "no draws expected without sampling");
    }

    #[test]
    fn test_sample_rate_above_one_passes_everything_unchanged() {
        let sampler = Sampler::new(Box::new(|| 1.0));
        assert_eq!(vec!["a:1|c"], sampler.sample(lines(&["a"]), 3.5));
    }

    #[test]
    fn test_sample_keeps_draw_equal_to_rate() {
        let sampler = Sampler::new(Box::new(|| 0.5));
        assert_eq!(vec!["a:1|c|@0.5"], sampler.sample(lines(&["a"]), 0.5));
    }

    #[test]
    fn test_sample_drops_draw_just_above_rate() {
        let sampler = Sampler::new(Box::new(|| 0.500_000_1));
        assert!(sampler.sample(lines(&["a"]), 0.5).is_empty());
    }

    #[test]
    fn test_sample_keeps_draw_just_below_rate() {
        let sampler = Sampler::new(Box::new(|| 0.499_999_9));
        assert_eq!(vec!["a:1|c|@0.5"], sampler.sample(lines(&["a"]), 0.5));
    }

    #[test]
    fn test_sample_rate_zero_keeps_zero_draw() {
        let sampler = Sampler::new(Box::new(|| 0.0));
        assert_eq!(vec!["a:1|c|@0"], sampler.sample(lines(&["a"]), 0.0));
    }

    #[test]
    fn test_sample_rate_zero_drops_positive_draw() {
        let sampler = Sampler::new(Box::new(|| f64::MIN_POSITIVE));
        assert!(sampler.sample(lines(&["a"]), 0.0).is_empty());
    }

    #[test]
    fn test_sample_negative_rate_drops_everything() {
        let sampler = Sampler::new(Box::new(|| 0.0));
        assert!(sampler.sample(lines(&["a", "b"]), -0.25).is_empty());
    }

    #[test]
    fn test_sample_rate_suffix_is_not_rounded() {
        let sampler = Sampler::new(Box::new(|| 0.0));
        assert_eq!(vec!["a:1|c|@0.123456789"], sampler.sample(lines(&["a"]), 0.123456789));
    }

    #[test]
    fn test_sample_decides_each_line_independently() {
        let draws = Mutex::new(vec![0.9, 0.1, 0.3].into_iter());
        let sampler = Sampler::new(Box::new(move || draws.lock().unwrap().next().unwrap()));

        let out = sampler.sample(lines(&["a", "b", "c"]), 0.3);

        assert_eq!(vec!["b:1|c|@0.3", "c:1|c|@0.3"], out);
    }

    #[test]
    fn test_sample_rate_converges() {
        let rng = Mutex::new(ChaCha8Rng::seed_from_u64(8125));
        let sampler = Sampler::new(Box::new(move || rng.lock().unwrap().gen_range(0.0..=1.0)));
        let trials = 20_000;

        for rate in [0.1, 0.25, 0.5, 0.9] {
            let kept = (0..trials).filter(|_| !sampler.sample(lines(&["a"]), rate).is_empty()).count();
            let observed = kept as f64 / trials as f64;
            assert!((observed - rate).abs() < 0.02, "rate {} observed {}", rate, observed);
        }
    }
}
