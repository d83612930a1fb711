// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

//! Export commonly used parts of Tempo for easy glob imports
//!
//! # Example
//!
//! ```
//! use tempo::prelude::*;
//! use tempo::{StatsdClient, NopMetricSink};
//!
//! let client = StatsdClient::from_sink("some.prefix.", NopMetricSink);
//!
//! client.increment("some.counter");
//! client.update_stats(["some.counter", "other.counter"], 3);
//! client.timing("some.timer", 23u64);
//! client.gauge("some.gauge", 45u64);
//! client.set("some.set", 67i64);
//! ```

pub use crate::client::{Counted, Deleted, Gauged, Histogrammed, Metered, MetricClient, Setted, Timed};
