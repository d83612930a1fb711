// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

//! Extension points for the Tempo library
//!
//! Libraries wishing to make use of Tempo for sending metrics to a Statsd
//! or Metricsd server but needing more control over how values are converted,
//! how lines are sampled, or how they are sent can make use of these
//! extension points.

pub use crate::builder::MetricValue;
pub use crate::client::{MetricBackend, ToGaugeValue, ToHistogramValue, ToSetValue, ToStatKeys, ToTimerValue};
pub use crate::sampler::{RandomSource, ThreadRandom};
