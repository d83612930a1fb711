// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

//! A best-effort Statsd client for Rust!
//!
//! Tempo turns calls like "increment this counter" or "record this timing"
//! into Statsd line protocol text and hands each line to a transport. It
//! speaks two dialects of the protocol:
//!
//! * `Profile::statsd()`, the Etsy statsd dialect: counters, timers (`ms`),
//!   gauges, and sets.
//! * `Profile::metricsd()`, the Metricsd dialect: counters, gauges,
//!   histograms (timings are histograms too), bare meters, and deletes.
//!
//! ## Features
//!
//! * Client side sampling with the rate appended to sampled lines.
//! * Updating several counters in one call.
//! * Fire and forget delivery: no metric call ever fails or panics because
//!   the server is unreachable.
//! * Support for alternate transports via the `MetricSink` trait.
//!
//! ## Usage
//!
//! ### Simple Use
//!
//! Create a client that writes to a stats daemon over UDP and send a few
//! metrics.
//!
//! ```rust,no_run
//! use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
//! use tempo::prelude::*;
//! use tempo::{StatsdClient, UdpMetricSink, DEFAULT_PORT};
//!
//! // The daemon address has to be resolved by the caller.
//! let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT));
//! let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
//! let sink = UdpMetricSink::new(addr, socket);
//! let client = StatsdClient::from_sink("my.metrics.", sink);
//!
//! client.increment("some.counter");
//! client.timing("some.methodCall", 42u64);
//! client.gauge("some.thing", 7u64);
//! client.set("some.users", 42i64);
//! ```
//!
//! ### Sampling
//!
//! Every call except sets and deletes has a `_sampled` variant that sends
//! the line with the given probability and tells the server about it.
//!
//! ```rust
//! use tempo::prelude::*;
//! use tempo::{SpyMetricSink, StatsdClient};
//!
//! let (rx, sink) = SpyMetricSink::new();
//! let client = StatsdClient::builder("my.metrics.", sink)
//!     .with_random_source(|| 0.1)
//!     .build();
//!
//! client.increment_sampled("some.counter", 0.25);
//!
//! assert_eq!("my.metrics.some.counter:1|c|@0.25", rx.recv().unwrap());
//! ```
//!
//! ### Metricsd
//!
//! ```rust
//! use tempo::prelude::*;
//! use tempo::{MetricKind, Profile, SpyMetricSink, StatsdClient};
//!
//! let (rx, sink) = SpyMetricSink::new();
//! let client = StatsdClient::builder("my.metrics.", sink)
//!     .with_profile(Profile::metricsd())
//!     .build();
//!
//! client.timing("some.call", 25u64);
//! client.meter("some.event");
//! client.delete("some.gauge", MetricKind::Gauge);
//!
//! assert_eq!("my.metrics.some.call:25|h", rx.recv().unwrap());
//! assert_eq!("my.metrics.some.event", rx.recv().unwrap());
//! assert_eq!("my.metrics.some.gauge:delete|g", rx.recv().unwrap());
//! ```
//!
//! ### Error Handling
//!
//! Metric methods return nothing. Errors (invalid values, kinds of metrics the
//! profile doesn't support, transport failures) are logged at `trace` level
//! via `tracing` and handed to an error handler, which discards them unless
//! one is set.
//!
//! ```rust
//! use tempo::prelude::*;
//! use tempo::{MetricError, NopMetricSink, StatsdClient};
//!
//! fn my_error_handler(err: MetricError) {
//!     eprintln!("Error sending metrics: {}", err);
//! }
//!
//! let client = StatsdClient::builder("my.metrics.", NopMetricSink)
//!     .with_error_handler(my_error_handler)
//!     .build();
//!
//! // Statsd has no meters, so this ends up in the handler.
//! client.meter("some.event");
//! ```

#![forbid(unsafe_code)]

/// Port stats daemons conventionally listen on.
pub const DEFAULT_PORT: u16 = 8125;

pub use self::client::{
    Counted, Deleted, Gauged, Histogrammed, Metered, MetricClient, Setted, StatsdClient, StatsdClientBuilder, Timed,
};

pub use self::profile::Profile;

pub use self::sinks::{MetricSink, NopMetricSink, SinkStats, SpyMetricSink, UdpMetricSink};

pub use self::types::{ErrorKind, MetricError, MetricKind, MetricResult};

mod builder;
mod client;
pub mod ext;
pub mod prelude;
mod profile;
mod sampler;
mod sinks;
mod types;

mod sealed {
    pub trait Sealed {}
}
