// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use crate::sinks::core::MetricSink;
use crossbeam_channel::{bounded, unbounded, Receiver, Sender, TrySendError};
use std::io;

/// `MetricSink` implementation that writes all metrics to the `Sender` half of
/// a channel while callers are given ownership of the `Receiver` half.
///
/// This is not a general purpose sink, rather it's a sink meant for verifying
/// metrics written during the course of integration tests. By default, the channel
/// used is unbounded. The channel size can be limited using the `with_capacity` method,
/// in which case emitting into a full channel fails.
///
/// Each metric is sent to the underlying channel when the `.emit()` method is
/// called, in the thread of the caller.
///
/// # Example
///
/// ```
/// use tempo::prelude::*;
/// use tempo::{SpyMetricSink, StatsdClient};
///
/// let (rx, sink) = SpyMetricSink::new();
/// let client = StatsdClient::from_sink("my.app.", sink);
///
/// client.increment(["a", "b"]);
///
/// assert_eq!("my.app.a:1|c", rx.recv().unwrap());
/// assert_eq!("my.app.b:1|c", rx.recv().unwrap());
/// ```
#[derive(Debug)]
pub struct SpyMetricSink {
    sender: Sender<String>,
}

impl SpyMetricSink {
    pub fn new() -> (Receiver<String>, Self) {
        Self::with_queue_capacity(None)
    }

    pub fn with_capacity(queue: usize) -> (Receiver<String>, Self) {
        Self::with_queue_capacity(Some(queue))
    }

    fn with_queue_capacity(queue: Option<usize>) -> (Receiver<String>, Self) {
        let (tx, rx) = match queue {
            Some(sz) => bounded(sz),
            None => unbounded(),
        };
        (rx, SpyMetricSink { sender: tx })
    }
}

impl MetricSink for SpyMetricSink {
    fn emit(&self, metric: &str) -> io::Result<usize> {
        match self.sender.try_send(metric.to_owned()) {
            Err(TrySendError::Disconnected(_)) => Err(io::Error::new(io::ErrorKind::Other, "channel disconnected")),
            Err(TrySendError::Full(_)) => Err(io::Error::new(io::ErrorKind::Other, "channel full")),
            Ok(_) => Ok(metric.len()),
        }
    }
}
