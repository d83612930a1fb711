// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SinkStats {
    pub bytes_sent: u64,
    pub packets_sent: u64,
    pub bytes_dropped: u64,
    pub packets_dropped: u64,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SocketStats {
    bytes_sent: Arc<AtomicU64>,
    packets_sent: Arc<AtomicU64>,
    bytes_dropped: Arc<AtomicU64>,
    packets_dropped: Arc<AtomicU64>,
}

impl SocketStats {
    pub(crate) fn update(&self, res: io::Result<usize>, len: usize) -> io::Result<usize> {
        match res {
            Ok(written) => {
                self.bytes_sent.fetch_add(written as u64, Ordering::Relaxed);
                self.packets_sent.fetch_add(1, Ordering::Relaxed);
                Ok(written)
            }
            Err(e) => {
                self.bytes_dropped.fetch_add(len as u64, Ordering::Relaxed);
                self.packets_dropped.fetch_add(1, Ordering::Relaxed);
                Err(e)
            }
        }
    }
}

impl From<&SocketStats> for SinkStats {
    fn from(stats: &SocketStats) -> Self {
        SinkStats {
            bytes_sent: stats.bytes_sent.load(Ordering::Relaxed),
            packets_sent: stats.packets_sent.load(Ordering::Relaxed),
            bytes_dropped: stats.bytes_dropped.load(Ordering::Relaxed),
            packets_dropped: stats.packets_dropped.load(Ordering::Relaxed),
        }
    }
}

/// Trait for the transports that carry metric lines to a stats daemon.
///
/// Each call to `emit` receives one complete line, prefix and sample rate
/// included, with no trailing newline. Examples for each kind of line are
/// given below.
///
/// ## Counter
///
/// ``` text
/// some.counter:1|c
/// ```
///
/// ## Timer
///
/// ``` text
/// some.timer:456|ms
/// ```
///
/// ## Gauge
///
/// ``` text
/// some.gauge:5|g
/// ```
///
/// ## Set
///
/// ``` text
/// some.set:2|s
/// ```
///
/// ## Histogram (metricsd)
///
/// ``` text
/// some.histogram:4|h
/// ```
///
/// ## Meter (metricsd)
///
/// ``` text
/// some.meter
/// ```
///
/// ## Delete (metricsd)
///
/// ``` text
/// some.gauge:delete|g
/// ```
///
/// ## Sampled counter
///
/// ``` text
/// some.counter:1|c|@0.25
/// ```
///
/// Sinks are free to fail. The client never propagates their errors to the
/// code emitting metrics.
pub trait MetricSink {
    /// Send the metric line using this sink and return the number of bytes
    /// written or an I/O error.
    fn emit(&self, metric: &str) -> io::Result<usize>;

    /// Return I/O telemetry like bytes / packets sent or dropped.
    ///
    /// Note that not all sinks implement this method and the default implementation
    /// returns zeros.
    fn stats(&self) -> SinkStats {
        SinkStats::default()
    }
}

/// Sinks that are shared with other owners remain usable as sinks, so a
/// client never has to take sole ownership of its transport.
impl<T> MetricSink for Arc<T>
where
    T: MetricSink + ?Sized,
{
    fn emit(&self, metric: &str) -> io::Result<usize> {
        (**self).emit(metric)
    }

    fn stats(&self) -> SinkStats {
        (**self).stats()
    }
}

/// Implementation of a `MetricSink` that discards all metrics.
///
/// Useful for disabling metric collection or unit tests.
#[derive(Debug, Clone)]
pub struct NopMetricSink;

impl MetricSink for NopMetricSink {
    fn emit(&self, _metric: &str) -> io::Result<usize> {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::{MetricSink, NopMetricSink, SinkStats, SocketStats};
    use std::io;
    use std::sync::Arc;

    #[test]
    fn test_nop_metric_sink() {
        let sink = NopMetricSink;
        assert_eq!(0, sink.emit("baz:4|c").unwrap());
    }

    #[test]
    fn test_arc_metric_sink() {
        let sink = Arc::new(NopMetricSink);
        let shared: Arc<dyn MetricSink + Send + Sync> = sink.clone();

        assert_eq!(0, sink.emit("baz:4|c").unwrap());
        assert_eq!(0, shared.emit("baz:4|c").unwrap());
        assert_eq!(SinkStats::default(), shared.stats());
    }

    #[test]
    fn test_socket_stats_update() {
        let stats = SocketStats::default();

        assert_eq!(7, stats.update(Ok(7), 7).unwrap());
        assert!(stats.update(Err(io::Error::from(io::ErrorKind::WouldBlock)), 9).is_err());

        let snapshot = SinkStats::from(&stats);
        assert_eq!(7, snapshot.bytes_sent);
        assert_eq!(1, snapshot.packets_sent);
        assert_eq!(9, snapshot.bytes_dropped);
        assert_eq!(1, snapshot.packets_dropped);
    }
}
