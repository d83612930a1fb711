// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use std::io;
use std::net::{SocketAddr, UdpSocket};

use crate::sinks::core::{MetricSink, SinkStats, SocketStats};

/// Implementation of a `MetricSink` that emits metrics over UDP.
///
/// It accepts a UDP socket instance over which to write metrics and the
/// already resolved address of the stats daemon to send packets to. Every
/// line becomes exactly one datagram; nothing is buffered.
///
/// Each metric is sent when the `.emit()` method is called, in the thread
/// of the caller.
#[derive(Debug)]
pub struct UdpMetricSink {
    addr: SocketAddr,
    socket: UdpSocket,
    stats: SocketStats,
}

impl UdpMetricSink {
    /// Construct a new `UdpMetricSink` instance.
    ///
    /// The socket should already be bound to a local address with any desired
    /// configuration applied (blocking vs non-blocking, timeouts, etc.).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
    /// use tempo::{UdpMetricSink, DEFAULT_PORT};
    ///
    /// let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
    /// socket.set_nonblocking(true).unwrap();
    /// let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT));
    /// let sink = UdpMetricSink::new(addr, socket);
    /// ```
    pub fn new(addr: SocketAddr, socket: UdpSocket) -> UdpMetricSink {
        UdpMetricSink {
            addr,
            socket,
            stats: SocketStats::default(),
        }
    }

    /// Address of the stats daemon this sink writes to
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl MetricSink for UdpMetricSink {
    fn emit(&self, metric: &str) -> io::Result<usize> {
        self.stats
            .update(self.socket.send_to(metric.as_bytes(), self.addr), metric.len())
    }

    fn stats(&self) -> SinkStats {
        (&self.stats).into()
    }
}
