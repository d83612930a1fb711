// Tempo - A best-effort Statsd client for Rust!
//
// To the extent possible under law, the author(s) have dedicated all copyright and
// related and neighboring rights to this file to the public domain worldwide.
// This software is distributed without any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication along with this
// software. If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.

// This example shows a simple way to create a client that sends metrics to
// a Statsd daemon on localhost over UDP. Nothing needs to be listening: the
// client never reports delivery problems back to the caller.

use std::net::{Ipv4Addr, SocketAddr, UdpSocket};
use std::time::Duration;
use tempo::prelude::*;
use tempo::{StatsdClient, UdpMetricSink, DEFAULT_PORT};

fn main() {
    let socket = UdpSocket::bind("0.0.0.0:0").unwrap();
    socket.set_nonblocking(true).unwrap();
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT));
    let sink = UdpMetricSink::new(addr, socket);
    let metrics = StatsdClient::from_sink("example.prefix.", sink);

    metrics.increment("example.counter");
    metrics.update_stats(["example.counter", "example.other"], 3);
    metrics.gauge("example.gauge", 5u64);
    metrics.timing("example.timer", 32u64);
    metrics.timing("example.timer", Duration::from_millis(32));
    metrics.set("example.set", 43i64);
    metrics.increment_sampled("example.sampled", 0.1);
}
