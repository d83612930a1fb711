// Tempo - A best-effort Statsd client for Rust!
//
// To the extent possible under law, the author(s) have dedicated all copyright and
// related and neighboring rights to this file to the public domain worldwide.
// This software is distributed without any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication along with this
// software. If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.

// This example shows how you might make use of the "Spy" sink in Tempo
// which is meant for integration testing your application. The caller keeps
// the receiving half of a channel and can verify that Tempo wrote what you
// thought it was going to write.

use tempo::prelude::*;
use tempo::{SpyMetricSink, StatsdClient};

fn main() {
    let (rx, sink) = SpyMetricSink::new();

    // Ensure that the client is dropped so the channel ends after the last metric.
    {
        let metrics = StatsdClient::from_sink("example.prefix.", sink);

        metrics.increment("example.counter");
        metrics.gauge("example.gauge", 5u64);
        metrics.timing("example.timer", 32u64);
        metrics.set("example.set", 43i64);
    }

    let lines: Vec<String> = rx.iter().collect();
    println!("Metrics written to the spy sink: {:?}", lines);
}
