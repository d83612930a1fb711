// Tempo - A best-effort Statsd client for Rust!
//
// To the extent possible under law, the author(s) have dedicated all copyright and
// related and neighboring rights to this file to the public domain worldwide.
// This software is distributed without any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication along with this
// software. If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.

// This example shows a client speaking the Metricsd dialect, which has bare
// meters, deletes and histograms but no sets. Errors are printed through a
// custom error handler so that the unsupported set call below is visible.

use tempo::prelude::*;
use tempo::{MetricError, MetricKind, Profile, SpyMetricSink, StatsdClient};

fn main() {
    let (rx, sink) = SpyMetricSink::new();

    {
        let metrics = StatsdClient::builder("example.prefix.", sink)
            .with_profile(Profile::metricsd())
            .with_error_handler(|err: MetricError| eprintln!("metric error: {}", err))
            .build();

        metrics.timing("example.timer", 32u64);
        metrics.histogram("example.histogram", 4.5);
        metrics.meter("example.meter");
        metrics.delete("example.gauge", MetricKind::Gauge);
        metrics.set("example.set", 43i64);
    }

    for line in rx.iter() {
        println!("{}", line);
    }
}
