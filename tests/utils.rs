use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempo::prelude::*;
use tempo::{MetricKind, MetricSink, StatsdClient};

#[allow(dead_code)]
pub const NUM_THREADS: u64 = 100;

#[allow(dead_code)]
pub const NUM_ITERATIONS: u64 = 1_000;

/// Sink that fails every line and counts how often it was asked to emit one
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct FailingMetricSink {
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FailingMetricSink {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MetricSink for FailingMetricSink {
    fn emit(&self, _metric: &str) -> io::Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "nobody listening"))
    }
}

/// Call every metric method of the client from several threads at once.
///
/// Methods the profile of the client doesn't support are called too, they
/// must be harmless.
#[allow(dead_code)]
pub fn run_arc_threaded_test(client: StatsdClient, num_threads: u64, iterations: u64) {
    let shared_client = Arc::new(client);

    let threads: Vec<_> = (0..num_threads)
        .map(|_| {
            let local_client = Arc::clone(&shared_client);

            thread::spawn(move || {
                for i in 0..iterations {
                    local_client.increment("some.counter");
                    local_client.decrement(["some.counter", "other.counter"]);
                    local_client.update_stats_sampled("some.counter", i as i64, 0.5);
                    local_client.timing("some.timer", i);
                    local_client.timing("some.timer", Duration::from_millis(i));
                    local_client.histogram("some.histogram", i);
                    local_client.gauge("some.gauge", i);
                    local_client.gauge("some.gauge", i as f64);
                    local_client.meter("some.meter");
                    local_client.set("some.set", i as i64);
                    local_client.delete("some.gauge", MetricKind::Gauge);
                    thread::sleep(Duration::from_millis(1));
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}
