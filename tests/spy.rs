use tempo::{Profile, SpyMetricSink, StatsdClient};

mod utils;
use utils::{run_arc_threaded_test, NUM_ITERATIONS, NUM_THREADS};

fn new_spy_client(prefix: &str, profile: Profile) -> StatsdClient {
    let (_rx, sink) = SpyMetricSink::new();
    StatsdClient::builder(prefix, sink).with_profile(profile).build()
}

#[test]
fn test_statsd_client_spy_sink_single_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("tempo.", sink);
    run_arc_threaded_test(client, 1, 1);

    let lines: Vec<String> = rx.try_iter().collect();
    assert!(lines.contains(&"tempo.some.counter:1|c".to_owned()));
    assert!(lines.contains(&"tempo.some.set:0|s".to_owned()));
    assert!(!lines.iter().any(|l| l.ends_with("|h")));
}

#[test]
fn test_metricsd_client_spy_sink_single_threaded() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("tempo.", sink)
        .with_profile(Profile::metricsd())
        .build();
    run_arc_threaded_test(client, 1, 1);

    let lines: Vec<String> = rx.try_iter().collect();
    assert!(lines.contains(&"tempo.some.meter".to_owned()));
    assert!(lines.contains(&"tempo.some.gauge:delete|g".to_owned()));
    assert!(!lines.iter().any(|l| l.ends_with("|s")));
}

#[test]
fn test_statsd_client_spy_sink_disconnected_receiver() {
    let client = new_spy_client("tempo.", Profile::statsd());
    run_arc_threaded_test(client, 1, 1);
}

#[ignore]
#[test]
fn test_statsd_client_spy_sink_many_threaded() {
    let client = new_spy_client("tempo.", Profile::statsd());
    run_arc_threaded_test(client, NUM_THREADS, NUM_ITERATIONS);
}

#[ignore]
#[test]
fn test_metricsd_client_spy_sink_many_threaded() {
    let client = new_spy_client("tempo.", Profile::metricsd());
    run_arc_threaded_test(client, NUM_THREADS, NUM_ITERATIONS);
}
