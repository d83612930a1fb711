use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempo::prelude::*;
use tempo::{ErrorKind, MetricError, MetricKind, NopMetricSink, Profile, SpyMetricSink, StatsdClient};
use utils::{run_arc_threaded_test, FailingMetricSink};

mod utils;

fn new_nop_client(prefix: &str) -> StatsdClient {
    StatsdClient::from_sink(prefix, NopMetricSink)
}

fn seeded_source(seed: u64) -> impl Fn() -> f64 + Send + Sync + std::panic::RefUnwindSafe {
    let rng = Mutex::new(ChaCha8Rng::seed_from_u64(seed));
    move || rng.lock().unwrap().gen_range(0.0..=1.0)
}

#[test]
fn test_update_stats_rate_one_sends_one_line_per_stat() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("app.", sink)
        .with_random_source(|| -> f64 { panic!("unsampled metrics must not draw") })
        .build();

    client.update_stats(["a", "b", "c"], 2);
    client.update_stats_sampled(["d"], 2, 1.0);

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(vec!["app.a:2|c", "app.b:2|c", "app.c:2|c", "app.d:2|c"], lines);
    assert!(lines.iter().all(|l| !l.contains("|@")));
}

#[test]
fn test_sampled_send_rate_converges() {
    let trials = 20_000;

    for &rate in &[0.1, 0.5, 0.9] {
        let (rx, sink) = SpyMetricSink::new();
        let client = StatsdClient::builder("app.", sink)
            .with_random_source(seeded_source(8125))
            .build();

        for _ in 0..trials {
            client.increment_sampled("hits", rate);
        }

        let sent: Vec<String> = rx.try_iter().collect();
        let observed = sent.len() as f64 / trials as f64;
        assert!((observed - rate).abs() < 0.02, "rate {} observed {}", rate, observed);

        let expected = format!("app.hits:1|c|@{}", rate);
        assert!(sent.iter().all(|l| *l == expected));
    }
}

#[test]
fn test_disabled_client_never_touches_the_sink() {
    let sink = FailingMetricSink::default();
    let client = StatsdClient::new(sink.clone(), false, "app.");

    run_arc_threaded_test(client, 1, 10);

    assert_eq!(0, sink.calls());
}

#[test]
fn test_increment_many_in_order() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("app.", sink);

    client.increment(["a", "b"]);

    assert_eq!("app.a:1|c", rx.recv().unwrap());
    assert_eq!("app.b:1|c", rx.recv().unwrap());
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_statsd_set_is_exact() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("app.", sink)
        .with_profile(Profile::statsd())
        .build();

    client.set("users", 42i64);

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(vec!["app.users:42|s"], lines);
}

#[test]
fn test_metricsd_delete_sent_once_unsampled() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("app.", sink)
        .with_profile(Profile::metricsd())
        .with_random_source(|| 1.0)
        .build();

    client.delete("old_stat", MetricKind::Gauge);

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(vec!["app.old_stat:delete|g"], lines);
}

#[test]
fn test_metricsd_meter_is_bare() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::builder("app.", sink)
        .with_profile(Profile::metricsd())
        .build();

    client.meter("hits");

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(vec!["app.hits"], lines);
}

#[test]
fn test_failing_sink_nothing_escapes() {
    let sink = FailingMetricSink::default();
    let handled = Arc::new(AtomicUsize::new(0));
    let handled_ref = handled.clone();

    for profile in [Profile::statsd(), Profile::metricsd()] {
        let handled_ref = handled_ref.clone();
        let client = StatsdClient::builder("app.", sink.clone())
            .with_profile(profile)
            .with_error_handler(move |_e: MetricError| {
                handled_ref.fetch_add(1, Ordering::SeqCst);
            })
            .build();

        run_arc_threaded_test(client, 4, 5);
    }

    assert!(sink.calls() > 0);
    assert!(handled.load(Ordering::SeqCst) > 0);
}

#[test]
fn test_error_handler_sees_kinds() {
    let kinds = Arc::new(Mutex::new(Vec::new()));
    let kinds_ref = kinds.clone();
    let client = StatsdClient::builder("app.", FailingMetricSink::default())
        .with_error_handler(move |e: MetricError| kinds_ref.lock().unwrap().push(e.kind()))
        .build();

    client.increment("a");
    client.meter("b");
    client.timing("c", Duration::from_secs(u64::MAX));

    assert_eq!(
        vec![ErrorKind::IoError, ErrorKind::Unsupported, ErrorKind::InvalidInput],
        *kinds.lock().unwrap()
    );
}

#[test]
fn test_custom_profile() {
    let (rx, sink) = SpyMetricSink::new();
    let profile = Profile::statsd().with_tag(MetricKind::Histogram, "h").with_deletes(true);
    let client = StatsdClient::builder("", sink).with_profile(profile).build();

    client.histogram("latency", 2.5);
    client.delete("users", MetricKind::Set);

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(vec!["latency:2.5|h", "users:delete|s"], lines);
}

#[test]
fn test_prefix_is_not_validated() {
    let (rx, sink) = SpyMetricSink::new();
    let client = StatsdClient::from_sink("odd|prefix:", sink);

    client.gauge("a:b", 1u64);

    assert_eq!("odd|prefix:a:b:1|g", rx.recv().unwrap());
}

#[test]
fn test_nop_client_accepts_everything() {
    let client = new_nop_client("client.test.");
    run_arc_threaded_test(client, 1, 1);
}

#[test]
fn test_client_accessors() {
    let client = StatsdClient::builder("client.test.", NopMetricSink)
        .with_profile(Profile::metricsd())
        .with_enabled(false)
        .build();

    assert_eq!("client.test.", client.prefix());
    assert!(!client.is_enabled());
    assert!(client.profile().supports_meters());
}
