// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use crate::builder::{MetricFormatter, MetricValue};
use crate::profile::Profile;
use crate::sampler::{RandomSource, Sampler};
use crate::sealed::Sealed;
use crate::sinks::MetricSink;
use crate::types::{ErrorKind, MetricError, MetricKind, MetricResult};
use std::fmt;
use std::panic::RefUnwindSafe;
use std::time::Duration;
use tracing::trace;

/// Conversion trait for valid values for timers
///
/// This trait must be implemented for any types that are used as timer
/// values (currently `u64`, `i64`, and `Duration`). `Duration` values are
/// converted to whole milliseconds. This trait is internal to how values
/// are formatted as part of metrics but is exposed publicly for documentation
/// purposes.
///
/// Typical use of Tempo shouldn't require interacting with this trait.
pub trait ToTimerValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToTimerValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToTimerValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToTimerValue for Duration {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        let as_millis = self.as_millis();
        if as_millis > u64::MAX as u128 {
            Err(MetricError::from((ErrorKind::InvalidInput, "u64 overflow")))
        } else {
            Ok(MetricValue::Unsigned(as_millis as u64))
        }
    }
}

/// Conversion trait for valid values for histograms
///
/// This trait must be implemented for any types that are used as histogram
/// values (currently `u64`, `i64`, `f64`, and `Duration`). `Duration` values
/// are converted to whole milliseconds, the same unit as timings.
///
/// Typical use of Tempo shouldn't require interacting with this trait.
pub trait ToHistogramValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToHistogramValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToHistogramValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToHistogramValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Float(self))
    }
}

impl ToHistogramValue for Duration {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        ToTimerValue::try_to_value(self)
    }
}

/// Conversion trait for valid values for gauges
///
/// This trait must be implemented for any types that are used as gauge
/// values (currently `u64`, `i64`, and `f64`).
///
/// Typical use of Tempo shouldn't require interacting with this trait.
pub trait ToGaugeValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToGaugeValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToGaugeValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToGaugeValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Float(self))
    }
}

/// Conversion trait for valid values for sets
///
/// Set members can be any scalar the server can tell apart: integers, floats
/// or strings (currently `i64`, `u64`, `f64`, `&str`, and `String`). Values are
/// written verbatim and not validated.
///
/// Typical use of Tempo shouldn't require interacting with this trait.
pub trait ToSetValue {
    fn try_to_value(self) -> MetricResult<MetricValue>;
}

impl ToSetValue for i64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Signed(self))
    }
}

impl ToSetValue for u64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Unsigned(self))
    }
}

impl ToSetValue for f64 {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Float(self))
    }
}

impl ToSetValue for &str {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self.to_owned()))
    }
}

impl ToSetValue for String {
    fn try_to_value(self) -> MetricResult<MetricValue> {
        Ok(MetricValue::Text(self))
    }
}

/// Conversion trait for the keys accepted by counter methods
///
/// Counters can be updated one key at a time or for several keys at once,
/// in which case one line per key is produced in the order given.
/// Implemented for `&str`, `String`, and slices, arrays, or `Vec`s of
/// string-like values.
///
/// Typical use of Tempo shouldn't require interacting with this trait.
pub trait ToStatKeys {
    fn to_stat_keys(&self) -> Vec<&str>;
}

impl ToStatKeys for &str {
    fn to_stat_keys(&self) -> Vec<&str> {
        vec![*self]
    }
}

impl ToStatKeys for String {
    fn to_stat_keys(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl ToStatKeys for &String {
    fn to_stat_keys(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<T> ToStatKeys for &[T]
where
    T: AsRef<str>,
{
    fn to_stat_keys(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<T, const N: usize> ToStatKeys for [T; N]
where
    T: AsRef<str>,
{
    fn to_stat_keys(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<T> ToStatKeys for Vec<T>
where
    T: AsRef<str>,
{
    fn to_stat_keys(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<T> ToStatKeys for &Vec<T>
where
    T: AsRef<str>,
{
    fn to_stat_keys(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

/// Trait for incrementing and decrementing counters.
///
/// Counters are simple values incremented or decremented by a client. The
/// rates at which these events occur or average values will be determined
/// by the server receiving them. Examples of counter uses include number
/// of logins to a system or requests received.
///
/// All methods accept a single key or several keys (see `ToStatKeys`). When
/// several keys are given, all of their lines are sampled in one pass and
/// sent in one dispatch, in order.
pub trait Counted<K>
where
    K: ToStatKeys,
{
    /// Increment each counter by 1
    fn increment(&self, stats: K) {
        self.update_stats_sampled(stats, 1, 1.0)
    }

    /// Increment each counter by 1, sending with probability `sample_rate`
    fn increment_sampled(&self, stats: K, sample_rate: f64) {
        self.update_stats_sampled(stats, 1, sample_rate)
    }

    /// Decrement each counter by 1
    fn decrement(&self, stats: K) {
        self.update_stats_sampled(stats, -1, 1.0)
    }

    /// Decrement each counter by 1, sending with probability `sample_rate`
    fn decrement_sampled(&self, stats: K, sample_rate: f64) {
        self.update_stats_sampled(stats, -1, sample_rate)
    }

    /// Update each counter by `delta`
    fn update_stats(&self, stats: K, delta: i64) {
        self.update_stats_sampled(stats, delta, 1.0)
    }

    /// Update each counter by `delta`, sending each line with probability
    /// `sample_rate`
    fn update_stats_sampled(&self, stats: K, delta: i64, sample_rate: f64);
}

/// Trait for recording timings in milliseconds.
///
/// Timings are a positive number of milliseconds between a start and end
/// time. Examples include time taken to render a web page or time taken
/// for a database call to return. `Duration` values are converted to
/// milliseconds before being recorded.
///
/// Histogram oriented servers (`Profile::metricsd()`) receive timings as
/// histogram values.
pub trait Timed<T>
where
    T: ToTimerValue,
{
    /// Record a timing in milliseconds with the given key
    fn timing(&self, stat: &str, time: T) {
        self.timing_sampled(stat, time, 1.0)
    }

    /// Record a timing in milliseconds with the given key, sending it with
    /// probability `sample_rate`
    fn timing_sampled(&self, stat: &str, time: T, sample_rate: f64);
}

/// Trait for recording histogram values.
///
/// Histogram values are positive values that can represent anything, whose
/// statistical distribution is calculated by the server.
///
/// Only available with profiles that have a histogram tag, such as
/// `Profile::metricsd()`.
pub trait Histogrammed<T>
where
    T: ToHistogramValue,
{
    /// Record a single histogram value with the given key
    fn histogram(&self, stat: &str, value: T) {
        self.histogram_sampled(stat, value, 1.0)
    }

    /// Record a single histogram value with the given key, sending it with
    /// probability `sample_rate`
    fn histogram_sampled(&self, stat: &str, value: T, sample_rate: f64);
}

/// Trait for recording gauge values.
///
/// Gauge values are an instantaneous measurement of a value determined
/// by the client. They do not change unless changed by the client. Examples
/// include things like load average or how many connections are active.
/// Values are absolute, never deltas.
pub trait Gauged<T>
where
    T: ToGaugeValue,
{
    /// Record a gauge value with the given key
    fn gauge(&self, stat: &str, value: T) {
        self.gauge_sampled(stat, value, 1.0)
    }

    /// Record a gauge value with the given key, sending it with probability
    /// `sample_rate`
    fn gauge_sampled(&self, stat: &str, value: T, sample_rate: f64);
}

/// Trait for recording bare meter events.
///
/// A meter is just the key, with no value or type: the server counts how
/// often it occurs. Only available with profiles that support meters, such
/// as `Profile::metricsd()`.
pub trait Metered {
    /// Record an occurrence of the given key
    fn meter(&self, stat: &str) {
        self.meter_sampled(stat, 1.0)
    }

    /// Record an occurrence of the given key, sending it with probability
    /// `sample_rate`
    fn meter_sampled(&self, stat: &str, sample_rate: f64);
}

/// Trait for recording set values.
///
/// Sets count the number of unique elements in a group. You can use them to,
/// for example, count the unique visitors to your site. Sets are never
/// sampled since dropping members would undercount uniques.
///
/// Only available with profiles that have a set tag, such as
/// `Profile::statsd()`.
pub trait Setted<T>
where
    T: ToSetValue,
{
    /// Record a single set value with the given key
    fn set(&self, stat: &str, value: T);
}

/// Trait for asking the server to forget a metric.
///
/// Deletes are never sampled. Only available with profiles that support
/// deletes, such as `Profile::metricsd()`.
pub trait Deleted {
    /// Delete the metric of the given kind and key
    fn delete(&self, stat: &str, kind: MetricKind);
}

/// Trait that encompasses all other traits for sending metrics.
///
/// Only one integer type is included per kind of metric (`u64` for timings,
/// histograms, and gauges, `i64` for sets) so that integer literals stay
/// unambiguous. Signed timings, histograms, and gauges, `u64`, `f64`, or
/// `&str` set members, and other combinations need the individual traits or
/// a concrete `StatsdClient`, which accepts every value type.
///
/// If you wish to use `StatsdClient` with a generic type or place a
/// `StatsdClient` instance behind a pointer (such as a `Box`) this will allow
/// you to reference all the implemented methods for recording metrics, while
/// using a single trait. An example of this is shown below.
///
/// ```
/// use std::time::Duration;
/// use tempo::prelude::*;
/// use tempo::{MetricKind, NopMetricSink, Profile, StatsdClient};
///
/// let client: Box<dyn MetricClient> = Box::new(
///     StatsdClient::builder("prefix.", NopMetricSink)
///         .with_profile(Profile::metricsd())
///         .build(),
/// );
///
/// client.increment("some.counter");
/// client.update_stats("some.counter", 5);
/// client.timing("some.timer", 42);
/// client.timing("some.timer", Duration::from_millis(42));
/// client.histogram("some.histogram", 4);
/// client.gauge("some.gauge", 8);
/// client.meter("some.meter");
/// client.delete("some.gauge", MetricKind::Gauge);
/// ```
pub trait MetricClient:
    for<'a> Counted<&'a str>
    + Counted<Vec<String>>
    + Timed<u64>
    + Timed<Duration>
    + Histogrammed<u64>
    + Histogrammed<f64>
    + Histogrammed<Duration>
    + Gauged<u64>
    + Gauged<f64>
    + Metered
    + Setted<i64>
    + Setted<String>
    + Deleted
{
}

/// Typically internal client methods for sending metrics and handling errors.
///
/// This trait exposes methods of the client that would normally be internal
/// but may be useful for consumers of the library to extend it in unforeseen
/// ways. Most consumers of the library shouldn't need to make use of this
/// extension point.
///
/// The two methods split delivery in two halves: `send_lines` may fail,
/// `consume_error` is where every failure ends up. The metric methods of the
/// client always route failures to `consume_error`, which is why they never
/// return errors.
///
/// NOTE: This is a sealed trait and so it cannot be implemented outside of the
/// library.
///
/// # Example
///
/// ```
/// use tempo::{StatsdClient, NopMetricSink};
/// use tempo::ext::MetricBackend;
///
/// let client = StatsdClient::from_sink("some.prefix.", NopMetricSink);
/// let lines = vec!["some.prefix.some.event:123|e".to_owned()];
///
/// if let Err(e) = client.send_lines(&lines) {
///     client.consume_error(e);
/// }
/// ```
pub trait MetricBackend: Sealed {
    /// Send fully formed lines, in order, via the underlying `MetricSink`.
    ///
    /// Lines are sent verbatim: the prefix and any sample rate must already
    /// be part of them. Sending stops at the first line the sink fails to
    /// emit and that error is returned. The number of lines sent is returned
    /// otherwise.
    fn send_lines(&self, lines: &[String]) -> MetricResult<usize>;

    /// Consume an error from attempting to format or send a metric.
    ///
    /// This is invoked for every error the metric methods encounter. By
    /// default the handler is a no-op, meaning that errors are discarded.
    fn consume_error(&self, err: MetricError);
}

/// Builder for creating and customizing `StatsdClient` instances.
///
/// Instances of the builder should be created by calling the `::builder()`
/// method on the `StatsdClient` struct.
///
/// # Example
///
/// ```
/// use tempo::prelude::*;
/// use tempo::{MetricError, NopMetricSink, Profile, StatsdClient};
///
/// fn my_error_handler(err: MetricError) {
///     println!("Metric error! {}", err);
/// }
///
/// let client = StatsdClient::builder("prefix.", NopMetricSink)
///     .with_profile(Profile::metricsd())
///     .with_error_handler(my_error_handler)
///     .build();
///
/// client.update_stats("something", 123);
/// client.meter("some.meter");
/// ```
pub struct StatsdClientBuilder {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    enabled: bool,
    profile: Profile,
    errors: Box<dyn Fn(MetricError) + Sync + Send + RefUnwindSafe>,
    sampler: Sampler,
}

impl StatsdClientBuilder {
    // Set the required fields and defaults for optional fields
    fn new<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder {
            // required
            prefix: prefix.to_owned(),
            sink: Box::new(sink),

            // optional with defaults
            enabled: true,
            profile: Profile::default(),
            errors: Box::new(nop_error_handler),
            sampler: Sampler::default(),
        }
    }

    /// Set whether the client emits anything at all.
    ///
    /// A disabled client turns every metric method into a no-op: nothing is
    /// formatted, sampled, or sent, and the error handler is never invoked.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the wire dialect used by the client (`Profile::statsd()` unless
    /// set).
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Set an error handler to use for every error encountered while emitting
    /// metrics.
    ///
    /// The error handler is invoked when metrics can't be formatted (invalid
    /// input, or a kind of metric the profile doesn't support) or when the
    /// sink fails to send them. The error never reaches the code emitting the
    /// metric.
    ///
    /// The error handler should consume the error without panicking. The error
    /// may be logged, printed to stderr, discarded, etc. - this is up to the
    /// implementation.
    pub fn with_error_handler<F>(mut self, errors: F) -> Self
    where
        F: Fn(MetricError) + Sync + Send + RefUnwindSafe + 'static,
    {
        self.errors = Box::new(errors);
        self
    }

    /// Set the source of random draws used to sample metrics.
    ///
    /// Defaults to the thread local RNG. Supplying a deterministic source is
    /// mostly useful in tests.
    pub fn with_random_source<R>(mut self, source: R) -> Self
    where
        R: RandomSource + Sync + Send + RefUnwindSafe + 'static,
    {
        self.sampler = Sampler::new(Box::new(source));
        self
    }

    /// Construct a new `StatsdClient` instance based on current settings.
    pub fn build(self) -> StatsdClient {
        StatsdClient::from_builder(self)
    }
}

/// Client for Statsd style daemons that implements various traits to record
/// metrics.
///
/// # Traits
///
/// The client is the main entry point for users of this library. It supports
/// several traits for recording metrics of different types.
///
/// * `Counted` for incrementing, decrementing, and updating counters.
/// * `Timed` for emitting timings.
/// * `Histogrammed` for emitting histogram values.
/// * `Gauged` for emitting gauge values.
/// * `Metered` for emitting bare meter events.
/// * `Setted` for emitting set values.
/// * `Deleted` for deleting metrics on the server.
/// * `MetricClient` for a combination of all of the above.
///
/// Which of these produce anything on the wire depends on the `Profile` of
/// the client. Calls the profile doesn't support are reported to the error
/// handler and nothing is sent.
///
/// # Delivery
///
/// Delivery is best-effort. None of the metric methods return anything;
/// errors are handed to the error handler (which discards them by default).
/// There are no retries and nothing is queued.
///
/// # Threading
///
/// The `StatsdClient` holds no mutable state and is `Send` and `Sync`, so it
/// can be shared between threads by wrapping it in an `Arc`.
///
/// ```
/// use std::sync::Arc;
/// use std::thread;
/// use tempo::prelude::*;
/// use tempo::{NopMetricSink, StatsdClient};
///
/// let client = Arc::new(StatsdClient::from_sink("some.prefix.", NopMetricSink));
/// let local = client.clone();
///
/// let handle = thread::spawn(move || {
///     local.increment("request.handler");
/// });
///
/// handle.join().unwrap();
/// ```
pub struct StatsdClient {
    prefix: String,
    sink: Box<dyn MetricSink + Sync + Send + RefUnwindSafe>,
    enabled: bool,
    profile: Profile,
    errors: Box<dyn Fn(MetricError) + Sync + Send + RefUnwindSafe>,
    sampler: Sampler,
}

impl StatsdClient {
    /// Create a new enabled client speaking `Profile::statsd()` that will
    /// prepend the given prefix to all metrics emitted to the given
    /// `MetricSink` implementation.
    ///
    /// The prefix is prepended verbatim, no separator is added.
    ///
    /// # Example
    ///
    /// ```
    /// use tempo::{StatsdClient, NopMetricSink};
    ///
    /// let client = StatsdClient::from_sink("my.stats.", NopMetricSink);
    /// ```
    pub fn from_sink<T>(prefix: &str, sink: T) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        Self::builder(prefix, sink).build()
    }

    /// Create a new client from a sink, an enabled flag, and a prefix.
    ///
    /// # Example
    ///
    /// ```
    /// use tempo::prelude::*;
    /// use tempo::{StatsdClient, NopMetricSink};
    ///
    /// let enabled = std::env::var("METRICS_DISABLED").is_err();
    /// let client = StatsdClient::new(NopMetricSink, enabled, "my.stats.");
    ///
    /// client.increment("app.started");
    /// ```
    pub fn new<T>(sink: T, enabled: bool, prefix: &str) -> Self
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        Self::builder(prefix, sink).with_enabled(enabled).build()
    }

    /// Create a new builder with the provided prefix and metric sink.
    ///
    /// A prefix and a metric sink are required to create a new client
    /// instance. All other optional customizations can be set by calling
    /// methods on the returned builder. Any customizations that aren't
    /// set by the caller will use defaults.
    ///
    /// Note, though a metric prefix is required, you may pass an empty
    /// string as a prefix. In this case, the metrics emitted will use only
    /// the bare keys supplied when you call the various methods to emit
    /// metrics.
    ///
    /// General defaults:
    ///
    /// * Enabled.
    /// * `Profile::statsd()`.
    /// * A no-op error handler.
    /// * The thread local RNG as source of sampling draws.
    pub fn builder<T>(prefix: &str, sink: T) -> StatsdClientBuilder
    where
        T: MetricSink + Sync + Send + RefUnwindSafe + 'static,
    {
        StatsdClientBuilder::new(prefix, sink)
    }

    /// Prefix prepended to every metric
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether metric methods emit anything at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Wire dialect of the client
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    // Create a new StatsdClient by consuming the builder
    fn from_builder(builder: StatsdClientBuilder) -> Self {
        StatsdClient {
            prefix: builder.prefix,
            sink: builder.sink,
            enabled: builder.enabled,
            profile: builder.profile,
            errors: builder.errors,
            sampler: builder.sampler,
        }
    }

    /// Format, sample, and send lines produced by `format`.
    ///
    /// Nothing at all happens when the client is disabled, `format` isn't
    /// even invoked. Every error ends up in `consume_error`.
    fn record<F>(&self, sample_rate: f64, format: F)
    where
        F: FnOnce(&Profile, &str) -> MetricResult<Vec<String>>,
    {
        if !self.enabled {
            return;
        }

        let lines = match format(&self.profile, &self.prefix) {
            Ok(lines) => self.sampler.sample(lines, sample_rate),
            Err(e) => return self.consume_error(e),
        };

        if lines.is_empty() {
            return;
        }

        if let Err(e) = self.send_lines(&lines) {
            self.consume_error(e);
        }
    }
}

impl Sealed for StatsdClient {}

impl MetricBackend for StatsdClient {
    fn send_lines(&self, lines: &[String]) -> MetricResult<usize> {
        for line in lines {
            self.sink.emit(line)?;
        }
        Ok(lines.len())
    }

    fn consume_error(&self, err: MetricError) {
        trace!(kind = ?err.kind(), "discarding metric error: {}", err);
        (self.errors)(err);
    }
}

impl fmt::Debug for StatsdClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StatsdClient {{ prefix: {:?}, sink: ..., enabled: {:?}, profile: {:?}, errors: ..., sampler: ... }}",
            self.prefix, self.enabled, self.profile,
        )
    }
}

impl<K> Counted<K> for StatsdClient
where
    K: ToStatKeys,
{
    fn update_stats_sampled(&self, stats: K, delta: i64, sample_rate: f64) {
        self.record(sample_rate, |profile, prefix| {
            stats
                .to_stat_keys()
                .into_iter()
                .map(|key| MetricFormatter::counter(profile, prefix, key, delta).map(|f| f.format()))
                .collect()
        });
    }
}

impl<T> Timed<T> for StatsdClient
where
    T: ToTimerValue,
{
    fn timing_sampled(&self, stat: &str, time: T, sample_rate: f64) {
        self.record(sample_rate, |profile, prefix| {
            let fmt = MetricFormatter::timer(profile, prefix, stat, time.try_to_value()?)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl<T> Histogrammed<T> for StatsdClient
where
    T: ToHistogramValue,
{
    fn histogram_sampled(&self, stat: &str, value: T, sample_rate: f64) {
        self.record(sample_rate, |profile, prefix| {
            let fmt = MetricFormatter::histogram(profile, prefix, stat, value.try_to_value()?)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl<T> Gauged<T> for StatsdClient
where
    T: ToGaugeValue,
{
    fn gauge_sampled(&self, stat: &str, value: T, sample_rate: f64) {
        self.record(sample_rate, |profile, prefix| {
            let fmt = MetricFormatter::gauge(profile, prefix, stat, value.try_to_value()?)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl Metered for StatsdClient {
    fn meter_sampled(&self, stat: &str, sample_rate: f64) {
        self.record(sample_rate, |profile, prefix| {
            let fmt = MetricFormatter::meter(profile, prefix, stat)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl<T> Setted<T> for StatsdClient
where
    T: ToSetValue,
{
    fn set(&self, stat: &str, value: T) {
        self.record(1.0, |profile, prefix| {
            let fmt = MetricFormatter::set(profile, prefix, stat, value.try_to_value()?)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl Deleted for StatsdClient {
    fn delete(&self, stat: &str, kind: MetricKind) {
        self.record(1.0, |profile, prefix| {
            let fmt = MetricFormatter::delete(profile, prefix, stat, kind)?;
            Ok(vec![fmt.format()])
        });
    }
}

impl MetricClient for StatsdClient {}

#[allow(clippy::needless_pass_by_value)]
fn nop_error_handler(_err: MetricError) {
    // nothing
}
