// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use crate::types::{ErrorKind, MetricError, MetricKind, MetricResult};

/// Wire dialect spoken by a client: which tag each kind of metric uses and
/// which optional operations the daemon understands.
///
/// Two dialects are built in. Daemons disagree on what the tags mean, so a
/// client speaks exactly one of them:
///
/// * [`Profile::statsd()`] for Etsy style daemons: timings are `ms`, sets are
///   `s`, there are no histograms, no bare meters and no deletes.
/// * [`Profile::metricsd()`] for histogram oriented daemons: timings and
///   histograms are both `h`, there are no sets, bare meters and deletes are
///   supported.
///
/// Custom dialects can be derived from either one.
///
/// # Example
///
/// ```
/// use tempo::{MetricKind, Profile};
///
/// let profile = Profile::statsd().with_tag(MetricKind::Histogram, "h");
///
/// assert_eq!(Some("ms"), profile.tag(MetricKind::Timing));
/// assert_eq!(Some("h"), profile.tag(MetricKind::Histogram));
/// assert!(!profile.supports_meters());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    tags: [Option<&'static str>; 5],
    meters: bool,
    deletes: bool,
}

impl Profile {
    /// Timing oriented dialect: `ms`, `c`, `g` and `s`.
    pub const fn statsd() -> Self {
        Profile {
            tags: [Some("ms"), None, Some("c"), Some("g"), Some("s")],
            meters: false,
            deletes: false,
        }
    }

    /// Histogram oriented dialect: `h` (for both timings and histograms),
    /// `c` and `g`, plus bare meters and deletes.
    pub const fn metricsd() -> Self {
        Profile {
            tags: [Some("h"), Some("h"), Some("c"), Some("g"), None],
            meters: true,
            deletes: true,
        }
    }

    /// Use `tag` on the wire for metrics of the given kind.
    pub fn with_tag(mut self, kind: MetricKind, tag: &'static str) -> Self {
        self.tags[kind.index()] = Some(tag);
        self
    }

    /// Stop emitting metrics of the given kind altogether.
    pub fn without_kind(mut self, kind: MetricKind) -> Self {
        self.tags[kind.index()] = None;
        self
    }

    /// Toggle support for bare meters.
    pub fn with_meters(mut self, enabled: bool) -> Self {
        self.meters = enabled;
        self
    }

    /// Toggle support for delete events.
    pub fn with_deletes(mut self, enabled: bool) -> Self {
        self.deletes = enabled;
        self
    }

    /// Wire tag for the kind, if this dialect has one.
    pub fn tag(&self, kind: MetricKind) -> Option<&'static str> {
        self.tags[kind.index()]
    }

    pub fn supports_meters(&self) -> bool {
        self.meters
    }

    pub fn supports_deletes(&self) -> bool {
        self.deletes
    }

    pub(crate) fn require_tag(&self, kind: MetricKind) -> MetricResult<&'static str> {
        self.tag(kind).ok_or_else(|| {
            MetricError::from((ErrorKind::Unsupported, "Metric kind not supported by client profile"))
        })
    }

    pub(crate) fn require_meters(&self) -> MetricResult<()> {
        if self.meters {
            Ok(())
        } else {
            Err(MetricError::from((ErrorKind::Unsupported, "Meters not supported by client profile")))
        }
    }

    pub(crate) fn require_deletes(&self) -> MetricResult<()> {
        if self.deletes {
            Ok(())
        } else {
            Err(MetricError::from((ErrorKind::Unsupported, "Deletes not supported by client profile")))
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Profile::statsd()
    }
}
