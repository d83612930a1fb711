// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use crate::profile::Profile;
use crate::types::{MetricKind, MetricResult};
use std::fmt::{self, Write};

/// Holder for primitive metric values that knows how to display itself
///
/// This enum is internal to how various types that are valid for each type
/// of metric (e.g. types for which `ToTimerValue`, `ToSetValue`, etc) are
/// implemented but is exposed for documentation purposes and advanced use cases.
///
/// Typical use of Tempo shouldn't require interacting with this type.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricValue::Signed(v) => v.fmt(f),
            MetricValue::Unsigned(v) => v.fmt(f),
            MetricValue::Float(v) => v.fmt(f),
            MetricValue::Text(ref v) => v.fmt(f),
        }
    }
}

/// What follows the key of a metric line
#[derive(Debug, Clone)]
enum Body {
    Value(MetricValue, &'static str),
    Bare,
    Delete(&'static str),
}

#[derive(Debug, Clone)]
pub(crate) struct MetricFormatter<'a> {
    prefix: &'a str,
    key: &'a str,
    body: Body,
}

impl<'a> MetricFormatter<'a> {
    const DELETE_TOKEN: &'static str = "delete";

    pub(crate) fn counter(profile: &Profile, prefix: &'a str, key: &'a str, delta: i64) -> MetricResult<Self> {
        Self::from_val(profile, prefix, key, MetricValue::Signed(delta), MetricKind::Count)
    }

    pub(crate) fn timer(profile: &Profile, prefix: &'a str, key: &'a str, val: MetricValue) -> MetricResult<Self> {
        Self::from_val(profile, prefix, key, val, MetricKind::Timing)
    }

    pub(crate) fn histogram(profile: &Profile, prefix: &'a str, key: &'a str, val: MetricValue) -> MetricResult<Self> {
        Self::from_val(profile, prefix, key, val, MetricKind::Histogram)
    }

    pub(crate) fn gauge(profile: &Profile, prefix: &'a str, key: &'a str, val: MetricValue) -> MetricResult<Self> {
        Self::from_val(profile, prefix, key, val, MetricKind::Gauge)
    }

    pub(crate) fn set(profile: &Profile, prefix: &'a str, key: &'a str, val: MetricValue) -> MetricResult<Self> {
        Self::from_val(profile, prefix, key, val, MetricKind::Set)
    }

    pub(crate) fn meter(profile: &Profile, prefix: &'a str, key: &'a str) -> MetricResult<Self> {
        profile.require_meters()?;
        Ok(MetricFormatter {
            prefix,
            key,
            body: Body::Bare,
        })
    }

    pub(crate) fn delete(profile: &Profile, prefix: &'a str, key: &'a str, kind: MetricKind) -> MetricResult<Self> {
        profile.require_deletes()?;
        let tag = profile.require_tag(kind)?;
        Ok(MetricFormatter {
            prefix,
            key,
            body: Body::Delete(tag),
        })
    }

    fn from_val(
        profile: &Profile,
        prefix: &'a str,
        key: &'a str,
        val: MetricValue,
        kind: MetricKind,
    ) -> MetricResult<Self> {
        let tag = profile.require_tag(kind)?;
        Ok(MetricFormatter {
            prefix,
            key,
            body: Body::Value(val, tag),
        })
    }

    #[rustfmt::skip]
    fn size_hint(&self) -> usize {
        let base = self.prefix.len() + self.key.len();
        match self.body {
            Body::Value(_, tag) => base + 1 /* : */ + 10 /* value */ + 1 /* | */ + tag.len(),
            Body::Delete(tag) => base + 1 /* : */ + Self::DELETE_TOKEN.len() + 1 /* | */ + tag.len(),
            Body::Bare => base,
        }
    }

    pub(crate) fn format(&self) -> String {
        let mut out = String::with_capacity(self.size_hint());
        out.push_str(self.prefix);
        out.push_str(self.key);

        match self.body {
            Body::Value(ref val, tag) => {
                let _ = write!(out, ":{}|{}", val, tag);
            }
            Body::Delete(tag) => {
                let _ = write!(out, ":{}|{}", Self::DELETE_TOKEN, tag);
            }
            Body::Bare => {}
        }

        out
    }
}
