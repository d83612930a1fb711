// Tempo - A best-effort Statsd client for Rust!
//
// Copyright 2012-2026 Future Publishing Ltd and Joseph Ray
//
// Licensed under the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>. This file may not be copied,
// modified, or distributed except according to those terms.

use std::error;
use std::fmt;
use std::io;

/// Semantic kind of a metric event.
///
/// Each kind maps to a short wire tag through a [`Profile`](crate::Profile).
/// Not every profile has a tag for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Timing,
    Histogram,
    Count,
    Gauge,
    Set,
}

impl MetricKind {
    #[cfg(test)]
    pub(crate) const ALL: [MetricKind; 5] = [
        MetricKind::Timing,
        MetricKind::Histogram,
        MetricKind::Count,
        MetricKind::Gauge,
        MetricKind::Set,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            MetricKind::Timing => 0,
            MetricKind::Histogram => 1,
            MetricKind::Count => 2,
            MetricKind::Gauge => 3,
            MetricKind::Set => 4,
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MetricKind::Timing => "timing".fmt(f),
            MetricKind::Histogram => "histogram".fmt(f),
            MetricKind::Count => "count".fmt(f),
            MetricKind::Gauge => "gauge".fmt(f),
            MetricKind::Set => "set".fmt(f),
        }
    }
}

/// Potential categories an error from this library falls into.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    InvalidInput,
    IoError,
    Unsupported,
}

/// Error generated by this library, typically while formatting a metric or
/// handing it to a sink.
///
/// These errors never reach callers of the metric methods. They are passed
/// to the error handler configured on the client instead.
#[derive(Debug)]
pub struct MetricError {
    repr: ErrorRepr,
}

#[derive(Debug)]
enum ErrorRepr {
    WithDescription(ErrorKind, &'static str),
    IoError(io::Error),
}

impl MetricError {
    /// Return the kind of the error
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::IoError(_) => ErrorKind::IoError,
            ErrorRepr::WithDescription(kind, _) => kind,
        }
    }
}

impl fmt::Display for MetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            ErrorRepr::IoError(ref err) => err.fmt(f),
            ErrorRepr::WithDescription(_, desc) => desc.fmt(f),
        }
    }
}

impl error::Error for MetricError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.repr {
            ErrorRepr::IoError(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MetricError {
    fn from(err: io::Error) -> MetricError {
        MetricError {
            repr: ErrorRepr::IoError(err),
        }
    }
}

impl From<(ErrorKind, &'static str)> for MetricError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> MetricError {
        MetricError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

pub type MetricResult<T> = Result<T, MetricError>;
