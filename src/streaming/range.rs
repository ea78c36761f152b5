//! `Range` header parsing.
//!
//! Only single `bytes=` ranges are understood. Anything else is reported as
//! [`RangeRequest::Malformed`] and the caller falls back to a full response.

use axum::http::{header, HeaderMap};
use homerow_common::ByteRange;

/// Outcome of inspecting a request's `Range` header against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    /// No `Range` header; serve the whole resource.
    NoRange,
    /// A satisfiable window, already clamped to the resource length.
    Range(ByteRange),
    /// The window starts at or past the end of the resource.
    Unsatisfiable,
    /// The header could not be understood.
    Malformed,
}

impl RangeRequest {
    /// Parse a raw `Range` header value against a resource of `length` bytes.
    ///
    /// Supported forms:
    /// - `bytes=0-499`
    /// - `bytes=500-` (to end of resource)
    /// - `bytes=-500` (last 500 bytes)
    ///
    /// Pure function of its inputs.
    pub fn parse(header: Option<&str>, length: u64) -> Self {
        let Some(value) = header else {
            return Self::NoRange;
        };
        let Some(spec) = value.trim().strip_prefix("bytes=") else {
            return Self::Malformed;
        };

        // Multi-range values split into more than two fragments.
        let parts: Vec<&str> = spec.split('-').collect();
        if parts.len() != 2 {
            return Self::Malformed;
        }
        let first = parts[0].trim();
        let second = parts[1].trim();

        let (start, end) = match (first.is_empty(), second.is_empty()) {
            (true, true) => return Self::Malformed,
            // bytes=-500
            (true, false) => {
                let Some(suffix) = parse_offset(second) else {
                    return Self::Malformed;
                };
                (length.saturating_sub(suffix), length.checked_sub(1))
            }
            // bytes=500-
            (false, true) => {
                let Some(start) = parse_offset(first) else {
                    return Self::Malformed;
                };
                (start, length.checked_sub(1))
            }
            // bytes=0-499
            (false, false) => {
                let (Some(start), Some(end)) = (parse_offset(first), parse_offset(second)) else {
                    return Self::Malformed;
                };
                if start > end {
                    return Self::Malformed;
                }
                (start, length.checked_sub(1).map(|last| end.min(last)))
            }
        };

        // An empty resource has no last byte, so every window misses it.
        match end {
            Some(end) if start <= end => Self::Range(ByteRange::new(start, end)),
            _ => Self::Unsatisfiable,
        }
    }

    /// Parse the `Range` header of a request. A value that is not visible
    /// ASCII counts as malformed.
    pub fn from_headers(headers: &HeaderMap, length: u64) -> Self {
        match headers.get(header::RANGE) {
            None => Self::NoRange,
            Some(value) => match value.to_str() {
                Ok(value) => Self::parse(Some(value), length),
                Err(_) => Self::Malformed,
            },
        }
    }
}

/// Decimal digits only; rejects signs, whitespace inside the number, and
/// values that overflow `u64`.
fn parse_offset(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
