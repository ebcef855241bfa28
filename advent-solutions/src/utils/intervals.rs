//! Closed integer intervals: parsing, merging, and point-membership queries.

use itertools::Itertools;
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// A closed interval of non-negative integers, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u64,
    pub end: u64,
}

impl Span {
    /// Whether `value` lies inside the interval, bounds included.
    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// Error type for parsing a `start-end` token
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpanParseError {
    #[error("expected '<start>-<end>', got {0:?}")]
    MissingSeparator(String),
    #[error("invalid bound: {0}")]
    InvalidBound(#[from] std::num::ParseIntError),
    #[error("reversed bounds: {start} > {end}")]
    Reversed { start: u64, end: u64 },
}

impl FromStr for Span {
    type Err = SpanParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| SpanParseError::MissingSeparator(s.to_string()))?;
        let start: u64 = start.trim().parse()?;
        let end: u64 = end.trim().parse()?;
        if start > end {
            return Err(SpanParseError::Reversed { start, end });
        }
        Ok(Span { start, end })
    }
}

/// Sorted, non-overlapping spans produced by [`MergedSpans::merge`].
///
/// Invariant: for adjacent entries, `spans[i].end < spans[i + 1].start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedSpans(Vec<Span>);

impl MergedSpans {
    /// Sort spans by start and coalesce every overlapping pair.
    ///
    /// A span whose start falls on or before the current end extends it;
    /// anything else opens a new span.
    pub fn merge(spans: &[Span]) -> Self {
        let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
        for span in spans.iter().copied().sorted_by_key(|s| s.start) {
            match merged.last_mut() {
                Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
                _ => merged.push(span),
            }
        }
        MergedSpans(merged)
    }

    /// Whether `value` lies inside any merged span, by binary search.
    pub fn contains(&self, value: u64) -> bool {
        self.0
            .binary_search_by(|span| {
                if span.end < value {
                    Ordering::Less
                } else if span.start > value {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    pub fn as_slice(&self) -> &[Span] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: u64, end: u64) -> Span {
        Span { start, end }
    }

    #[test]
    fn parses_start_end_token() {
        assert_eq!("3-8".parse::<Span>().unwrap(), span(3, 8));
        assert_eq!("10-10".parse::<Span>().unwrap(), span(10, 10));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(
            "38".parse::<Span>().unwrap_err(),
            SpanParseError::MissingSeparator("38".to_string())
        );
        assert!(matches!(
            "3-x".parse::<Span>().unwrap_err(),
            SpanParseError::InvalidBound(_)
        ));
        assert_eq!(
            "8-3".parse::<Span>().unwrap_err(),
            SpanParseError::Reversed { start: 8, end: 3 }
        );
    }

    #[test]
    fn merges_overlapping_spans() {
        let merged = MergedSpans::merge(&[span(1, 5), span(3, 8), span(10, 12)]);
        assert_eq!(merged.as_slice(), &[span(1, 8), span(10, 12)]);
    }

    #[test]
    fn merges_spans_sharing_an_endpoint() {
        let merged = MergedSpans::merge(&[span(1, 5), span(5, 8)]);
        assert_eq!(merged.as_slice(), &[span(1, 8)]);
    }

    #[test]
    fn keeps_spans_with_a_gap_apart() {
        let merged = MergedSpans::merge(&[span(1, 5), span(6, 9)]);
        assert_eq!(merged.as_slice(), &[span(1, 5), span(6, 9)]);
    }

    #[test]
    fn merges_unsorted_and_contained_spans() {
        let merged = MergedSpans::merge(&[span(10, 12), span(2, 9), span(3, 4)]);
        assert_eq!(merged.as_slice(), &[span(2, 9), span(10, 12)]);
    }

    #[test]
    fn membership_via_binary_search() {
        let merged = MergedSpans::merge(&[span(1, 5), span(3, 8), span(10, 12)]);
        assert!(merged.contains(7));
        assert!(!merged.contains(9));
        assert!(merged.contains(1));
        assert!(merged.contains(12));
        assert!(!merged.contains(0));
        assert!(!merged.contains(13));
    }

    #[test]
    fn empty_input_merges_to_nothing() {
        let merged = MergedSpans::merge(&[]);
        assert!(merged.is_empty());
        assert!(!merged.contains(5));
    }
}
