/*!
 * Error types and timing diagnostics for the wordcap pipeline.
 *
 * This module contains the error taxonomy for the caption engine,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur inside the caption pipeline.
///
/// Configuration errors are the only fatal class: data-quality issues
/// from the recognizer are absorbed as [`TimingAnomaly`] diagnostics so
/// that caption generation never aborts partway through a video.
#[derive(Error, Debug)]
pub enum CaptionError {
    /// Caller supplied an out-of-range or structurally invalid parameter
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Content cannot be safely rendered in the target format
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Kind of timing irregularity detected in the input word stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    /// Empty or whitespace-only token skipped during normalization
    EmptyToken,

    /// Negative timestamp clamped to zero
    NegativeTimestamp,

    /// Word or cue with end time before start time
    InvertedTimestamps,

    /// Word starting before its predecessor
    NonMonotonicStart,

    /// Adjacent identical (text, start, end) word collapsed
    DuplicateArtifact,

    /// Cue starting before the previous cue ends
    Overlap,

    /// Cue shorter than the minimum display duration, end time extended
    BelowMinimumDuration,
}

impl AnomalyKind {
    // @returns: Short identifier for log output
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmptyToken => "empty-token",
            Self::NegativeTimestamp => "negative-timestamp",
            Self::InvertedTimestamps => "inverted-timestamps",
            Self::NonMonotonicStart => "non-monotonic-start",
            Self::DuplicateArtifact => "duplicate-artifact",
            Self::Overlap => "overlap",
            Self::BelowMinimumDuration => "below-minimum-duration",
        }
    }
}

impl std::fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Non-fatal diagnostic recorded when the pipeline tolerates noisy
/// recognizer timestamps instead of failing.
#[derive(Debug, Clone)]
pub struct TimingAnomaly {
    /// Kind of irregularity
    pub kind: AnomalyKind,

    /// Position the anomaly was detected at: word index during
    /// normalization, cue index (1-based) during cue building
    pub index: usize,

    /// Human-readable description
    pub detail: String,
}

impl TimingAnomaly {
    // @creates: New anomaly record
    pub fn new(kind: AnomalyKind, index: usize, detail: impl Into<String>) -> Self {
        TimingAnomaly {
            kind,
            index,
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for TimingAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] at {}: {}", self.kind, self.index, self.detail)
    }
}
