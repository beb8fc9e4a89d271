use std::fmt;
use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use crate::errors::{AnomalyKind, CaptionError, TimingAnomaly};

// @module: Word stream model and normalization

/// A single recognized word with its time range in seconds.
///
/// Produced once by the recognizer and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    // @field: Text token, trimmed and non-empty
    pub text: String,

    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,
}

impl Word {
    /// Creates a new word - used by tests and normalization, which
    /// establish the invariants themselves
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Word {
            text: text.into(),
            start,
            end,
        }
    }

    // @creates: Validated word
    // @validates: Non-empty text, finite non-negative times, end >= start
    pub fn new_validated(text: &str, start: f64, end: f64) -> Result<Self, CaptionError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CaptionError::InvalidConfiguration(
                "Word text must not be empty".to_string(),
            ));
        }

        if !start.is_finite() || !end.is_finite() || start < 0.0 || end < 0.0 {
            return Err(CaptionError::InvalidConfiguration(format!(
                "Word '{}' has invalid times: start {} end {}",
                trimmed, start, end
            )));
        }

        if end < start {
            return Err(CaptionError::InvalidConfiguration(format!(
                "Word '{}' ends at {} before it starts at {}",
                trimmed, end, start
            )));
        }

        Ok(Word {
            text: trimmed.to_string(),
            start,
            end,
        })
    }

    /// Duration of the word in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'{}' [{:.3}-{:.3}]", self.text, self.start, self.end)
    }
}

/// Raw word record as emitted by the recognizer, before normalization.
///
/// Whisper-style transcripts name the text field "word"; flat exports
/// from other recognizers use "text". Both are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct RawWord {
    // @field: Text token, may be empty or padded
    #[serde(alias = "word")]
    pub text: String,

    // @field: Start time in seconds, missing in degenerate transcripts
    #[serde(default)]
    pub start: Option<f64>,

    // @field: End time in seconds, missing in degenerate transcripts
    #[serde(default)]
    pub end: Option<f64>,
}

/// One recognizer segment of a whisper-style transcript
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    /// Word-level timestamps of the segment
    #[serde(default)]
    pub words: Vec<RawWord>,
}

/// Transcript input: either a flat array of word records or a
/// whisper-style object with per-segment word lists
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTranscript {
    /// Flat array of word records
    Words(Vec<RawWord>),

    /// Whisper result object
    Whisper {
        /// Recognized segments in order
        segments: Vec<RawSegment>,
    },
}

impl RawTranscript {
    // @returns: All word records in original order
    pub fn into_words(self) -> Vec<RawWord> {
        match self {
            RawTranscript::Words(words) => words,
            RawTranscript::Whisper { segments } => {
                segments.into_iter().flat_map(|s| s.words).collect()
            }
        }
    }
}

/// Ordered, normalized sequence of recognized words
#[derive(Debug, Clone, Default)]
pub struct WordStream {
    /// Words in recognition order
    pub words: Vec<Word>,
}

impl WordStream {
    /// Create a stream from already-validated words
    pub fn new(words: Vec<Word>) -> Self {
        WordStream { words }
    }

    /// Number of words in the stream
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the stream holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Normalize raw recognizer output into a valid word stream.
    ///
    /// Recognizer noise is repaired rather than rejected: empty tokens
    /// are skipped, negative or inverted timestamps are clamped, and
    /// adjacent exact duplicates are collapsed. Every repair is recorded
    /// as a [`TimingAnomaly`]. Non-monotonic start times are recorded
    /// but the words are kept, preserving fidelity to the recognition
    /// data.
    pub fn normalize(raw: Vec<RawWord>, anomalies: &mut Vec<TimingAnomaly>) -> Self {
        let mut words: Vec<Word> = Vec::with_capacity(raw.len());
        let mut prev_end = 0.0_f64;

        for (i, record) in raw.into_iter().enumerate() {
            let text = record.text.trim();
            if text.is_empty() {
                debug!("Skipping empty token at word index {}", i);
                anomalies.push(TimingAnomaly::new(
                    AnomalyKind::EmptyToken,
                    i,
                    "empty token skipped",
                ));
                continue;
            }

            // Guard against missing timestamps
            let mut start = record.start.unwrap_or(prev_end);
            let mut end = record.end.unwrap_or(start);

            if start < 0.0 || end < 0.0 {
                anomalies.push(TimingAnomaly::new(
                    AnomalyKind::NegativeTimestamp,
                    i,
                    format!("'{}' had negative times, clamped to zero", text),
                ));
                start = start.max(0.0);
                end = end.max(0.0);
            }

            if end < start {
                anomalies.push(TimingAnomaly::new(
                    AnomalyKind::InvertedTimestamps,
                    i,
                    format!("'{}' ends at {} before start {}", text, end, start),
                ));
                end = start;
            }

            if let Some(last) = words.last() {
                // Adjacent exact duplicates are recognizer artifacts
                if last.text == text && last.start == start && last.end == end {
                    anomalies.push(TimingAnomaly::new(
                        AnomalyKind::DuplicateArtifact,
                        i,
                        format!("duplicate '{}' collapsed", text),
                    ));
                    continue;
                }

                if start < last.start {
                    anomalies.push(TimingAnomaly::new(
                        AnomalyKind::NonMonotonicStart,
                        i,
                        format!("'{}' starts at {} before previous start {}", text, start, last.start),
                    ));
                }
            }

            prev_end = end;
            words.push(Word::new(text, start, end));
        }

        if !anomalies.is_empty() {
            warn!(
                "Normalized word stream with {} tolerated irregularities",
                anomalies.len()
            );
        }

        WordStream::new(words)
    }

    /// Parse a JSON transcript (flat word array or whisper result
    /// object) and normalize it
    pub fn from_json_str(content: &str, anomalies: &mut Vec<TimingAnomaly>) -> Result<Self> {
        let transcript: RawTranscript =
            serde_json::from_str(content).context("Failed to parse transcript JSON")?;

        Ok(Self::normalize(transcript.into_words(), anomalies))
    }
}

impl fmt::Display for WordStream {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Word Stream")?;
        writeln!(f, "Words: {}", self.words.len())?;
        if let (Some(first), Some(last)) = (self.words.first(), self.words.last()) {
            writeln!(f, "Span: {:.3}s - {:.3}s", first.start, last.end)?;
        }
        Ok(())
    }
}
