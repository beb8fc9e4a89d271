use std::fmt;
use log::{debug, warn};
use crate::errors::{AnomalyKind, CaptionError, TimingAnomaly};
use crate::line_layout::LineBlock;
use crate::segmenter::CaptionUnit;

// @module: Cue timing and construction

/// Shortest duration a cue may be displayed for, in milliseconds.
///
/// Cues below this threshold flash too briefly to read; their end time
/// is extended and the resulting overlap with the next cue is tolerated
/// rather than auto-resolved.
pub const MIN_DISPLAY_DURATION_MS: u64 = 500;

/// Convert recognizer seconds to milliseconds, truncating fractions
/// below millisecond resolution
pub fn seconds_to_ms(seconds: f64) -> u64 {
    (seconds.max(0.0) * 1000.0).floor() as u64
}

// @struct: Final caption cue
#[derive(Debug, Clone)]
pub struct Cue {
    // @field: Sequence number, 1-based and gapless
    pub index: usize,

    // @field: Start time in ms
    pub start_time_ms: u64,

    // @field: End time in ms
    pub end_time_ms: u64,

    // @field: Rendered text lines
    pub lines: Vec<String>,
}

impl Cue {
    /// Creates a new cue - used by tests and the formatter benchmarks
    pub fn new(index: usize, start_time_ms: u64, end_time_ms: u64, lines: Vec<String>) -> Self {
        Cue {
            index,
            start_time_ms,
            end_time_ms,
            lines,
        }
    }

    /// Cue duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms.saturating_sub(self.start_time_ms)
    }

    /// Cue text with lines joined by newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Convert start time to formatted SRT timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to formatted SRT timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds to SRT format (HH:MM:SS,mmm)
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.index)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f)
    }
}

/// Assign final timestamps and indices to laid-out caption units.
///
/// Timing policy:
/// - start = first word's start, end = last word's end plus
///   `end_padding_ms` (so words are not cut off early);
/// - an end time before the start time is clamped to start plus the
///   minimum display duration and flagged;
/// - cues shorter than [`MIN_DISPLAY_DURATION_MS`] get their end time
///   extended;
/// - a cue starting before the previous cue ends keeps its start time
///   untouched (fidelity to the recognition data) and the overlap is
///   recorded for diagnostic reporting.
///
/// Never fails on noisy data; the only error is a malformed empty unit.
pub fn build(
    units: &[(CaptionUnit, LineBlock)],
    end_padding_ms: u64,
) -> Result<(Vec<Cue>, Vec<TimingAnomaly>), CaptionError> {
    let mut cues = Vec::with_capacity(units.len());
    let mut anomalies = Vec::new();
    let mut prev_end_ms: Option<u64> = None;

    for (i, (unit, block)) in units.iter().enumerate() {
        if unit.is_empty() {
            return Err(CaptionError::InvalidConfiguration(format!(
                "Caption unit {} has no words",
                i + 1
            )));
        }

        let index = i + 1;
        let start_ms = seconds_to_ms(unit.first().start);
        let mut end_ms = seconds_to_ms(unit.last().end).saturating_add(end_padding_ms);

        // Upstream timestamp inversion across the unit's words
        if end_ms < start_ms {
            warn!(
                "Cue {} ends at {}ms before it starts at {}ms, clamping",
                index, end_ms, start_ms
            );
            anomalies.push(TimingAnomaly::new(
                AnomalyKind::InvertedTimestamps,
                index,
                format!("end {}ms before start {}ms", end_ms, start_ms),
            ));
            end_ms = start_ms + MIN_DISPLAY_DURATION_MS;
        }

        if end_ms - start_ms < MIN_DISPLAY_DURATION_MS {
            debug!(
                "Cue {} lasts {}ms, extending to the {}ms minimum",
                index,
                end_ms - start_ms,
                MIN_DISPLAY_DURATION_MS
            );
            anomalies.push(TimingAnomaly::new(
                AnomalyKind::BelowMinimumDuration,
                index,
                format!("duration {}ms extended", end_ms - start_ms),
            ));
            end_ms = start_ms + MIN_DISPLAY_DURATION_MS;
        }

        if let Some(prev_end) = prev_end_ms {
            if start_ms < prev_end {
                debug!(
                    "Cue {} starts at {}ms before previous cue ends at {}ms",
                    index, start_ms, prev_end
                );
                anomalies.push(TimingAnomaly::new(
                    AnomalyKind::Overlap,
                    index,
                    format!("starts {}ms before previous end {}ms", start_ms, prev_end),
                ));
            }
        }

        prev_end_ms = Some(end_ms);
        cues.push(Cue::new(index, start_ms, end_ms, block.line_texts()));
    }

    Ok((cues, anomalies))
}
