use std::fmt::Write;
use log::debug;
use crate::app_config::SubtitleFormat;
use crate::cue_builder::Cue;

// @module: Subtitle text serialization

/// Serialize cues into the target subtitle format.
///
/// Pure serialization with no timing logic: an identical cue sequence
/// always yields byte-identical output. Content that would corrupt cue
/// boundaries (embedded newlines or blank lines inside a text line) is
/// collapsed to spaces rather than rejected, so the pipeline always
/// completes.
pub fn render(cues: &[Cue], format: SubtitleFormat) -> String {
    let mut output = String::new();

    if format == SubtitleFormat::Vtt {
        output.push_str("WEBVTT\n\n");
    }

    for cue in cues {
        let _ = writeln!(output, "{}", cue.index);
        let _ = writeln!(
            output,
            "{} --> {}",
            format_timestamp(cue.start_time_ms, format),
            format_timestamp(cue.end_time_ms, format)
        );
        for line in &cue.lines {
            // Non-empty by the line layout invariants; sanitizing only
            // collapses whitespace, so no blank line can appear here
            let _ = writeln!(output, "{}", sanitize_line(line));
        }
        output.push('\n');
    }

    debug!("Rendered {} cues as {}", cues.len(), format);
    output
}

/// Format a millisecond timestamp for the target format.
///
/// SRT separates milliseconds with a comma, WebVTT with a dot.
pub fn format_timestamp(ms: u64, format: SubtitleFormat) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    let separator = match format {
        SubtitleFormat::Srt => ',',
        SubtitleFormat::Vtt => '.',
    };

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, seconds, separator, millis
    )
}

/// Collapse structurally forbidden sequences in a text line.
///
/// Embedded line breaks would terminate the cue early and a blank line
/// would end it entirely, so control characters and whitespace runs are
/// collapsed to single spaces.
fn sanitize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
