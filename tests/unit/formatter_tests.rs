/*!
 * Tests for subtitle serialization
 */

use wordcap::app_config::SubtitleFormat;
use wordcap::cue_builder::Cue;
use wordcap::formatter::{format_timestamp, render};

fn sample_cues() -> Vec<Cue> {
    vec![
        Cue::new(1, 0, 1200, vec!["Hello world this".to_string()]),
        Cue::new(2, 1200, 1800, vec!["is a test".to_string()]),
    ]
}

/// Test exact SRT output shape
#[test]
fn test_render_withSrtFormat_shouldMatchExpectedBlob() {
    let output = render(&sample_cues(), SubtitleFormat::Srt);

    let expected = "\
1
00:00:00,000 --> 00:00:01,200
Hello world this

2
00:00:01,200 --> 00:00:01,800
is a test

";
    assert_eq!(output, expected);
}

/// Test WebVTT output shape
#[test]
fn test_render_withVttFormat_shouldEmitHeaderAndDotSeparator() {
    let output = render(&sample_cues(), SubtitleFormat::Vtt);

    assert!(output.starts_with("WEBVTT\n\n"));
    assert!(output.contains("00:00:00.000 --> 00:00:01.200"));
    assert!(!output.contains(','));
}

/// Test deterministic serialization
#[test]
fn test_render_withSameCues_shouldBeByteIdentical() {
    let cues = sample_cues();
    assert_eq!(
        render(&cues, SubtitleFormat::Srt),
        render(&cues, SubtitleFormat::Srt)
    );
    assert_eq!(
        render(&cues, SubtitleFormat::Vtt),
        render(&cues, SubtitleFormat::Vtt)
    );
}

/// Test multi-line cue rendering
#[test]
fn test_render_withTwoLineCue_shouldEmitOneTextLinePerLayoutLine() {
    let cues = vec![Cue::new(
        1,
        0,
        2000,
        vec!["upper line".to_string(), "lower line".to_string()],
    )];

    let output = render(&cues, SubtitleFormat::Srt);
    assert!(output.contains("upper line\nlower line\n\n"));
}

/// Test that structurally forbidden content is collapsed, not rejected
#[test]
fn test_render_withEmbeddedBlankLines_shouldCollapseToSpaces() {
    let cues = vec![Cue::new(1, 0, 1000, vec!["broken\n\ncontent".to_string()])];

    let output = render(&cues, SubtitleFormat::Srt);
    assert!(output.contains("broken content\n"));
    // Exactly one blank line terminates the cue
    assert!(output.ends_with("broken content\n\n"));
}

/// Test empty cue sequence
#[test]
fn test_render_withNoCues_shouldYieldMinimalOutput() {
    assert_eq!(render(&[], SubtitleFormat::Srt), "");
    assert_eq!(render(&[], SubtitleFormat::Vtt), "WEBVTT\n\n");
}

/// Test timestamp formatting per format
#[test]
fn test_format_timestamp_withBothFormats_shouldUseFormatSeparator() {
    assert_eq!(format_timestamp(5025678, SubtitleFormat::Srt), "01:23:45,678");
    assert_eq!(format_timestamp(5025678, SubtitleFormat::Vtt), "01:23:45.678");
}
