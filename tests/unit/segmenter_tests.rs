/*!
 * Tests for word stream segmentation
 */

use anyhow::Result;
use wordcap::app_config::CaptionMode;
use wordcap::segmenter::{segment, CaptionUnit};
use wordcap::word_stream::{Word, WordStream};
use crate::common;

/// Test word mode: every word becomes its own unit
#[test]
fn test_segment_withWordMode_shouldYieldOneUnitPerWord() -> Result<()> {
    let stream = common::example_stream();
    let units = segment(&stream, CaptionMode::Word, 3)?;

    assert_eq!(units.len(), 6);
    for (unit, word) in units.iter().zip(&stream.words) {
        assert_eq!(unit.len(), 1);
        assert_eq!(unit.first().text, word.text);
    }
    Ok(())
}

/// Test line mode greedy grouping
#[test]
fn test_segment_withLineMode_shouldGroupGreedily() -> Result<()> {
    let stream = common::example_stream();
    let units = segment(&stream, CaptionMode::Line, 3)?;

    assert_eq!(units.len(), 2);
    assert_eq!(units[0].text(), "Hello world this");
    assert_eq!(units[1].text(), "is a test");
    Ok(())
}

/// Test that the final unit may be short
#[test]
fn test_segment_withUnevenCount_shouldLeaveShortFinalUnit() -> Result<()> {
    let words: Vec<Word> = (0..7)
        .map(|i| Word::new(format!("w{}", i), i as f64, i as f64 + 0.5))
        .collect();
    let units = segment(&WordStream::new(words), CaptionMode::Line, 3)?;

    let sizes: Vec<usize> = units.iter().map(CaptionUnit::len).collect();
    assert_eq!(sizes, vec![3, 3, 1]);
    Ok(())
}

/// Test that no word is lost, duplicated, or reordered
#[test]
fn test_segment_withAnyMode_shouldPreserveCoverage() -> Result<()> {
    let stream = common::example_stream();

    for (mode, max_words) in [
        (CaptionMode::Word, 1),
        (CaptionMode::Line, 1),
        (CaptionMode::Line, 2),
        (CaptionMode::Line, 4),
        (CaptionMode::Line, 100),
    ] {
        let units = segment(&stream, mode, max_words)?;
        let regrouped: Vec<&Word> = units.iter().flat_map(|u| u.words.iter()).collect();
        assert_eq!(regrouped.len(), stream.len());
        for (got, expected) in regrouped.iter().zip(&stream.words) {
            assert_eq!(*got, expected);
        }
    }
    Ok(())
}

/// Test line mode with max_words 1
#[test]
fn test_segment_withLineModeMaxOne_shouldMatchWordMode() -> Result<()> {
    let stream = common::example_stream();
    let units = segment(&stream, CaptionMode::Line, 1)?;

    assert_eq!(units.len(), stream.len());
    assert!(units.iter().all(|u| u.len() == 1));
    Ok(())
}

/// Test the max_words constraint
#[test]
fn test_segment_withZeroMaxWords_shouldFail() {
    let stream = common::example_stream();
    assert!(segment(&stream, CaptionMode::Line, 0).is_err());
    assert!(segment(&stream, CaptionMode::Word, 0).is_err());
}

/// Test empty stream handling
#[test]
fn test_segment_withEmptyStream_shouldYieldNoUnits() -> Result<()> {
    let stream = WordStream::default();
    assert!(segment(&stream, CaptionMode::Word, 3)?.is_empty());
    assert!(segment(&stream, CaptionMode::Line, 3)?.is_empty());
    Ok(())
}

/// Test caption unit construction
#[test]
fn test_caption_unit_withNoWords_shouldFail() {
    assert!(CaptionUnit::new(Vec::new()).is_err());
}
