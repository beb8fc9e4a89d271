/*!
 * Tests for caption line layout
 */

use anyhow::Result;
use wordcap::line_layout::layout;
use wordcap::segmenter::CaptionUnit;
use wordcap::word_stream::Word;

fn unit_of(count: usize) -> CaptionUnit {
    let words = (0..count)
        .map(|i| Word::new(format!("w{}", i), i as f64, i as f64 + 0.5))
        .collect();
    CaptionUnit::new(words).unwrap()
}

/// Test forced single line regardless of length
#[test]
fn test_layout_withMultilineOff_shouldKeepSingleLine() -> Result<()> {
    for count in [1, 2, 5, 20] {
        let block = layout(&unit_of(count), false)?;
        assert_eq!(block.line_count(), 1);
        assert_eq!(block.lines[0].len(), count);
    }
    Ok(())
}

/// Test that one-word units never wrap
#[test]
fn test_layout_withSingleWord_shouldIgnoreMultilineFlag() -> Result<()> {
    let block = layout(&unit_of(1), true)?;
    assert_eq!(block.line_count(), 1);
    Ok(())
}

/// Test the two-line balance rule
#[test]
fn test_layout_withMultiline_shouldBalanceLines() -> Result<()> {
    // (word count, expected first line, expected second line)
    let cases = [(2, 1, 1), (3, 2, 1), (4, 2, 2), (5, 3, 2), (7, 4, 3)];

    for (count, first, second) in cases {
        let block = layout(&unit_of(count), true)?;
        assert_eq!(block.line_count(), 2, "count {}", count);
        assert_eq!(block.lines[0].len(), first, "count {}", count);
        assert_eq!(block.lines[1].len(), second, "count {}", count);
    }
    Ok(())
}

/// Test that concatenating the lines reproduces the unit's words
#[test]
fn test_layout_withAnyFlag_shouldPreserveWordOrder() -> Result<()> {
    let unit = unit_of(5);

    for multiline in [false, true] {
        let block = layout(&unit, multiline)?;
        let flattened: Vec<&Word> = block.lines.iter().flatten().collect();
        assert_eq!(flattened.len(), unit.len());
        for (got, expected) in flattened.iter().zip(&unit.words) {
            assert_eq!(*got, expected);
        }
    }
    Ok(())
}

/// Test line text rendering
#[test]
fn test_line_texts_withTwoLines_shouldJoinWordsWithSpaces() -> Result<()> {
    let unit = CaptionUnit::new(vec![
        Word::new("never", 0.0, 0.2),
        Word::new("more", 0.2, 0.4),
        Word::new("than", 0.4, 0.6),
        Word::new("two", 0.6, 0.8),
    ])?;

    let block = layout(&unit, true)?;
    assert_eq!(block.line_texts(), vec!["never more", "than two"]);
    Ok(())
}

/// Test the defensive empty unit check
#[test]
fn test_layout_withEmptyUnit_shouldFail() {
    let empty = CaptionUnit { words: Vec::new() };
    assert!(layout(&empty, false).is_err());
    assert!(layout(&empty, true).is_err());
}
