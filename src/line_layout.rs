use crate::errors::CaptionError;
use crate::segmenter::CaptionUnit;
use crate::word_stream::Word;

// @module: Line layout for caption units

/// Display lines of one caption unit.
///
/// Concatenating the lines in order reproduces the unit's words in
/// original order; no word is split across lines and no line is empty.
#[derive(Debug, Clone)]
pub struct LineBlock {
    /// One or two lines, each an ordered list of words
    pub lines: Vec<Vec<Word>>,
}

impl LineBlock {
    /// Number of display lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Rendered text of each line, words joined by single spaces
    pub fn line_texts(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .map(|w| w.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

/// Distribute a caption unit's words across display lines.
///
/// With `multiline` off, everything goes on a single line regardless of
/// length - an accessibility requirement so that never more than one
/// line is displayed at a time. With `multiline` on, units of two or
/// more words are split across two lines at the ceiling of half the
/// word count, so the first line receives the extra word for odd
/// counts. One-word units always yield a single line.
pub fn layout(unit: &CaptionUnit, multiline: bool) -> Result<LineBlock, CaptionError> {
    // Defensive check: the segmenter never produces empty units
    if unit.is_empty() {
        return Err(CaptionError::InvalidConfiguration(
            "Cannot lay out an empty caption unit".to_string(),
        ));
    }

    let count = unit.len();
    if !multiline || count < 2 {
        return Ok(LineBlock {
            lines: vec![unit.words.clone()],
        });
    }

    let split_at = count.div_ceil(2);
    let (first, second) = unit.words.split_at(split_at);

    Ok(LineBlock {
        lines: vec![first.to_vec(), second.to_vec()],
    })
}
