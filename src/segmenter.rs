use std::fmt;
use log::{debug, error};
use crate::app_config::CaptionMode;
use crate::errors::CaptionError;
use crate::word_stream::{Word, WordStream};

// @module: Grouping of the word stream into caption units

/// Ordered group of words sharing a single caption cue.
///
/// Created by [`segment`]; non-empty by construction.
#[derive(Debug, Clone)]
pub struct CaptionUnit {
    /// Words of the unit in original order
    pub words: Vec<Word>,
}

impl CaptionUnit {
    // @creates: Validated caption unit
    // @validates: At least one word
    pub fn new(words: Vec<Word>) -> Result<Self, CaptionError> {
        if words.is_empty() {
            return Err(CaptionError::InvalidConfiguration(
                "Caption unit must contain at least one word".to_string(),
            ));
        }
        Ok(CaptionUnit { words })
    }

    /// Number of words in the unit
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the unit holds no words (cannot occur for validated units)
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First word of the unit
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    /// Last word of the unit
    pub fn last(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Unit text with words joined by single spaces
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CaptionUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({} words, {:.3}s-{:.3}s)",
            self.text(),
            self.len(),
            self.first().start,
            self.last().end
        )
    }
}

/// Group the word stream into caption units according to the
/// granularity policy.
///
/// WORD mode puts every word in its own unit; LINE mode consumes words
/// greedily and starts a new unit whenever the running count reaches
/// `max_words`. The final unit may be short - nothing is padded or
/// dropped. Pure function of its inputs; an empty stream yields an
/// empty sequence.
pub fn segment(
    stream: &WordStream,
    mode: CaptionMode,
    max_words: usize,
) -> Result<Vec<CaptionUnit>, CaptionError> {
    if max_words < 1 {
        return Err(CaptionError::InvalidConfiguration(
            "max_words must be at least 1".to_string(),
        ));
    }

    let total_words = stream.len();

    let units = match mode {
        CaptionMode::Word => stream
            .words
            .iter()
            .map(|word| CaptionUnit::new(vec![word.clone()]))
            .collect::<Result<Vec<_>, _>>()?,
        CaptionMode::Line => {
            let mut units = Vec::with_capacity(total_words.div_ceil(max_words));
            let mut current: Vec<Word> = Vec::with_capacity(max_words);

            for word in &stream.words {
                current.push(word.clone());
                if current.len() >= max_words {
                    units.push(CaptionUnit::new(std::mem::take(&mut current))?);
                    current = Vec::with_capacity(max_words);
                }
            }

            // The final unit may contain fewer than max_words words
            if !current.is_empty() {
                units.push(CaptionUnit::new(current)?);
            }

            units
        }
    };

    // Protect against accidental loss of words during grouping
    let grouped_words: usize = units.iter().map(|u| u.len()).sum();
    if grouped_words != total_words {
        error!(
            "CRITICAL ERROR: Lost words during segmentation! Original: {}, After grouping: {}",
            total_words, grouped_words
        );
    } else {
        debug!(
            "Segmented {} words into {} caption units ({} mode, max_words {})",
            total_words,
            units.len(),
            mode,
            max_words
        );
    }

    Ok(units)
}
