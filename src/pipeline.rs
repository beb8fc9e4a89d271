use anyhow::Result;
use log::{debug, info, warn};
use crate::app_config::{CaptionConfig, SubtitleFormat};
use crate::cue_builder::{self, Cue};
use crate::errors::{CaptionError, TimingAnomaly};
use crate::formatter;
use crate::line_layout::{self, LineBlock};
use crate::segmenter::{self, CaptionUnit};
use crate::word_stream::WordStream;

// @module: Caption generation pipeline

/// Result of one caption generation run: the final cues plus every
/// timing irregularity that was tolerated along the way.
#[derive(Debug, Clone, Default)]
pub struct CaptionRun {
    /// Final cues in display order
    pub cues: Vec<Cue>,

    /// Diagnostics recorded during normalization and cue building
    pub anomalies: Vec<TimingAnomaly>,
}

impl CaptionRun {
    /// True when no timing irregularities were tolerated
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }

    /// Serialize the cues into the target subtitle format
    pub fn render(&self, format: SubtitleFormat) -> String {
        formatter::render(&self.cues, format)
    }
}

/// Run the caption pipeline over a normalized word stream.
///
/// Stages run strictly left to right: segmentation, line layout, cue
/// building. All configuration is passed explicitly; there is no
/// process-wide state. Only configuration errors abort - every word
/// stream, however noisy, produces a cue sequence.
pub fn generate(stream: &WordStream, config: &CaptionConfig) -> Result<CaptionRun, CaptionError> {
    config.validate()?;

    let units = segmenter::segment(stream, config.mode, config.max_words)?;
    debug!("Laying out {} caption units", units.len());

    let laid_out: Vec<(CaptionUnit, LineBlock)> = units
        .into_iter()
        .map(|unit| line_layout::layout(&unit, config.multiline).map(|block| (unit, block)))
        .collect::<Result<_, _>>()?;

    let (cues, anomalies) = cue_builder::build(&laid_out, config.end_padding_ms)?;

    info!(
        "Generated {} cues from {} words ({} mode)",
        cues.len(),
        stream.len(),
        config.mode
    );

    Ok(CaptionRun { cues, anomalies })
}

/// Convenience entry point for raw transcript JSON: normalize the
/// word records, run the pipeline, and merge the diagnostics from both
/// phases (normalization first).
pub fn generate_from_json(content: &str, config: &CaptionConfig) -> Result<CaptionRun> {
    let mut anomalies = Vec::new();
    let stream = WordStream::from_json_str(content, &mut anomalies)?;

    let mut run = generate(&stream, config)?;
    anomalies.append(&mut run.anomalies);
    run.anomalies = anomalies;

    if !run.is_clean() {
        warn!(
            "Tolerated {} timing irregularities while generating captions",
            run.anomalies.len()
        );
    }

    Ok(run)
}
