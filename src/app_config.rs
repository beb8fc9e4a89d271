use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use crate::errors::CaptionError;

/// Application configuration module
/// This module handles the caption engine configuration including
/// loading, validating and saving configuration settings.
/// Represents the caption generation configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CaptionConfig {
    /// Grouping granularity: one word per cue or grouped lines
    #[serde(default)]
    pub mode: CaptionMode,

    /// Words per cue in line mode (ignored in word mode)
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    /// Permit two-line cues instead of a forced single line
    #[serde(default)]
    pub multiline: bool,

    /// Target subtitle text format
    #[serde(default)]
    pub format: SubtitleFormat,

    /// Padding in milliseconds added to cue end times so words are not
    /// cut off early
    #[serde(default = "default_end_padding_ms")]
    pub end_padding_ms: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Caption grouping granularity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaptionMode {
    // @mode: One word per caption cue
    Word,
    // @mode: Greedy groups of up to max_words per cue
    #[default]
    Line,
}

impl CaptionMode {
    // @returns: Lowercase mode identifier
    pub fn to_lowercase_string(&self) -> String {
        match self {
            Self::Word => "word".to_string(),
            Self::Line => "line".to_string(),
        }
    }
}

// Implement Display trait for CaptionMode
impl std::fmt::Display for CaptionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lowercase_string())
    }
}

// Implement FromStr trait for CaptionMode
impl std::str::FromStr for CaptionMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "word" => Ok(Self::Word),
            "line" => Ok(Self::Line),
            _ => Err(anyhow!("Invalid caption mode: {}", s)),
        }
    }
}

/// Target subtitle text format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    // @format: SubRip
    #[default]
    Srt,
    // @format: WebVTT
    Vtt,
}

impl SubtitleFormat {
    // @returns: File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }

    // @returns: Lowercase format identifier
    pub fn to_lowercase_string(&self) -> String {
        self.extension().to_string()
    }
}

impl std::fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for SubtitleFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(Self::Srt),
            "vtt" => Ok(Self::Vtt),
            _ => Err(anyhow!("Invalid subtitle format: {}", s)),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_max_words() -> usize {
    3
}

fn default_end_padding_ms() -> u64 {
    // The original tool padded cue ends by 0.08s to avoid cutting
    // words off early
    80
}

impl CaptionConfig {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), CaptionError> {
        if self.max_words < 1 {
            return Err(CaptionError::InvalidConfiguration(
                "max_words must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Default implementation for CaptionConfig
impl Default for CaptionConfig {
    fn default() -> Self {
        CaptionConfig {
            mode: CaptionMode::default(),
            max_words: default_max_words(),
            multiline: false,
            format: SubtitleFormat::default(),
            end_padding_ms: default_end_padding_ms(),
            log_level: LogLevel::default(),
        }
    }
}
