/*!
 * Tests for application configuration functionality
 */

use std::str::FromStr;
use wordcap::app_config::{CaptionConfig, CaptionMode, LogLevel, SubtitleFormat};

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = CaptionConfig::default();

    assert_eq!(config.mode, CaptionMode::Line);
    assert_eq!(config.max_words, 3);
    assert!(!config.multiline);
    assert_eq!(config.format, SubtitleFormat::Srt);
    assert_eq!(config.end_padding_ms, 80);
    assert_eq!(config.log_level, LogLevel::Info);
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = CaptionConfig::default();
    assert!(config.validate().is_ok());

    config.max_words = 0;
    assert!(config.validate().is_err());

    config.max_words = 1;
    assert!(config.validate().is_ok());
}

/// Test deserializing a partial config file
#[test]
fn test_config_deserialization_withPartialJson_shouldApplyDefaults() {
    let config: CaptionConfig = serde_json::from_str(r#"{"mode": "word"}"#).unwrap();

    assert_eq!(config.mode, CaptionMode::Word);
    assert_eq!(config.max_words, 3);
    assert_eq!(config.format, SubtitleFormat::Srt);
}

/// Test config serialization round trip
#[test]
fn test_config_serialization_withRoundTrip_shouldPreserveValues() {
    let mut config = CaptionConfig::default();
    config.mode = CaptionMode::Word;
    config.multiline = true;
    config.format = SubtitleFormat::Vtt;

    let json = serde_json::to_string(&config).unwrap();
    let parsed: CaptionConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.mode, CaptionMode::Word);
    assert!(parsed.multiline);
    assert_eq!(parsed.format, SubtitleFormat::Vtt);
}

/// Test mode parsing and display
#[test]
fn test_caption_mode_withStringConversions_shouldRoundTrip() {
    assert_eq!(CaptionMode::from_str("word").unwrap(), CaptionMode::Word);
    assert_eq!(CaptionMode::from_str("LINE").unwrap(), CaptionMode::Line);
    assert!(CaptionMode::from_str("sentence").is_err());

    assert_eq!(CaptionMode::Word.to_string(), "word");
    assert_eq!(CaptionMode::Line.to_string(), "line");
}

/// Test format parsing and extensions
#[test]
fn test_subtitle_format_withStringConversions_shouldRoundTrip() {
    assert_eq!(SubtitleFormat::from_str("srt").unwrap(), SubtitleFormat::Srt);
    assert_eq!(SubtitleFormat::from_str("VTT").unwrap(), SubtitleFormat::Vtt);
    assert!(SubtitleFormat::from_str("ass").is_err());

    assert_eq!(SubtitleFormat::Srt.extension(), "srt");
    assert_eq!(SubtitleFormat::Vtt.extension(), "vtt");
}
