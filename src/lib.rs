/*!
 * # wordcap - word-level caption generation
 *
 * A Rust library that converts word-level speech-recognition timestamps
 * into timed subtitle cues.
 *
 * ## Features
 *
 * - Normalize noisy recognizer word streams (whisper-style transcripts
 *   or flat word arrays) without ever aborting on bad timestamps
 * - Group words into cues per word or in fixed-size line groups
 * - Single-line or balanced two-line cue layout
 * - Minimum display duration and end padding so cues stay readable
 * - Deterministic SRT and WebVTT serialization
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `word_stream`: Recognized-word model and tolerant normalization
 * - `segmenter`: Grouping of the word stream into caption units
 * - `line_layout`: Distribution of a unit's words across display lines
 * - `cue_builder`: Final cue timing, indices, and anomaly collection
 * - `formatter`: Serialization into subtitle text formats
 * - `pipeline`: Pipeline entry points tying the stages together
 * - `app_config`: Configuration management
 * - `file_utils`: File system operations
 * - `errors`: Error taxonomy and timing diagnostics
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod cue_builder;
pub mod errors;
pub mod file_utils;
pub mod formatter;
pub mod line_layout;
pub mod pipeline;
pub mod segmenter;
pub mod word_stream;

// Re-export main types for easier usage
pub use app_config::{CaptionConfig, CaptionMode, SubtitleFormat};
pub use cue_builder::{Cue, MIN_DISPLAY_DURATION_MS};
pub use errors::{AnomalyKind, CaptionError, TimingAnomaly};
pub use line_layout::LineBlock;
pub use pipeline::{generate, generate_from_json, CaptionRun};
pub use segmenter::{segment, CaptionUnit};
pub use word_stream::{RawTranscript, RawWord, Word, WordStream};
