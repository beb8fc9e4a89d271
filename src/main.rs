// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};

use crate::app_config::{CaptionConfig, CaptionMode, LogLevel, SubtitleFormat};
use crate::file_utils::FileManager;

mod app_config;
mod cue_builder;
mod errors;
mod file_utils;
mod formatter;
mod line_layout;
mod pipeline;
mod segmenter;
mod word_stream;

/// CLI Wrapper for CaptionMode to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliCaptionMode {
    Word,
    Line,
}

impl From<CliCaptionMode> for CaptionMode {
    fn from(cli_mode: CliCaptionMode) -> Self {
        match cli_mode {
            CliCaptionMode::Word => CaptionMode::Word,
            CliCaptionMode::Line => CaptionMode::Line,
        }
    }
}

/// CLI Wrapper for SubtitleFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliSubtitleFormat {
    Srt,
    Vtt,
}

impl From<CliSubtitleFormat> for SubtitleFormat {
    fn from(cli_format: CliSubtitleFormat) -> Self {
        match cli_format {
            CliSubtitleFormat::Srt => SubtitleFormat::Srt,
            CliSubtitleFormat::Vtt => SubtitleFormat::Vtt,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate subtitle cues from a word-timestamp transcript (default command)
    #[command(alias = "generate")]
    Generate(GenerateArgs),

    /// Generate shell completions for wordcap
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Transcript JSON file with word-level timestamps
    #[arg(value_name = "TRANSCRIPT_PATH")]
    transcript_path: PathBuf,

    /// Output subtitle file (defaults to the transcript path with the
    /// format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Caption grouping granularity
    #[arg(short, long, value_enum)]
    mode: Option<CliCaptionMode>,

    /// Words per cue in line mode
    #[arg(short = 'w', long)]
    max_words: Option<usize>,

    /// Permit two-line cues instead of a forced single line
    #[arg(long)]
    multiline: bool,

    /// Target subtitle format
    #[arg(short, long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Padding in milliseconds added to cue end times
    #[arg(long)]
    end_padding_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// wordcap - word-level caption generation
///
/// Converts word-level speech-recognition timestamps into timed
/// subtitle cues (SRT or WebVTT).
#[derive(Parser, Debug)]
#[command(name = "wordcap")]
#[command(version = "1.0.0")]
#[command(about = "Word-timestamp to subtitle converter")]
#[command(long_about = "wordcap converts word-level ASR timestamps into timed subtitle cues.

EXAMPLES:
    wordcap transcript.json                     # Line mode, 3 words per cue, SRT
    wordcap -m word transcript.json             # One word per cue
    wordcap -m line -w 5 transcript.json        # Five words per cue
    wordcap --multiline transcript.json         # Allow balanced two-line cues
    wordcap -f vtt -o out.vtt transcript.json   # WebVTT output
    wordcap completions bash > wordcap.bash     # Generate bash completions

INPUT:
    The transcript is either a flat JSON array of word records
    ({\"text\"|\"word\", \"start\", \"end\"} in seconds) or a whisper-style
    result object with per-segment word lists.

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Transcript JSON file with word-level timestamps
    #[arg(value_name = "TRANSCRIPT_PATH")]
    transcript_path: Option<PathBuf>,

    /// Output subtitle file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Caption grouping granularity
    #[arg(short, long, value_enum)]
    mode: Option<CliCaptionMode>,

    /// Words per cue in line mode
    #[arg(short = 'w', long)]
    max_words: Option<usize>,

    /// Permit two-line cues instead of a forced single line
    #[arg(long)]
    multiline: bool,

    /// Target subtitle format
    #[arg(short, long, value_enum)]
    format: Option<CliSubtitleFormat>,

    /// Padding in milliseconds added to cue end times
    #[arg(long)]
    end_padding_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

// @converts: Config log level to log crate filter
fn to_level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "wordcap", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Generate(args)) => run_generate(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let transcript_path = cli.transcript_path.ok_or_else(|| {
                anyhow!("TRANSCRIPT_PATH is required when no subcommand is specified")
            })?;

            let generate_args = GenerateArgs {
                transcript_path,
                output: cli.output,
                mode: cli.mode,
                max_words: cli.max_words,
                multiline: cli.multiline,
                format: cli.format,
                end_padding_ms: cli.end_padding_ms,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_generate(generate_args)
        }
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        let content = FileManager::read_to_string(config_path)?;
        serde_json::from_str::<CaptionConfig>(&content)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = CaptionConfig::default();
        let content = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config")?;
        FileManager::write_to_file(config_path, &content)?;

        config
    };

    // Override config with CLI options if provided
    if let Some(mode) = options.mode {
        config.mode = mode.into();
    }
    if let Some(max_words) = options.max_words {
        config.max_words = max_words;
    }
    if options.multiline {
        config.multiline = true;
    }
    if let Some(format) = options.format {
        config.format = format.into();
    }
    if let Some(padding) = options.end_padding_ms {
        config.end_padding_ms = padding;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(to_level_filter(&config.log_level));
    config.validate()?;

    // Read the transcript and run the pipeline
    let transcript_path = &options.transcript_path;
    if !FileManager::file_exists(transcript_path) {
        return Err(anyhow!("Transcript file not found: {:?}", transcript_path));
    }

    let content = FileManager::read_to_string(transcript_path)?;
    let run = pipeline::generate_from_json(&content, &config)?;

    if run.cues.is_empty() {
        warn!("Transcript produced no caption cues");
    }

    // Hand the rendered blob to the file boundary
    let output_path = options.output.unwrap_or_else(|| {
        let output_dir = transcript_path.parent().unwrap_or_else(|| Path::new("."));
        FileManager::generate_output_path(transcript_path, output_dir, config.format.extension())
    });

    let blob = run.render(config.format);
    FileManager::write_to_file(&output_path, &blob)?;

    info!(
        "Saved {} cues to {} ({} tolerated irregularities)",
        run.cues.len(),
        output_path.display(),
        run.anomalies.len()
    );

    Ok(())
}
