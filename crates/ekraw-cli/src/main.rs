use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EKRAW_BUILD_COMMIT"),
    " ",
    env!("EKRAW_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "ekraw")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline decoder for SIMRAD EK60 echo sounder .raw files.",
    long_about = None,
    after_help = "Examples:\n  ekraw raw inspect survey.raw -o summary.json\n  ekraw raw inspect survey.raw --stdout --pretty\n  ekraw raw header survey.raw"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on EK60 .raw inputs (offline-first).
    Raw {
        #[command(subcommand)]
        command: RawCommands,
    },
}

#[derive(Subcommand, Debug)]
enum RawCommands {
    /// Decode a whole file and generate a versioned JSON summary.
    #[command(
        after_help = "Examples:\n  ekraw raw inspect survey.raw -o summary.json\n  ekraw raw inspect survey.raw --stdout --pretty"
    )]
    Inspect {
        /// Path to a .raw file
        input: PathBuf,

        /// Output summary path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        summary: Option<PathBuf>,

        /// Write JSON summary to stdout
        #[arg(long, conflicts_with = "summary")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },

    /// Decode only the configuration datagram and print its fields.
    Header {
        /// Path to a .raw file
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Raw { command } => match command {
            RawCommands::Inspect {
                input,
                summary,
                stdout,
                pretty,
                compact,
                quiet,
            } => cmd_raw_inspect(input, summary, stdout, pretty, compact, quiet),
            RawCommands::Header { input } => cmd_raw_header(input),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_raw_inspect(
    input: PathBuf,
    summary: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let summary = if stdout {
        None
    } else {
        Some(summary.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--summary or --stdout".to_string()),
            )
        })?)
    };

    if let Some(summary_path) = summary.as_ref() {
        let summary_abs = summary_path
            .parent()
            .map(|parent| {
                if parent.as_os_str().is_empty() {
                    fs::canonicalize(".")
                } else {
                    fs::canonicalize(parent)
                }
            })
            .transpose()
            .with_context(|| {
                format!("Failed to resolve output path: {}", summary_path.display())
            })?;
        if let Some(summary_dir) = summary_abs {
            let summary_target = summary_dir.join(
                summary_path
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("Invalid summary path"))?,
            );
            if summary_target == input_abs {
                return Err(CliError::new(
                    format!(
                        "summary path must differ from input: {}",
                        summary_path.display()
                    ),
                    Some("choose a different output path".to_string()),
                ));
            }
        }
    }

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;

    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a .raw file".to_string()),
        ));
    }

    let result = ekraw_core::inspect_raw_file(&resolved_input).context("raw file decode failed")?;
    let json = serialize_summary(&result, pretty, compact)?;

    if stdout {
        print!("{}", json);
        return Ok(());
    }

    let summary = summary.expect("summary required when not using stdout");
    if let Some(parent) = summary.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&summary, json)
        .with_context(|| format!("Failed to write summary: {}", summary.display()))?;

    if !quiet {
        eprintln!("OK: summary written -> {}", summary.display());
    }
    Ok(())
}

fn cmd_raw_header(input: PathBuf) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;

    let config =
        ekraw_core::read_file_header(&resolved_input).context("configuration decode failed")?;

    println!("type:            {}", config.header.datagram_type);
    println!("time:            {}", config.header.timestamp_text);
    println!("survey:          {}", config.survey_name);
    println!("transect:        {}", config.transect_name);
    println!("sounder:         {}", config.sounder_name);
    println!("version:         {}", config.software_version);
    println!("transceivers:    {}", config.transceiver_count);
    for (index, transceiver) in config.transceivers.iter().enumerate() {
        println!(
            "  [{}] {} ({} Hz, gain {} dB)",
            index, transceiver.channel_id, transceiver.frequency, transceiver.gain
        );
    }
    Ok(())
}

fn serialize_summary(
    summary: &ekraw_core::RawSummary,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(summary)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(summary)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a .raw file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "raw" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .raw file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .raw file".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single raw file, or run once per file".to_string();
        let mut message = format!(
            "multiple files match pattern '{}' ({} matches)",
            pattern,
            matches.len()
        );
        let listed = matches.iter().take(3).collect::<Vec<_>>();
        if !listed.is_empty() {
            let mut details = String::new();
            details.push_str("; matches: ");
            details.push_str(
                &listed
                    .into_iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            if matches.len() > 3 {
                details.push_str(", ...");
            }
            message.push_str(&details);
        }
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
