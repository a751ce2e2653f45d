use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use supports_color::Stream;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use rgbsniff::render::render_grid;
use rgbsniff::{Analysis, ColorCapability, ColorMode, SniffConfig};

#[derive(Parser)]
#[command(name = "rgbsniff")]
#[command(about = "Guess the dimensions of a base64 RGB24 dump and preview it", long_about = None)]
#[command(version)]
struct Args {
    /// Base64 file of raw RGB triplets (line breaks allowed)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Number of ranked candidates to list
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    /// Stop enumerating after this many candidates
    #[arg(long, value_name = "N")]
    max_candidates: Option<usize>,

    /// Skip the terminal preview
    #[arg(long, default_value_t)]
    no_preview: bool,

    /// Preview color mode
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// Print the report as JSON
    #[arg(long, default_value_t)]
    json: bool,

    /// Verbose output
    #[arg(short, long, default_value_t)]
    verbose: bool,

    /// Quiet mode (no logging)
    #[arg(short, long, default_value_t)]
    quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    Auto,
    Truecolor,
    Ansi256,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Truecolor => ColorMode::TrueColor,
            ColorArg::Ansi256 => ColorMode::Ansi256,
        }
    }
}

const EXIT_USAGE: u8 = 1;
const EXIT_INVALID: u8 = 2;

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Success,
    Invalid,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(EXIT_INVALID),
        }
    }
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    file: &'a Path,
    byte_len: usize,
    pixel_count: usize,
    candidates: &'a [rgbsniff::SizeCandidate],
    remaining: usize,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are not usage errors
            let code = if e.use_stderr() { EXIT_USAGE } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    setup_logging(args.verbose, args.quiet);

    let config = build_config(&args, SniffConfig::load().unwrap_or_default());
    let text = match read_input(&args.input) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{e:#}");
            eprintln!("Error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    match run(&args.input, &text, &config, args.json, &mut stdout) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_USAGE)
        }
    }
}

/// Read the input file. Bytes that are not UTF-8 become U+FFFD so the
/// decoder rejects them as invalid characters.
fn read_input(path: &Path) -> Result<String> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Cannot open file '{}'", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Command-line flags take precedence over the config file
fn build_config(args: &Args, file: SniffConfig) -> SniffConfig {
    SniffConfig {
        top: args.top.unwrap_or(file.top),
        max_candidates: args.max_candidates.or(file.max_candidates),
        preview: file.preview && !args.no_preview && !args.json,
        color: args.color.map(Into::into).unwrap_or(file.color),
    }
}

fn color_capability(mode: ColorMode) -> ColorCapability {
    match mode {
        ColorMode::TrueColor => ColorCapability::TrueColor,
        ColorMode::Ansi256 => ColorCapability::Colors256,
        ColorMode::Auto => match supports_color::on(Stream::Stdout) {
            Some(info) if info.has_16m => ColorCapability::TrueColor,
            _ => ColorCapability::Colors256,
        },
    }
}

/// Analyze `text` and write the report for `path` to `out`
fn run(
    path: &Path,
    text: &str,
    config: &SniffConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<Outcome> {
    let analysis = rgbsniff::analyze(text, config);

    if json {
        return match analysis {
            Ok(analysis) => {
                let report = JsonReport {
                    file: path,
                    byte_len: analysis.image.byte_len(),
                    pixel_count: analysis.image.pixel_count().get(),
                    candidates: analysis.top(config.top),
                    remaining: analysis.remaining(config.top),
                };
                serde_json::to_writer_pretty(&mut *out, &report)
                    .context("Failed to write JSON report")?;
                writeln!(out)?;
                Ok(Outcome::Success)
            }
            Err(e) => {
                let error = serde_json::json!({ "file": path.display().to_string(), "error": e.to_string() });
                writeln!(out, "{error}")?;
                Ok(Outcome::Invalid)
            }
        };
    }

    writeln!(out, "File: {}", path.display())?;

    let analysis = match analysis {
        Ok(analysis) => analysis,
        Err(e) => {
            log::debug!("Rejected {}: {e:?}", path.display());
            writeln!(out, "\nError: {e}")?;
            return Ok(Outcome::Invalid);
        }
    };

    write_report(&analysis, config, out)?;

    if config.preview {
        if let Some(best) = analysis.best() {
            render_grid(
                out,
                analysis.image.bytes().as_bytes(),
                best.width,
                best.height,
                color_capability(config.color),
            )
            .context("Failed to render preview")?;
        }
    }

    Ok(Outcome::Success)
}

fn write_report(analysis: &Analysis, config: &SniffConfig, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "Decoded size: {} bytes ({} pixels)",
        analysis.image.byte_len(),
        analysis.image.pixel_count()
    )?;
    writeln!(out, "Status: Valid RGB data\n")?;

    writeln!(out, "Most likely dimensions:")?;
    for (rank, candidate) in analysis.top(config.top).iter().enumerate() {
        writeln!(out, "  {}. {candidate}", rank + 1)?;
    }

    let remaining = analysis.remaining(config.top);
    if remaining > 0 {
        writeln!(out, "\n(and {remaining} more candidates...)")?;
    }

    Ok(())
}
