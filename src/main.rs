// SPDX-License-Identifier: MIT
//
// luma — command-line luminance and contrast checks.
//
// Thin front end over the two library crates:
//
//   luma-color    → parse hex / rgb() / [r, g, b] literals into Rgb8
//   luma-contrast → luminance, contrast ratio, WCAG levels, predicates
//
// Each subcommand parses its color arguments, runs one check and prints a
// single line. Exit codes:
//
//   0  success (for `check`: contrast is sufficient)
//   1  `check` ran but contrast is insufficient
//   2  a color argument was rejected

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use luma_color::{ColorError, ColorInput};
use luma_contrast::{Checker, LuminanceCache, LuminanceMode, Thresholds, WcagLevel};

/// Env var holding a `tracing` filter directive, e.g. `LUMA_LOG=luma_contrast=trace`.
const LOG_ENV: &str = "LUMA_LOG";

// ─── Arguments ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "luma", version, about = "WCAG luminance and contrast checks")]
struct Cli {
    /// Log parse and cache activity to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the luminance of a color.
    Luminance {
        color: String,
        /// Use perceived (un-linearized) luminance instead of WCAG relative.
        #[arg(long)]
        perceived: bool,
    },
    /// Print the contrast ratio between two colors and the WCAG levels met.
    Contrast { a: String, b: String },
    /// Print whether a color is dark.
    Dark {
        color: String,
        #[arg(long, default_value_t = luma_contrast::config::DEFAULT_DARK_THRESHOLD)]
        threshold: f64,
    },
    /// Exit 0 if a color has sufficient contrast on a light or dark background.
    Check {
        color: String,
        #[arg(long, value_enum, default_value_t = Background::Light)]
        on: Background,
        /// Background color (default: white for light, black for dark).
        #[arg(long)]
        background: Option<String>,
        /// Required ratio, exclusive.
        #[arg(long, default_value_t = luma_contrast::AA_THRESHOLD_CONTRAST)]
        threshold: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Background {
    Light,
    Dark,
}

// ─── Color arguments ────────────────────────────────────────────────────────

/// A color argument, owning any numeric components so a [`ColorInput`]
/// can borrow them.
#[derive(Debug, PartialEq)]
enum ColorArg<'a> {
    Literal(&'a str),
    Components(Vec<f64>),
}

impl<'a> ColorArg<'a> {
    /// `[r, g, b]` / `[r, g, b, a]` become numeric components; anything
    /// else is passed to the parser as a literal.
    fn new(arg: &'a str) -> Result<Self, ColorError> {
        let Some(inner) = arg.trim().strip_prefix('[') else {
            return Ok(Self::Literal(arg));
        };
        let inner = inner.strip_suffix(']').ok_or_else(|| unsupported(arg))?;
        let components = inner
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| unsupported(arg)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Components(components))
    }

    fn input(&self) -> ColorInput<'_> {
        match self {
            Self::Literal(s) => ColorInput::Str(s),
            Self::Components(c) => ColorInput::Components(c),
        }
    }
}

fn unsupported(arg: &str) -> ColorError {
    ColorError::UnsupportedFormat {
        color: arg.to_string(),
    }
}

// ─── Commands ───────────────────────────────────────────────────────────────

/// How a command finished, when no color was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Insufficient,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => Self::SUCCESS,
            Outcome::Insufficient => Self::from(1),
        }
    }
}

fn run(command: &Command, cache: &LuminanceCache) -> Result<Outcome, ColorError> {
    match command {
        Command::Luminance { color, perceived } => {
            let mode = if *perceived {
                LuminanceMode::Perceived
            } else {
                LuminanceMode::Relative
            };
            let color = ColorArg::new(color)?;
            let lum = cache.luminance(color.input(), mode)?;
            println!("{lum:.4}");
        }
        Command::Contrast { a, b } => {
            let thresholds = Thresholds::default();
            let checker = Checker::new(cache, &thresholds);
            let (a, b) = (ColorArg::new(a)?, ColorArg::new(b)?);
            let report = checker.report(a.input(), b.input())?;
            println!("{}", format_report(&report));
        }
        Command::Dark { color, threshold } => {
            let thresholds = Thresholds::default().with_dark(*threshold);
            let checker = Checker::new(cache, &thresholds);
            let color = ColorArg::new(color)?;
            let dark = checker.is_dark(color.input(), None)?;
            println!("{}", if dark { "dark" } else { "light" });
        }
        Command::Check {
            color,
            on,
            background,
            threshold,
        } => {
            let thresholds = Thresholds::default().with_contrast(*threshold);
            let checker = Checker::new(cache, &thresholds);
            let color = ColorArg::new(color)?;
            let background = background.as_deref().map(ColorArg::new).transpose()?;
            let bg = background.as_ref().map(ColorArg::input);
            let ok = match on {
                Background::Light => checker.has_contrast_on_light(color.input(), bg, None)?,
                Background::Dark => checker.has_contrast_on_dark(color.input(), bg, None)?,
            };
            debug!(?on, threshold, ok, "contrast check");
            println!("{}", if ok { "pass" } else { "fail" });
            if !ok {
                return Ok(Outcome::Insufficient);
            }
        }
    }
    Ok(Outcome::Done)
}

fn format_report(report: &luma_contrast::ContrastReport) -> String {
    let levels: Vec<String> = WcagLevel::ALL
        .iter()
        .map(|&level| {
            let mark = if report.meets(level) { "pass" } else { "fail" };
            format!("{} {mark}", level.label())
        })
        .collect();
    format!("{:.2}:1  {}", report.ratio, levels.join(", "))
}

/// Install the stderr subscriber. Fails if a global subscriber is already set.
fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("luma: logging disabled: {e}");
    }

    match run(&cli.command, LuminanceCache::global()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("luma: {e}");
            ExitCode::from(2)
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
