//! binary16 codec and multiplier CLI.
//!
//! This binary is a thin front end over `halfmul-core`. It performs:
//! 1. **Multiply:** Multiply two bit patterns and print the product.
//! 2. **Decode / Encode:** Convert between bit patterns and decimal values.
//! 3. **Check:** Run the reference vectors and report mismatches.
//!
//! Diagnostics from the multiplier go to stderr through `tracing`; `-v` or
//! `"trace": true` in the config file enables them.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use halfmul_core::mul::observer::TRACE_TARGET;
use halfmul_core::{
    Config, ConfigError, Half, Multiplier, RoundingMode, TracingObserver, encode_with_rm,
};

/// Reference multiplication vectors: operands and expected product.
const REFERENCE_VECTORS: [(u16, u16, u16); 2] =
    [(0x4689, 0x0025, 0x00F2), (0x4489, 0x001D, 0x0084)];

#[derive(Parser, Debug)]
#[command(
    name = "halfmul",
    author,
    version,
    about = "IEEE 754 binary16 codec and multiplier",
    long_about = "Multiply, decode, and encode half-precision bit patterns.\n\nPatterns are hexadecimal (0x4689, 4689) or binary (0b0100011010001001).\n\nExamples:\n  halfmul mul 0x4689 0x0025\n  halfmul -v mul 0x4489 0x001d --rounding rtz\n  halfmul decode 0x7bff\n  halfmul encode -- -0.1\n  halfmul check"
)]
struct Cli {
    /// JSON configuration file (rounding mode, tracing).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print intermediate values of every multiplication to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Multiply two bit patterns.
    Mul {
        /// Left operand.
        a: Half,

        /// Right operand.
        b: Half,

        /// Rounding for generic products (overrides the config file).
        #[arg(long)]
        rounding: Option<RoundingMode>,
    },

    /// Decode a bit pattern to its value and category.
    Decode {
        /// Pattern to decode.
        pattern: Half,
    },

    /// Encode a decimal value (`inf`, `-inf`, and `NaN` accepted).
    Encode {
        /// Value to encode.
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Rounding applied to the fraction.
        #[arg(long, default_value_t = RoundingMode::Rtz)]
        rounding: RoundingMode,
    },

    /// Multiply the reference vectors and compare with the expected products.
    Check,
}

/// Errors surfaced to the user before any command runs.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    init_tracing(cli.verbose || config.trace);

    match cli.command {
        Commands::Mul { a, b, rounding } => {
            let rounding = rounding.unwrap_or(config.rounding);
            cmd_mul(a, b, rounding);
        }
        Commands::Decode { pattern } => cmd_decode(pattern),
        Commands::Encode { value, rounding } => cmd_encode(value, rounding),
        Commands::Check => {
            if !cmd_check(config.rounding) {
                process::exit(1);
            }
        }
    }
}

/// Loads the config file if one was given, otherwise the defaults.
fn load_config(path: Option<&Path>) -> Result<Config, CliError> {
    match path {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::default()),
    }
}

/// Installs a stderr subscriber.
///
/// With `verbose`, multiplier diagnostics are enabled at `debug`; otherwise
/// `RUST_LOG` decides, defaulting to warnings only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(format!("warn,{TRACE_TARGET}=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn multiplier(rounding: RoundingMode) -> Multiplier<TracingObserver> {
    Multiplier::new()
        .with_rounding(rounding)
        .with_observer(TracingObserver)
}

/// Multiplies two patterns and prints the product.
fn cmd_mul(a: Half, b: Half, rounding: RoundingMode) {
    let result = multiplier(rounding).multiply_half(a, b);
    println!("{a:#06x} * {b:#06x} = {result:#06x}");
    println!("  {result}");
}

/// Prints the diagnostic form and category of a pattern.
fn cmd_decode(pattern: Half) {
    println!("{pattern} [{}]", pattern.category());
}

/// Encodes a value and prints the resulting pattern.
fn cmd_encode(value: f64, rounding: RoundingMode) {
    let half = Half::from_bits(encode_with_rm(value, rounding));
    println!("{value} -> {half:#06x} ({rounding})");
    println!("  {half}");
}

/// Runs the reference vectors.
///
/// # Returns
///
/// `true` if every product matched its expected value.
fn cmd_check(rounding: RoundingMode) -> bool {
    let mul = multiplier(rounding);
    let mut failures = 0usize;

    for (i, (a, b, expected)) in REFERENCE_VECTORS.into_iter().enumerate() {
        let result = mul.multiply(a, b);
        let status = if result == expected { "ok" } else { "FAIL" };
        println!(
            "Test {}: {a:#06x} * {b:#06x} = {result:#06x} (expected: {expected:#06x}) {status}",
            i + 1
        );
        if result != expected {
            failures += 1;
        }
    }

    if failures > 0 {
        eprintln!(
            "{failures} of {} reference vectors failed ({rounding})",
            REFERENCE_VECTORS.len()
        );
    }
    failures == 0
}
