//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads a PLA file, minimizes every output and writes the result as a PLA
//! file with one row per selected implicant.

use clap::error::ErrorKind;
use clap::Parser;
use quine_logic::{Minimizable, MinimizerConfig, PLAReader, PLAWriter, PLA};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(about = "Quine-McCluskey two-level logic minimizer", long_about = None)]
#[command(version)]
struct Args {
    /// Input PLA file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output PLA file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Print per-output statistics
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Print each output as a sum of products
    #[arg(short = 'e', long = "expressions")]
    expressions: bool,

    /// Minimize outputs in parallel
    #[arg(long = "parallel")]
    parallel: bool,

    /// Skip the final coverage check
    #[arg(long = "no-verify")]
    no_verify: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not initialise logging: {}", e);
    }
}

/// Whether `error` comes from giving something other than two file names
fn is_wrong_file_count(error: &clap::Error) -> bool {
    let positional = env::args_os()
        .skip(1)
        .filter(|arg| !arg.to_string_lossy().starts_with('-'))
        .count();
    matches!(
        error.kind(),
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
    ) && positional != 2
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_wrong_file_count(&e) => {
            // Print usage and do nothing
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => e.exit(),
    };

    init_logging(args.verbose);

    let config = MinimizerConfig {
        parallel: args.parallel,
        verify: !args.no_verify,
    };

    let pla = match PLA::from_pla_file(&args.input) {
        Ok(pla) => pla,
        Err(e) => {
            eprintln!("Error reading PLA file '{}': {}", args.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let minimized = match pla.minimize_with_config(&config) {
        Ok(minimized) => minimized,
        Err(e) => {
            eprintln!("Error minimizing '{}': {}", args.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if args.summary {
        eprintln!(
            "{} inputs, {} outputs, {} terms read",
            pla.num_inputs(),
            pla.num_outputs(),
            pla.terms().len()
        );
        for output in minimized.outputs() {
            eprintln!(
                "  output {}: {} on-set, {} don't-care, {} primes, {} selected ({} essential)",
                output.index(),
                output.on_set_len(),
                output.dont_care_len(),
                output.num_primes(),
                output.cover().len(),
                output.cover().essential_count()
            );
        }
        eprintln!("  total implicants: {}", minimized.num_implicants());
    }

    if args.expressions {
        for equation in minimized.equations() {
            println!("{}", equation);
        }
    }

    if let Err(e) = minimized.to_pla_file(&args.output) {
        eprintln!(
            "Error writing output file '{}': {}",
            args.output.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    if args.summary {
        eprintln!("Wrote output to: {}", args.output.display());
    }
    ExitCode::SUCCESS
}
