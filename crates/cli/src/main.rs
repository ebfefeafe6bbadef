use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use ctestgen::commands::{detect_command, generate_command, ExitCode};

/// Finds C functions without unit tests and generates Unity test stubs.
///
/// This CLI is a thin wrapper around `ctestgen-core` (exposed in code as
/// `ctestgen_core`). Both commands re-run the same extraction and coverage
/// correlation.
#[derive(Parser, Debug)]
#[command(
    name = "ctestgen",
    version,
    about = "Find untested C functions and generate test stubs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report functions in the source tree that no test appears to cover.
    ///
    /// A function counts as tested when its name is a substring of a `test_*`
    /// identifier in the test tree, or the other way round. The match is loose
    /// on purpose; expect some false positives.
    ///
    /// Source files whose path below the source directory contains `test` are
    /// skipped. Directories above it are not checked, so a checkout under
    /// `~/tests/` is still scanned.
    ///
    /// Exits with status 1 when untested public functions remain.
    Detect {
        /// Project root directory. Defaults to the current working directory.
        #[arg(default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Generate `test_<module>_auto.c` stub files for untested functions.
    ///
    /// One file is written per source file into the test directory, with
    /// valid-input, edge-case, NULL-pointer and return-value stubs as the
    /// function's signature calls for.
    Generate {
        /// Project root directory. Defaults to the current working directory.
        #[arg(default_value = ".")]
        root: String,

        /// Print the files that would be written without writing them.
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CTESTGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ctestgen: {e:#}");
            ExitCode::Error
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Detect { root, json }) => detect_command(&root, json),
        Some(Command::Generate { root, dry_run }) => {
            generate_command(&root, dry_run)?;
            Ok(ExitCode::Success)
        }
    }
}
