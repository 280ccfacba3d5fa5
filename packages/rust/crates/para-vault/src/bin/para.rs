//! para CLI: generate PARA test notes or verify note placement in a vault.
//!
//! Logging: set `RUST_LOG=para_vault=debug` (or `info`, `warn`) to see library
//! logs on stderr. The report itself always goes to stdout.
//!
//! Exit codes: `0` on success or a clean vault, `1` on usage errors, I/O
//! failures, or when misplaced notes were found.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use para_vault::generator::config::DEFAULT_NUM_FILES;
use para_vault::{GeneratorConfig, NoteGenerator, VaultVerifier};

#[derive(Parser, Debug)]
#[command(
    name = "para",
    version,
    about = "PARA vault tools: generate tagged test notes and verify note placement",
    arg_required_else_help = true
)]
struct Cli {
    /// Enable debug logging on stderr (overridden by `RUST_LOG`).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write synthetic notes with random tags and frontmatter.
    Generate {
        /// Directory to write notes into (created if missing).
        target_directory: PathBuf,
        /// Number of notes to write.
        #[arg(long, short = 'n', default_value_t = DEFAULT_NUM_FILES)]
        count: usize,
        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check that notes live in the PARA directory their tags point to.
    Verify {
        /// Vault root containing projects/, areas/, resources/, archives/.
        vault_path: PathBuf,
        /// Report format.
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            // help and version are not failures
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    // RUST_LOG overrides; --verbose => debug; else warn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "para_vault=debug"
        } else {
            "para_vault=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Generate {
            target_directory,
            count,
            seed,
        } => {
            let mut config = GeneratorConfig::new().with_num_files(count);
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let stdout = io::stdout();
            let mut out = stdout.lock();
            let notes = NoteGenerator::new(config)
                .generate_into(&target_directory, &mut out)
                .with_context(|| {
                    format!("failed to generate notes in {}", target_directory.display())
                })?;
            writeln!(
                out,
                "\nGenerated {} test files in {}",
                notes.len(),
                target_directory.display()
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { vault_path, format } => {
            let report = VaultVerifier::new(vault_path).verify()?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            match format {
                OutputFormat::Text => report.render_text(&mut out)?,
                OutputFormat::Json => writeln!(out, "{}", report.to_json()?)?,
            }

            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
