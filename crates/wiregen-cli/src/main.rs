//! `wiregen` command-line front end.
//!
//! Thin shell over the library pipeline: read the manifest, run the
//! generator, write the source. All policy lives in the library
//! crates; this binary only does argument parsing and IO.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error as ThisError;
use wiregen::engine::trace::{NullTraceSink, ResolveTraceEvent, ResolveTraceSink};

///
/// Cli
///

#[derive(Debug, Parser)]
#[command(name = "wiregen", version, about = "Schema-first dependency-wiring generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate resolver source for a target aggregate
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the JSON catalogue manifest
    #[arg(long)]
    manifest: PathBuf,

    /// Package path of the library holding the target aggregate
    #[arg(long)]
    library: String,

    /// Identifier of the target aggregate struct
    #[arg(long)]
    target: String,

    /// Write the generated source here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report skipped interfaces and derivation progress on stderr
    #[arg(long)]
    verbose: bool,
}

///
/// CliError
///

#[derive(Debug, ThisError)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    ReadManifest {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Pipeline(#[from] wiregen::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Generate(args) => generate(args),
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let manifest =
        std::fs::read_to_string(&args.manifest).map_err(|source| CliError::ReadManifest {
            path: args.manifest.display().to_string(),
            source,
        })?;

    let sink: &dyn ResolveTraceSink = if args.verbose {
        &StderrSink
    } else {
        &NullTraceSink
    };
    let source = wiregen::generate_source(&manifest, &args.library, &args.target, sink)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, source).map_err(|source| CliError::WriteOutput {
                path: path.display().to_string(),
                source,
            })?;
        }
        None => print!("{source}"),
    }

    Ok(())
}

///
/// StderrSink
///

struct StderrSink;

impl ResolveTraceSink for StderrSink {
    fn on_event(&self, event: ResolveTraceEvent) {
        match event {
            ResolveTraceEvent::BindingChosen { iface, func } => {
                eprintln!("bound {iface} -> {func}");
            }
            ResolveTraceEvent::DerivationRound { round, derived } => {
                eprintln!("round {round}: derived {derived}");
            }
            ResolveTraceEvent::FieldAmbiguity {
                required,
                chosen,
                also,
            } => {
                eprintln!(
                    "warning: {required} matched fields {chosen} and {}; using {chosen}",
                    also.join(", ")
                );
            }
            ResolveTraceEvent::InterfaceSkipped { iface, reason } => {
                eprintln!("skipped {iface}: {reason}");
            }
            ResolveTraceEvent::PrivateDerived { iface, func } => {
                eprintln!("derived {iface} via {func}");
            }
            ResolveTraceEvent::PublicResolved { func } => {
                eprintln!("resolved {func}");
            }
            ResolveTraceEvent::PublicSkipped { func, detail } => {
                eprintln!("skipped {func}: {detail}");
            }
        }
    }
}
