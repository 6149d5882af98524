use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contextscope::constants::context::DEFAULT_CONTEXT_DIR;
use contextscope::constants::scoring::DEFAULT_THRESHOLD;

#[derive(Parser)]
#[command(name = "contextscope")]
#[command(
    version,
    about = "Repository profiler and context-graph verifier for AI coding assistants"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the technology stack and source conventions of a project
    Profile {
        #[arg(help = "Project root (defaults to the current directory)")]
        path: Option<PathBuf>,
        #[arg(long, help = "Primary source root relative to the project root")]
        source_root: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Verify the context graph against the project tree
    Verify {
        #[arg(help = "Project root (defaults to the current directory)")]
        path: Option<PathBuf>,
        #[arg(
            long,
            default_value = DEFAULT_CONTEXT_DIR,
            help = "Documentation root relative to the project root"
        )]
        context_dir: String,
        #[arg(long, help = "Write a JSON report to this path")]
        report: Option<PathBuf>,
        #[arg(
            long,
            default_value_t = DEFAULT_THRESHOLD,
            help = "Fail when completeness falls below this score"
        )]
        threshold: u8,
        #[arg(long, help = "Only print findings at this severity or higher")]
        severity: Option<String>,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Profile {
            path,
            source_root,
            format,
        } => {
            contextscope::cli::commands::profile::run(path, source_root.as_deref(), &format)?;
        }
        Commands::Verify {
            path,
            context_dir,
            report,
            threshold,
            severity,
        } => {
            contextscope::cli::commands::verify::run(
                contextscope::cli::commands::verify::VerifyOptions {
                    path,
                    context_dir,
                    report,
                    threshold,
                    severity,
                },
            )?;
        }
    }

    Ok(())
}
