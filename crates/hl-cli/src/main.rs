//! CLI frontend for the huangli day-conclusion engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hl",
    about = "hl: grade a day and render its 宜/忌 conclusion from an almanac snapshot",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log rule decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dated narrative for a snapshot
    Render {
        /// Almanac snapshot JSON file, or `-` for stdin
        input: PathBuf,
    },

    /// Print the structured conclusion
    Show {
        /// Almanac snapshot JSON file, or `-` for stdin
        input: PathBuf,

        /// Output format: text, json, table
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Print only the grade
    Grade {
        /// Almanac snapshot JSON file, or `-` for stdin
        input: PathBuf,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render { input } => commands::render::run(&input),
        Commands::Show { input, format } => commands::show::run(&input, &format),
        Commands::Grade { input, no_color } => commands::grade::run(&input, no_color),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
