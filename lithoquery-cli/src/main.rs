//! lithoquery CLI - Command-line interface
//!
//! This binary provides a command-line interface to the lithoquery library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::nodes::NodesArgs;
use commands::query::QueryArgs;

#[derive(Parser)]
#[command(name = "lithoquery")]
#[command(version = lithoquery::VERSION)]
#[command(about = "Query the LITHO1.0 earth model at a location", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interpolated layer profile, or a point sample with --depth
    Query(QueryArgs),

    /// Nearest tessellation nodes and barycentric weights
    Nodes(NodesArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query(args) => commands::query::run(args, cli.debug),
        Commands::Nodes(args) => commands::nodes::run(args, cli.debug),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        e.exit();
    }
}
