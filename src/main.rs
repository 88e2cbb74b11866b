use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use loomviz::commands::{check, layout, serve, show};

#[derive(Parser)]
#[command(name = "loomviz")]
#[command(about = "Loom plan visualiser: dependency graph API and CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 3001)]
        port: u16,
    },

    /// Validate a plan file against the plan schema
    Check {
        /// Path to the plan JSON file
        plan_path: String,

        /// Emit machine-readable JSON instead of human output
        #[arg(long)]
        json: bool,
    },

    /// Print the dependency graph as wave columns
    Show {
        /// Path to the plan JSON file
        plan_path: String,
    },

    /// Print the node positions computed by the wave layout
    Layout {
        /// Path to the plan JSON file
        plan_path: String,

        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => serve::execute(host, port),
        Commands::Check { plan_path, json } => check::execute(plan_path, json),
        Commands::Show { plan_path } => show::execute(plan_path),
        Commands::Layout { plan_path, json } => layout::execute(plan_path, json),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "loomviz", &mut std::io::stdout());
            Ok(())
        }
    }
}
