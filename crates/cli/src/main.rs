//! Slotstack CLI
//!
//! Runs the built-in demos, executes TOML scenario files against a
//! container, and lists the supported element kinds.

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use slotstack_cli::{Scenario, demo};
use slotstack_core::{Composite, Kind};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "slotstack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fixed-capacity tagged containers with array and stack views", long_about = None)]
struct Cli {
    /// Log container operations at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in nested container and list demos
    Demo,

    /// Execute a TOML scenario file
    Run {
        /// Scenario file
        scenario: PathBuf,
    },

    /// List the supported element kinds and their tags
    Kinds,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let fallback = if verbose {
        "slotstack_core=debug,slotstack_cli=debug"
    } else {
        "slotstack_core=info,slotstack_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Demo => {
            if let Err(e) = demo::run(&mut io::stdout().lock()) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Commands::Run { scenario } => run_scenario(scenario),
        Commands::Kinds => {
            for kind in Kind::ALL {
                println!("{:>2}  {}", kind.tag(), kind);
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "slotstack", &mut io::stdout());
        }
    }
}

fn run_scenario(path: PathBuf) {
    let scenario = match Scenario::load(&path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    match scenario.run(&mut io::stdout().lock()) {
        Ok(container) => container.deep_free(),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
