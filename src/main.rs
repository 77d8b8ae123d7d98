use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Encrypt with, or break, classical substitution ciphers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt(cmd::encrypt::EncryptArgs),
    #[command(name = "break")]
    Break(cmd::crack::BreakArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 quadbreak {}", env!("CARGO_PKG_VERSION"));

    let outcome = match cli.command {
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Break(args) => {
            // Flags inside the subcommand live in its own matches, not the root.
            let sub_matches = matches.subcommand_matches("break").unwrap_or(&matches);
            cmd::crack::run(args, sub_matches)
        }
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
