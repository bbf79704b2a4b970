use clap::{Parser, Subcommand};
use tsmake::{AppError, BuildOptions};

#[derive(Parser)]
#[command(name = "tsmake")]
#[command(version)]
#[command(
    about = "Compile TypeScript sources and stage static assets into a distribution directory",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default tsmake.toml into the current directory
    #[clap(visible_alias = "i")]
    Init,
    /// Compile sources and copy static assets into the output directory
    #[clap(visible_alias = "b")]
    Build {
        /// Print the compiler invocation without executing it
        #[arg(long)]
        dry_run: bool,
        /// Copy static assets even when the compiler reports errors
        #[arg(short = 'k', long)]
        keep_going: bool,
    },
    /// Remove the output directory
    #[clap(visible_alias = "c")]
    Clean,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => tsmake::init(),
        Commands::Build { dry_run, keep_going } => {
            tsmake::build(BuildOptions { dry_run, keep_going }).map(|_| ())
        }
        Commands::Clean => tsmake::clean(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
