mod commands;
mod format;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{dir::DirArgs, print::PrintArgs, proto::ProtoArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "genproto",
    about = "Generate protobuf definitions from warehouse table schemas"
)]
struct Cli {
    /// Log filter (e.g. `debug`, `bqproto=trace`); falls back to RUST_LOG, then `info`
    #[arg(long, global = true, env = "GENPROTO_LOG")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a proto file from one JSON schema file
    Proto(ProtoArgs),
    /// Generate proto files for every JSON schema in a directory
    Dir(DirArgs),
    /// Print the generated proto document to stdout
    Print(PrintArgs),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if let Err(err) = run(cli.command) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Proto(args) => args.run(),
        Commands::Dir(args) => args.run(),
        Commands::Print(args) => args.run(),
    }
}

fn init_tracing(level: Option<&str>) {
    let mut rejected = None;
    let explicit = level.and_then(|level| match EnvFilter::try_new(level) {
        Ok(filter) => Some(filter),
        Err(err) => {
            rejected = Some((level, err));
            None
        }
    });
    let filter = explicit
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Some((level, err)) = rejected {
        tracing::warn!(filter = %level, error = %err, "ignoring invalid log filter");
    }
}
