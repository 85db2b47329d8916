use crate::lookup::{run_lookup, LookupArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use visa_check::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Visa Requirement Checker",
    about = "Serve or query visa requirements between two countries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Look up a single passport/destination pair and print the JSON answer
    Check(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_lookup(args).await,
    }
}
