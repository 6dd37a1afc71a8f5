use crate::commands::{run_resolve, run_roster, ResolveArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ops_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Ops Desk",
    about = "Serve and query operator identity for the agent workflow ops desk",
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
    /// Resolve display names for one or more email addresses
    Resolve(ResolveArgs),
    /// Resolve every operator in a roster CSV export
    Roster(RosterArgs),
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
        Command::Resolve(args) => run_resolve(args),
        Command::Roster(args) => run_roster(args),
    }
}
