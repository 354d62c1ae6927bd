use crate::listings::{run_properties_list, run_properties_show, ListArgs, ShowArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use realty_leads::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Realty Leads",
    about = "Serve the agency's lead intake API and inspect the property catalogue",
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
    /// Query the static property catalogue
    Properties {
        #[command(subcommand)]
        command: PropertiesCommand,
    },
}

#[derive(Subcommand, Debug)]
enum PropertiesCommand {
    /// List listings matching the given filters
    List(ListArgs),
    /// Print a single listing by identifier
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the file lead submissions are appended to
    #[arg(long)]
    pub(crate) lead_log: Option<PathBuf>,
    /// Override the file valuation requests are appended to
    #[arg(long)]
    pub(crate) valuation_log: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Properties {
            command: PropertiesCommand::List(args),
        } => run_properties_list(args),
        Command::Properties {
            command: PropertiesCommand::Show(args),
        } => run_properties_show(args),
    }
}
