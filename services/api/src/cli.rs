use crate::demo::{run_batch, run_demo, run_screen, BatchArgs, DemoArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esas_triage::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESAS Triage",
    about = "Screen ESAS symptom scores and serve triage recommendations",
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
    /// Evaluate a single assessment given on the command line
    Screen(ScreenArgs),
    /// Screen every row of a CSV export
    Batch(BatchArgs),
    /// Run the reference screening scenarios
    Demo(DemoArgs),
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
        Command::Screen(args) => run_screen(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
