use crate::check::{run_batch, run_fintech_check, run_product_check, BatchArgs, FintechArgs, ProductArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use loan_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Checker",
    about = "Run mock consumer loan eligibility checks from the command line or over HTTP",
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
    /// Evaluate a single applicant
    Check {
        #[command(subcommand)]
        command: CheckCommand,
    },
    /// Score every fintech profile in a CSV export
    Batch(BatchArgs),
    /// Walk through sample applicants for every evaluator
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CheckCommand {
    /// Six point fintech app loan check
    Fintech(FintechArgs),
    /// Product rule check from a JSON application file
    Product(ProductArgs),
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
        Command::Check {
            command: CheckCommand::Fintech(args),
        } => run_fintech_check(args),
        Command::Check {
            command: CheckCommand::Product(args),
        } => run_product_check(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
