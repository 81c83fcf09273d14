use crate::commands::{run_assess, run_qualify, run_questions, AssessArgs, QualifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esg_navigator::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Navigator",
    about = "Serve and exercise the ESG Navigator lead qualification and assessment scoring",
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
    /// Score a sales lead and print the rule breakdown
    Qualify(QualifyArgs),
    /// Score a ten-question assessment from the command line
    Assess(AssessArgs),
    /// List the ten-question assessment bank
    Questions,
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
        Command::Qualify(args) => run_qualify(args),
        Command::Assess(args) => run_assess(args),
        Command::Questions => run_questions(),
    }
}
