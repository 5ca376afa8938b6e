//! FloatChat CLI - ask questions about ARGO ocean profile data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "floatchat",
    version,
    about = "Oceanographic question answering over ARGO profile data"
)]
struct Cli {
    #[command(subcommand)]
    command: floatchat_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    floatchat_cmd::run(cli.command).await
}
