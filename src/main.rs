use clap::Parser;
use dify_dsl_generator::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => cli::generate::run(args).await,
        Command::Request(args) => cli::request::run(args).await,
    }
}
