mod cli;
mod error;
mod eval;
mod slack;
mod syntax;

use std::process;

use clap::Parser;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Serve { addr } => slack::server::run(addr).await,
        Command::Eval { text } => match eval::evaluate(&text.join(" ")) {
            Ok(evaluation) => {
                println!("{} = {}", evaluation.parsed_expression, evaluation.result);
                Ok(())
            }
            Err(why) => {
                eprintln!("{why}");
                process::exit(1);
            }
        },
    }
}
