mod ansi;
mod args;
mod commands;
mod config;
mod error;
mod filemeta;
mod linter;
mod pixels;
mod rules;
mod ui;

use args::{Args, Command};
use clap::Parser;
use linter::RunMode;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    let mode = RunMode::from_env();

    let result = match &args.command {
        Command::Lint(lint_args) => commands::lint(&args, lint_args, mode).await,
        Command::Rules => commands::rules(&args, mode).await.map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(2);
        }
    }
}
