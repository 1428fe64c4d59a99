use anyhow::Context;
use clap::Parser;
use promptp::errors::ErrorHandler;
use promptp::logger::init_logging;
use promptp::structs::cli::Cli;
use promptp::workers::command_runner::CommandRunner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = CommandRunner::new();
    runner
        .run_command(cli.command)
        .map_err(|error| {
            ErrorHandler::handle_error(&error);
            error
        })
        .context("promptp command failed")
}
