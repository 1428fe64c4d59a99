use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "promptp")]
#[clap(about = "Rule-based prompt generation, enhancement and rewriting", long_about = None)]
pub struct Cli {
    /// Show debug logging from the engine
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
