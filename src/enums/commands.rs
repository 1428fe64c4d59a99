use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::compose_mode::ComposeMode;
use crate::enums::prompt_type::PromptType;
use crate::structs::prompt_args::PromptArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand a short seed into a full prompt
    Generate {
        #[clap(flatten)]
        args: PromptArgs,
    },
    /// Add structure and detail to an existing prompt
    Enhance {
        #[clap(flatten)]
        args: PromptArgs,
    },
    /// Restate a prompt with a different tone, format or length
    Rewrite {
        #[clap(flatten)]
        args: PromptArgs,
    },
    /// Score a prompt and list what it is missing
    Analyze {
        input: String,
        #[clap(short = 't', long = "type", value_enum)]
        prompt_type: Option<PromptType>,
        #[clap(long)]
        json: bool,
    },
    /// Run one mode over every non-empty line of a file
    Batch {
        #[clap(long)]
        file: PathBuf,
        #[clap(short, long, value_enum, default_value_t = ComposeMode::Enhance)]
        mode: ComposeMode,
        #[clap(short = 't', long = "type", value_enum)]
        prompt_type: Option<PromptType>,
        #[clap(long)]
        seed: Option<u64>,
        #[clap(long)]
        json: bool,
    },
    /// List categories, tones and formats
    Catalog {
        #[clap(short = 't', long = "type", value_enum)]
        prompt_type: Option<PromptType>,
    },
    /// Write a sample config file
    Init,
    /// Check the config file for invalid values
    Validate,
}
