use clap::Args;
use crate::enums::prompt_length::PromptLength;
use crate::enums::prompt_type::PromptType;

/// Flags shared by generate, enhance and rewrite. Unset values fall back to the config file.
#[derive(Args, Debug, Clone)]
pub struct PromptArgs {
    pub input: String,

    #[clap(short = 't', long = "type", value_enum)]
    pub prompt_type: Option<PromptType>,

    #[clap(short, long)]
    pub category: Option<String>,

    #[clap(long)]
    pub tone: Option<String>,

    #[clap(short, long)]
    pub format: Option<String>,

    #[clap(short, long, value_enum)]
    pub length: Option<PromptLength>,

    #[clap(short, long)]
    pub goal: Option<String>,

    #[clap(long)]
    pub seed: Option<u64>,

    #[clap(long)]
    pub json: bool,
}
