use clap::ArgAction;

use crate::color::ColorCategory;

#[derive(Debug, Clone, clap::Args)]
pub struct ProbeArgs {
    #[clap(
        long,
        short = 'c',
        value_enum,
        default_value_t = ColorCategory::Background,
        help = "Theme color to read"
    )]
    pub category: ColorCategory,
    #[clap(long, short = 'v', action = ArgAction::Count, help = "Log each step to stderr (-vv for trace)")]
    pub verbose: u8,
}
