pub mod arg;
use arg::ProbeArgs;
use clap::Parser;

/// Print the Windows theme background color, a proxy for the taskbar color.
///
/// Only the flags below are accepted; any positional argument is a usage error.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub probe: ProbeArgs,
}
