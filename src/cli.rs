use clap::{Parser, Subcommand};

/// Walk through building, reading and destructuring fixed tuples.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build tuples with stated and with deduced slot types.
    Create,

    /// Change a slot by position, print each slot, then destructure.
    Access,

    /// Split a number of seconds into hours, minutes and seconds.
    Decompose {
        /// The number of seconds to split.
        #[arg(long, default_value_t = 8850)]
        seconds: u32,
    },
}
