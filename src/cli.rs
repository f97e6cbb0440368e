use crate::config::FlagStyle;
use clap::{Parser, Subcommand};

/// Command-line interface definition.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Save the preferred flag style for rendered commands.
    SetStyle {
        /// The style to be saved.
        #[arg(value_enum)]
        style: FlagStyle,
    },
    /// Translate a curl command line into an HTTPie invocation.
    Translate {
        /// Flag style for this run (overrides the saved preference).
        #[arg(short, long, value_enum)]
        style: Option<FlagStyle>,

        /// The curl command line; the leading `curl` may be included or omitted.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
}
