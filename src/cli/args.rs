use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "atrans")]
#[command(about = "Translate text to English and copy it to the clipboard")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    /// Text to translate (all arguments are joined with spaces)
    pub text: Vec<String>,

    /// Provider to use for this invocation (overrides `current_provider`)
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Skip copying the result to the clipboard
    #[arg(long)]
    pub no_copy: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured translation providers
    Providers {
        /// Show details for a single provider
        provider: Option<String>,
    },
}
