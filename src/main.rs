use anyhow::Result;
use clap::Parser;

use atrans::cli::commands::{providers, translate};
use atrans::cli::{Args, Command};
use atrans::ui::Style;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Providers { provider }) => {
            providers::print_providers(provider.as_deref())?;
        }
        None => {
            if args.text.is_empty() {
                println!("{}", Style::warning("Usage: atrans <text to translate>"));
                println!("{}", Style::hint("Run 'atrans --help' for more options."));
                return Ok(());
            }

            let options = translate::TranslateOptions {
                text: args.text,
                provider: args.provider,
                no_copy: args.no_copy,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
