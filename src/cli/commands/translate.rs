use anyhow::Result;
use futures_util::StreamExt;
use std::io::{self, Write};

use crate::clipboard;
use crate::config::ConfigManager;
use crate::providers::{Translator, create_translator};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub provider: Option<String>,
    pub no_copy: bool,
}

/// Runs the translate pipeline: config, provider, stream, clipboard.
///
/// Configuration and provider-resolution errors are propagated (the process
/// exits non-zero). A failed translation is reported to the user and the
/// process still exits successfully, as does a failed clipboard write.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let prompt_text = options.text.join(" ");

    let manager = ConfigManager::new();
    let mut config = manager.load()?;

    if let Some(provider) = options.provider {
        config.current_provider = provider;
    }

    let translator = create_translator(&config)?;

    let Some(translated) = run_translation(translator.as_ref(), &prompt_text).await? else {
        return Ok(());
    };

    if options.no_copy || translated.is_empty() {
        return Ok(());
    }

    match clipboard::copy(&translated) {
        Ok(()) => eprintln!("{}", Style::success("✓ Copied to clipboard!")),
        Err(e) => eprintln!("{}", Style::error(format!("Failed to copy to clipboard: {e}"))),
    }

    Ok(())
}

/// Streams one translation, echoing fragments as they arrive.
///
/// Returns `Ok(None)` when the translation failed; the error has already
/// been reported to the user. `Err` is reserved for local I/O failures.
async fn run_translation(translator: &dyn Translator, text: &str) -> Result<Option<String>> {
    let spinner = Spinner::new(&format!("Translating ({})...", translator.name()));

    let mut stream = match translator.translate(text).await {
        Ok(stream) => stream,
        Err(e) => {
            spinner.stop();
            eprintln!("{}", Style::error(format!("Error: {e}")));
            return Ok(None);
        }
    };

    let mut translated = String::new();
    let mut first_fragment = true;

    while let Some(fragment_result) = stream.next().await {
        let fragment = match fragment_result {
            Ok(f) => f,
            Err(e) => {
                spinner.stop();
                if !first_fragment {
                    println!();
                }
                eprintln!("{}", Style::error(format!("Error: {e}")));
                return Ok(None);
            }
        };

        if first_fragment {
            spinner.stop();
            eprintln!("{}", Style::header("Translated:"));
            first_fragment = false;
        }

        print!("{fragment}");
        io::stdout().flush()?;
        translated.push_str(&fragment);
    }

    spinner.stop();

    if !translated.is_empty() {
        println!();
    }

    Ok(Some(translated))
}
