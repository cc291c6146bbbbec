//! Provider listing command handler.

use anyhow::Result;
use serde_json::Value;

use crate::config::ConfigManager;
use crate::ui::Style;

/// Keys whose values are never printed.
const SECRET_KEYS: &[&str] = &["api_key"];

/// Prints configured providers to stdout.
///
/// If `specific_provider` is given, shows that provider's settings with
/// secrets masked. Otherwise lists all configured providers, marking the
/// current one.
pub fn print_providers(specific_provider: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    if config.providers.is_empty() {
        println!("No providers configured.");
        println!("Add providers to {}", manager.config_path().display());
        return Ok(());
    }

    let current = config.current_provider.as_str();

    if let Some(provider_name) = specific_provider {
        let Some(settings) = config.providers.get(provider_name) else {
            anyhow::bail!("Provider '{provider_name}' not found");
        };

        let marker = if provider_name == current {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        };
        println!("Provider: {}{marker}", Style::value(provider_name));

        if let Value::Object(fields) = settings {
            for (key, value) in fields {
                println!("  {} = {}", Style::label(key), render_field(key, value));
            }
        }
    } else {
        println!("{}", Style::header("Configured providers:"));
        println!();
        for name in config.providers.keys() {
            let marker = if name == current {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            };
            println!("  {}{marker}", Style::value(name));
        }
    }

    Ok(())
}

fn render_field(key: &str, value: &Value) -> String {
    if SECRET_KEYS.contains(&key) {
        return "(set)".to_string();
    }
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
