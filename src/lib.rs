//! # atrans - Command-line Translator
//!
//! `atrans` translates its arguments into English using a configured
//! provider, prints the result as it arrives, and copies it to the system
//! clipboard.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate a phrase (arguments are joined with spaces)
//! atrans 你好世界
//!
//! # Pick a provider for this invocation only
//! atrans --provider baidu 今天天气不错
//!
//! # List configured providers
//! atrans providers
//! ```
//!
//! ## Configuration
//!
//! Settings live in `~/.config/atrans/config.json`:
//!
//! ```json
//! {
//!   "current_provider": "qwen",
//!   "providers": {
//!     "qwen": {
//!       "api_key": "sk-...",
//!       "base_url": "https://dashscope.aliyuncs.com/compatible-mode/v1",
//!       "model": "qwen-plus"
//!     },
//!     "baidu": {
//!       "appid": "20240101000000000",
//!       "api_key": "...",
//!       "model_type": "llm"
//!     }
//!   }
//! }
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Best-effort system clipboard access.
pub mod clipboard;

/// Configuration file management and provider settings.
pub mod config;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Translation providers and the `Translator` capability.
pub mod providers;

/// Terminal UI components (spinner, colors).
pub mod ui;
