//! Subcommand implementations.

/// Provider listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;
