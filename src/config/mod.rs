//! Configuration layer for the discord-hook binary.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! The library's message and webhook types never read configuration
//! themselves; this layer only assembles their inputs.
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The webhook URL has no default and must come from the CLI or the file.
//!
//! # Message Assembly
//!
//! Message text and embed content come from the CLI only. The file supplies
//! a default identity (`[message]`) and embed styling (`[embed]`); the
//! styling is applied only when at least one embed option is given, so a
//! plain text message never grows an empty embed.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod validated_tests;

pub use self::cli::{Cli, Command};
pub use self::error::{ConfigError, field};
pub use self::toml::{TomlConfig, default_config_template};
pub use self::validated::{ValidatedConfig, write_default_config};
