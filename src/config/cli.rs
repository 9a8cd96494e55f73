//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// discord-hook: post a message to a Discord webhook
///
/// Builds a message with an optional embed from the command line and
/// delivers it, printing the status and rate-limit state it gets back.
#[derive(Debug, Parser)]
#[command(name = "discord-hook")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Webhook URL (required for sending)
    #[arg(long)]
    pub url: Option<String>,

    /// User-Agent header sent with each request
    #[arg(long = "user-agent")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Plain text message body
    #[arg(long)]
    pub content: Option<String>,

    /// Display name override for this message
    #[arg(long)]
    pub username: Option<String>,

    /// Avatar URL override for this message
    #[arg(long = "avatar-url")]
    pub avatar_url: Option<String>,

    /// Read the message aloud (text-to-speech)
    #[arg(long)]
    pub tts: bool,

    /// Embed title
    #[arg(long)]
    pub title: Option<String>,

    /// Link target for the embed title
    #[arg(long = "embed-url")]
    pub embed_url: Option<String>,

    /// Embed description
    #[arg(long)]
    pub description: Option<String>,

    /// Embed color as '#RRGGBB', '0xRRGGBB' or a decimal value
    #[arg(long)]
    pub color: Option<String>,

    /// Embed author name
    #[arg(long)]
    pub author: Option<String>,

    /// Embed author link
    #[arg(long = "author-url")]
    pub author_url: Option<String>,

    /// Embed author icon URL
    #[arg(long = "author-icon")]
    pub author_icon: Option<String>,

    /// Embed field in 'Name=Value' format (can be specified multiple times)
    #[arg(long = "field", value_name = "NAME=VALUE")]
    pub fields: Vec<String>,

    /// Display embed fields inline
    #[arg(long = "inline-fields")]
    pub inline_fields: bool,

    /// Embed thumbnail URL
    #[arg(long)]
    pub thumbnail: Option<String>,

    /// Embed image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Embed footer text
    #[arg(long)]
    pub footer: Option<String>,

    /// Embed footer icon URL
    #[arg(long = "footer-icon")]
    pub footer_icon: Option<String>,

    /// Embed timestamp: 'now' or an RFC 3339 date-time (offset-less values are UTC)
    #[arg(long)]
    pub timestamp: Option<String>,

    /// Ignore delivery failures (exit successfully even if the send fails)
    #[arg(long = "best-effort")]
    pub best_effort: bool,

    /// Print the encoded message instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for discord-hook
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "discord-hook.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns true if any embed option was given.
    #[must_use]
    pub fn has_embed(&self) -> bool {
        self.title.is_some()
            || self.embed_url.is_some()
            || self.description.is_some()
            || self.color.is_some()
            || self.author.is_some()
            || !self.fields.is_empty()
            || self.thumbnail.is_some()
            || self.image.is_some()
            || self.footer.is_some()
            || self.timestamp.is_some()
    }
}
