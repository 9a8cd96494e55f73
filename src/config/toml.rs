//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Webhook endpoint configuration section
    #[serde(default)]
    pub webhook: WebhookSection,

    /// Default message identity
    #[serde(default)]
    pub message: MessageSection,

    /// Default embed styling
    #[serde(default)]
    pub embed: EmbedSection,
}

/// Webhook endpoint configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookSection {
    /// Webhook URL
    pub url: Option<String>,

    /// User-Agent header value
    pub user_agent: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Default message identity section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageSection {
    /// Display name override
    pub username: Option<String>,

    /// Avatar URL override
    pub avatar_url: Option<String>,
}

/// Default embed styling section.
///
/// Applied only when the command line asks for an embed.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmbedSection {
    /// Embed color as '#RRGGBB', '0xRRGGBB' or a decimal value
    pub color: Option<String>,

    /// Footer text
    pub footer: Option<String>,

    /// Footer icon URL
    pub footer_icon: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| parse_error(&e, content))
    }
}

/// Converts a TOML error into a [`ConfigError`] that never quotes the file.
fn parse_error(error: &toml::de::Error, content: &str) -> ConfigError {
    let line = error
        .span()
        .and_then(|span| content.get(..span.start))
        .map(|before| before.matches('\n').count() + 1);

    ConfigError::TomlParse {
        message: strip_quoted(error.message()),
        line,
    }
}

/// Removes double-quoted values from a parser message.
fn strip_quoted(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut quoted = false;

    for c in message.chars() {
        if c == '"' {
            if !quoted {
                out.push_str("\"...\"");
            }
            quoted = !quoted;
        } else if !quoted {
            out.push(c);
        }
    }

    out.trim().to_string()
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r##"# discord-hook configuration file

[webhook]
# Webhook URL (required). Treat it like a password: it contains the webhook token.
# url = "https://discord.com/api/webhooks/<id>/<token>"

# User-Agent header (default: discord-hook/<version>)
# user_agent = "my-app/1.0"

# Request timeout in seconds (default: 10)
timeout = 10

[message]
# Display name and avatar overrides for every message
# username = "Build Bot"
# avatar_url = "https://example.com/avatar.png"

[embed]
# Defaults applied when an embed is sent
# color = "#5865F2"
# footer = "sent by discord-hook"
# footer_icon = "https://example.com/icon.png"
"##
    .to_string()
}
