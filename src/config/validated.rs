//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use http::HeaderValue;
use url::Url;

use crate::message::{Author, Color, Embed, Field, Footer, Message, Timestamp};

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Webhook URL (required)
    pub url: Url,

    /// User-Agent header value
    pub user_agent: HeaderValue,

    /// Request timeout
    pub timeout: Duration,

    /// The message to deliver
    pub message: Message,

    /// Ignore delivery failures
    pub best_effort: bool,

    /// Dry-run mode (print the payload without sending)
    pub dry_run: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    /// Shows only the scheme and host of the webhook URL.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ endpoint: {}://{}/<redacted>, user_agent: {}, timeout: {}s, embeds: {}, \
             best_effort: {}, dry_run: {} }}",
            self.url.scheme(),
            self.url.host_str().unwrap_or("-"),
            self.user_agent.to_str().unwrap_or("<binary>"),
            self.timeout.as_secs(),
            self.message.embeds().len(),
            self.best_effort,
            self.dry_run,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The webhook URL is missing or invalid
    /// - The user agent is not a valid header value
    /// - The timeout is zero
    /// - An embed color, field or timestamp is malformed
    /// - Neither content nor embed options were given
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let url = Self::resolve_url(cli, toml)?;
        let user_agent = Self::resolve_user_agent(cli, toml)?;
        let timeout = Self::resolve_timeout(cli, toml)?;
        let message = Self::build_message(cli, toml)?;

        Ok(Self {
            url,
            user_agent,
            timeout,
            message,
            best_effort: cli.best_effort,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // CLI takes precedence
        let url_str = cli
            .url
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.url.as_deref()))
            .ok_or_else(|| {
                ConfigError::missing(field::URL, "Use --url or set webhook.url in config file")
            })?;

        let url = Url::parse(url_str).map_err(|e| ConfigError::InvalidUrl {
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "https" | "http") {
            return Err(ConfigError::InvalidUrl {
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    fn resolve_user_agent(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<HeaderValue, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let value = cli
            .user_agent
            .as_deref()
            .or_else(|| toml.and_then(|t| t.webhook.user_agent.as_deref()))
            .unwrap_or(defaults::USER_AGENT);

        HeaderValue::from_str(value).map_err(|e| ConfigError::InvalidUserAgent {
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    fn resolve_timeout(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .timeout
            .or_else(|| toml.and_then(|t| t.webhook.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "timeout",
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn build_message(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Message, ConfigError> {
        let mut message = Message::new().with_tts(cli.tts);
        message.content.clone_from(&cli.content);

        // Identity: CLI wins, then TOML
        message.username = cli
            .username
            .clone()
            .or_else(|| toml.and_then(|t| t.message.username.clone()));
        message.avatar_url = cli
            .avatar_url
            .clone()
            .or_else(|| toml.and_then(|t| t.message.avatar_url.clone()));

        if cli.has_embed() {
            message.push_embed(Self::build_embed(cli, toml)?)?;
        }

        if message.content.is_none() && message.embeds().is_empty() {
            return Err(ConfigError::EmptyMessage);
        }

        Ok(message)
    }

    fn build_embed(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Embed, ConfigError> {
        let style = toml.map(|t| &t.embed);

        let color = cli
            .color
            .as_deref()
            .or_else(|| style.and_then(|s| s.color.as_deref()))
            .map(str::parse::<Color>)
            .transpose()?
            .unwrap_or_default();

        let fields = cli
            .fields
            .iter()
            .map(|s| parse_field(s, cli.inline_fields))
            .collect::<Result<Vec<_>, _>>()?;

        let timestamp = cli.timestamp.as_deref().map(parse_timestamp).transpose()?;

        let author = cli.author.as_ref().map(|name| Author {
            name: Some(name.clone()),
            url: cli.author_url.clone(),
            icon_url: cli.author_icon.clone(),
        });

        let footer_text = cli
            .footer
            .clone()
            .or_else(|| style.and_then(|s| s.footer.clone()));
        let footer_icon = cli
            .footer_icon
            .clone()
            .or_else(|| style.and_then(|s| s.footer_icon.clone()));
        let footer = (footer_text.is_some() || footer_icon.is_some()).then(|| Footer {
            text: footer_text,
            icon_url: footer_icon,
        });

        let mut embed = Embed {
            title: cli.title.clone(),
            url: cli.embed_url.clone(),
            description: cli.description.clone(),
            color,
            author,
            fields,
            footer,
            timestamp,
            ..Embed::default()
        };

        if let Some(ref url) = cli.thumbnail {
            embed = embed.with_thumbnail_url(url);
        }
        if let Some(ref url) = cli.image {
            embed = embed.with_image_url(url);
        }

        Ok(embed)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_field(s: &str, inline: bool) -> Result<Field, ConfigError> {
    let (name, value) = s.split_once('=').ok_or_else(|| ConfigError::InvalidField {
        value: s.to_string(),
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(ConfigError::InvalidField {
            value: s.to_string(),
        });
    }

    Ok(Field::new(name, value.trim()).with_inline(inline))
}

fn parse_timestamp(s: &str) -> Result<Timestamp, ConfigError> {
    if s.eq_ignore_ascii_case("now") {
        return Ok(Timestamp::now());
    }

    Ok(s.parse::<Timestamp>()?)
}
