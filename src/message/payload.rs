//! Top-level webhook message.

use serde::Serialize;

use super::{Embed, ValidationError};

/// Maximum number of embeds a single message may carry.
pub const MAX_EMBEDS: usize = 10;

/// A message posted through a webhook.
///
/// The identity overrides (`username`, `avatar_url`) apply to this send only.
/// `content` is passed through untouched; the platform limits it to 2000
/// characters and rejects longer bodies server-side.
///
/// Embeds can only be added through [`with_embed`](Self::with_embed) or
/// [`push_embed`](Self::push_embed), which enforce [`MAX_EMBEDS`], so an
/// existing `Message` never holds more than ten.
///
/// # Example
///
/// ```
/// use discord_hook::message::{Embed, Message};
///
/// # fn main() -> Result<(), discord_hook::message::ValidationError> {
/// let message = Message::new()
///     .with_username("Build Bot")
///     .with_content("hello")
///     .with_embed(Embed::new().with_title("t"))?;
///
/// assert_eq!(message.embeds().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    /// Display name override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Avatar override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Plain text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Text-to-speech flag (always serialized)
    pub tts: bool,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    embeds: Vec<Embed>,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub const fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    /// Appends an embed, consuming and returning the message.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyEmbeds`] if the message already
    /// holds [`MAX_EMBEDS`] embeds. The message is dropped in that case.
    pub fn with_embed(mut self, embed: Embed) -> Result<Self, ValidationError> {
        self.push_embed(embed)?;
        Ok(self)
    }

    /// Appends an embed in place.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyEmbeds`] if the message already
    /// holds [`MAX_EMBEDS`] embeds; the message is left unchanged.
    pub fn push_embed(&mut self, embed: Embed) -> Result<(), ValidationError> {
        if self.embeds.len() >= MAX_EMBEDS {
            return Err(ValidationError::TooManyEmbeds { max: MAX_EMBEDS });
        }
        self.embeds.push(embed);
        Ok(())
    }

    /// Appends every embed from an iterator, stopping at the first one that
    /// would exceed the limit.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooManyEmbeds`] once the limit is reached;
    /// embeds appended before that point are kept.
    pub fn extend_embeds<I>(&mut self, embeds: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = Embed>,
    {
        embeds.into_iter().try_for_each(|embed| self.push_embed(embed))
    }

    /// Returns the embeds in send order.
    #[must_use]
    pub fn embeds(&self) -> &[Embed] {
        &self.embeds
    }

    /// Consumes the message, returning its embeds.
    #[must_use]
    pub fn into_embeds(self) -> Vec<Embed> {
        self.embeds
    }
}

impl TryFrom<Vec<Embed>> for Message {
    type Error = ValidationError;

    fn try_from(embeds: Vec<Embed>) -> Result<Self, Self::Error> {
        if embeds.len() > MAX_EMBEDS {
            return Err(ValidationError::TooManyEmbeds { max: MAX_EMBEDS });
        }
        Ok(Self {
            embeds,
            ..Self::default()
        })
    }
}
