//! Rich embed attached to a message.

use std::fmt::Display;

use serde::Serialize;

use super::{Author, Color, Field, Footer, Image, Thumbnail, Timestamp};

/// A styled attachment with title, description, fields and images.
///
/// All fields are public so an embed can be written as a struct literal
/// with `..Embed::default()`, or built incrementally with the `with_*`
/// methods. Every value except [`color`](Self::color) is optional and
/// omitted from the payload when unset.
///
/// # Example
///
/// ```
/// use discord_hook::message::{Color, Embed, Field};
///
/// let embed = Embed::new()
///     .with_title("Deploy finished")
///     .with_color(Color::new(0, 255, 0))
///     .with_field(Field::inline("Version", "1.4.2"));
///
/// assert_eq!(embed.fields.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Embed {
    /// Title text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Link target; turns the title into a hyperlink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Main text body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Side bar color (always serialized)
    pub color: Color,

    /// Authorship block
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,

    /// Name/value fields, in display order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,

    /// Corner thumbnail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,

    /// Large image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Footer line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,

    /// Time shown in the footer area; unrelated to when the message is sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
}

impl Embed {
    /// Creates an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the side bar color from a [`Color`], a packed `u32` or an RGB tuple.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Appends a field whose value is rendered from any displayable value,
    /// such as a count or a version number.
    #[must_use]
    pub fn with_field_value(
        self,
        name: impl Into<String>,
        value: impl Display,
        inline: bool,
    ) -> Self {
        self.with_field(Field::new(name, value.to_string()).with_inline(inline))
    }

    #[must_use]
    pub fn with_thumbnail(mut self, thumbnail: Thumbnail) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    /// Shorthand for a thumbnail with only an image URL.
    #[must_use]
    pub fn with_thumbnail_url(self, url: impl Into<String>) -> Self {
        self.with_thumbnail(Thumbnail::new(url))
    }

    #[must_use]
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    /// Shorthand for an image with only a URL.
    #[must_use]
    pub fn with_image_url(self, url: impl Into<String>) -> Self {
        self.with_image(Image::new(url))
    }

    #[must_use]
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Sets the timestamp from anything convertible to a [`Timestamp`].
    ///
    /// Offset-less date-times are taken as UTC.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the timestamp to the current system time.
    #[must_use]
    pub fn with_current_timestamp(self) -> Self {
        self.with_timestamp(Timestamp::now())
    }
}
