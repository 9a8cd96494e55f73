//! Building blocks of an embed: author, fields, images and footer.

use serde::Serialize;

/// Authorship block shown above the embed title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name of the author
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Link opened when the author name is clicked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Small icon shown next to the name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Author {
    /// Creates an author block with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Sets the author link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the author icon.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// A name/value pair displayed in the embed body.
///
/// Both `name` and `value` are always serialized, as is `inline`.
/// The platform fits at most three inline fields per row, or two when the
/// embed has a thumbnail; this is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Field heading
    pub name: String,
    /// Field body
    pub value: String,
    /// Whether the field shares its row with neighbouring inline fields
    pub inline: bool,
}

impl Field {
    /// Creates a field that takes a full row.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    /// Creates an inline field.
    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, value).with_inline(true)
    }

    /// Sets whether the field is inline.
    #[must_use]
    pub const fn with_inline(mut self, inline: bool) -> Self {
        self.inline = inline;
        self
    }
}

/// Small image shown in the top corner of the embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    /// Image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Thumbnail {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Large image shown below the embed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Image {
    /// Image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Image {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
        }
    }
}

/// Footer line at the bottom of the embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    /// Footer text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Small icon shown before the text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Footer {
    /// Creates a footer with only text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            icon_url: None,
        }
    }

    /// Sets the footer icon.
    #[must_use]
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}
