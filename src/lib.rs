//! discord-hook: Discord webhook client
//!
//! A library for building Discord webhook messages with rich embeds,
//! delivering them over HTTP and reading back the rate-limit state
//! the endpoint reports.
//!
//! - [`message`]: the message and embed model and its JSON encoding
//! - [`webhook`]: delivery, responses and transport errors
//! - [`config`]: CLI and TOML configuration for the `discord-hook` binary
//!
//! ```no_run
//! use discord_hook::message::{Embed, Message};
//! use discord_hook::webhook::{MessageSender, Webhook};
//! use http::HeaderValue;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let url = url::Url::parse("https://discord.com/api/webhooks/1/token")?;
//! let webhook = Webhook::new(url, HeaderValue::from_static("my-app/1.0"));
//!
//! let message = Message::new()
//!     .with_content("Deployment finished")
//!     .with_embed(Embed::default().with_title("v1.2.3").with_color(0x00FF00_u32))?;
//!
//! let response = webhook.send(&message).await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod message;
pub mod webhook;
