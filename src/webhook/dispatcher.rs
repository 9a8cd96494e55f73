//! Message dispatch to a webhook endpoint.

use std::error::Error;
use std::fmt;

use http::HeaderValue;
use http::header::{CONTENT_TYPE, USER_AGENT};
use url::Url;

use crate::message::{self, Message};

use super::{
    HttpClient, HttpError, HttpRequest, RedactedError, ReqwestClient, Response, SendError,
};

/// Placeholder written in place of the webhook URL in diagnostics.
pub const REDACTED_URL: &str = "<webhook_url>";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Trait for delivering messages to a webhook.
///
/// Allows callers to depend on delivery without depending on the HTTP
/// stack, and enables testing with mocks.
///
/// # Implementation Notes
///
/// Implementations do not retry. A failure is reported once, to the caller.
pub trait MessageSender: Send + Sync {
    /// Delivers a message and returns the endpoint's response.
    ///
    /// Any status code counts as delivery; inspect [`Response::status`]
    /// to tell success from rejection.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] if the message cannot be encoded or the
    /// request fails at the transport level.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<Response, SendError>> + Send;

    /// Delivers a message, discarding any [`SendError`].
    ///
    /// Intended for fire-and-forget notifications where the caller cannot
    /// act on a failure. The failure is logged at `warn` level only.
    fn send_best_effort(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Option<Response>> + Send {
        async move {
            match self.send(message).await {
                Ok(response) => Some(response),
                Err(e) => {
                    tracing::warn!("Webhook message dropped: {e}");
                    None
                }
            }
        }
    }
}

/// A webhook endpoint that messages can be posted to.
///
/// Holds only the endpoint URL, the user agent and the HTTP client, none of
/// which change after construction. One instance can be shared and used
/// from any number of tasks at once; every send is independent.
///
/// The URL is treated as a secret: it is left out of `Debug` output and
/// redacted from error descriptions.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use discord_hook::message::Message;
/// use discord_hook::webhook::{MessageSender, Webhook};
/// use http::HeaderValue;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let webhook = Webhook::new(
///     Url::parse("https://discord.com/api/webhooks/1/token")?,
///     HeaderValue::from_static("my-app/1.0"),
/// );
///
/// let response = webhook.send(&Message::new().with_content("hello")).await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Webhook<H = ReqwestClient> {
    client: H,
    url: Url,
    user_agent: HeaderValue,
}

impl Webhook<ReqwestClient> {
    /// Creates a webhook using a default [`ReqwestClient`].
    #[must_use]
    pub fn new(url: Url, user_agent: HeaderValue) -> Self {
        Self {
            client: ReqwestClient::new(),
            url,
            user_agent,
        }
    }
}

impl<H> Webhook<H> {
    /// Replaces the HTTP client, e.g. one with a timeout or a mock.
    #[must_use]
    pub fn with_client<H2>(self, client: H2) -> Webhook<H2> {
        Webhook {
            client,
            url: self.url,
            user_agent: self.user_agent,
        }
    }

    /// Returns the configured endpoint URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the configured user agent.
    #[must_use]
    pub const fn user_agent(&self) -> &HeaderValue {
        &self.user_agent
    }

    /// Replaces every occurrence of the webhook URL, or its path, in `text`.
    fn redact(&self, text: &str) -> String {
        let mut redacted = text.replace(self.url.as_str(), REDACTED_URL);

        let path = self.url.path();
        if path.len() > 1 {
            redacted = redacted.replace(path, REDACTED_URL);
        }

        redacted
    }

    /// Rebuilds an error chain with every message redacted.
    fn redact_chain(&self, error: &dyn Error) -> RedactedError {
        RedactedError {
            message: self.redact(&error.to_string()),
            source: error.source().map(|e| Box::new(self.redact_chain(e))),
        }
    }

    /// Returns a copy of `error` whose messages and causes no longer carry the URL.
    fn redact_http_error(&self, error: &HttpError) -> HttpError {
        match error {
            HttpError::Timeout => HttpError::Timeout,
            HttpError::InvalidUrl(reason) => HttpError::InvalidUrl(self.redact(reason)),
            HttpError::Connection(inner) => {
                HttpError::Connection(Box::new(self.redact_chain(inner.as_ref())))
            }
            HttpError::Client(inner) => {
                HttpError::Client(Box::new(self.redact_chain(inner.as_ref())))
            }
        }
    }

    /// Wraps a transport failure, redacting its description and its cause chain.
    fn transport_error(&self, error: &HttpError) -> SendError {
        let source = self.redact_http_error(error);

        // The first source is already part of the HttpError message
        let first_cause = source.source().and_then(|e| e.source());
        let causes = std::iter::successors(first_cause, |&e| e.source());
        let description = std::iter::once(source.to_string())
            .chain(causes.map(ToString::to_string))
            .collect::<Vec<_>>()
            .join(": ");

        SendError::Transport {
            description,
            source,
        }
    }
}

impl<H> fmt::Debug for Webhook<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("url", &REDACTED_URL)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl<H: HttpClient> Webhook<H> {
    /// Builds the POST request carrying the encoded message.
    fn build_request(&self, body: Vec<u8>) -> HttpRequest {
        HttpRequest::post(self.url.clone())
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .with_header(USER_AGENT, self.user_agent.clone())
            .with_body(body)
    }

    async fn dispatch(&self, message: &Message) -> Result<Response, SendError> {
        let body = message::to_json(message)?;
        tracing::debug!(
            body = %String::from_utf8_lossy(&body),
            "Encoded webhook message"
        );

        let http_response = self
            .client
            .request(self.build_request(body))
            .await
            .map_err(|e| self.transport_error(&e))?;

        if let Some(text) = http_response.body_text().filter(|t| !t.is_empty()) {
            tracing::debug!(body = text, "Webhook response body");
        }

        let response = Response::from(&http_response);
        tracing::debug!("Webhook delivered: {response}");

        Ok(response)
    }
}

impl<H: HttpClient> MessageSender for Webhook<H> {
    async fn send(&self, message: &Message) -> Result<Response, SendError> {
        self.dispatch(message).await
    }
}
