//! Application execution logic.
//!
//! Turns a validated configuration into a single delivery and reports
//! what the endpoint answered.

use thiserror::Error;

use discord_hook::config::ValidatedConfig;
use discord_hook::message::{self, Message};
use discord_hook::webhook::{HttpError, MessageSender, ReqwestClient, SendError, Webhook};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] HttpError),

    /// The message could not be delivered.
    #[error(transparent)]
    Send(#[from] SendError),

    /// The message could not be encoded for a dry run.
    #[error("Failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The endpoint answered with a non-success status.
    #[error("Webhook rejected the message with status {status}")]
    Rejected {
        /// HTTP status code returned by the endpoint
        status: u16,
    },
}

/// Executes a single delivery.
///
/// In dry-run mode the encoded message is printed to stdout and nothing
/// is sent.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Delivery fails or is rejected (unless best-effort is enabled)
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    if config.dry_run {
        tracing::info!("Dry-run mode enabled - the message will be printed but not sent");
        println!("{}", message::to_json_string(&config.message)?);
        return Ok(());
    }

    let client = ReqwestClient::with_timeout(config.timeout).map_err(RunError::Client)?;
    let webhook = Webhook::new(config.url, config.user_agent).with_client(client);

    deliver(&webhook, &config.message, config.best_effort).await
}

/// Delivers one message and turns the outcome into a run result.
///
/// With `best_effort` set, failures are logged and the run still succeeds.
async fn deliver<S: MessageSender>(
    sender: &S,
    message: &Message,
    best_effort: bool,
) -> Result<(), RunError> {
    if best_effort {
        match sender.send_best_effort(message).await {
            Some(response) if !response.is_success() => {
                tracing::warn!("{response}");
            }
            Some(response) => tracing::info!("{response}"),
            None => {}
        }
        return Ok(());
    }

    let response = sender.send(message).await?;

    if response.is_rate_limited() {
        tracing::warn!(
            "Rate limited, retry after {}s",
            response.rate_limit_reset_after.unwrap_or_default()
        );
    }

    if !response.is_success() {
        tracing::error!("{response}");
        return Err(RunError::Rejected {
            status: response.status_code(),
        });
    }

    tracing::info!("{response}");
    Ok(())
}
