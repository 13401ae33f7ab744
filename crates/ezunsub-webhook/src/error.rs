//! Webhook error types.

/// Webhook verification errors.
///
/// All variants are terminal; nothing is retried internally. The caller
/// decides the HTTP response (typically a 400).
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// Signature mismatch, or timestamp outside the replay window.
    ///
    /// The two causes are deliberately indistinguishable so a rejected
    /// response does not reveal which check failed.
    #[error("Invalid webhook signature")]
    InvalidSignature,

    /// Body is not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// Payload parsed but a required field is absent.
    #[error("Missing '{0}' field in payload")]
    MissingField(&'static str),

    /// A required header was absent from the request.
    #[error("Missing {0} header")]
    MissingHeader(&'static str),
}

/// Result type for webhook operations.
pub type WebhookResult<T> = Result<T, WebhookError>;
