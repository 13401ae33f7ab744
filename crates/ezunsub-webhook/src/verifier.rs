//! Webhook signature verification.

use chrono::Utc;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::{VerifiedPayload, WebhookError, WebhookResult, DEFAULT_MAX_AGE_SECONDS};

/// Verifies EZUnsub webhook deliveries.
///
/// The wire contract is `HMAC-SHA256(secret, "{timestamp}.{body}")`,
/// hex-encoded, optionally prefixed with `"sha256="` in the header value.
/// Deliveries whose signed timestamp falls outside the replay window are
/// rejected before any signature work.
///
/// The verifier is immutable after construction; one instance can serve
/// concurrent verifications without coordination.
#[derive(Clone)]
pub struct WebhookVerifier {
    secret: Vec<u8>,
    max_age_seconds: i64,
}

impl WebhookVerifier {
    /// Create a verifier with the default 5-minute replay window.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            max_age_seconds: DEFAULT_MAX_AGE_SECONDS,
        }
    }

    /// Set the maximum accepted distance between the signed timestamp and
    /// the verification time, in seconds.
    #[must_use]
    pub const fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age_seconds = seconds;
        self
    }

    /// Compute the expected hex signature for a timestamp and raw body.
    #[must_use]
    pub fn compute(&self, timestamp: &str, body: &[u8]) -> String {
        let mut mac =
            Hmac::<Sha256>::new_from_slice(&self.secret).expect("HMAC can take key of any size");
        mac.update(timestamp.as_bytes());
        mac.update(b".");
        mac.update(body);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Verify a signature from the `X-Webhook-Signature` header.
    ///
    /// Returns `false` when the timestamp is outside the replay window or
    /// the signature does not match. A malformed signature string simply
    /// compares unequal; this never fails in any other way.
    #[must_use]
    pub fn verify_signature(&self, signature: &str, timestamp: i64, body: &[u8]) -> bool {
        self.verify_signature_at(signature, timestamp, body, Utc::now().timestamp())
    }

    /// Like [`Self::verify_signature`], with an explicit verification time.
    #[must_use]
    pub fn verify_signature_at(
        &self,
        signature: &str,
        timestamp: i64,
        body: &[u8],
        now: i64,
    ) -> bool {
        self.check_at(signature, &timestamp.to_string(), timestamp, body, now)
    }

    /// Shared verification path. `literal` is the exact decimal text that
    /// was signed; `timestamp` is its numeric value for the age check.
    fn check_at(&self, signature: &str, literal: &str, timestamp: i64, body: &[u8], now: i64) -> bool {
        // The window is symmetric: stale and future-dated deliveries both
        // fall outside it.
        if (now - timestamp).abs() > self.max_age_seconds {
            return false;
        }

        let expected = self.compute(literal, body);

        let sig_value = signature.strip_prefix("sha256=").unwrap_or(signature);

        constant_time_eq(expected.as_bytes(), sig_value.as_bytes())
    }

    /// Verify a delivery and parse its JSON payload.
    ///
    /// `timestamp` is the literal `X-Webhook-Timestamp` text. The signing
    /// input uses it as sent, so a sender's `007` is not reformatted to `7`.
    /// `delivery_id` is caller-supplied pass-through, usually from
    /// `X-Webhook-Delivery-Id`; pass `""` when absent.
    ///
    /// # Errors
    /// - [`WebhookError::InvalidSignature`] when the signature does not
    ///   match or the timestamp is outside the replay window.
    /// - [`WebhookError::MalformedPayload`] when the body is not valid JSON.
    /// - [`WebhookError::MissingField`] when the payload lacks `event`,
    ///   `timestamp`, or `data`. Null values count as present; absence of
    ///   the key is the trigger.
    pub fn verify_and_parse(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
        delivery_id: &str,
    ) -> WebhookResult<VerifiedPayload> {
        self.verify_and_parse_at(signature, timestamp, body, delivery_id, Utc::now().timestamp())
    }

    /// Like [`Self::verify_and_parse`], with an explicit verification time.
    ///
    /// # Errors
    /// See [`Self::verify_and_parse`].
    pub fn verify_and_parse_at(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
        delivery_id: &str,
        now: i64,
    ) -> WebhookResult<VerifiedPayload> {
        // A timestamp that does not parse cannot fall inside the window;
        // it collapses into the same failure as a bad signature.
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| WebhookError::InvalidSignature)?;

        if !self.check_at(signature, timestamp, ts, body, now) {
            return Err(WebhookError::InvalidSignature);
        }

        let parsed: Value = serde_json::from_slice(body)?;

        let map = parsed
            .as_object()
            .ok_or(WebhookError::MissingField("event"))?;

        for field in ["event", "timestamp", "data"] {
            if !map.contains_key(field) {
                return Err(WebhookError::MissingField(field));
            }
        }

        Ok(VerifiedPayload {
            event: map["event"].clone(),
            timestamp: map["timestamp"].clone(),
            data: map["data"].clone(),
            delivery_id: delivery_id.to_string(),
        })
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("secret", &"[REDACTED]")
            .field("max_age_seconds", &self.max_age_seconds)
            .finish()
    }
}

/// Constant-time byte comparison.
///
/// Accumulates differences with XOR instead of exiting at the first
/// mismatch, so comparison time does not depend on where the signatures
/// diverge. The length pre-check only reflects the attacker-supplied
/// header length; the expected value is fixed-width hex.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
