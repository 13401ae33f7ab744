//! Webhook verification for the EZUnsub API.
//!
//! Inbound webhook deliveries are authenticated with an HMAC-SHA256
//! signature over `"{timestamp}.{body}"`, bounded by a replay window on the
//! signed timestamp. This crate verifies that signature, validates the
//! payload shape, and hands application code a [`VerifiedPayload`] it can
//! trust.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ezunsub_webhook::{extract_headers, WebhookVerifier};
//!
//! let verifier = WebhookVerifier::new("your-webhook-secret");
//!
//! // In your webhook handler:
//! let headers = extract_headers(request.headers())?;
//! let payload = verifier.verify_and_parse(
//!     &headers.signature,
//!     &headers.timestamp,
//!     body,
//!     &headers.delivery_id,
//! )?;
//!
//! if payload.event_str() == Some("contact.created") {
//!     // Handle new contact
//! }
//! ```
//!
//! Verification must run over the raw request body bytes. Reparsing and
//! reserializing the body before verifying invalidates the signature.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod error;
mod headers;
mod payload;
mod verifier;

pub use error::*;
pub use headers::*;
pub use payload::*;
pub use verifier::*;

/// Default replay window in seconds.
pub const DEFAULT_MAX_AGE_SECONDS: i64 = 300; // 5 minutes
