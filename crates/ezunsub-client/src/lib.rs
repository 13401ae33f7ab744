//! Async Rust client for the EZUnsub API.
//!
//! Wraps the EZUnsub REST API behind a thin client and per-resource
//! facades: contacts, webhooks, links, offers, and exports. Each call is a
//! single HTTP request; the client never retries on its own.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ezunsub_client::EzUnsubClient;
//!
//! let client = EzUnsubClient::new("your-api-key")?;
//!
//! // List contacts
//! let contacts = client.contacts().list(Page::default(), None).await?;
//!
//! // Create a webhook
//! let webhook = client
//!     .webhooks()
//!     .create(CreateWebhookRequest::new(
//!         "My Webhook",
//!         "https://my-app.com/webhooks/ezunsub",
//!         vec!["contact.created".into(), "contact.updated".into()],
//!     ))
//!     .await?;
//! ```
//!
//! Inbound webhook deliveries are verified by the `ezunsub-webhook` crate;
//! this one only talks outward.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod resources;
mod types;

pub use client::*;
pub use config::*;
pub use error::*;
pub use resources::*;
pub use types::*;
