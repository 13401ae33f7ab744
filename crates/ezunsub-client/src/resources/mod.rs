//! Resource facades over the generic API client.
//!
//! Each facade is a thin borrow of the client that translates method calls
//! into paths, query parameters, and JSON bodies. Responses come back as
//! loosely-schemaed [`serde_json::Value`]s.

mod contacts;
mod exports;
mod links;
mod offers;
mod webhooks;

pub use contacts::Contacts;
pub use exports::Exports;
pub use links::Links;
pub use offers::Offers;
pub use webhooks::Webhooks;
