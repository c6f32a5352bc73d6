//! HTTP client for the server's notification settings API.
//!
//! The panel never talks to Slack directly. It reads and updates the Slack
//! agent configuration held by the server, which does the actual delivery.

mod client;
mod error;
mod types;


pub use client::ApiClient;
pub use error::ApiError;
pub use types::{SlackOptions, SlackSettings};
