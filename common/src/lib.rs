//! Shared primitives for the Build-a-BOT client.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location capture and HTTP status helpers
//! - **models**: wire and view data structures
//! - **client-core**: backend client, configuration and view flows
//! - **buildabot**: terminal application wiring everything together

pub mod error;
pub mod http_status;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;

#[cfg(test)]
mod tests;
