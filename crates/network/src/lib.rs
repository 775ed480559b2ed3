// crates/network/src/lib.rs
//! HTTP access to the table-of-contents page
//!
//! One GET per run: no retries, no caching, no circuit breaking.

mod client;
mod error;

pub use client::{Client, ClientConfig, DEFAULT_USER_AGENT};
pub use error::{NetworkError, NetworkResult};
