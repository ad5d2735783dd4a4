//! Transport adapter issuing the raw HTTP calls.

mod client;

pub use client::{HttpClient, Transport};

#[cfg(test)]
pub use client::MockTransport;
