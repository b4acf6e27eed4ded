//! Network Module
//!
//! UDP transport for the query exchange.
//!
//! ## Architecture
//! - Sequential serve loop, one datagram at a time
//! - Connected client socket with optional receive timeout
//! - All protocol logic lives in [`crate::service`] and [`crate::protocol`]

mod client;
mod server;

pub use client::{describe_response, WeatherClient};
pub use server::{Server, ShutdownHandle};
