//! # meteoq
//!
//! A teaching client/server pair for a UDP weather query protocol:
//! - One-line text requests: `"<kind> <city>"` with kind `t`/`h`/`w`/`p`
//! - Fixed 9-byte binary responses, or an alternate text form
//! - Case-insensitive city allow-list with canonical display names
//! - Pseudo-random value generation per query kind
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────┐  "t Bari"   ┌──────────────────────────────┐
//! │  meteoq-cli  ├────────────►│         UDP Server           │
//! │ (one datagram│             │   (sequential serve loop)    │
//! │  per query)  │◄────────────┤                              │
//! └──────┬───────┘  9-byte or  └──────────────┬───────────────┘
//!        │          text reply                │
//!        ▼                                    ▼
//! ┌──────────────┐              ┌──────────────────────────────┐
//! │   Protocol   │              │        WeatherService        │
//! │ parse/encode │◄─────────────┤  parse → validate → sample   │
//! └──────────────┘              └──────────────┬───────────────┘
//!                                              │
//!                                              ▼
//!                                      ┌──────────────┐
//!                                      │  Forecaster  │
//!                                      │ (seeded RNG) │
//!                                      └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod cities;
pub mod forecast;
pub mod network;
pub mod protocol;
pub mod service;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{MeteoError, Result};
pub use service::WeatherService;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of meteoq
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
