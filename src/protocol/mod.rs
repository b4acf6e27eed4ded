//! Protocol Module
//!
//! Defines the wire protocol for the weather query exchange.
//!
//! ## Request (always plain text)
//! ```text
//! <kind> <city>
//! ```
//! One kind character (`t`/`h`/`w`/`p`), one space, city text to the end of
//! the line. One complete request per datagram.
//!
//! ## Response, binary form (canonical)
//! ```text
//! ┌───────────────┬──────────┬───────────────┐
//! │  Status (4)   │ Kind (1) │   Value (4)   │
//! └───────────────┴──────────┴───────────────┘
//! ```
//! Big-endian throughout; exactly 9 bytes.
//!
//! ## Response, text form (alternate)
//! ```text
//! <status> <kind> <value>
//! ```
//!
//! ### Status Codes
//! - 0: OK
//! - 1: city not available
//! - 2: invalid request

mod codec;
mod request;
mod response;

pub use codec::{
    decode_response, decode_response_text, encode_response, encode_response_text,
    format_response_text, WireFormat, BINARY_RESPONSE_LEN, MAX_DATAGRAM,
};
pub use request::{parse_request, CityName, QueryKind, RequestOutcome, WeatherRequest};
pub use response::{Status, WeatherResponse, UNKNOWN_KIND};
