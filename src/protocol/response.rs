//! Response definitions
//!
//! Represents the server's reply to one query.

use crate::protocol::QueryKind;

/// Kind echo used when the request was malformed and no kind exists.
pub const UNKNOWN_KIND: char = '?';

/// Response status codes, as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum Status {
    Ok = 0,
    CityUnavailable = 1,
    InvalidRequest = 2,
}

impl Status {
    /// The numeric wire code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Parse a wire code back into a status.
    pub fn from_code(code: u32) -> Option<Status> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::CityUnavailable),
            2 => Some(Status::InvalidRequest),
            _ => None,
        }
    }
}

/// A reply to one weather query.
///
/// Built by the server after validating a request, encoded once, never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherResponse {
    /// Outcome of the exchange.
    pub status: Status,

    /// Echo of the request's kind character, or [`UNKNOWN_KIND`] when the
    /// request was malformed. Always a single ASCII character on the wire.
    pub kind: char,

    /// The generated weather value; meaningful only when `status` is
    /// [`Status::Ok`], `0.0` otherwise.
    pub value: f32,
}

impl WeatherResponse {
    /// A successful reply carrying a generated value.
    pub fn ok(kind: QueryKind, value: f32) -> Self {
        Self {
            status: Status::Ok,
            kind: kind.as_char(),
            value,
        }
    }

    /// The requested city is not in the allow-list. The kind is still
    /// echoed so the client can tell which query this answers.
    pub fn city_unavailable(kind: QueryKind) -> Self {
        Self {
            status: Status::CityUnavailable,
            kind: kind.as_char(),
            value: 0.0,
        }
    }

    /// The request did not parse; no kind to echo.
    pub fn invalid_request() -> Self {
        Self {
            status: Status::InvalidRequest,
            kind: UNKNOWN_KIND,
            value: 0.0,
        }
    }
}
