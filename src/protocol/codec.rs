//! Response codec
//!
//! One module for both response wire forms; [`WireFormat`] selects which is
//! active. Requests travel as plain text in either case, so only the
//! response direction is encoded here.
//!
//! ## Binary form (canonical)
//!
//! ```text
//! ┌───────────────┬──────────┬───────────────┐
//! │  Status (4)   │ Kind (1) │   Value (4)   │
//! └───────────────┴──────────┴───────────────┘
//! ```
//!
//! - bytes 0–3: status as u32, big-endian
//! - byte 4: the kind character as one raw byte (no byte-order conversion)
//! - bytes 5–8: the value's IEEE-754 bit pattern as u32, big-endian
//!
//! The float transform is lossless: encode takes `f32::to_bits`, decode
//! reverses it with `f32::from_bits`, so round-trips preserve the exact bit
//! pattern including non-finite values.
//!
//! ## Text form (alternate)
//!
//! ```text
//! <status> <kind> <value>
//! ```
//!
//! Status as unsigned decimal, kind as a single character, value with
//! exactly two fraction digits. Decoding is strict: a field that fails to
//! parse is a [`MeteoError::MalformedResponse`], never silently zeroed.

use std::fmt;
use std::str::FromStr;

use crate::error::{MeteoError, Result};

use super::{Status, WeatherResponse};

/// Size of one binary response frame on the wire.
pub const BINARY_RESPONSE_LEN: usize = 9;

/// Largest datagram either side sends or accepts, in bytes.
pub const MAX_DATAGRAM: usize = 512;

/// Which response wire form an endpoint speaks.
///
/// Client and server must be configured with the same form to interoperate;
/// the forms are never mixed within one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// The canonical 9-byte machine-readable frame.
    #[default]
    Binary,

    /// The human-readable `"<status> <kind> <value>"` line.
    Text,
}

impl WireFormat {
    /// The name accepted by [`FromStr`] and printed by `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            WireFormat::Binary => "binary",
            WireFormat::Text => "text",
        }
    }

    /// Encode a response in this wire form.
    pub fn encode(self, response: &WeatherResponse) -> Vec<u8> {
        match self {
            WireFormat::Binary => encode_response(response).to_vec(),
            WireFormat::Text => format_response_text(response).into_bytes(),
        }
    }

    /// Decode a response payload in this wire form.
    pub fn decode(self, bytes: &[u8]) -> Result<WeatherResponse> {
        match self {
            WireFormat::Binary => decode_response(bytes),
            WireFormat::Text => decode_response_text(bytes),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = MeteoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(WireFormat::Binary),
            "text" => Ok(WireFormat::Text),
            other => Err(MeteoError::Config(format!(
                "unknown wire format '{}', expected 'binary' or 'text'",
                other
            ))),
        }
    }
}

// =============================================================================
// Binary Encoding/Decoding
// =============================================================================

/// Encode a response into the 9-byte binary frame.
pub fn encode_response(response: &WeatherResponse) -> [u8; BINARY_RESPONSE_LEN] {
    let mut frame = [0u8; BINARY_RESPONSE_LEN];
    frame[0..4].copy_from_slice(&response.status.code().to_be_bytes());
    frame[4] = response.kind as u8;
    frame[5..9].copy_from_slice(&response.value.to_bits().to_be_bytes());
    frame
}

/// Decode a binary response frame.
///
/// Fails with [`MeteoError::TruncatedResponse`] when fewer than
/// [`BINARY_RESPONSE_LEN`] bytes are supplied; bytes past the frame are
/// ignored, since a datagram caller hands over exactly one reply.
pub fn decode_response(bytes: &[u8]) -> Result<WeatherResponse> {
    if bytes.len() < BINARY_RESPONSE_LEN {
        return Err(MeteoError::TruncatedResponse {
            expected: BINARY_RESPONSE_LEN,
            got: bytes.len(),
        });
    }

    let code = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let status = Status::from_code(code)
        .ok_or_else(|| MeteoError::MalformedResponse(format!("unknown status code {}", code)))?;

    let kind = bytes[4] as char;
    let value = f32::from_bits(u32::from_be_bytes([bytes[5], bytes[6], bytes[7], bytes[8]]));

    Ok(WeatherResponse {
        status,
        kind,
        value,
    })
}

// =============================================================================
// Text Encoding/Decoding
// =============================================================================

/// Render a response in the text wire form.
pub fn format_response_text(response: &WeatherResponse) -> String {
    format!(
        "{} {} {:.2}",
        response.status.code(),
        response.kind,
        response.value
    )
}

/// Encode the text wire form into a caller-supplied buffer.
///
/// Returns the number of bytes written, or
/// [`MeteoError::BufferTooSmall`] when the rendered text does not fit.
/// The text is not NUL-terminated.
pub fn encode_response_text(response: &WeatherResponse, buf: &mut [u8]) -> Result<usize> {
    let text = format_response_text(response);
    let bytes = text.as_bytes();

    if bytes.len() > buf.len() {
        return Err(MeteoError::BufferTooSmall {
            needed: bytes.len(),
            available: buf.len(),
        });
    }

    buf[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

/// Decode the text wire form.
///
/// Strict: the payload must be UTF-8 holding exactly three
/// whitespace-separated fields, the status must be a known code, the kind a
/// single character, and the value a parseable float.
pub fn decode_response_text(bytes: &[u8]) -> Result<WeatherResponse> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| MeteoError::MalformedResponse("response is not valid UTF-8".to_string()))?;

    let mut fields = text.split_whitespace();
    let status_field = fields
        .next()
        .ok_or_else(|| MeteoError::MalformedResponse("missing status field".to_string()))?;
    let kind_field = fields
        .next()
        .ok_or_else(|| MeteoError::MalformedResponse("missing kind field".to_string()))?;
    let value_field = fields
        .next()
        .ok_or_else(|| MeteoError::MalformedResponse("missing value field".to_string()))?;
    if fields.next().is_some() {
        return Err(MeteoError::MalformedResponse(
            "trailing data after value field".to_string(),
        ));
    }

    let code: u32 = status_field.parse().map_err(|_| {
        MeteoError::MalformedResponse(format!("bad status field '{}'", status_field))
    })?;
    let status = Status::from_code(code)
        .ok_or_else(|| MeteoError::MalformedResponse(format!("unknown status code {}", code)))?;

    let mut kind_chars = kind_field.chars();
    let kind = kind_chars
        .next()
        .ok_or_else(|| MeteoError::MalformedResponse("empty kind field".to_string()))?;
    if kind_chars.next().is_some() {
        return Err(MeteoError::MalformedResponse(format!(
            "kind field '{}' is longer than one character",
            kind_field
        )));
    }

    let value: f32 = value_field
        .parse()
        .map_err(|_| MeteoError::MalformedResponse(format!("bad value field '{}'", value_field)))?;

    Ok(WeatherResponse {
        status,
        kind,
        value,
    })
}
