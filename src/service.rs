//! Service Module
//!
//! The piece the transport calls: one datagram in, one response payload
//! out. Composes request parsing, city validation, value generation and
//! response encoding for the active wire form.
//!
//! Every input produces a response: parse failures map onto wire status
//! codes, never onto errors or panics, so the serve loop can stay a
//! straight receive/handle/send line.

use crate::forecast::Forecaster;
use crate::protocol::{parse_request, RequestOutcome, WeatherResponse, WireFormat};

/// Handles weather queries.
///
/// Stateless per call apart from the forecaster's RNG draw.
pub struct WeatherService {
    forecaster: Forecaster,
    wire_format: WireFormat,
}

impl WeatherService {
    /// A service with an entropy-seeded forecaster.
    pub fn new(wire_format: WireFormat) -> Self {
        Self::with_forecaster(wire_format, Forecaster::new())
    }

    /// A service with an injected forecaster (fixed-seed in tests).
    pub fn with_forecaster(wire_format: WireFormat, forecaster: Forecaster) -> Self {
        Self {
            forecaster,
            wire_format,
        }
    }

    /// The response wire form this service encodes.
    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    /// Handle one raw request datagram, returning the response payload in
    /// the active wire form.
    pub fn handle_datagram(&self, raw: &[u8]) -> Vec<u8> {
        let response = self.handle_query(raw);
        self.wire_format.encode(&response)
    }

    /// Parse, validate and serve one raw request.
    pub fn handle_query(&self, raw: &[u8]) -> WeatherResponse {
        let text = match std::str::from_utf8(raw) {
            Ok(text) => text,
            Err(_) => {
                tracing::debug!("rejecting non-UTF-8 request of {} bytes", raw.len());
                return WeatherResponse::invalid_request();
            }
        };

        match parse_request(text) {
            RequestOutcome::Valid(req) => {
                let value = self.forecaster.sample(req.kind);
                tracing::debug!(
                    "serving {} for {}: {:.2}",
                    req.kind.label(),
                    req.city,
                    value
                );
                WeatherResponse::ok(req.kind, value)
            }
            RequestOutcome::CityUnavailable(req) => {
                tracing::debug!("city not available: {}", req.city);
                WeatherResponse::city_unavailable(req.kind)
            }
            RequestOutcome::Malformed => {
                tracing::debug!("malformed request: {:?}", text);
                WeatherResponse::invalid_request()
            }
        }
    }
}
