//! UDP Client
//!
//! Sends one query line per datagram and decodes the reply with the
//! configured wire form. Also hosts the display formatting the client
//! front end prints.

use std::net::{ToSocketAddrs, UdpSocket};
use std::time::Duration;

use crate::error::Result;
use crate::protocol::{QueryKind, Status, WeatherResponse, WireFormat, MAX_DATAGRAM};

/// Client half of the weather query exchange.
pub struct WeatherClient {
    socket: UdpSocket,
    wire_format: WireFormat,
}

impl WeatherClient {
    /// Bind an ephemeral local socket and direct queries at `server`.
    ///
    /// The socket is connected so replies from other peers are filtered
    /// out. `timeout` bounds each wait for a reply; `None` waits forever.
    pub fn connect(
        server: impl ToSocketAddrs,
        wire_format: WireFormat,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let socket = UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(server)?;
        socket.set_read_timeout(timeout)?;

        Ok(Self {
            socket,
            wire_format,
        })
    }

    /// The response wire form this client decodes.
    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    /// Send one raw query line and wait for the decoded reply.
    ///
    /// The line goes out verbatim; the server is authoritative for
    /// validation. One datagram each way, no retries.
    pub fn query(&self, line: &str) -> Result<WeatherResponse> {
        self.socket.send(line.as_bytes())?;

        let mut buf = [0u8; MAX_DATAGRAM];
        let len = self.socket.recv(&mut buf)?;

        self.wire_format.decode(&buf[..len])
    }
}

/// Human-readable report for one reply.
///
/// `city` is the display name the caller recovered from its own query line
/// (canonicalized where known); status 1 wording never includes a numeric
/// value.
pub fn describe_response(response: &WeatherResponse, city: &str) -> String {
    match response.status {
        Status::Ok => match QueryKind::from_char(response.kind) {
            Some(kind) => format!(
                "{} in {}: {:.1} {}",
                kind.label(),
                city,
                response.value,
                kind.unit()
            ),
            // Unknown echo character; show the value anyway.
            None => format!("{} in {}: {:.1}", response.kind, city, response.value),
        },
        Status::CityUnavailable => format!("Weather for {} is not available", city),
        Status::InvalidRequest => "Invalid request".to_string(),
    }
}
