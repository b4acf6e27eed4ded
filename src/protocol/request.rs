//! Request definitions and parsing
//!
//! A query arrives as one line of text, `"<kind> <city>"`: a single kind
//! character, the first space, then city text running to the end of the
//! line. Parsing never fails with an error; it returns a three-way
//! [`RequestOutcome`] that the server maps directly onto wire status codes.

use std::fmt;

use crate::cities::is_valid_city;
use crate::protocol::Status;

/// The four weather quantities a client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    Temperature,
    Humidity,
    Wind,
    Pressure,
}

impl QueryKind {
    /// Parse the wire character. Kind characters are lowercase only.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            't' => Some(QueryKind::Temperature),
            'h' => Some(QueryKind::Humidity),
            'w' => Some(QueryKind::Wind),
            'p' => Some(QueryKind::Pressure),
            _ => None,
        }
    }

    /// The wire character for this kind.
    pub fn as_char(self) -> char {
        match self {
            QueryKind::Temperature => 't',
            QueryKind::Humidity => 'h',
            QueryKind::Wind => 'w',
            QueryKind::Pressure => 'p',
        }
    }

    /// All kinds, in wire-character order.
    pub const fn all() -> &'static [QueryKind] {
        &[
            QueryKind::Temperature,
            QueryKind::Humidity,
            QueryKind::Wind,
            QueryKind::Pressure,
        ]
    }

    /// Human-readable name, for client reports.
    pub fn label(self) -> &'static str {
        match self {
            QueryKind::Temperature => "Temperature",
            QueryKind::Humidity => "Humidity",
            QueryKind::Wind => "Wind",
            QueryKind::Pressure => "Pressure",
        }
    }

    /// Measurement unit, for client reports.
    pub fn unit(self) -> &'static str {
        match self {
            QueryKind::Temperature => "°C",
            QueryKind::Humidity => "%",
            QueryKind::Wind => "km/h",
            QueryKind::Pressure => "hPa",
        }
    }
}

/// A city name as carried in a request, bounded to [`CityName::MAX_LEN`]
/// bytes.
///
/// Requests longer than the bound are truncated at construction, never
/// rejected; the cut lands on a character boundary so the content stays
/// valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    /// Longest city text a request can carry, in bytes.
    pub const MAX_LEN: usize = 63;

    /// Build from raw text, truncating excess length.
    pub fn truncated(raw: &str) -> Self {
        if raw.len() <= Self::MAX_LEN {
            return CityName(raw.to_string());
        }
        let mut end = Self::MAX_LEN;
        while !raw.is_char_boundary(end) {
            end -= 1;
        }
        CityName(raw[..end].to_string())
    }

    /// The city text as typed by the client (not canonicalized).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed weather query.
///
/// Constructed transiently per incoming datagram and discarded once the
/// response is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    /// What quantity is being asked for.
    pub kind: QueryKind,

    /// The city text, as typed (possibly not in the allow-list).
    pub city: CityName,
}

/// Result of parsing a raw query line.
///
/// All three cases are ordinary values: the server turns them into wire
/// status codes, so none of them is an error at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Kind and city both passed validation.
    Valid(WeatherRequest),

    /// Well-formed query for a city outside the allow-list. The parsed
    /// request is kept so callers can still display the name.
    CityUnavailable(WeatherRequest),

    /// Input did not match the `"<kind> <city>"` shape.
    Malformed,
}

impl RequestOutcome {
    /// The wire status code this outcome maps to.
    pub fn status(&self) -> Status {
        match self {
            RequestOutcome::Valid(_) => Status::Ok,
            RequestOutcome::CityUnavailable(_) => Status::CityUnavailable,
            RequestOutcome::Malformed => Status::InvalidRequest,
        }
    }

    /// The parsed request, where one exists.
    pub fn request(&self) -> Option<&WeatherRequest> {
        match self {
            RequestOutcome::Valid(req) | RequestOutcome::CityUnavailable(req) => Some(req),
            RequestOutcome::Malformed => None,
        }
    }
}

/// Parse a raw query line like `"t Bari"`.
///
/// The first character is the kind; everything after the first space is the
/// city (a trailing line terminator is trimmed, excess length truncated).
/// Characters between the kind character and the first space are ignored.
pub fn parse_request(input: &str) -> RequestOutcome {
    if input.is_empty() {
        return RequestOutcome::Malformed;
    }

    let kind = match input.chars().next().and_then(QueryKind::from_char) {
        Some(kind) => kind,
        None => return RequestOutcome::Malformed,
    };

    let space = match input.find(' ') {
        Some(pos) => pos,
        None => return RequestOutcome::Malformed,
    };

    let rest = &input[space + 1..];
    let rest = rest.strip_suffix('\n').unwrap_or(rest);
    let rest = rest.strip_suffix('\r').unwrap_or(rest);
    if rest.is_empty() {
        return RequestOutcome::Malformed;
    }

    let request = WeatherRequest {
        kind,
        city: CityName::truncated(rest),
    };

    if is_valid_city(request.city.as_str()) {
        RequestOutcome::Valid(request)
    } else {
        RequestOutcome::CityUnavailable(request)
    }
}
