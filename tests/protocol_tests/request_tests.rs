//! Request Parsing Tests
//!
//! Tests for the `"<kind> <city>"` query line parser.

use meteoq::cities::CITIES;
use meteoq::protocol::{parse_request, CityName, QueryKind, RequestOutcome, Status};

// =============================================================================
// Valid Requests
// =============================================================================

#[test]
fn test_parse_all_cities_any_capitalization() {
    for city in CITIES {
        let variants = [
            city.to_string(),
            city.to_lowercase(),
            city.to_uppercase(),
        ];

        for variant in &variants {
            let line = format!("t {}", variant);
            match parse_request(&line) {
                RequestOutcome::Valid(req) => {
                    assert_eq!(req.kind, QueryKind::Temperature);
                    assert_eq!(req.city.as_str(), variant.as_str());
                }
                other => panic!("expected Valid for {:?}, got {:?}", line, other),
            }
        }
    }
}

#[test]
fn test_parse_all_kind_characters() {
    let cases = [
        ('t', QueryKind::Temperature),
        ('h', QueryKind::Humidity),
        ('w', QueryKind::Wind),
        ('p', QueryKind::Pressure),
    ];

    for (ch, expected) in cases {
        let line = format!("{} Roma", ch);
        match parse_request(&line) {
            RequestOutcome::Valid(req) => assert_eq!(req.kind, expected),
            other => panic!("expected Valid for {:?}, got {:?}", line, other),
        }
    }
}

#[test]
fn test_parse_trims_trailing_terminator() {
    for line in ["t Bari\n", "t Bari\r\n"] {
        match parse_request(line) {
            RequestOutcome::Valid(req) => assert_eq!(req.city.as_str(), "Bari"),
            other => panic!("expected Valid for {:?}, got {:?}", line, other),
        }
    }
}

#[test]
fn test_parse_keeps_city_as_typed() {
    // Canonicalization is a display concern; the parsed request carries
    // the city exactly as the client typed it.
    match parse_request("t ROMA") {
        RequestOutcome::Valid(req) => assert_eq!(req.city.as_str(), "ROMA"),
        other => panic!("expected Valid, got {:?}", other),
    }
}

#[test]
fn test_parse_splits_on_first_space() {
    // Only the first character and the first space matter; characters in
    // between are ignored.
    match parse_request("txyz Roma") {
        RequestOutcome::Valid(req) => {
            assert_eq!(req.kind, QueryKind::Temperature);
            assert_eq!(req.city.as_str(), "Roma");
        }
        other => panic!("expected Valid, got {:?}", other),
    }
}

// =============================================================================
// Unknown Cities
// =============================================================================

#[test]
fn test_parse_unknown_city() {
    match parse_request("t Atlantis") {
        RequestOutcome::CityUnavailable(req) => {
            // Fields stay populated so callers can still display the name.
            assert_eq!(req.kind, QueryKind::Temperature);
            assert_eq!(req.city.as_str(), "Atlantis");
        }
        other => panic!("expected CityUnavailable, got {:?}", other),
    }
}

#[test]
fn test_parse_double_space_is_part_of_city() {
    // Everything after the first space is the city, verbatim.
    match parse_request("h  Roma") {
        RequestOutcome::CityUnavailable(req) => assert_eq!(req.city.as_str(), " Roma"),
        other => panic!("expected CityUnavailable, got {:?}", other),
    }
}

// =============================================================================
// Malformed Requests
// =============================================================================

#[test]
fn test_parse_empty_input() {
    assert_eq!(parse_request(""), RequestOutcome::Malformed);
}

#[test]
fn test_parse_unknown_kind_character() {
    assert_eq!(parse_request("x Roma"), RequestOutcome::Malformed);
}

#[test]
fn test_parse_uppercase_kind_rejected() {
    assert_eq!(parse_request("T Bari"), RequestOutcome::Malformed);
}

#[test]
fn test_parse_missing_space() {
    assert_eq!(parse_request("t"), RequestOutcome::Malformed);
    assert_eq!(parse_request("tBari"), RequestOutcome::Malformed);
}

#[test]
fn test_parse_nothing_after_space() {
    assert_eq!(parse_request("t "), RequestOutcome::Malformed);
}

#[test]
fn test_parse_terminator_only_city() {
    // After the trailing terminator is trimmed no city text remains.
    assert_eq!(parse_request("t \n"), RequestOutcome::Malformed);
    assert_eq!(parse_request("t \r\n"), RequestOutcome::Malformed);
}

#[test]
fn test_parse_leading_space() {
    assert_eq!(parse_request(" t Bari"), RequestOutcome::Malformed);
}

// =============================================================================
// City Truncation
// =============================================================================

#[test]
fn test_city_truncated_to_max_len() {
    let long_city = "a".repeat(100);
    let line = format!("t {}", long_city);

    match parse_request(&line) {
        RequestOutcome::CityUnavailable(req) => {
            assert_eq!(req.city.as_str().len(), CityName::MAX_LEN);
            assert_eq!(req.city.as_str(), &long_city[..CityName::MAX_LEN]);
        }
        other => panic!("expected CityUnavailable, got {:?}", other),
    }
}

#[test]
fn test_city_truncation_respects_char_boundary() {
    // 40 two-byte characters: 80 bytes, and the 63-byte bound falls in the
    // middle of a character, so the cut backs off to 62 bytes.
    let long_city = "é".repeat(40);
    let line = format!("w {}", long_city);

    match parse_request(&line) {
        RequestOutcome::CityUnavailable(req) => {
            assert_eq!(req.city.as_str().len(), 62);
            assert!(req.city.as_str().chars().all(|c| c == 'é'));
        }
        other => panic!("expected CityUnavailable, got {:?}", other),
    }
}

#[test]
fn test_city_at_exact_bound_not_truncated() {
    let city = "b".repeat(CityName::MAX_LEN);
    let line = format!("t {}", city);

    match parse_request(&line) {
        RequestOutcome::CityUnavailable(req) => assert_eq!(req.city.as_str(), city),
        other => panic!("expected CityUnavailable, got {:?}", other),
    }
}

// =============================================================================
// Status Mapping
// =============================================================================

#[test]
fn test_outcome_status_codes() {
    assert_eq!(parse_request("t Bari").status(), Status::Ok);
    assert_eq!(parse_request("t Atlantis").status(), Status::CityUnavailable);
    assert_eq!(parse_request("x Roma").status(), Status::InvalidRequest);

    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::CityUnavailable.code(), 1);
    assert_eq!(Status::InvalidRequest.code(), 2);
}

#[test]
fn test_outcome_request_accessor() {
    assert!(parse_request("t Bari").request().is_some());
    assert!(parse_request("t Atlantis").request().is_some());
    assert!(parse_request("junk").request().is_none());
}
