//! City allow-list
//!
//! The fixed vocabulary of cities the service can answer for. Lookups are
//! case-insensitive; the stored capitalization is the canonical form used
//! for display.

/// Cities the service knows, in canonical capitalization.
pub const CITIES: [&str; 10] = [
    "Bari", "Roma", "Milano", "Napoli", "Torino",
    "Palermo", "Genova", "Bologna", "Firenze", "Venezia",
];

/// Check whether `name` is in the allow-list, ignoring ASCII case.
pub fn is_valid_city(name: &str) -> bool {
    CITIES.iter().any(|city| city.eq_ignore_ascii_case(name))
}

/// Canonical capitalization for a known city.
///
/// Returns the input unchanged when the name is not in the allow-list, so
/// callers can use this unconditionally when formatting output. Display
/// only; protocol validity is decided by [`is_valid_city`].
pub fn canonical_city_name(name: &str) -> &str {
    CITIES
        .iter()
        .find(|city| city.eq_ignore_ascii_case(name))
        .copied()
        .unwrap_or(name)
}
