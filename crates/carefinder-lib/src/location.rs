//! Location string classification.
//!
//! Turns the free-form `location` query input into either a postal code or a
//! city/state pair. The classifier never rejects input; it only decides which
//! filter columns the text should feed.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a 5-digit postal code with an optional +4 suffix.
static ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{5})(?:-\d{4})?$").expect("postal code pattern is valid"));

/// Classified location input.
///
/// At most one of the ZIP / city-state branches carries data. A `zip5` is
/// always exactly 5 ASCII digits; a `state` is 1-2 uppercase characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLocation {
    /// A 5-digit postal code (any +4 suffix already discarded).
    Zip { zip5: String },
    /// A city and/or state pair split on the first comma. Either side may be
    /// absent: `"Austin"` alone yields a city with no state.
    CityState {
        city: Option<String>,
        state: Option<String>,
    },
    /// Nothing usable was supplied.
    Empty,
}

/// Classify a free-text location string.
///
/// Blank or absent input yields [`ParsedLocation::Empty`]. Input matching a
/// 5-digit postal code (optionally `-NNNN` suffixed) yields
/// [`ParsedLocation::Zip`] with the first five digits. Anything else is split
/// on the first comma: the left side is the trimmed city, the right side is
/// uppercased and truncated to its first two characters as the state.
///
/// The split is permissive on purpose: `"1600, Pennsylvania Ave"` still
/// yields a city/state pair. Tightening this would silently change which rows
/// long-standing queries match.
pub fn parse_location(input: Option<&str>) -> ParsedLocation {
    let trimmed = match input {
        Some(raw) => raw.trim(),
        None => return ParsedLocation::Empty,
    };
    if trimmed.is_empty() {
        return ParsedLocation::Empty;
    }

    if let Some(captures) = ZIP_RE.captures(trimmed) {
        return ParsedLocation::Zip {
            zip5: captures[1].to_string(),
        };
    }

    let (city_part, state_part) = match trimmed.split_once(',') {
        Some((city, state)) => (city, Some(state)),
        None => (trimmed, None),
    };

    let city = Some(city_part.trim())
        .filter(|city| !city.is_empty())
        .map(str::to_string);
    let state = state_part
        .map(str::trim)
        .filter(|state| !state.is_empty())
        .map(|state| state.to_uppercase().chars().take(2).collect());

    ParsedLocation::CityState { city, state }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city_state(city: Option<&str>, state: Option<&str>) -> ParsedLocation {
        ParsedLocation::CityState {
            city: city.map(str::to_string),
            state: state.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_five_digit_zip() {
        assert_eq!(
            parse_location(Some("73301")),
            ParsedLocation::Zip {
                zip5: "73301".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zip_plus_four_discards_suffix() {
        assert_eq!(
            parse_location(Some("73301-0001")),
            ParsedLocation::Zip {
                zip5: "73301".to_string()
            }
        );
    }

    #[test]
    fn test_parse_zip_trims_whitespace() {
        assert_eq!(
            parse_location(Some("  73301  ")),
            ParsedLocation::Zip {
                zip5: "73301".to_string()
            }
        );
    }

    #[test]
    fn test_parse_city_and_state() {
        assert_eq!(
            parse_location(Some("Dallas, tx")),
            city_state(Some("Dallas"), Some("TX"))
        );
    }

    #[test]
    fn test_parse_city_only() {
        assert_eq!(parse_location(Some("Austin")), city_state(Some("Austin"), None));
    }

    #[test]
    fn test_parse_state_truncated_to_two_characters() {
        assert_eq!(
            parse_location(Some("Austin, Texas")),
            city_state(Some("Austin"), Some("TE"))
        );
    }

    #[test]
    fn test_parse_empty_and_absent_input() {
        assert_eq!(parse_location(None), ParsedLocation::Empty);
        assert_eq!(parse_location(Some("")), ParsedLocation::Empty);
        assert_eq!(parse_location(Some("   ")), ParsedLocation::Empty);
    }

    #[test]
    fn test_parse_lone_comma_yields_empty_pair() {
        assert_eq!(parse_location(Some(",")), city_state(None, None));
    }

    #[test]
    fn test_parse_six_digits_is_not_a_zip() {
        assert_eq!(
            parse_location(Some("123456")),
            city_state(Some("123456"), None)
        );
    }

    #[test]
    fn test_parse_malformed_comma_string_stays_permissive() {
        // Street addresses with commas are still treated as city/state pairs.
        assert_eq!(
            parse_location(Some("1600, Pennsylvania Ave")),
            city_state(Some("1600"), Some("PE"))
        );
    }

    #[test]
    fn test_parse_splits_on_first_comma_only() {
        assert_eq!(
            parse_location(Some("Winston, Salem, NC")),
            city_state(Some("Winston"), Some("SA"))
        );
    }
}
