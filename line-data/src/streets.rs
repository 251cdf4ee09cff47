//! Street-list parsing.

/// Separator between street names in a direction string.
pub const STREET_DELIMITER: &str = " - ";

/// Parse a `" - "`-delimited street list.
///
/// Returns `None` for an absent or empty string. Otherwise each segment is
/// trimmed and empty segments are dropped, so a whitespace-only input gives
/// an empty list rather than `None`.
///
/// # Examples
///
/// ```
/// use line_data::streets::parse_streets;
///
/// assert_eq!(
///     parse_streets(Some("Street A - Street B - ")),
///     Some(vec!["Street A".to_string(), "Street B".to_string()])
/// );
/// assert_eq!(parse_streets(Some("")), None);
/// assert_eq!(parse_streets(Some("   ")), Some(vec![]));
/// ```
pub fn parse_streets(raw: Option<&str>) -> Option<Vec<String>> {
    let raw = raw.filter(|s| !s.is_empty())?;

    Some(
        raw.split(STREET_DELIMITER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Non-empty input never yields None, and no segment is blank or padded
        #[test]
        fn segments_are_trimmed_and_non_empty(s in "[a-zA-Z -]{1,40}") {
            let streets = parse_streets(Some(&s));
            prop_assert!(streets.is_some());
            for street in streets.unwrap() {
                prop_assert!(!street.is_empty());
                prop_assert_eq!(street.trim(), street.as_str());
            }
        }

        /// Joining names with the delimiter parses back to the same names
        #[test]
        fn joined_names_split_back(names in prop::collection::vec("[A-Za-z][a-z]{0,10}", 1..8)) {
            let raw = names.join(STREET_DELIMITER);
            prop_assert_eq!(parse_streets(Some(&raw)), Some(names));
        }
    }
}
