//! Raw-header parsing for header-form responses.
//!
//! Media downloads carry their envelope in HTTP headers rather than a JSON
//! body. The transport hands over header text as `Name:value` lines; parsing
//! is deliberately lenient: lines without a colon, without a key, or without
//! a value are skipped, and a repeated key keeps the last value.

use std::collections::HashMap;

/// Parse raw header text into a name → value map.
///
/// Each line is split on the FIRST colon; keys and values are trimmed.
/// Malformed lines never fail the parse, they are dropped.
pub fn decode_header(raw: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in raw.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            continue;
        }
        out.insert(key.to_string(), value.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_lines_and_drops_malformed_ones() {
        // "Foo:" has no value, "Bar" has no colon; both are dropped.
        let headers = decode_header("Encrypt:abc\nFoo:\nBar");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Encrypt"], "abc");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let headers = decode_header("Date:Tue, 10:00:00");
        assert_eq!(headers["Date"], "Tue, 10:00:00");
    }

    #[test]
    fn trims_whitespace_around_values() {
        let headers = decode_header("Encrypt: abc \r\nContent-Type: text/plain");
        assert_eq!(headers["Encrypt"], "abc");
        assert_eq!(headers["Content-Type"], "text/plain");
    }

    #[test]
    fn last_value_wins_on_repeats() {
        let headers = decode_header("X-Tag:one\nX-Tag:two");
        assert_eq!(headers["X-Tag"], "two");
    }

    #[test]
    fn empty_input_parses_to_empty_map() {
        assert!(decode_header("").is_empty());
        assert!(decode_header("\n\n").is_empty());
        assert!(decode_header(":value-without-key").is_empty());
    }
}
