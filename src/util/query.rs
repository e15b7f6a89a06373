//! Query-string parsing.

use std::collections::HashMap;

/// Parses a query string into a key→value map.
///
/// Accepts either a full URL (everything after the first `?` is parsed) or
/// a bare query string. `+` decodes to a space, `%XX` escapes are decoded,
/// and keys without a `=` map to an empty value.
///
/// # Example
/// ```
/// use spanner::parse_query;
///
/// let params = parse_query("https://example.test/page?id=1&name=foo+bar&flag");
/// assert_eq!(params["id"], "1");
/// assert_eq!(params["name"], "foo bar");
/// assert_eq!(params["flag"], "");
/// ```
pub fn parse_query(input: &str) -> HashMap<String, String> {
    let query = match input.split_once('?') {
        Some((_, q)) => q,
        None => input,
    };

    let mut params = HashMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key.is_empty() {
            continue;
        }
        params.insert(decode(key), decode(value));
    }
    params
}

/// Decodes `+` and `%XX` escapes; malformed escapes are kept literally.
fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                (Some(hi), Some(lo)) => {
                    out.push(hi * 16 + lo);
                    i += 3;
                }
                _ => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_query_string() {
        let params = parse_query("id=1&name=abc");
        assert_eq!(params.len(), 2);
        assert_eq!(params["id"], "1");
        assert_eq!(params["name"], "abc");
    }

    #[test]
    fn test_full_url() {
        let params = parse_query("https://example.test/p?a=1&b=2");
        assert_eq!(params["a"], "1");
        assert_eq!(params["b"], "2");
    }

    #[test]
    fn test_plus_and_percent_decoding() {
        let params = parse_query("msg=hello+world&path=%2Ftmp%2Fx");
        assert_eq!(params["msg"], "hello world");
        assert_eq!(params["path"], "/tmp/x");
    }

    #[test]
    fn test_valueless_and_empty_segments() {
        let params = parse_query("flag&&=skipped&ok=1");
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params["ok"], "1");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_malformed_escape_is_literal() {
        let params = parse_query("k=%zz");
        assert_eq!(params["k"], "%zz");
    }

    #[test]
    fn test_no_query_part_in_url() {
        let params = parse_query("a+b=c%20d");
        assert_eq!(params["a b"], "c d");
    }
}
