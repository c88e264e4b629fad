use percent_encoding::percent_decode;
use std::borrow::Cow;

/// Parses an `application/x-www-form-urlencoded` query string into ordered pairs.
///
/// A leading `?` is ignored. A segment without `=` has an empty value.
pub fn parse(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((name, value)) => (decode(name), decode(value)),
            None => (decode(segment), String::new()),
        })
        .collect()
}

/// First value of `name` in `query`.
pub fn get(query: &str, name: &str) -> Option<String> {
    parse(query)
        .into_iter()
        .find_map(|(k, v)| (k == name).then_some(v))
}

fn decode(s: &str) -> String {
    let s = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };
    percent_decode(s.as_bytes()).decode_utf8_lossy().into_owned()
}
