use headers::{ContentType, HeaderMapExt};
use http::HeaderMap;
use std::borrow::Cow;

// https://www.rfc-editor.org/rfc/rfc2616#section-3.7.1
pub const DEFAULT_CHARSET: &str = "ISO-8859-1";

/// Returns the `charset` parameter of the `Content-Type` header, if any.
pub fn declared_charset(headers: &HeaderMap) -> Option<String> {
    let mime = mime::Mime::from(headers.typed_try_get::<ContentType>().ok()??);
    let charset = mime.get_param(mime::CHARSET)?;
    Some(charset.as_str().to_owned())
}

/// Charset to decode a response body with, falling back to [`DEFAULT_CHARSET`].
pub fn resolve_charset(headers: &HeaderMap) -> String {
    declared_charset(headers).unwrap_or_else(|| DEFAULT_CHARSET.to_owned())
}

/// Decodes `body` with `charset`.
///
/// The ISO-8859-1 labels are decoded as true Latin-1. Other labels go through
/// `encoding_rs`, and labels it does not know fall back to lossy UTF-8.
pub fn decode<'a>(body: &'a [u8], charset: &str) -> Cow<'a, str> {
    let label = charset.trim().to_ascii_lowercase();
    match label.as_str() {
        "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "l1" => {
            if body.is_ascii() {
                // ascii is valid utf-8
                String::from_utf8_lossy(body)
            } else {
                Cow::Owned(body.iter().copied().map(char::from).collect())
            }
        }
        _ => match encoding_rs::Encoding::for_label(label.as_bytes()) {
            Some(encoding) => encoding.decode_without_bom_handling(body).0,
            None => {
                tracing::debug!(charset = %label, "unknown charset, decoding as utf-8");
                String::from_utf8_lossy(body)
            }
        },
    }
}
