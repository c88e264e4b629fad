use base64::prelude::{Engine, BASE64_STANDARD, BASE64_URL_SAFE_NO_PAD};

pub use base64::DecodeError as Error;

/// Decodes standard (padded) Base64, ignoring surrounding whitespace.
pub fn decode<T>(input: T) -> Result<Vec<u8>, Error>
where
    T: AsRef<[u8]>,
{
    BASE64_STANDARD.decode(input.as_ref().trim_ascii())
}

/// Decodes URL-safe Base64, with or without padding.
pub fn decode_url_safe<T>(input: T) -> Result<Vec<u8>, Error>
where
    T: AsRef<[u8]>,
{
    let input = input.as_ref().trim_ascii();
    let input = input.strip_suffix(b"==").or_else(|| input.strip_suffix(b"=")).unwrap_or(input);
    BASE64_URL_SAFE_NO_PAD.decode(input)
}
