use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode, Uri, Version};
use std::borrow::Cow;
use std::fmt;

/// Effective status of a materialized error response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// A registered status with a canonical reason phrase.
    Standard(StatusCode),
    /// A code outside the registry, kept as received.
    Unknown(StatusCode),
}

impl Status {
    pub fn new(code: StatusCode) -> Self {
        if code.canonical_reason().is_some() {
            Self::Standard(code)
        } else {
            Self::Unknown(code)
        }
    }

    pub fn code(&self) -> StatusCode {
        match *self {
            Self::Standard(code) | Self::Unknown(code) => code,
        }
    }

    pub fn reason_phrase(&self) -> Option<&'static str> {
        match self {
            Self::Standard(code) => code.canonical_reason(),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// The request a failed response answered.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RequestDescriptor {
    pub method: Method,
    pub uri: Uri,
    pub version: Version,
    pub headers: HeaderMap,
}

impl<T> From<&http::Request<T>> for RequestDescriptor {
    fn from(request: &http::Request<T>) -> Self {
        Self {
            method: request.method().clone(),
            uri: request.uri().clone(),
            version: request.version(),
            headers: request.headers().clone(),
        }
    }
}

impl From<&http::request::Parts> for RequestDescriptor {
    fn from(parts: &http::request::Parts) -> Self {
        Self {
            method: parts.method.clone(),
            uri: parts.uri.clone(),
            version: parts.version,
            headers: parts.headers.clone(),
        }
    }
}

/// A fully drained error response.
#[derive(Clone, Debug)]
pub struct ErrorDescriptor {
    pub(crate) status: Status,
    pub(crate) raw_status: StatusCode,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Bytes,
    pub(crate) charset: String,
    pub(crate) request: Option<RequestDescriptor>,
}

impl ErrorDescriptor {
    pub fn status(&self) -> Status {
        self.status
    }

    /// Shorthand for `self.status().code()`.
    pub fn status_code(&self) -> StatusCode {
        self.status.code()
    }

    /// Status as received on the wire, before vendor remapping.
    pub fn raw_status(&self) -> StatusCode {
        self.raw_status
    }

    pub fn reason_phrase(&self) -> Option<&'static str> {
        self.status.reason_phrase()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn charset(&self) -> &str {
        &self.charset
    }

    pub fn request(&self) -> Option<&RequestDescriptor> {
        self.request.as_ref()
    }

    /// Body decoded with [`Self::charset`].
    pub fn body_text(&self) -> Cow<'_, str> {
        crate::header::decode(&self.body, &self.charset)
    }

    pub fn json_body<T>(&self) -> Result<T, crate::util::json::Error>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        crate::util::json::from_slice(&self.body)
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::Standard(code) => write!(
                f,
                "http status {} {}",
                code.as_u16(),
                code.canonical_reason().unwrap_or_default(),
            )?,
            Status::Unknown(code) => write!(f, "unknown http status {}", code.as_u16())?,
        }
        if let Some(request) = &self.request {
            write!(f, " ({} {})", request.method, request.uri)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorDescriptor {}
