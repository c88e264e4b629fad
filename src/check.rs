use crate::descriptor::{ErrorDescriptor, RequestDescriptor, Status};
use crate::status::{is_error, VendorProfile};
use crate::Error;
use bytes::Bytes;
use http::Response;
use http_body::Body;
use http_body_util::BodyExt;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Side-effecting hook run on every [`ErrorDescriptor`] before it is returned.
#[derive(Clone)]
pub struct ErrorHandler(Arc<dyn Fn(&ErrorDescriptor) + Send + Sync>);

impl ErrorHandler {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&ErrorDescriptor) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the hook. A panicking hook is logged and otherwise ignored.
    pub fn call(&self, descriptor: &ErrorDescriptor) {
        if panic::catch_unwind(AssertUnwindSafe(|| (self.0)(descriptor))).is_err() {
            tracing::warn!(status = %descriptor.status_code(), "error handler panicked");
        }
    }
}

impl fmt::Debug for ErrorHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorHandler").finish_non_exhaustive()
    }
}

/// Builds the descriptor of an already drained error response.
///
/// Error bodies are assumed small; the whole body is held in memory.
pub fn describe(
    parts: http::response::Parts,
    body: Bytes,
    profile: VendorProfile,
    request: Option<RequestDescriptor>,
) -> ErrorDescriptor {
    let charset = crate::header::resolve_charset(&parts.headers);
    let effective = {
        let body_text = crate::header::decode(&body, &charset);
        profile.remap(parts.status, &body_text)
    };
    if effective != parts.status {
        tracing::debug!(
            profile = %profile,
            raw_status = %parts.status,
            status = %effective,
            "remapped error status"
        );
    }
    ErrorDescriptor {
        status: Status::new(effective),
        raw_status: parts.status,
        headers: parts.headers,
        body,
        charset,
        request,
    }
}

/// Drains `response` and describes it as an error.
///
/// The body is consumed exactly once. Dropping the returned future drops the
/// body without producing a descriptor.
pub async fn materialize<B>(
    response: Response<B>,
    profile: VendorProfile,
    request: Option<RequestDescriptor>,
) -> Result<ErrorDescriptor, B::Error>
where
    B: Body,
{
    let (parts, body) = response.into_parts();
    let body = body.collect().await?.to_bytes();
    Ok(describe(parts, body, profile, request))
}

/// Passes non-error responses through; turns 4xx/5xx ones into [`Error::Status`].
///
/// `on_error` runs before the error is returned.
pub async fn exchange_and_check<B>(
    response: Response<B>,
    profile: VendorProfile,
    on_error: Option<&ErrorHandler>,
) -> Result<Response<B>, Error<B::Error>>
where
    B: Body,
{
    if !is_error(response.status()) {
        return Ok(response);
    }
    tracing::debug!(status = %response.status(), profile = %profile, "error response");
    let descriptor = materialize(response, profile, None)
        .await
        .map_err(Error::Body)?;
    if let Some(on_error) = on_error {
        on_error.call(&descriptor);
    }
    Err(Error::Status(Box::new(descriptor)))
}
