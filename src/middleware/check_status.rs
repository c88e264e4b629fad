use crate::check::{describe, ErrorHandler};
use crate::descriptor::{ErrorDescriptor, RequestDescriptor};
use crate::status::{is_error, VendorProfile};
use http_body_util::BodyExt;
use std::future;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

#[derive(Debug, thiserror::Error)]
pub enum Error<S, B> {
    #[error(transparent)]
    Service(S),
    #[error(transparent)]
    Body(B),
    #[error(transparent)]
    Status(Box<ErrorDescriptor>),
}

#[derive(Clone, Debug, Default)]
pub struct Layer {
    profile: VendorProfile,
    on_error: Option<ErrorHandler>,
}

impl Layer {
    pub fn new(profile: VendorProfile) -> Self {
        Self {
            profile,
            on_error: None,
        }
    }

    pub fn on_error<F>(mut self, f: F) -> Self
    where
        F: Fn(&ErrorDescriptor) + Send + Sync + 'static,
    {
        self.on_error = Some(ErrorHandler::new(f));
        self
    }
}

impl<S> tower::Layer<S> for Layer {
    type Service = Service<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Service {
            inner,
            profile: self.profile,
            on_error: self.on_error.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Service<S> {
    inner: S,
    profile: VendorProfile,
    on_error: Option<ErrorHandler>,
}

impl<S, T, U> tower::Service<http::Request<T>> for Service<S>
where
    S: tower::Service<http::Request<T>, Response = http::Response<U>>,
    U: http_body::Body,
{
    type Response = http::Response<U>;
    type Error = Error<S::Error, U::Error>;
    type Future = Future<S::Future, U>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(Error::Service)
    }

    fn call(&mut self, request: http::Request<T>) -> Self::Future {
        let descriptor = RequestDescriptor::from(&request);
        Future {
            profile: self.profile,
            on_error: self.on_error.clone(),
            state: State::S0(self.inner.call(request), Some(descriptor)),
        }
    }
}

#[pin_project::pin_project]
pub struct Future<F, U>
where
    U: http_body::Body,
{
    profile: VendorProfile,
    on_error: Option<ErrorHandler>,
    #[pin]
    state: State<F, U>,
}

#[pin_project::pin_project(project = StateProj)]
#[allow(clippy::large_enum_variant)]
enum State<F, U>
where
    U: http_body::Body,
{
    S0(#[pin] F, Option<RequestDescriptor>),
    S1(
        #[pin] http_body_util::combinators::Collect<U>,
        Option<(http::response::Parts, RequestDescriptor)>,
    ),
}

impl<F, U, SE> future::Future for Future<F, U>
where
    F: future::Future<Output = Result<http::Response<U>, SE>>,
    U: http_body::Body,
{
    type Output = Result<http::Response<U>, Error<SE, U::Error>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        loop {
            match this.state.as_mut().project() {
                StateProj::S0(f, request) => {
                    let response = ready!(f.poll(cx)).map_err(Error::Service)?;
                    if !is_error(response.status()) {
                        break Poll::Ready(Ok(response));
                    }
                    let request = request.take().unwrap();
                    tracing::debug!(
                        status = %response.status(),
                        method = %request.method,
                        uri = %request.uri,
                        "error response"
                    );
                    let (parts, body) = response.into_parts();
                    this.state.set(State::S1(body.collect(), Some((parts, request))));
                }
                StateProj::S1(f, state) => {
                    let body = ready!(f.poll(cx)).map_err(Error::Body)?.to_bytes();
                    let (parts, request) = state.take().unwrap();
                    let descriptor = describe(parts, body, *this.profile, Some(request));
                    if let Some(on_error) = this.on_error.as_ref() {
                        on_error.call(&descriptor);
                    }
                    break Poll::Ready(Err(Error::Status(Box::new(descriptor))));
                }
            }
        }
    }
}
