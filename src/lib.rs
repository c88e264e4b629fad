pub mod check;
pub mod descriptor;
pub mod header;
#[cfg(feature = "subscriber")]
pub mod logging;
pub mod middleware;
pub mod status;
pub mod util;


pub use check::{describe, exchange_and_check, materialize, ErrorHandler};
pub use descriptor::{ErrorDescriptor, RequestDescriptor, Status};
pub use status::{is_error, VendorProfile};

#[derive(Debug, thiserror::Error)]
pub enum Error<B> {
    #[error(transparent)]
    Body(B),
    #[error(transparent)]
    Status(Box<ErrorDescriptor>),
}

impl<B> Error<B> {
    pub fn status(&self) -> Option<&ErrorDescriptor> {
        match self {
            Self::Status(e) => Some(e),
            Self::Body(_) => None,
        }
    }
}
