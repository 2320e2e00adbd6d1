pub mod http;

use thiserror::Error;

use crate::models::bookings::{Booking, BookingRequest, PaymentStatus};
use crate::models::payments::PaymentAttempt;
use crate::models::resource::{Rental, ResourceKind, Tour};

pub use http::HttpBackend;

/// Failures from the remote REST backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid backend URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Everything the booking core asks of the remote backend. The flows only
/// ever see this trait, so tests substitute an in-memory implementation.
pub trait BookingOperations {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, BackendError>;
    async fn cancel_booking(&self, booking_id: &str) -> Result<(), BackendError>;
    async fn list_bookings(&self) -> Result<Vec<Booking>, BackendError>;

    async fn create_payment(&self, attempt: &PaymentAttempt)
        -> Result<PaymentAttempt, BackendError>;
    async fn list_payments(&self) -> Result<Vec<PaymentAttempt>, BackendError>;
    async fn set_payment_status(
        &self,
        booking_id: &str,
        status: PaymentStatus,
    ) -> Result<(), BackendError>;

    async fn list_tours(&self) -> Result<Vec<Tour>, BackendError>;
    async fn list_rentals(&self) -> Result<Vec<Rental>, BackendError>;
    async fn resource_images(
        &self,
        kind: ResourceKind,
        resource_id: &str,
    ) -> Result<Vec<String>, BackendError>;
}
