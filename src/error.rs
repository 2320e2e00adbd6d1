use chrono::NaiveDate;
use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the booking and payment flows.
///
/// Validation errors (`InvalidSelection`, `InvalidDate`,
/// `ArrangementIncomplete`) are recoverable locally: the caller re-prompts
/// and nothing has changed. `SubmissionInProgress` and `AmountMismatch`
/// indicate a stale or buggy caller and are never coerced away.
/// `PartialPaymentRecorded` means money was captured externally but the
/// booking could not be reconciled; it must reach a human operator.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    #[error("booking date {0} is in the past")]
    InvalidDate(NaiveDate),

    #[error("another operation is already in progress for this booking")]
    SubmissionInProgress,

    #[error("booking was not accepted by the backend")]
    BookingFailed(#[source] BackendError),

    #[error("payment amount ${attempted:.2} does not match the booking total ${expected:.2}")]
    AmountMismatch { expected: f64, attempted: f64 },

    #[error("payment {transaction_id} was captured but the booking could not be reconciled")]
    PartialPaymentRecorded {
        transaction_id: String,
        #[source]
        source: BackendError,
    },

    #[error("payment failed: {reason}")]
    PaymentFailed { reason: String },

    #[error("payment was cancelled by the customer")]
    PaymentCancelled,

    #[error("a payment preference is required for a pay-later arrangement")]
    ArrangementIncomplete,
}

impl BookingError {
    /// Whether the user may simply try the same operation again.
    ///
    /// `PartialPaymentRecorded` is deliberately not retryable: retrying a
    /// captured payment would charge the customer twice.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            BookingError::BookingFailed(_)
                | BookingError::PaymentFailed { .. }
                | BookingError::PaymentCancelled
        )
    }
}
