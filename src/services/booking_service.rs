use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

use crate::backend::BookingOperations;
use crate::error::BookingError;
use crate::models::bookings::{Booking, BookingRequest};

/// Coordinates booking submission against the backend.
///
/// Guarantees at most one in-flight submission: a second `submit` while one
/// is pending is rejected with `SubmissionInProgress` instead of being
/// queued or duplicated. Successful writes bump a refresh channel so
/// booking lists and dashboard stats know to re-fetch; the re-fetch itself
/// is their job, not ours.
pub struct BookingService<B: BookingOperations> {
    backend: B,
    in_flight: AtomicBool,
    refresh: watch::Sender<u64>,
}

/// Releases the in-flight flag even if the submit future is dropped
/// mid-await (modal closed while the request is on the wire).
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<B: BookingOperations> BookingService<B> {
    pub fn new(backend: B) -> Self {
        let (refresh, _) = watch::channel(0);
        Self {
            backend,
            in_flight: AtomicBool::new(false),
            refresh,
        }
    }

    /// Dependent views subscribe here and re-fetch whenever the value
    /// changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.refresh.subscribe()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Submit a booking request. On acceptance the persisted booking comes
    /// back with its server-assigned id and initial statuses. On rejection
    /// nothing is retained; the caller may rebuild and resubmit.
    pub async fn submit(&self, request: &BookingRequest) -> Result<Booking, BookingError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(BookingError::SubmissionInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        match self.backend.create_booking(request).await {
            Ok(booking) => {
                log::info!(
                    "booking {} created for {} {} on {}",
                    booking.id,
                    booking.booking_type,
                    booking.resource_id,
                    booking.booking_date
                );
                self.signal_refresh();
                Ok(booking)
            }
            Err(source) => {
                log::warn!("booking submission rejected: {}", source);
                Err(BookingError::BookingFailed(source))
            }
        }
    }

    /// Cancel a persisted booking.
    pub async fn cancel(&self, booking_id: &str) -> Result<(), BookingError> {
        match self.backend.cancel_booking(booking_id).await {
            Ok(()) => {
                log::info!("booking {} cancelled", booking_id);
                self.signal_refresh();
                Ok(())
            }
            Err(source) => Err(BookingError::BookingFailed(source)),
        }
    }

    fn signal_refresh(&self) {
        self.refresh.send_modify(|generation| *generation += 1);
    }
}
