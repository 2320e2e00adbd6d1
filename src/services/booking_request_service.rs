use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::BookingError;
use crate::models::bookings::BookingRequest;
use crate::models::resource::{Resource, Selection};
use crate::models::session::Session;
use crate::services::pricing_service::PricingService;

/// Tours without an explicit duration block out two hours.
pub const TOUR_DEFAULT_DURATION_HOURS: u32 = 2;

pub struct BookingRequestService;

impl BookingRequestService {
    /// Assemble a normalized booking request from raw selection state.
    ///
    /// Pure construction: prices via `PricingService`, derives the end
    /// time, and validates the date against `session.today`. No network.
    pub fn build(
        resource: &Resource,
        selection: &Selection,
        date: NaiveDate,
        start_time: NaiveTime,
        notes: &str,
        session: &Session,
    ) -> Result<BookingRequest, BookingError> {
        if date < session.today {
            return Err(BookingError::InvalidDate(date));
        }

        let amount = PricingService::compute_total(resource, selection)?;
        let duration_hours = Self::effective_duration(resource, selection);

        // The clock wraps past midnight and the booking keeps its start
        // date: the backend schema carries a single booking date. A 22:00
        // start with a 4-hour rental ends at 02:00 on the same record.
        let (end_time, _wrapped_days) =
            start_time.overflowing_add_signed(Duration::hours(i64::from(duration_hours)));

        Ok(BookingRequest {
            resource_kind: resource.kind(),
            resource_id: resource.id().to_string(),
            date,
            start_time,
            end_time,
            people: selection.party_size,
            amount,
            notes: notes.to_string(),
        })
    }

    fn effective_duration(resource: &Resource, selection: &Selection) -> u32 {
        match resource {
            // Tour length is fixed by the resource; the booking form offers
            // no duration choice for tours, so a selection duration never
            // overrides it.
            Resource::Tour(tour) => tour.duration.unwrap_or(TOUR_DEFAULT_DURATION_HOURS),
            // Validated against the duration menu by the pricing pass.
            Resource::Rental(_) => selection.duration_hours.unwrap_or(1),
        }
    }
}
