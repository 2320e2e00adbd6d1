use crate::error::BookingError;
use crate::models::resource::{Rental, Resource, Selection, Tour};

/// Inclusive party-size bounds for any booking.
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 20;

/// Rental durations offered in the booking form, in hours.
pub const RENTAL_DURATIONS: [u32; 4] = [1, 2, 4, 8];

/// An 8-hour rental is a full day; a positive daily rate replaces the
/// hourly computation outright at this duration.
pub const FULL_DAY_HOURS: u32 = 8;

pub struct PricingService;

impl PricingService {
    /// Total price for a selection, unrounded.
    ///
    /// The unrounded value is what flows through the booking pipeline and
    /// is compared against what the backend persists;
    /// [`PricingService::round_for_display`] is for rendering only.
    pub fn compute_total(resource: &Resource, selection: &Selection) -> Result<f64, BookingError> {
        if selection.party_size < MIN_PARTY_SIZE || selection.party_size > MAX_PARTY_SIZE {
            return Err(BookingError::InvalidSelection(format!(
                "party size must be between {} and {}, got {}",
                MIN_PARTY_SIZE, MAX_PARTY_SIZE, selection.party_size
            )));
        }

        match resource {
            Resource::Tour(tour) => Self::tour_total(tour, selection),
            Resource::Rental(rental) => Self::rental_total(rental, selection),
        }
    }

    fn tour_total(tour: &Tour, selection: &Selection) -> Result<f64, BookingError> {
        if tour.price <= 0.0 {
            return Err(BookingError::InvalidSelection(format!(
                "tour {} has no per-person price",
                tour.id
            )));
        }
        Ok(tour.price * f64::from(selection.party_size))
    }

    fn rental_total(rental: &Rental, selection: &Selection) -> Result<f64, BookingError> {
        let hours = selection.duration_hours.ok_or_else(|| {
            BookingError::InvalidSelection("rental bookings require a duration".into())
        })?;
        if !RENTAL_DURATIONS.contains(&hours) {
            return Err(BookingError::InvalidSelection(format!(
                "rental duration must be one of {:?} hours, got {}",
                RENTAL_DURATIONS, hours
            )));
        }

        // Full-day override: the daily rate stands alone, it does not
        // multiply by hours.
        if hours == FULL_DAY_HOURS {
            if let Some(daily) = rental.daily_rate.filter(|rate| *rate > 0.0) {
                return Ok(daily);
            }
        }

        if rental.hourly_rate <= 0.0 {
            return Err(BookingError::InvalidSelection(format!(
                "rental {} has no hourly rate",
                rental.id
            )));
        }
        Ok(rental.hourly_rate * f64::from(hours))
    }

    /// Round to cents for display.
    pub fn round_for_display(amount: f64) -> f64 {
        (amount * 100.0).round() / 100.0
    }
}
