use chrono::NaiveDate;

use crate::models::bookings::{Booking, BookingStatus, PaymentStatus};

/// Dashboard filters over a customer's booking history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    All,
    Upcoming,
    Completed,
    Cancelled,
    Paid,
    Unpaid,
}

/// Headline numbers for the client dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookingStats {
    pub upcoming: usize,
    pub completed_adventures: usize,
    /// Sum over paid bookings only.
    pub total_spent: f64,
}

pub struct RecordsService;

impl RecordsService {
    pub fn filter<'a>(
        bookings: &'a [Booking],
        filter: BookingFilter,
        today: NaiveDate,
    ) -> Vec<&'a Booking> {
        bookings
            .iter()
            .filter(|booking| match filter {
                BookingFilter::All => true,
                BookingFilter::Upcoming => booking.is_upcoming(today),
                BookingFilter::Completed => booking.status == BookingStatus::Completed,
                BookingFilter::Cancelled => booking.status == BookingStatus::Cancelled,
                BookingFilter::Paid => booking.payment_status == PaymentStatus::Paid,
                BookingFilter::Unpaid => booking.payment_status == PaymentStatus::Pending,
            })
            .collect()
    }

    pub fn stats(bookings: &[Booking], today: NaiveDate) -> BookingStats {
        BookingStats {
            upcoming: bookings.iter().filter(|b| b.is_upcoming(today)).count(),
            completed_adventures: bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Completed)
                .count(),
            total_spent: bookings
                .iter()
                .filter(|b| b.payment_status == PaymentStatus::Paid)
                .map(|b| b.total_amount)
                .sum(),
        }
    }
}
