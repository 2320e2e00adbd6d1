use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::resource::ResourceKind;

/// Lifecycle of a persisted booking, owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

/// Payment side of a booking's lifecycle.
///
/// `PendingArrangement` marks a booking completed through the pay-later
/// path: the customer owes money under an agreed arrangement, which is not
/// the same thing as `Paid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
    PendingArrangement,
    Cancelled,
}

impl PaymentStatus {
    /// Legal transitions. A paid booking can only move to `Refunded`;
    /// nothing ever moves back to `Pending`.
    pub fn can_transition_to(self, next: PaymentStatus) -> bool {
        use PaymentStatus::*;
        matches!(
            (self, next),
            (Pending, Paid) | (Pending, PendingArrangement) | (Pending, Cancelled) | (Paid, Refunded)
        )
    }
}

/// A normalized booking request, built once by `BookingRequestService` and
/// consumed exactly once by `BookingService::submit`. Never mutated; if the
/// selection changes, a new request is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "type")]
    pub resource_kind: ResourceKind,
    pub resource_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub people: u32,
    /// Unrounded total. Display rounding happens at the edges only.
    pub amount: f64,
    pub notes: String,
}

/// A booking as persisted by the backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub booking_type: ResourceKind,
    pub resource_id: String,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub number_of_people: u32,
    pub total_amount: f64,
    #[serde(default)]
    pub notes: String,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
}

impl Booking {
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.booking_date >= today && self.status == BookingStatus::Confirmed
    }
}
