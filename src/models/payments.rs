use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::BookingError;

/// How the customer chose to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaymentMethod {
    Card,
    PayPal,
    DeferredArrangement,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "Credit Card"),
            PaymentMethod::PayPal => write!(f, "PayPal"),
            PaymentMethod::DeferredArrangement => write!(f, "Pay Later Arrangement"),
        }
    }
}

/// Outcome of one try at collecting payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PaymentAttemptStatus {
    Success,
    Failed,
    Cancelled,
    PendingArrangement,
}

/// One try at collecting payment for a booking. A booking may accumulate
/// several failed attempts before one succeeds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAttempt {
    /// Client-side identity, assigned before the backend sees the record.
    pub id: Uuid,
    pub booking_id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    /// Processor-issued id; present for Card/PayPal, absent for deferred
    /// arrangements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub status: PaymentAttemptStatus,
    #[serde(default)]
    pub notes: String,
}

impl PaymentAttempt {
    pub fn new(
        booking_id: impl Into<String>,
        amount: f64,
        method: PaymentMethod,
        transaction_id: Option<String>,
        status: PaymentAttemptStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id: booking_id.into(),
            amount,
            method,
            transaction_id,
            status,
            notes: String::new(),
        }
    }

    /// Receipt reference: the processor transaction id when there is one,
    /// otherwise a booking-derived reference for deferred arrangements.
    pub fn receipt_reference(&self) -> String {
        match &self.transaction_id {
            Some(id) => id.clone(),
            None => format!("BOOKING-{}", self.booking_id),
        }
    }
}

/// How a pay-later customer intends to settle up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum DeferredPreference {
    CashOnArrival,
    BankTransfer,
    Check,
    CallToArrange,
}

impl std::fmt::Display for DeferredPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeferredPreference::CashOnArrival => write!(f, "cash-on-arrival"),
            DeferredPreference::BankTransfer => write!(f, "bank-transfer"),
            DeferredPreference::Check => write!(f, "check"),
            DeferredPreference::CallToArrange => write!(f, "call-to-arrange"),
        }
    }
}

impl FromStr for DeferredPreference {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "cash-on-arrival" => Ok(DeferredPreference::CashOnArrival),
            "bank-transfer" => Ok(DeferredPreference::BankTransfer),
            "check" => Ok(DeferredPreference::Check),
            "call-to-arrange" => Ok(DeferredPreference::CallToArrange),
            _ => Err(BookingError::ArrangementIncomplete),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deferred_preference_parses_the_enumerated_set() {
        for (text, expected) in [
            ("cash-on-arrival", DeferredPreference::CashOnArrival),
            ("bank-transfer", DeferredPreference::BankTransfer),
            ("check", DeferredPreference::Check),
            ("call-to-arrange", DeferredPreference::CallToArrange),
        ] {
            assert_eq!(text.parse::<DeferredPreference>().unwrap(), expected);
            assert_eq!(expected.to_string(), text);
        }

        assert!(matches!(
            "".parse::<DeferredPreference>(),
            Err(BookingError::ArrangementIncomplete)
        ));
        assert!(matches!(
            "venmo".parse::<DeferredPreference>(),
            Err(BookingError::ArrangementIncomplete)
        ));
    }

    #[test]
    fn receipt_reference_falls_back_to_booking_id() {
        let card = PaymentAttempt::new(
            "b1",
            50.0,
            PaymentMethod::Card,
            Some("TXN123".into()),
            PaymentAttemptStatus::Success,
        );
        assert_eq!(card.receipt_reference(), "TXN123");

        let deferred = PaymentAttempt::new(
            "b1",
            50.0,
            PaymentMethod::DeferredArrangement,
            None,
            PaymentAttemptStatus::PendingArrangement,
        );
        assert_eq!(deferred.receipt_reference(), "BOOKING-b1");
    }
}
