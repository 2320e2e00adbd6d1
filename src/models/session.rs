use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The customer a flow is acting for.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Explicit per-flow context, passed into each entry point instead of a
/// global "current user" singleton.
#[derive(Debug, Clone)]
pub struct Session {
    pub customer: Customer,
    /// The date used for past-date validation.
    pub today: NaiveDate,
}

impl Session {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            today: Utc::now().date_naive(),
        }
    }

    /// Pin the validation date; used by tests and by callers that already
    /// know the customer's local date.
    pub fn with_today(customer: Customer, today: NaiveDate) -> Self {
        Self { customer, today }
    }
}
