#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;

use backyard_booking::backend::{BackendError, BookingOperations};
use backyard_booking::models::bookings::{Booking, BookingRequest, BookingStatus, PaymentStatus};
use backyard_booking::models::payments::PaymentAttempt;
use backyard_booking::models::resource::{Rental, ResourceKind, Tour};
use backyard_booking::models::session::{Customer, Session};
use backyard_booking::services::payment::interface::{
    CardFields, CardProcessor, ProviderError, WalletOrder, WalletOutcome, WalletProvider,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
pub struct MockState {
    pub bookings: Vec<Booking>,
    pub payments: Vec<PaymentAttempt>,
    pub tours: Vec<Tour>,
    pub rentals: Vec<Rental>,
    next_id: usize,
}

/// In-memory stand-in for the remote REST backend, with per-endpoint
/// failure injection and call counting.
#[derive(Default)]
pub struct MockBackend {
    pub state: Mutex<MockState>,
    pub fail_create_booking: AtomicBool,
    pub fail_create_payment: AtomicBool,
    pub fail_set_status: AtomicBool,
    /// Make `create_booking` suspend once before writing, so tests can
    /// overlap a second submission with one already in flight.
    pub yield_on_create: AtomicBool,
    pub create_booking_calls: AtomicUsize,
    pub create_payment_calls: AtomicUsize,
    pub set_status_calls: AtomicUsize,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(tours: Vec<Tour>, rentals: Vec<Rental>) -> Self {
        let backend = Self::default();
        {
            let mut state = backend.state.lock().unwrap();
            state.tours = tours;
            state.rentals = rentals;
        }
        backend
    }

    pub fn booking(&self, id: &str) -> Option<Booking> {
        self.state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    pub fn payment_count(&self) -> usize {
        self.state.lock().unwrap().payments.len()
    }

    fn rejected(message: &str) -> BackendError {
        BackendError::Rejected {
            status: 500,
            message: message.into(),
        }
    }
}

impl BookingOperations for MockBackend {
    async fn create_booking(&self, request: &BookingRequest) -> Result<Booking, BackendError> {
        self.create_booking_calls.fetch_add(1, Ordering::SeqCst);
        if self.yield_on_create.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
        if self.fail_create_booking.load(Ordering::SeqCst) {
            return Err(Self::rejected("booking validation failed"));
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let booking = Booking {
            id: format!("b{}", state.next_id),
            booking_type: request.resource_kind,
            resource_id: request.resource_id.clone(),
            booking_date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            number_of_people: request.people,
            total_amount: request.amount,
            notes: request.notes.clone(),
            status: BookingStatus::Confirmed,
            payment_status: PaymentStatus::Pending,
        };
        state.bookings.push(booking.clone());
        Ok(booking)
    }

    async fn cancel_booking(&self, booking_id: &str) -> Result<(), BackendError> {
        let mut state = self.state.lock().unwrap();
        match state.bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                Ok(())
            }
            None => Err(BackendError::Rejected {
                status: 404,
                message: "booking not found".into(),
            }),
        }
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BackendError> {
        Ok(self.state.lock().unwrap().bookings.clone())
    }

    async fn create_payment(
        &self,
        attempt: &PaymentAttempt,
    ) -> Result<PaymentAttempt, BackendError> {
        self.create_payment_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_payment.load(Ordering::SeqCst) {
            return Err(Self::rejected("payment store unavailable"));
        }
        self.state.lock().unwrap().payments.push(attempt.clone());
        Ok(attempt.clone())
    }

    async fn list_payments(&self) -> Result<Vec<PaymentAttempt>, BackendError> {
        Ok(self.state.lock().unwrap().payments.clone())
    }

    async fn set_payment_status(
        &self,
        booking_id: &str,
        status: PaymentStatus,
    ) -> Result<(), BackendError> {
        self.set_status_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_set_status.load(Ordering::SeqCst) {
            return Err(Self::rejected("booking update unavailable"));
        }
        let mut state = self.state.lock().unwrap();
        match state.bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.payment_status = status;
                Ok(())
            }
            None => Err(BackendError::Rejected {
                status: 404,
                message: "booking not found".into(),
            }),
        }
    }

    async fn list_tours(&self) -> Result<Vec<Tour>, BackendError> {
        Ok(self.state.lock().unwrap().tours.clone())
    }

    async fn list_rentals(&self) -> Result<Vec<Rental>, BackendError> {
        Ok(self.state.lock().unwrap().rentals.clone())
    }

    async fn resource_images(
        &self,
        _kind: ResourceKind,
        _resource_id: &str,
    ) -> Result<Vec<String>, BackendError> {
        Ok(Vec::new())
    }
}

/// Card collaborator with scripted failures and a tokenize call counter.
#[derive(Default)]
pub struct MockCardProcessor {
    pub fail_tokenize: bool,
    pub fail_charge: bool,
    pub tokenize_calls: AtomicUsize,
}

impl CardProcessor for MockCardProcessor {
    async fn create_token(&self, _fields: &CardFields) -> Result<String, ProviderError> {
        self.tokenize_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tokenize {
            return Err(ProviderError::new("card validation error"));
        }
        Ok("tok_test".into())
    }

    async fn charge_token(&self, _token: &str, _amount: f64) -> Result<String, ProviderError> {
        if self.fail_charge {
            return Err(ProviderError::new("card declined"));
        }
        Ok("TXN-CARD-1".into())
    }
}

/// What the mock wallet's capture should resolve to.
#[derive(Clone, Copy)]
pub enum WalletScript {
    Approve,
    Cancel,
    Error,
}

pub struct MockWallet {
    pub script: WalletScript,
}

impl WalletProvider for MockWallet {
    async fn create_order(&self, _amount: f64) -> Result<WalletOrder, ProviderError> {
        Ok(WalletOrder {
            order_id: "ORD-1".into(),
        })
    }

    async fn capture_order(&self, _order: &WalletOrder) -> WalletOutcome {
        match self.script {
            WalletScript::Approve => WalletOutcome::Captured {
                transaction_id: "TXN-PP-1".into(),
            },
            WalletScript::Cancel => WalletOutcome::Cancelled,
            WalletScript::Error => WalletOutcome::Failed(ProviderError::new("gateway error")),
        }
    }
}

pub fn tour_fixture() -> Tour {
    Tour {
        id: "t1".into(),
        name: "Sunset Kayak Tour".into(),
        description: "Two hours on the water".into(),
        price: 89.0,
        duration: Some(2),
        max_capacity: Some(12),
        tour_type: Some("Water".into()),
        status: Some("Active".into()),
    }
}

pub fn rental_fixture() -> Rental {
    Rental {
        id: "r1".into(),
        name: "Paddle Board".into(),
        description: "Board, paddle, and leash".into(),
        category: Some("Water".into()),
        hourly_rate: 35.0,
        daily_rate: Some(150.0),
        quantity_available: Some(4),
        status: Some("Available".into()),
    }
}

pub fn session_fixture() -> Session {
    Session::with_today(
        Customer {
            id: "u1".into(),
            full_name: "Jamie Rivers".into(),
            email: "jamie@example.com".into(),
            phone: Some("(555) 987-6543".into()),
        },
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap(),
    )
}

pub fn card_fields() -> CardFields {
    CardFields {
        number: "4242424242424242".into(),
        expiry: "12/28".into(),
        cvc: "123".into(),
    }
}
