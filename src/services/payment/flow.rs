use crate::backend::BookingOperations;
use crate::error::BookingError;
use crate::models::bookings::{Booking, PaymentStatus};
use crate::models::payments::{
    DeferredPreference, PaymentAttempt, PaymentAttemptStatus, PaymentMethod,
};

use super::interface::{CardFields, CardProcessor, WalletOutcome, WalletProvider};

/// Where a booking's payment flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentFlowState {
    AwaitingMethodChoice,
    CardPending,
    WalletPending,
    DeferredPending,
    Completed,
    Failed,
    Cancelled,
}

/// Drives payment completion for one booking.
///
/// `AwaitingMethodChoice -> {CardPending, WalletPending, DeferredPending}
/// -> {Completed, Failed, Cancelled}`. The controller advances on one event
/// at a time; its suspension points are exactly the external SDK calls and
/// the two backend writes. On success it issues exactly one payment-record
/// write and then exactly one booking status write, strictly in that order,
/// so a booking is never shown paid before its payment is durably recorded.
pub struct PaymentFlowController<'a, B: BookingOperations> {
    backend: &'a B,
    booking: Booking,
    state: PaymentFlowState,
    attempts: Vec<PaymentAttempt>,
}

impl<'a, B: BookingOperations> PaymentFlowController<'a, B> {
    /// Entered immediately after a successful booking submission.
    pub fn new(backend: &'a B, booking: Booking) -> Self {
        Self {
            backend,
            booking,
            state: PaymentFlowState::AwaitingMethodChoice,
            attempts: Vec::new(),
        }
    }

    pub fn state(&self) -> PaymentFlowState {
        self.state
    }

    pub fn booking(&self) -> &Booking {
        &self.booking
    }

    /// Every attempt made through this controller, failed ones included.
    pub fn attempts(&self) -> &[PaymentAttempt] {
        &self.attempts
    }

    /// Pay by card: tokenize, charge, then record and reconcile.
    pub async fn pay_with_card<C: CardProcessor>(
        &mut self,
        processor: &C,
        fields: &CardFields,
        amount: f64,
    ) -> Result<PaymentAttempt, BookingError> {
        self.ensure_ready(amount)?;
        self.state = PaymentFlowState::CardPending;

        let token = match processor.create_token(fields).await {
            Ok(token) => token,
            Err(err) => return Err(self.fail_attempt(PaymentMethod::Card, amount, err)),
        };
        let transaction_id = match processor.charge_token(&token, amount).await {
            Ok(id) => id,
            Err(err) => return Err(self.fail_attempt(PaymentMethod::Card, amount, err)),
        };

        let attempt = PaymentAttempt::new(
            self.booking.id.clone(),
            amount,
            PaymentMethod::Card,
            Some(transaction_id),
            PaymentAttemptStatus::Success,
        );
        self.finalize(attempt, PaymentStatus::Paid, true).await
    }

    /// Pay through the wallet provider. The SDK's approve/error/cancel
    /// callbacks arrive as one `WalletOutcome`.
    pub async fn pay_with_wallet<W: WalletProvider>(
        &mut self,
        wallet: &W,
        amount: f64,
    ) -> Result<PaymentAttempt, BookingError> {
        self.ensure_ready(amount)?;
        self.state = PaymentFlowState::WalletPending;

        let order = match wallet.create_order(amount).await {
            Ok(order) => order,
            Err(err) => return Err(self.fail_attempt(PaymentMethod::PayPal, amount, err)),
        };
        match wallet.capture_order(&order).await {
            WalletOutcome::Captured { transaction_id } => {
                let attempt = PaymentAttempt::new(
                    self.booking.id.clone(),
                    amount,
                    PaymentMethod::PayPal,
                    Some(transaction_id),
                    PaymentAttemptStatus::Success,
                );
                self.finalize(attempt, PaymentStatus::Paid, true).await
            }
            WalletOutcome::Cancelled => {
                // Deliberate user action: booking stays Pending, nothing is
                // recorded, and nothing retries on its own.
                log::info!(
                    "wallet payment for booking {} cancelled by the customer",
                    self.booking.id
                );
                self.state = PaymentFlowState::Cancelled;
                Err(BookingError::PaymentCancelled)
            }
            WalletOutcome::Failed(err) => {
                Err(self.fail_attempt(PaymentMethod::PayPal, amount, err))
            }
        }
    }

    /// Complete the booking without collecting money now. Requires an
    /// agreed preference for how the customer will settle up; the booking's
    /// payment status becomes `PendingArrangement`, not `Paid`.
    pub async fn pay_later(
        &mut self,
        preference: DeferredPreference,
        notes: &str,
    ) -> Result<PaymentAttempt, BookingError> {
        self.ensure_ready(self.booking.total_amount)?;
        self.state = PaymentFlowState::DeferredPending;

        let mut attempt = PaymentAttempt::new(
            self.booking.id.clone(),
            self.booking.total_amount,
            PaymentMethod::DeferredArrangement,
            None,
            PaymentAttemptStatus::PendingArrangement,
        );
        attempt.notes = if notes.is_empty() {
            format!("Preference: {}", preference)
        } else {
            format!("Preference: {}; {}", preference, notes)
        };
        self.finalize(attempt, PaymentStatus::PendingArrangement, false)
            .await
    }

    /// The customer closed the flow before reaching a terminal state. An
    /// accepted outcome, not an error: the booking stays `Pending` and no
    /// attempt is recorded.
    pub fn abandon(&mut self) {
        if self.state != PaymentFlowState::Completed {
            log::info!(
                "payment flow for booking {} abandoned in {:?}; booking stays {:?}",
                self.booking.id,
                self.state,
                self.booking.payment_status
            );
            self.state = PaymentFlowState::Cancelled;
        }
    }

    /// Return to method choice after a failure or cancellation. The user
    /// decides to retry; nothing retries automatically.
    pub fn retry(&mut self) -> bool {
        match self.state {
            PaymentFlowState::Failed | PaymentFlowState::Cancelled => {
                self.state = PaymentFlowState::AwaitingMethodChoice;
                true
            }
            _ => false,
        }
    }

    /// An SDK callback can resolve after the user already closed the flow.
    /// The in-flight write cannot be recalled, so the outcome is logged for
    /// reconciliation and never resurfaced in a closed UI.
    pub fn reconcile_late(&self, outcome: &WalletOutcome) {
        log::warn!(
            "late payment callback for booking {} in state {:?}: {:?}",
            self.booking.id,
            self.state,
            outcome
        );
    }

    /// Guard every payment entry point: the flow must be at method choice
    /// (or user-initiated retry from a terminal failure), and the amount
    /// must equal the booking total before anything touches the network.
    fn ensure_ready(&self, amount: f64) -> Result<(), BookingError> {
        match self.state {
            PaymentFlowState::AwaitingMethodChoice
            | PaymentFlowState::Failed
            | PaymentFlowState::Cancelled => {}
            PaymentFlowState::CardPending
            | PaymentFlowState::WalletPending
            | PaymentFlowState::DeferredPending
            | PaymentFlowState::Completed => return Err(BookingError::SubmissionInProgress),
        }
        // Compared unrounded: a stale UI total must never silently charge
        // the wrong amount.
        if amount != self.booking.total_amount {
            return Err(BookingError::AmountMismatch {
                expected: self.booking.total_amount,
                attempted: amount,
            });
        }
        Ok(())
    }

    fn fail_attempt(
        &mut self,
        method: PaymentMethod,
        amount: f64,
        err: super::interface::ProviderError,
    ) -> BookingError {
        log::warn!(
            "{} payment for booking {} failed: {}",
            method,
            self.booking.id,
            err
        );
        self.attempts.push(PaymentAttempt::new(
            self.booking.id.clone(),
            amount,
            method,
            None,
            PaymentAttemptStatus::Failed,
        ));
        self.state = PaymentFlowState::Failed;
        BookingError::PaymentFailed {
            reason: err.to_string(),
        }
    }

    /// The ordered completion pair: payment record first, booking status
    /// second. `captured` marks that money already moved externally, in
    /// which case a backend failure here is `PartialPaymentRecorded` and a
    /// human operator must reconcile it.
    async fn finalize(
        &mut self,
        attempt: PaymentAttempt,
        target: PaymentStatus,
        captured: bool,
    ) -> Result<PaymentAttempt, BookingError> {
        let reference = attempt.receipt_reference();

        let recorded = match self.backend.create_payment(&attempt).await {
            Ok(recorded) => recorded,
            Err(source) => {
                self.state = PaymentFlowState::Failed;
                return Err(if captured {
                    BookingError::PartialPaymentRecorded {
                        transaction_id: reference,
                        source,
                    }
                } else {
                    BookingError::PaymentFailed {
                        reason: source.to_string(),
                    }
                });
            }
        };

        if let Err(source) = self
            .backend
            .set_payment_status(&self.booking.id, target)
            .await
        {
            self.state = PaymentFlowState::Failed;
            // Local payment status stays untouched: the booking is not
            // shown paid until the backend agrees.
            return Err(if captured {
                BookingError::PartialPaymentRecorded {
                    transaction_id: reference,
                    source,
                }
            } else {
                BookingError::PaymentFailed {
                    reason: source.to_string(),
                }
            });
        }

        debug_assert!(self.booking.payment_status.can_transition_to(target));
        self.booking.payment_status = target;
        self.state = PaymentFlowState::Completed;
        log::info!(
            "booking {} completed payment via {} ({})",
            self.booking.id,
            recorded.method,
            reference
        );
        self.attempts.push(recorded.clone());
        Ok(recorded)
    }
}
