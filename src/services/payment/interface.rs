use thiserror::Error;

/// A failure reported by an external payment SDK.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raw card fields collected by the checkout form. Never persisted; they
/// exist only long enough to be tokenized.
#[derive(Debug, Clone)]
pub struct CardFields {
    pub number: String,
    pub expiry: String,
    pub cvc: String,
}

/// Card-processing collaborator: tokenize the card, then charge the token.
/// The core treats it as a black box that yields an external transaction id
/// or an error.
pub trait CardProcessor {
    async fn create_token(&self, fields: &CardFields) -> Result<String, ProviderError>;
    async fn charge_token(&self, token: &str, amount: f64) -> Result<String, ProviderError>;
}

/// An order opened with the wallet provider, awaiting user approval.
#[derive(Debug, Clone)]
pub struct WalletOrder {
    pub order_id: String,
}

/// What capturing a wallet order resolved to. Cancellation is a deliberate
/// user action, distinct from failure, and is never retried automatically.
#[derive(Debug)]
pub enum WalletOutcome {
    Captured { transaction_id: String },
    Cancelled,
    Failed(ProviderError),
}

/// Wallet/PayPal collaborator. The SDK's approve/error/cancel callbacks are
/// modeled as the single `WalletOutcome` result of `capture_order`.
pub trait WalletProvider {
    async fn create_order(&self, amount: f64) -> Result<WalletOrder, ProviderError>;
    async fn capture_order(&self, order: &WalletOrder) -> WalletOutcome;
}
