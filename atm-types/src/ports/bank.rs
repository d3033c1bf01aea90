//! Bank collaborator port.
//!
//! This trait defines the interface to the authorization/ledger service.
//! Implementations can be network clients, simulation ledgers, or test
//! doubles.

use crate::domain::{AuthorizationToken, Card, Money, PinCode};

/// Error type for the authorize stage.
#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unrecognized card")]
    UnknownCard,
}

/// Error type for the charge stage.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: i64, requested: i64 },

    #[error("Unknown or already used authorization token")]
    UnknownToken,

    #[error("Account is not held in the requested currency")]
    CurrencyMismatch,
}

/// Port trait for the bank collaborator.
///
/// Both calls are treated as blocking request-response exchanges: no
/// retry and no backoff happen here, and any failure maps to a terminal
/// operation failure in the machine.
#[async_trait::async_trait]
pub trait Bank: Send + Sync {
    /// Verifies the cardholder's credentials and issues a single-use token.
    async fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError>;

    /// Debits the account behind the token by the given amount.
    async fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), AccountError>;
}
