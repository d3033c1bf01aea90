//! Error types for the ATM withdrawal engine.

use serde::{Deserialize, Serialize};

use crate::domain::{Banknote, Currency};
use crate::ports::{AccountError, AuthorizationError};

/// Domain-level errors (constructor and validation failures).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Amount cannot be negative")]
    NegativeAmount,

    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },

    #[error("Insufficient funds: available {available}, requested {requested}")]
    InsufficientFunds { available: i64, requested: i64 },

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("A pack of {0} must contain at least one note")]
    EmptyPack(Banknote),

    #[error("Deposit already contains a pack of {0}")]
    DuplicateDenomination(Banknote),

    #[error("PIN must be exactly four digits, each 0-9")]
    InvalidPin,

    #[error("Card number cannot be empty")]
    EmptyCardNumber,
}

/// Coarse category of a failed withdrawal, identifying the stage that failed.
///
/// Exactly one code is attached per failure; codes are mutually exclusive
/// per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    WrongCurrency,
    Authorization,
    WrongAmount,
    NoFundsOnAccount,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::WrongCurrency => write!(f, "WRONG_CURRENCY"),
            ErrorCode::Authorization => write!(f, "AUTHORIZATION"),
            ErrorCode::WrongAmount => write!(f, "WRONG_AMOUNT"),
            ErrorCode::NoFundsOnAccount => write!(f, "NO_FUNDS_ON_ACCOUNT"),
        }
    }
}

/// Operation-level failure of a withdrawal.
///
/// Each variant corresponds to exactly one [`ErrorCode`]; bank-side
/// failures are carried as sources but callers are expected to branch on
/// the code, not the inner error.
#[derive(Debug, thiserror::Error)]
pub enum AtmError {
    #[error("Requested currency {got} does not match machine currency {expected}")]
    WrongCurrency { expected: Currency, got: Currency },

    #[error("Authorization failed")]
    Authorization(#[source] AuthorizationError),

    #[error("Amount cannot be dispensed from the current deposit")]
    WrongAmount,

    #[error("Account could not be charged")]
    NoFundsOnAccount(#[source] AccountError),
}

impl AtmError {
    /// Returns the stage code of this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            AtmError::WrongCurrency { .. } => ErrorCode::WrongCurrency,
            AtmError::Authorization(_) => ErrorCode::Authorization,
            AtmError::WrongAmount => ErrorCode::WrongAmount,
            AtmError::NoFundsOnAccount(_) => ErrorCode::NoFundsOnAccount,
        }
    }
}
