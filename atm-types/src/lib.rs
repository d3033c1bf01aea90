//! # ATM Types
//!
//! Domain types and port traits for the ATM withdrawal engine.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Money, Banknote, MoneyDeposit, ...)
//! - `ports/` - Trait definitions that bank adapters must implement
//! - `error/` - Domain and operation error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AuthorizationToken, Banknote, BanknotesPack, Card, Currency, Money, MoneyDeposit, PinCode,
    Withdrawal,
};
pub use error::{AtmError, DomainError, ErrorCode};
pub use ports::{AccountError, AuthorizationError, Bank};
