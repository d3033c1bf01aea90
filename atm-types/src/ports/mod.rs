//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The machine depends on these traits, not concrete implementations.

mod bank;

pub use bank::{AccountError, AuthorizationError, Bank};
