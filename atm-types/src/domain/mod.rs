//! Domain models for the ATM withdrawal engine.

pub mod banknote;
pub mod credentials;
pub mod deposit;
pub mod money;
pub mod withdrawal;

pub use banknote::{Banknote, BanknotesPack};
pub use credentials::{AuthorizationToken, Card, PinCode};
pub use deposit::MoneyDeposit;
pub use money::{Currency, Money};
pub use withdrawal::Withdrawal;
