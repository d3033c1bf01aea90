//! The result of a successful withdrawal.

use serde::{Deserialize, Serialize};

use super::banknote::Banknote;
use super::money::{Currency, Money};

/// The banknotes handed to the cardholder.
///
/// Notes are ordered from highest to lowest denomination, duplicates
/// adjacent, and sum exactly to the requested amount. A `Withdrawal` is
/// only ever produced whole - no partial dispensing exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdrawal {
    banknotes: Vec<Banknote>,
}

impl Withdrawal {
    /// Creates a withdrawal from an already-ordered note sequence.
    pub fn new(banknotes: Vec<Banknote>) -> Self {
        Self { banknotes }
    }

    /// Returns the dispensed notes, highest denomination first.
    pub fn banknotes(&self) -> &[Banknote] {
        &self.banknotes
    }

    /// Returns the total face value of the dispensed notes.
    pub fn total(&self, currency: Currency) -> Money {
        let amount: i64 = self.banknotes.iter().map(|b| b.value()).sum();
        Money::new(amount, currency).unwrap_or_else(|_| Money::zero(currency))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_face_values() {
        let withdrawal = Withdrawal::new(vec![Banknote::Pln50, Banknote::Pln20]);
        assert_eq!(withdrawal.total(Currency::PLN).amount(), 70);
    }

    #[test]
    fn test_empty_withdrawal() {
        let withdrawal = Withdrawal::new(Vec::new());
        assert!(withdrawal.banknotes().is_empty());
        assert_eq!(withdrawal.total(Currency::PLN), Money::zero(Currency::PLN));
    }
}
