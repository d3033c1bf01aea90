//! The machine's cash inventory.

use serde::{Deserialize, Serialize};

use super::banknote::{Banknote, BanknotesPack};
use super::money::{Currency, Money};
use crate::error::DomainError;

/// The machine's full cash inventory for one currency.
///
/// Holds at most one pack per denomination. The deposit is owned by the
/// machine and replaced wholesale on reconfiguration; the dispenser only
/// reads it. The deposit itself does not check its currency against the
/// machine's - that is the orchestrator's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyDeposit {
    currency: Currency,
    packs: Vec<BanknotesPack>,
}

impl MoneyDeposit {
    /// Creates a deposit from a collection of packs.
    ///
    /// # Validation
    /// - At most one pack per denomination.
    pub fn new(currency: Currency, packs: Vec<BanknotesPack>) -> Result<Self, DomainError> {
        for (i, pack) in packs.iter().enumerate() {
            if packs[..i]
                .iter()
                .any(|p| p.denomination() == pack.denomination())
            {
                return Err(DomainError::DuplicateDenomination(pack.denomination()));
            }
        }
        Ok(Self { currency, packs })
    }

    /// Creates an empty deposit for the given currency.
    pub fn empty(currency: Currency) -> Self {
        Self {
            currency,
            packs: Vec::new(),
        }
    }

    /// Returns the currency of the inventory.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns a read-only snapshot of the pack counts per denomination.
    pub fn packs(&self) -> &[BanknotesPack] {
        &self.packs
    }

    /// Returns the number of notes of one denomination currently held.
    pub fn count_of(&self, denomination: Banknote) -> u32 {
        self.packs
            .iter()
            .find(|p| p.denomination() == denomination)
            .map(|p| p.count())
            .unwrap_or(0)
    }

    /// Returns the total face value held in the deposit.
    pub fn total(&self) -> Money {
        let amount: i64 = self.packs.iter().map(|p| p.face_value()).sum();
        // Pack face values are non-negative, so the sum is always a valid amount.
        Money::new(amount, self.currency).unwrap_or_else(|_| Money::zero(self.currency))
    }
}
