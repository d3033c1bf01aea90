//! Withdrawal orchestrator.
//!
//! Coordinates validation, the bank collaborator, and the banknote
//! dispenser. Contains NO infrastructure logic - pure business
//! orchestration.

use atm_types::{
    AtmError, Bank, Card, Currency, Money, MoneyDeposit, PinCode, Withdrawal,
};

use crate::dispense;

/// The ATM withdrawal engine.
///
/// Generic over `B: Bank` - the collaborator is injected at compile time.
/// This enables:
/// - Swapping bank clients without code changes
/// - Testing with a recording mock
/// - Compile-time checks for port implementation
///
/// One machine instance serves one request at a time; withdrawals take
/// `&self` and reconfiguration takes `&mut self`, so shared use across
/// threads requires external locking around `set_deposit`.
pub struct AtMachine<B: Bank> {
    bank: B,
    currency: Currency,
    deposit: MoneyDeposit,
}

impl<B: Bank> AtMachine<B> {
    /// Creates a machine operating in the given currency, with an empty
    /// cash deposit.
    pub fn new(bank: B, currency: Currency) -> Self {
        Self {
            bank,
            currency,
            deposit: MoneyDeposit::empty(currency),
        }
    }

    /// Returns a reference to the underlying bank collaborator.
    pub fn bank(&self) -> &B {
        &self.bank
    }

    /// Returns the machine's operating currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns a read-only view of the current cash inventory.
    pub fn deposit(&self) -> &MoneyDeposit {
        &self.deposit
    }

    /// Replaces the cash inventory wholesale.
    ///
    /// There is no partial update and no merge with prior state.
    pub fn set_deposit(&mut self, deposit: MoneyDeposit) {
        tracing::info!(total = %deposit.total(), "cash deposit replaced");
        self.deposit = deposit;
    }

    /// Withdraws the requested amount.
    ///
    /// Stages run strictly in order, short-circuiting on the first
    /// failure: currency check, authorization, banknote selection,
    /// charge. Each failure carries exactly one [`ErrorCode`] naming the
    /// stage; see [`AtmError::code`].
    ///
    /// The deposit is read but never decremented, so repeated
    /// withdrawals can plan against the same notes. Replenishment and
    /// depletion tracking live outside this engine; callers that need
    /// them must swap the deposit via [`set_deposit`](Self::set_deposit).
    ///
    /// [`ErrorCode`]: atm_types::ErrorCode
    pub async fn withdraw(
        &self,
        pin: &PinCode,
        card: &Card,
        amount: &Money,
    ) -> Result<Withdrawal, AtmError> {
        // Stage 1: currency check, before the bank is ever contacted.
        if amount.currency() != self.currency {
            tracing::warn!(
                requested = %amount.currency(),
                machine = %self.currency,
                "withdrawal rejected: wrong currency"
            );
            return Err(AtmError::WrongCurrency {
                expected: self.currency,
                got: amount.currency(),
            });
        }

        // Stage 2: authorization.
        let token = self
            .bank
            .authorize(pin, card)
            .await
            .map_err(AtmError::Authorization)?;
        tracing::debug!(card = %card, "authorization granted");

        // Stage 3: amount validation and banknote selection.
        if amount.amount() <= 0 {
            return Err(AtmError::WrongAmount);
        }
        let banknotes =
            dispense::plan_withdrawal(amount.amount(), &self.deposit).ok_or_else(|| {
                tracing::warn!(amount = %amount, "deposit cannot satisfy requested amount");
                AtmError::WrongAmount
            })?;

        // Stage 4: charge. Only reached when the notes are already planned.
        self.bank
            .charge(token, *amount)
            .await
            .map_err(AtmError::NoFundsOnAccount)?;

        tracing::info!(amount = %amount, notes = banknotes.len(), "withdrawal dispensed");
        Ok(Withdrawal::new(banknotes))
    }
}
