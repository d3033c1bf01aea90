//! # ATM Bank
//!
//! Concrete bank adapter for the ATM withdrawal engine.
//! This crate provides an in-memory ledger that implements the `Bank`
//! port - the collaborator a simulation harness (or a test) plugs into
//! the machine in place of a real banking network client.

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use atm_types::{
    AccountError, AuthorizationError, AuthorizationToken, Bank, Card, Money, PinCode,
};

/// One account held by the in-memory bank.
#[derive(Debug, Clone)]
struct AccountRecord {
    pin: PinCode,
    balance: Money,
}

/// A successful debit, kept for inspection.
#[derive(Debug, Clone)]
pub struct ChargeRecord {
    pub card_number: String,
    pub amount: Money,
    pub charged_at: DateTime<Utc>,
}

/// In-memory `Bank` implementation.
///
/// Accounts are keyed by card number. `authorize` issues a fresh
/// single-use token per attempt; `charge` consumes the token, so a
/// replayed token fails with [`AccountError::UnknownToken`].
#[derive(Default)]
pub struct InMemoryBank {
    accounts: DashMap<String, AccountRecord>,
    // Outstanding tokens, mapped to the card number they authorize.
    tokens: DashMap<AuthorizationToken, String>,
    charges: DashMap<AuthorizationToken, ChargeRecord>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account reachable through the given card.
    ///
    /// Replaces any prior account behind the same card number.
    pub fn open_account(&self, card: &Card, pin: PinCode, balance: Money) {
        self.accounts.insert(
            card.number().to_string(),
            AccountRecord { pin, balance },
        );
    }

    /// Returns the current balance behind a card, if the card is known.
    pub fn balance(&self, card: &Card) -> Option<Money> {
        self.accounts.get(card.number()).map(|a| a.balance)
    }

    /// Returns every debit performed so far.
    pub fn charges(&self) -> Vec<ChargeRecord> {
        self.charges.iter().map(|e| e.value().clone()).collect()
    }
}

#[async_trait::async_trait]
impl Bank for InMemoryBank {
    async fn authorize(
        &self,
        pin: &PinCode,
        card: &Card,
    ) -> Result<AuthorizationToken, AuthorizationError> {
        let account = self
            .accounts
            .get(card.number())
            .ok_or(AuthorizationError::UnknownCard)?;

        if account.pin != *pin {
            tracing::warn!(card = %card, "authorization refused: wrong PIN");
            return Err(AuthorizationError::InvalidCredentials);
        }

        let token = AuthorizationToken::new();
        self.tokens.insert(token, card.number().to_string());
        tracing::debug!(card = %card, %token, "authorization token issued");
        Ok(token)
    }

    async fn charge(&self, token: AuthorizationToken, amount: Money) -> Result<(), AccountError> {
        // Tokens are single-use: remove first, so a failed charge also
        // invalidates the token and the caller must re-authorize.
        let (_, card_number) = self.tokens.remove(&token).ok_or(AccountError::UnknownToken)?;

        let mut account = self
            .accounts
            .get_mut(&card_number)
            .ok_or(AccountError::UnknownToken)?;

        if account.balance.currency() != amount.currency() {
            return Err(AccountError::CurrencyMismatch);
        }
        if !account.balance.gte(&amount) {
            return Err(AccountError::InsufficientFunds {
                available: account.balance.amount(),
                requested: amount.amount(),
            });
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .map_err(|_| AccountError::CurrencyMismatch)?;

        self.charges.insert(
            token,
            ChargeRecord {
                card_number,
                amount,
                charged_at: Utc::now(),
            },
        );
        tracing::info!(%amount, "account charged");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atm_types::Currency;

    fn pin() -> PinCode {
        PinCode::new([1, 2, 3, 4]).unwrap()
    }

    fn card() -> Card {
        Card::new("card1").unwrap()
    }

    fn bank_with_account(balance: i64) -> InMemoryBank {
        let bank = InMemoryBank::new();
        bank.open_account(&card(), pin(), Money::new(balance, Currency::PLN).unwrap());
        bank
    }

    #[tokio::test]
    async fn test_authorize_unknown_card() {
        let bank = InMemoryBank::new();
        let result = bank.authorize(&pin(), &card()).await;
        assert!(matches!(result, Err(AuthorizationError::UnknownCard)));
    }

    #[tokio::test]
    async fn test_authorize_wrong_pin() {
        let bank = bank_with_account(100);
        let wrong = PinCode::new([9, 9, 9, 9]).unwrap();
        let result = bank.authorize(&wrong, &card()).await;
        assert!(matches!(result, Err(AuthorizationError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_charge_debits_balance() {
        let bank = bank_with_account(100);
        let token = bank.authorize(&pin(), &card()).await.unwrap();

        bank.charge(token, Money::new(70, Currency::PLN).unwrap())
            .await
            .unwrap();

        assert_eq!(bank.balance(&card()).unwrap().amount(), 30);
        assert_eq!(bank.charges().len(), 1);
    }

    #[tokio::test]
    async fn test_charge_insufficient_funds() {
        let bank = bank_with_account(50);
        let token = bank.authorize(&pin(), &card()).await.unwrap();

        let result = bank
            .charge(token, Money::new(70, Currency::PLN).unwrap())
            .await;

        assert!(matches!(
            result,
            Err(AccountError::InsufficientFunds {
                available: 50,
                requested: 70,
            })
        ));
        assert_eq!(bank.balance(&card()).unwrap().amount(), 50);
    }

    #[tokio::test]
    async fn test_token_is_single_use() {
        let bank = bank_with_account(200);
        let token = bank.authorize(&pin(), &card()).await.unwrap();
        let amount = Money::new(70, Currency::PLN).unwrap();

        bank.charge(token, amount).await.unwrap();
        let replay = bank.charge(token, amount).await;

        assert!(matches!(replay, Err(AccountError::UnknownToken)));
    }

    #[tokio::test]
    async fn test_charge_currency_mismatch() {
        let bank = bank_with_account(200);
        let token = bank.authorize(&pin(), &card()).await.unwrap();

        let result = bank
            .charge(token, Money::new(70, Currency::USD).unwrap())
            .await;

        assert!(matches!(result, Err(AccountError::CurrencyMismatch)));
    }
}
