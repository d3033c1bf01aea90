//! Cardholder credentials and the bank's authorization token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A four-digit PIN, validated at construction.
///
/// `Display` is masked so a PIN can never leak through logging or error
/// formatting.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinCode([u8; 4]);

impl PinCode {
    /// Creates a PIN from four digits.
    ///
    /// # Validation
    /// - Each digit must be in 0..=9.
    pub fn new(digits: [u8; 4]) -> Result<Self, DomainError> {
        if digits.iter().any(|d| *d > 9) {
            return Err(DomainError::InvalidPin);
        }
        Ok(Self(digits))
    }

    /// Returns the digits of the PIN.
    pub fn digits(&self) -> [u8; 4] {
        self.0
    }
}

impl std::fmt::Debug for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PinCode(****)")
    }
}

impl std::fmt::Display for PinCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "****")
    }
}

impl std::str::FromStr for PinCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Vec<u8> = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(DomainError::InvalidPin))
            .collect::<Result<_, _>>()?;
        let digits: [u8; 4] = digits.try_into().map_err(|_| DomainError::InvalidPin)?;
        PinCode::new(digits)
    }
}

/// An opaque card identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    number: String,
}

impl Card {
    /// Creates a card reference.
    ///
    /// # Validation
    /// - Number cannot be empty.
    pub fn new(number: impl Into<String>) -> Result<Self, DomainError> {
        let number = number.into();
        if number.trim().is_empty() {
            return Err(DomainError::EmptyCardNumber);
        }
        Ok(Self { number })
    }

    /// Returns the card number.
    pub fn number(&self) -> &str {
        &self.number
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Proof of a successful authorize call, required to charge the account.
///
/// Issued by the bank per withdrawal attempt, used once, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorizationToken(Uuid);

impl AuthorizationToken {
    /// Creates a new random token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a token from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AuthorizationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorizationToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AuthorizationToken {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_creation() {
        let pin = PinCode::new([1, 2, 3, 4]).unwrap();
        assert_eq!(pin.digits(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_pin_rejects_bad_digit() {
        let result = PinCode::new([1, 2, 3, 14]);
        assert!(matches!(result, Err(DomainError::InvalidPin)));
    }

    #[test]
    fn test_pin_parse() {
        let pin: PinCode = "1234".parse().unwrap();
        assert_eq!(pin.digits(), [1, 2, 3, 4]);

        assert!("123".parse::<PinCode>().is_err());
        assert!("12345".parse::<PinCode>().is_err());
        assert!("12a4".parse::<PinCode>().is_err());
    }

    #[test]
    fn test_pin_never_displays_digits() {
        let pin = PinCode::new([1, 2, 3, 4]).unwrap();
        assert_eq!(format!("{}", pin), "****");
        assert_eq!(format!("{:?}", pin), "PinCode(****)");
    }

    #[test]
    fn test_card_creation() {
        let card = Card::new("card1").unwrap();
        assert_eq!(card.number(), "card1");
    }

    #[test]
    fn test_empty_card_fails() {
        assert!(matches!(Card::new("  "), Err(DomainError::EmptyCardNumber)));
    }

    #[test]
    fn test_token_roundtrip() {
        let token = AuthorizationToken::new();
        let parsed: AuthorizationToken = token.to_string().parse().unwrap();
        assert_eq!(token, parsed);
    }
}
