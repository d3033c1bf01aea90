//! Banknote denomination catalog and packs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Currency;
use crate::error::DomainError;

/// A banknote denomination known to the machine.
///
/// The catalog is the standard Polish note set. Each variant is an
/// immutable face value; there is no behavior beyond enumeration and
/// value lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Banknote {
    Pln10,
    Pln20,
    Pln50,
    Pln100,
    Pln200,
    Pln500,
}

impl Banknote {
    /// The full catalog, sorted descending by face value.
    ///
    /// The dispenser walks this order; it must never be reordered.
    pub const DESCENDING: [Banknote; 6] = [
        Banknote::Pln500,
        Banknote::Pln200,
        Banknote::Pln100,
        Banknote::Pln50,
        Banknote::Pln20,
        Banknote::Pln10,
    ];

    /// Returns the face value in whole currency units.
    pub fn value(&self) -> i64 {
        match self {
            Banknote::Pln10 => 10,
            Banknote::Pln20 => 20,
            Banknote::Pln50 => 50,
            Banknote::Pln100 => 100,
            Banknote::Pln200 => 200,
            Banknote::Pln500 => 500,
        }
    }

    /// Returns the currency this catalog is denominated in.
    pub fn currency(&self) -> Currency {
        Currency::PLN
    }
}

impl fmt::Display for Banknote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.currency().symbol())
    }
}

/// A quantity of banknotes of a single denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanknotesPack {
    count: u32,
    denomination: Banknote,
}

impl BanknotesPack {
    /// Creates a new pack.
    ///
    /// # Validation
    /// - Count must be positive; empty packs carry no information and
    ///   are rejected rather than normalized away.
    pub fn new(count: u32, denomination: Banknote) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::EmptyPack(denomination));
        }
        Ok(Self {
            count,
            denomination,
        })
    }

    /// Returns the number of notes in the pack.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the denomination of the notes.
    pub fn denomination(&self) -> Banknote {
        self.denomination
    }

    /// Returns the total face value of the pack in whole currency units.
    pub fn face_value(&self) -> i64 {
        self.denomination.value() * i64::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_descending() {
        let values: Vec<i64> = Banknote::DESCENDING.iter().map(|b| b.value()).collect();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(values, sorted);
    }

    #[test]
    fn test_pack_creation() {
        let pack = BanknotesPack::new(3, Banknote::Pln50).unwrap();
        assert_eq!(pack.count(), 3);
        assert_eq!(pack.denomination(), Banknote::Pln50);
        assert_eq!(pack.face_value(), 150);
    }

    #[test]
    fn test_empty_pack_fails() {
        let result = BanknotesPack::new(0, Banknote::Pln10);
        assert!(matches!(result, Err(DomainError::EmptyPack(_))));
    }
}
