//! Greedy banknote selection.

use atm_types::{Banknote, MoneyDeposit};

/// Plans the exact multiset of banknotes for a requested amount.
///
/// Walks the denomination catalog in descending face-value order, taking
/// `min(available, remaining / value)` notes of each, and succeeds only
/// if the remainder reaches exactly zero. The returned sequence is
/// ordered highest denomination first with duplicates adjacent.
///
/// Greedy selection with no backtracking is part of the machine's
/// observable contract: some amounts that could be covered by a
/// non-greedy combination still come back as `None`. This is correct for
/// canonical note sets and intentionally not an exhaustive search.
///
/// The deposit is only read; planning never reserves or removes notes.
pub fn plan_withdrawal(amount: i64, deposit: &MoneyDeposit) -> Option<Vec<Banknote>> {
    let mut remaining = amount;
    let mut notes = Vec::new();

    for denomination in Banknote::DESCENDING {
        if remaining <= 0 {
            break;
        }
        let available = i64::from(deposit.count_of(denomination));
        let take = available.min(remaining / denomination.value());
        for _ in 0..take {
            notes.push(denomination);
        }
        remaining -= take * denomination.value();
    }

    (remaining == 0).then_some(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atm_types::{BanknotesPack, Currency};

    fn deposit(packs: &[(u32, Banknote)]) -> MoneyDeposit {
        let packs = packs
            .iter()
            .map(|(count, denomination)| BanknotesPack::new(*count, *denomination).unwrap())
            .collect();
        MoneyDeposit::new(Currency::PLN, packs).unwrap()
    }

    #[test]
    fn test_exact_amount_descending_order() {
        let deposit = deposit(&[
            (3, Banknote::Pln50),
            (2, Banknote::Pln20),
            (4, Banknote::Pln10),
        ]);

        let notes = plan_withdrawal(70, &deposit).unwrap();
        assert_eq!(notes, vec![Banknote::Pln50, Banknote::Pln20]);
    }

    #[test]
    fn test_duplicates_are_adjacent() {
        let deposit = deposit(&[(3, Banknote::Pln50), (4, Banknote::Pln10)]);

        let notes = plan_withdrawal(130, &deposit).unwrap();
        assert_eq!(
            notes,
            vec![
                Banknote::Pln50,
                Banknote::Pln50,
                Banknote::Pln10,
                Banknote::Pln10,
                Banknote::Pln10,
            ]
        );
    }

    #[test]
    fn test_sum_matches_and_counts_are_available() {
        let deposit = deposit(&[
            (2, Banknote::Pln100),
            (3, Banknote::Pln50),
            (5, Banknote::Pln20),
        ]);

        for amount in [20, 50, 70, 120, 250, 450] {
            let notes = plan_withdrawal(amount, &deposit)
                .unwrap_or_else(|| panic!("amount {} should be satisfiable", amount));
            let sum: i64 = notes.iter().map(|b| b.value()).sum();
            assert_eq!(sum, amount);

            for denomination in Banknote::DESCENDING {
                let used = notes.iter().filter(|b| **b == denomination).count() as u32;
                assert!(used <= deposit.count_of(denomination));
            }
        }
    }

    #[test]
    fn test_zero_amount_yields_empty_plan() {
        let deposit = deposit(&[(3, Banknote::Pln50)]);
        assert_eq!(plan_withdrawal(0, &deposit), Some(Vec::new()));
    }

    #[test]
    fn test_empty_deposit_fails() {
        let deposit = MoneyDeposit::empty(Currency::PLN);
        assert_eq!(plan_withdrawal(70, &deposit), None);
    }

    #[test]
    fn test_unreachable_remainder_fails() {
        let deposit = deposit(&[(3, Banknote::Pln50)]);
        assert_eq!(plan_withdrawal(70, &deposit), None);
    }

    #[test]
    fn test_greedy_does_not_backtrack() {
        // 60 is coverable as 20+20+20, but greedy commits to the 50 first
        // and the remaining 10 cannot be covered.
        let deposit = deposit(&[(1, Banknote::Pln50), (3, Banknote::Pln20)]);
        assert_eq!(plan_withdrawal(60, &deposit), None);
    }

    #[test]
    fn test_availability_limits_greed() {
        // Only one 50 available, so the rest of 90 falls through to 20s.
        let deposit = deposit(&[(1, Banknote::Pln50), (5, Banknote::Pln20)]);
        let notes = plan_withdrawal(90, &deposit).unwrap();
        assert_eq!(
            notes,
            vec![
                Banknote::Pln50,
                Banknote::Pln20,
                Banknote::Pln20,
            ]
        );
    }
}
