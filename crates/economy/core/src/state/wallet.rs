//! Currencies and the per-user wallet.
//!
//! Three currency codes exist, with `Shards` as the primary currency that
//! every cost curve charges. Balances are unsigned: a debit that would
//! drive a balance below zero is rejected before any state changes.

use strum::{Display, EnumIter};

use crate::progression::ProgressionError;

/// The three currency codes carried on every user record.
///
/// Displays as the stored wire code (`SS`, `SC`, `SBC`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Soul shards - primary currency; earned from quests and sales.
    #[strum(serialize = "SS")]
    Shards,
    /// Soul crystals - mid-tier premium currency.
    #[strum(serialize = "SC")]
    Crystals,
    /// Soul brilliant cores - top-tier premium currency.
    #[strum(serialize = "SBC")]
    Cores,
}

impl Currency {
    pub const COUNT: usize = 3;

    /// The currency all stat/artifact/hero cost curves charge.
    pub const PRIMARY: Currency = Currency::Shards;

    const fn as_index(&self) -> usize {
        *self as usize
    }
}

/// Per-user currency balances.
///
/// Invariant: balances never go negative. [`Wallet::debit`] checks
/// affordability and fails with `InsufficientFunds` without mutating.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wallet {
    balances: [u64; Currency::COUNT],
}

impl Wallet {
    /// Empty wallet (all balances zero).
    pub const fn empty() -> Self {
        Self {
            balances: [0; Currency::COUNT],
        }
    }

    /// Wallet with the given balances.
    pub const fn new(shards: u64, crystals: u64, cores: u64) -> Self {
        Self {
            balances: [shards, crystals, cores],
        }
    }

    /// Current balance for a currency.
    pub const fn balance(&self, currency: Currency) -> u64 {
        self.balances[currency.as_index()]
    }

    /// Whether `amount` of `currency` can be debited.
    pub const fn can_afford(&self, currency: Currency, amount: u64) -> bool {
        self.balance(currency) >= amount
    }

    /// Add to a balance, saturating at `u64::MAX`.
    pub fn credit(&mut self, currency: Currency, amount: u64) {
        let slot = &mut self.balances[currency.as_index()];
        *slot = slot.saturating_add(amount);
    }

    /// Remove from a balance.
    ///
    /// Fails with [`ProgressionError::InsufficientFunds`] if the balance is
    /// too low; the wallet is untouched on failure.
    pub fn debit(&mut self, currency: Currency, amount: u64) -> Result<(), ProgressionError> {
        let balance = self.balance(currency);
        if balance < amount {
            return Err(ProgressionError::InsufficientFunds {
                currency,
                cost: amount,
                balance,
            });
        }
        self.balances[currency.as_index()] = balance - amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_currency_starts_empty() {
        let wallet = Wallet::empty();
        for currency in Currency::iter() {
            assert_eq!(wallet.balance(currency), 0);
            assert!(wallet.can_afford(currency, 0));
            assert!(!wallet.can_afford(currency, 1));
        }
    }

    #[test]
    fn currency_codes_match_stored_fields() {
        let codes: Vec<String> = Currency::iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, ["SS", "SC", "SBC"]);
    }

    #[test]
    fn debit_rejects_without_mutating() {
        let mut wallet = Wallet::new(300, 0, 0);
        let err = wallet.debit(Currency::Shards, 500).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InsufficientFunds {
                cost: 500,
                balance: 300,
                ..
            }
        ));
        assert_eq!(wallet.balance(Currency::Shards), 300);
    }

    #[test]
    fn debit_and_credit_round_trip() {
        let mut wallet = Wallet::new(1000, 2, 0);
        wallet.debit(Currency::Crystals, 2).unwrap();
        wallet.credit(Currency::Cores, 1);
        assert_eq!(wallet.balance(Currency::Crystals), 0);
        assert_eq!(wallet.balance(Currency::Cores), 1);
        assert_eq!(wallet.balance(Currency::Shards), 1000);
    }
}
