//! Economy configuration constants and tunable parameters.

/// Tunable prices the runtime threads through shop operations.
///
/// Curve shapes (stat and hero cost formulas) are fixed rules in
/// [`progression::cost`](crate::progression::cost); this struct only
/// carries the knobs operators actually retune between seasons.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EconomyConfig {
    /// Shards charged to unlock an equipment slot.
    pub unlock_slot_cost: u64,
    /// Shards credited per artifact level when selling.
    pub sell_price_per_level: u64,
}

impl EconomyConfig {
    pub const DEFAULT_UNLOCK_SLOT_COST: u64 = 500;
    pub const DEFAULT_SELL_PRICE_PER_LEVEL: u64 = 100;

    pub fn new() -> Self {
        Self {
            unlock_slot_cost: Self::DEFAULT_UNLOCK_SLOT_COST,
            sell_price_per_level: Self::DEFAULT_SELL_PRICE_PER_LEVEL,
        }
    }

    /// Sell credit for an artifact at `level`. Level 0 sells as level 1.
    pub const fn sell_price(&self, level: u32) -> u64 {
        let level = if level == 0 { 1 } else { level };
        level as u64 * self.sell_price_per_level
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self::new()
    }
}
