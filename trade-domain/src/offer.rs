use crate::ids::ItemId;
use serde::{Deserialize, Serialize};

/// Qualitative restock indicator. Governs the (currently disabled)
/// speculative-recovery term in `Offer::effective_stock`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StockLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl StockLevel {
    /// Divisor used by the recovery-interval formula, `30 / stock_level`.
    /// `Low` and `Unknown` never reach the formula (callers guard on
    /// `> Low` first), so this only needs to answer for `Medium`/`High`.
    fn divisor(self) -> u32 {
        match self {
            StockLevel::Unknown => 1,
            StockLevel::Low => 1,
            StockLevel::Medium => 2,
            StockLevel::High => 3,
        }
    }
}

/// A commodity available at a source station for sale to a specific
/// destination.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Offer {
    pub item_id: ItemId,
    /// Credits per unit to buy, > 0.
    pub cost_cr: u64,
    /// Signed credits per unit of profit at the destination.
    pub gain_cr: i64,
    /// Known quantity, or `-1` for unknown/unlimited.
    pub stock: i64,
    pub stock_level: StockLevel,
    /// Seconds since the price was last observed at the source.
    pub src_age: u64,
    /// Seconds since the price was last observed at the destination.
    pub dst_age: u64,
}

/// The number of extra units a speculative-recovery term grants per
/// elapsed restock interval. Fixed at 0 (disabled) but the computation's
/// shape is preserved so re-enabling it is a one-line change.
const SPECULATIVE_RECOVERY_EXTRA_UNITS: i64 = 0;

impl Offer {
    /// Unlimited when `stock < 0`, otherwise `stock` plus a
    /// speculative-recovery term that only engages above `StockLevel::Low`.
    pub fn effective_stock(&self) -> Option<i64> {
        if self.stock < 0 {
            return None;
        }
        let recovery = if self.stock_level > StockLevel::Low {
            let interval_secs = (30 / self.stock_level.divisor()) as u64 * 60;
            let elapsed_intervals = self.src_age / interval_secs;
            SPECULATIVE_RECOVERY_EXTRA_UNITS * elapsed_intervals as i64
        } else {
            0
        };
        Some(self.stock + recovery)
    }

    /// Freshness in seconds: the older of the two observation ages.
    pub fn age_secs(&self) -> u64 {
        self.src_age.max(self.dst_age)
    }

    /// An offer with unknown/unlimited stock and zero observed age, for
    /// the common case of fabricating fixtures.
    pub fn unlimited(item_id: ItemId, cost_cr: u64, gain_cr: i64) -> Self {
        Self {
            item_id,
            cost_cr,
            gain_cr,
            stock: -1,
            stock_level: StockLevel::Unknown,
            src_age: 0,
            dst_age: 0,
        }
    }

    pub fn with_stock(mut self, stock: i64, stock_level: StockLevel) -> Self {
        self.stock = stock;
        self.stock_level = stock_level;
        self
    }

    pub fn with_src_age(mut self, src_age: u64) -> Self {
        self.src_age = src_age;
        self
    }
}
