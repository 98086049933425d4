use crate::offer::Offer;
use serde::{Deserialize, Serialize};

/// The selected cargo manifest for one hop: an immutable list of
/// (offer, qty) pairs plus the cumulative totals they imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeLoad {
    pub items: Vec<(Offer, u32)>,
    pub gain_cr: i64,
    pub cost_cr: u64,
    pub units: u32,
}

impl TradeLoad {
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            gain_cr: 0,
            cost_cr: 0,
            units: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units == 0
    }

    /// Combine two non-overlapping loads (disjoint offer offsets), the way
    /// the fast-fit recursion accumulates a partial load with its
    /// sub-load.
    pub fn combine(mut self, other: TradeLoad) -> TradeLoad {
        self.items.extend(other.items);
        TradeLoad {
            items: self.items,
            gain_cr: self.gain_cr + other.gain_cr,
            cost_cr: self.cost_cr + other.cost_cr,
            units: self.units + other.units,
        }
    }

    /// Lexicographic ordering used to pick the best load among candidates:
    /// max gain, then min units, then min cost.
    pub fn is_better_than(&self, other: &TradeLoad) -> bool {
        if self.gain_cr != other.gain_cr {
            return self.gain_cr > other.gain_cr;
        }
        if self.units != other.units {
            return self.units < other.units;
        }
        self.cost_cr < other.cost_cr
    }
}

impl Default for TradeLoad {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ItemId;

    fn offer(gain: i64, cost: u64) -> Offer {
        Offer::unlimited(ItemId("X".into()), cost, gain)
    }

    #[test]
    fn empty_load_has_zero_units() {
        assert!(TradeLoad::empty().is_empty());
        assert!(TradeLoad::default().is_empty());
    }

    #[test]
    fn combine_sums_totals_and_concatenates_items() {
        let a = TradeLoad {
            items: vec![(offer(10, 5), 2)],
            gain_cr: 20,
            cost_cr: 10,
            units: 2,
        };
        let b = TradeLoad {
            items: vec![(offer(3, 1), 1)],
            gain_cr: 3,
            cost_cr: 1,
            units: 1,
        };
        let combined = a.combine(b);
        assert_eq!(combined.gain_cr, 23);
        assert_eq!(combined.cost_cr, 11);
        assert_eq!(combined.units, 3);
        assert_eq!(combined.items.len(), 2);
    }

    #[test]
    fn is_better_than_prefers_gain_then_units_then_cost() {
        let high_gain = TradeLoad {
            gain_cr: 200,
            units: 10,
            cost_cr: 500,
            items: vec![],
        };
        let low_gain = TradeLoad {
            gain_cr: 100,
            units: 1,
            cost_cr: 1,
            items: vec![],
        };
        assert!(high_gain.is_better_than(&low_gain));

        let fewer_units = TradeLoad {
            gain_cr: 100,
            units: 3,
            cost_cr: 500,
            items: vec![],
        };
        let more_units = TradeLoad {
            gain_cr: 100,
            units: 5,
            cost_cr: 100,
            items: vec![],
        };
        assert!(fewer_units.is_better_than(&more_units));

        let cheaper = TradeLoad {
            gain_cr: 100,
            units: 3,
            cost_cr: 100,
            items: vec![],
        };
        let pricier = TradeLoad {
            gain_cr: 100,
            units: 3,
            cost_cr: 200,
            items: vec![],
        };
        assert!(cheaper.is_better_than(&pricier));
    }
}
