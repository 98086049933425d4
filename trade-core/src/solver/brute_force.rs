use crate::solver::fast_fit::max_qty_for_offer;
use trade_domain::{Offer, TradeLoad};

/// Reference implementation: enumerate all item subsets by full recursion
/// with the same lexicographic tie-break as `fast_fit`. Shipped as a real
/// function, not test-gated, so it can be property-tested against
/// `fast_fit` on arbitrary small inputs.
pub fn brute_force_fit(offers: &[Offer], credits: i64, capacity: u32, max_units: u32) -> TradeLoad {
    fit_combos(offers, 0, credits, capacity, max_units)
}

fn fit_combos(offers: &[Offer], offset: usize, credits: i64, capacity: u32, max_units: u32) -> TradeLoad {
    if offset >= offers.len() {
        return TradeLoad::empty();
    }

    // The best load that skips this offer entirely.
    let mut best = fit_combos(offers, offset + 1, credits, capacity, max_units);

    let offer = &offers[offset];
    let qty = max_qty_for_offer(offer, max_units, capacity, credits);
    if qty > 0 {
        let load = TradeLoad {
            items: vec![(offer.clone(), qty)],
            gain_cr: qty as i64 * offer.gain_cr,
            cost_cr: qty as u64 * offer.cost_cr,
            units: qty,
        };
        let sub = fit_combos(
            offers,
            offset + 1,
            credits - load.cost_cr as i64,
            capacity - qty,
            max_units,
        );
        let combined = sub.combine(load);
        if combined.is_better_than(&best) {
            best = combined;
        }
    }

    best
}
