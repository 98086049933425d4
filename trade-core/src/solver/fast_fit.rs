use trade_domain::{Offer, TradeLoad};

/// Per-offer maximum purchasable quantity: capped by the per-commodity
/// limit, remaining cargo space, remaining budget, and the offer's
/// effective stock (unbounded when stock is unknown/unlimited).
pub(crate) fn max_qty_for_offer(offer: &Offer, max_units: u32, capacity_remaining: u32, credits_remaining: i64) -> u32 {
    let mut qty = max_units.min(capacity_remaining);

    let affordable = (credits_remaining.max(0) as u64 / offer.cost_cr).min(u32::MAX as u64) as u32;
    qty = qty.min(affordable);

    if let Some(stock) = offer.effective_stock() {
        let stock_cap = stock.clamp(0, u32::MAX as i64) as u32;
        qty = qty.min(stock_cap);
    }

    qty
}

/// A depth-first enumeration: take the maximum of offer `i`, then recurse
/// on the remaining offers with the remaining budget/capacity. Returns
/// the full ordered sequence of candidates as an owned `Vec` rather than
/// a lazy generator, which the caller reduces to a single best load.
fn fit_combos(offers: &[Offer], offset: usize, credits: i64, capacity: u32, max_units: u32) -> Vec<TradeLoad> {
    let mut out = Vec::new();

    for i in offset..offers.len() {
        let offer = &offers[i];
        let qty = max_qty_for_offer(offer, max_units, capacity, credits);
        if qty == 0 {
            continue;
        }

        let partial = TradeLoad {
            items: vec![(offer.clone(), qty)],
            gain_cr: qty as i64 * offer.gain_cr,
            cost_cr: qty as u64 * offer.cost_cr,
            units: qty,
        };

        let credits_left = credits - partial.cost_cr as i64;
        let capacity_left = capacity - qty;

        let mut best_sub_gain: i64 = i64::MIN;
        let mut accepted_any = false;

        if credits_left > 0 && capacity_left > 0 {
            for sub_load in fit_combos(offers, i + 1, credits_left, capacity_left, max_units) {
                if sub_load.gain_cr >= best_sub_gain {
                    best_sub_gain = sub_load.gain_cr;
                    accepted_any = true;
                    out.push(sub_load.combine(partial.clone()));
                }
            }
        }

        if !accepted_any {
            out.push(partial);
        }
    }

    out
}

/// Collects all candidates from the depth-first enumeration and selects
/// the best under (max gain, min units, min cost).
pub fn fast_fit(offers: &[Offer], credits: i64, capacity: u32, max_units: u32) -> TradeLoad {
    let mut best = TradeLoad::empty();
    for candidate in fit_combos(offers, 0, credits, capacity, max_units) {
        if best.is_empty() || candidate.is_better_than(&best) {
            best = candidate;
        }
    }
    best
}
