mod brute_force;
mod fast_fit;

pub use brute_force::brute_force_fit;
pub use fast_fit::fast_fit;

use trade_domain::{Offer, Station, StationId, TradeError, TradeLoad};

/// Drops offers whose observed age exceeds the freshness cap.
fn apply_freshness_filter(offers: &[Offer], max_age_days: Option<u32>) -> Vec<Offer> {
    match max_age_days {
        None => offers.to_vec(),
        Some(days) => {
            let cap_secs = days as u64 * 86_400;
            offers.iter().filter(|o| o.age_secs() <= cap_secs).cloned().collect()
        }
    }
}

/// Drops offers priced above the budget, and drops any offer whose gain
/// is no better than the cheapest offer's gain, except the cheapest
/// offer itself (which is kept as a floor option).
fn apply_prefilter(offers: &[Offer], credits: i64) -> Vec<Offer> {
    let affordable: Vec<&Offer> = offers.iter().filter(|o| o.cost_cr as i64 <= credits).collect();
    let Some(cheapest) = affordable.iter().min_by_key(|o| o.cost_cr) else {
        return Vec::new();
    };
    let cheapest_gain = cheapest.gain_cr;
    let cheapest_id = cheapest.item_id.clone();

    affordable
        .into_iter()
        .filter(|o| o.gain_cr > cheapest_gain || o.item_id == cheapest_id)
        .cloned()
        .collect()
}

/// Fast-path short-circuit: if `max_units >= capacity`, the highest-gain
/// offer (offers are pre-sorted by gain descending) fits the whole
/// capacity within budget, and its stock is unknown or >= `max_units`, a
/// full-capacity single-offer load is returned directly, bypassing the
/// recursive solver entirely.
fn short_circuit(offers: &[Offer], credits: i64, capacity: u32, max_units: u32) -> Option<TradeLoad> {
    if max_units < capacity {
        return None;
    }
    let first = offers.first()?;
    if first.cost_cr as i64 * capacity as i64 > credits {
        return None;
    }
    match first.effective_stock() {
        Some(stock) if stock < max_units as i64 => return None,
        _ => {}
    }
    Some(TradeLoad {
        items: vec![(first.clone(), capacity)],
        gain_cr: capacity as i64 * first.gain_cr,
        cost_cr: capacity as u64 * first.cost_cr,
        units: capacity,
    })
}

/// The public entry point for finding the best cargo mix between two
/// stations. `offers` must already be sorted by `gain_cr` descending
/// (ties by `cost_cr` ascending) — this is the adapter's responsibility
/// (`TradeDbAdapter::station().trading_with`), never re-sorted here.
///
/// Returns `Err` only for configuration mistakes (`capacity == 0`,
/// `credits < 0`); an unreachable/unprofitable trade is not an error, it's
/// an empty `TradeLoad`.
pub fn best_load(offers: &[Offer], credits: i64, capacity: u32, max_units: u32, max_age_days: Option<u32>) -> Result<TradeLoad, TradeError> {
    tracing::trace!(offer_count = offers.len(), credits, capacity, max_units, "best_load");

    if capacity == 0 {
        return Err(TradeError::ZeroCapacity);
    }
    if credits < 0 {
        return Err(TradeError::NegativeCredits(credits));
    }

    let fresh = apply_freshness_filter(offers, max_age_days);
    let filtered = apply_prefilter(&fresh, credits);
    if filtered.is_empty() {
        return Ok(TradeLoad::empty());
    }

    if let Some(load) = short_circuit(&filtered, credits, capacity, max_units) {
        return Ok(load);
    }

    Ok(fast_fit(&filtered, credits, capacity, max_units))
}

/// The single-pair entry point: the best load `src` can carry directly to
/// `dst`, given `src`'s already-loaded trade map. Unlike `best_load`, this
/// distinguishes "no quoted trade route from `src` to `dst`" — a
/// configuration mistake on the caller's part — from "a route exists but
/// nothing on it clears the budget/margin", which stays an empty load.
pub fn best_trade_between(
    src: &Station,
    dst: &StationId,
    credits: i64,
    capacity: u32,
    max_units: u32,
    max_age_days: Option<u32>,
) -> Result<TradeLoad, TradeError> {
    if !src.has_link_to(dst) {
        return Err(TradeError::NoLinkToDestination { src: src.id.clone(), dst: dst.clone() });
    }
    best_load(src.offers_to(dst), credits, capacity, max_units, max_age_days)
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;
    use trade_domain::ItemId;

    fn offers_strategy() -> impl Strategy<Value = Vec<Offer>> {
        prop::collection::vec((1u64..=50, -20i64..=50, -1i64..=20), 0..=8).prop_map(|raws| {
            raws.into_iter()
                .enumerate()
                .map(|(i, (cost_cr, gain_cr, stock))| {
                    Offer::unlimited(ItemId(format!("item{i}")), cost_cr, gain_cr).with_stock(stock, trade_domain::StockLevel::Unknown)
                })
                .collect()
        })
    }

    proptest! {
        /// Invariant 4: `fast_fit` agrees with the brute-force reference on
        /// small inputs, regardless of input order.
        #[test]
        fn fast_fit_matches_brute_force(
            offers in offers_strategy(),
            credits in 0i64..=500,
            capacity in 1u32..=32,
            max_units in 1u32..=32,
        ) {
            let via_fast = fast_fit(&offers, credits, capacity, max_units);
            let via_brute = brute_force_fit(&offers, credits, capacity, max_units);
            prop_assert_eq!(via_fast.gain_cr, via_brute.gain_cr);
            prop_assert_eq!(via_fast.cost_cr, via_brute.cost_cr);
            prop_assert_eq!(via_fast.units, via_brute.units);
        }

        /// Invariant 3: no single-item swap within the chosen load can
        /// improve its gain without exceeding budget or capacity — a local
        /// optimality check against the reference solver's own output.
        #[test]
        fn brute_force_result_respects_its_own_constraints(
            offers in offers_strategy(),
            credits in 0i64..=500,
            capacity in 1u32..=32,
            max_units in 1u32..=32,
        ) {
            let load = brute_force_fit(&offers, credits, capacity, max_units);
            prop_assert!(load.cost_cr as i64 <= credits);
            prop_assert!(load.units <= capacity);
            for (_, qty) in &load.items {
                prop_assert!(*qty <= max_units);
            }
        }
    }
}
