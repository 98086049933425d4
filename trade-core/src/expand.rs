use crate::score::hop_score;
use crate::solver::best_load;
use itertools::Itertools;
use std::collections::HashMap;
use trade_domain::{Offer, Route, SearchConfig, StationId, TradeDbAdapter, TradeError, TradeHop};

/// One winning candidate for a destination station, tracked while
/// scanning every input route's reachable destinations. Kept as a small
/// named value record rather than a heterogeneous tuple.
struct BestCandidate {
    base_route: Route,
    dst_station: StationId,
    hop: TradeHop,
    jumps: Vec<trade_domain::SystemId>,
    hop_score: f64,
    ly: f64,
}

impl BestCandidate {
    fn total_score(&self) -> f64 {
        self.base_route.score + self.hop_score
    }
}

/// Ensures every input route's tail station has its outgoing trade map
/// populated, so the scan below never touches unloaded data.
fn preload_tails<A: TradeDbAdapter>(adapter: &mut A, routes: &[Route]) -> Result<(), TradeError> {
    let mut unloaded = Vec::new();
    for route in routes {
        let tail = route.tail();
        if let Some(station) = adapter.station(tail)? {
            if !station.trades_loaded() && !unloaded.contains(tail) {
                unloaded.push(tail.clone());
            }
        }
    }
    if !unloaded.is_empty() {
        adapter.load_station_trades(&unloaded)?;
    }
    Ok(())
}

fn filter_avoided<'a>(offers: &'a [Offer], config: &SearchConfig) -> Vec<Offer> {
    if config.avoid_items.is_empty() {
        return offers.to_vec();
    }
    offers.iter().filter(|o| !config.avoid_items.contains(&o.item_id)).cloned().collect()
}

/// From a set of current routes, produce the next generation by
/// best-per-destination selection. `restrict_to`, when provided, limits
/// candidate destinations to stations/systems named in it.
pub fn expand<A: TradeDbAdapter>(
    adapter: &mut A,
    routes: &[Route],
    config: &SearchConfig,
    restrict_to: Option<&std::collections::HashSet<trade_domain::PlaceId>>,
) -> Result<Vec<Route>, TradeError> {
    if routes.is_empty() {
        return Ok(Vec::new());
    }

    tracing::debug!(route_count = routes.len(), "expand");

    preload_tails(adapter, routes)?;

    let safety_margin = 1.0 - config.margin;
    let mut best_by_dest: HashMap<StationId, BestCandidate> = HashMap::new();

    for route in routes {
        let src = route.tail().clone();
        let start_cr = config.credits + (route.gain_cr as f64 * safety_margin).floor() as i64 - config.insurance;

        let destinations = adapter.get_destinations(&src, config.max_jumps_per, config.max_ly_per, &config.avoid_places, true)?;

        let Some(src_station) = adapter.station(&src)? else {
            continue;
        };

        for dest in destinations {
            if let Some(restrict) = restrict_to {
                let station_excluded = !restrict.contains(&trade_domain::PlaceId::Station(dest.station.clone()));
                let system_excluded = !restrict.contains(&trade_domain::PlaceId::System(dest.system.clone()));
                if station_excluded && system_excluded {
                    continue;
                }
            }

            if config.unique && route.visits(&dest.station) {
                continue;
            }

            if !src_station.has_link_to(&dest.station) {
                return Err(TradeError::NoLinkToDestination { src: src.clone(), dst: dest.station.clone() });
            }

            let offers = filter_avoided(src_station.offers_to(&dest.station), config);
            let trade = best_load(&offers, start_cr, config.capacity, config.max_units(), config.max_age_days)?;
            if trade.is_empty() {
                continue;
            }

            let Some(dst_station) = adapter.station(&dest.station)? else {
                continue;
            };

            let score = hop_score(trade.gain_cr, dst_station.ls_from_star, config.ls_penalty_percent);
            let jumps = dest.via.clone();
            let hop = TradeHop {
                dst_system: dest.system.clone(),
                dst_station: dest.station.clone(),
                load: trade.clone(),
                gain_cr: trade.gain_cr,
                jumps: jumps.clone(),
                ly: dest.distance_ly,
            };

            let candidate = BestCandidate {
                base_route: route.clone(),
                dst_station: dest.station.clone(),
                hop,
                jumps,
                hop_score: score,
                ly: dest.distance_ly,
            };

            match best_by_dest.get(&dest.station) {
                None => {
                    best_by_dest.insert(dest.station.clone(), candidate);
                }
                Some(prev) => {
                    let prev_total = prev.total_score();
                    let new_total = candidate.total_score();
                    if prev_total > new_total {
                        continue;
                    }
                    if prev_total == new_total && prev.ly <= candidate.ly {
                        continue;
                    }
                    best_by_dest.insert(dest.station.clone(), candidate);
                }
            }
        }
    }

    let result = best_by_dest
        .into_values()
        .sorted_by(|a, b| a.dst_station.cmp(&b.dst_station))
        .map(|c| c.base_route.extend(c.dst_station, c.hop, c.jumps, c.hop_score))
        .collect();

    Ok(result)
}
