use crate::expand::expand;
use trade_domain::{compare_routes, Route, SearchConfig, StationId, TradeDbAdapter, TradeError};

/// Drops all but the top `k` routes by score/jump-count ordering, when a
/// cap is set.
fn apply_top_k(mut routes: Vec<Route>, top_k: Option<usize>) -> Vec<Route> {
    match top_k {
        None => routes,
        Some(k) => {
            routes.sort_by(compare_routes);
            routes.truncate(k);
            routes
        }
    }
}

/// Iterates the hop expander `config.hops` times, seeding with a single
/// zero-score route at `origin`. `top_k`, when set, keeps only the best
/// `top_k` routes by score/jump-count ordering after each layer. `cancel`
/// is polled between layers, never inside the solver — on a true result,
/// the search stops and returns whatever routes it has accumulated so far
/// rather than erroring.
///
/// An error from the adapter aborts the whole search: no partial layer is
/// ever half-applied.
pub fn search<A: TradeDbAdapter>(
    adapter: &mut A,
    origin: StationId,
    config: &SearchConfig,
    top_k: Option<usize>,
    cancel: &dyn Fn() -> bool,
) -> Result<Vec<Route>, TradeError> {
    let mut routes = vec![Route::seed(origin, config.credits)];

    for layer in 0..config.hops {
        if cancel() {
            tracing::debug!(layer, "search cancelled between layers");
            break;
        }

        tracing::debug!(layer, route_count = routes.len(), "search layer");
        let next = expand(adapter, &routes, config, None)?;
        if next.is_empty() {
            break;
        }
        routes = apply_top_k(next, top_k);
    }

    routes.sort_by(compare_routes);
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::logs_contain;
    use trade_domain::test_support::InMemoryTradeDb;
    use trade_domain::{DestinationCandidate, ItemId, Offer, SystemId};

    fn offer(name: &str, cost: u64, gain: i64) -> Offer {
        Offer::unlimited(ItemId(name.to_string()), cost, gain)
    }

    fn sys(name: &str) -> SystemId {
        SystemId(name.to_string())
    }

    fn stn(name: &str) -> StationId {
        StationId(name.to_string())
    }

    fn chain_db() -> InMemoryTradeDb {
        let mut db = InMemoryTradeDb::new();
        db.add_station(stn("A"), sys("SOL"), 100);
        db.add_station(stn("B"), sys("SOL"), 100);
        db.add_station(stn("C"), sys("SOL"), 100);
        db.set_offers(stn("A"), stn("B"), vec![offer("FOOD", 10, 5)]);
        db.set_offers(stn("B"), stn("C"), vec![offer("ORE", 20, 8)]);
        db.set_destinations(
            stn("A"),
            vec![DestinationCandidate {
                system: sys("SOL"),
                station: stn("B"),
                distance_ly: 1.0,
                via: vec![sys("SOL")],
            }],
        );
        db.set_destinations(
            stn("B"),
            vec![DestinationCandidate {
                system: sys("SOL"),
                station: stn("C"),
                distance_ly: 1.0,
                via: vec![sys("SOL")],
            }],
        );
        db
    }

    #[tracing_test::traced_test]
    #[test]
    fn search_logs_each_layer() {
        let mut db = chain_db();
        let config = SearchConfig::builder().credits(10_000).capacity(10).hops(2).build();
        search(&mut db, stn("A"), &config, None, &|| false).unwrap();
        assert!(logs_contain("search layer"));
    }

    #[test]
    fn search_extends_through_every_layer() {
        let mut db = chain_db();
        let config = SearchConfig::builder().credits(10_000).capacity(10).hops(2).build();
        let routes = search(&mut db, stn("A"), &config, None, &|| false).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stations, vec![stn("A"), stn("B"), stn("C")]);
        assert!(routes[0].gain_cr > 0);
    }

    #[test]
    fn search_stops_early_when_no_destinations_remain() {
        let mut db = chain_db();
        let config = SearchConfig::builder().credits(10_000).capacity(10).hops(5).build();
        let routes = search(&mut db, stn("A"), &config, None, &|| false).unwrap();

        // Only two hops are reachable in the fixture; extra iterations
        // beyond that must not error or loop.
        assert_eq!(routes[0].stations, vec![stn("A"), stn("B"), stn("C")]);
    }

    #[test]
    fn search_returns_seed_when_cancelled_immediately() {
        let mut db = chain_db();
        let config = SearchConfig::builder().credits(10_000).capacity(10).hops(5).build();
        let routes = search(&mut db, stn("A"), &config, None, &|| true).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stations, vec![stn("A")]);
        assert!(routes[0].hops.is_empty());
    }

    #[test]
    fn search_on_unreachable_origin_returns_empty_tail_route_not_error() {
        let mut db = InMemoryTradeDb::new();
        db.add_station(stn("Z"), sys("SOL"), 100);
        let config = SearchConfig::builder().credits(1000).capacity(4).hops(3).build();
        let routes = search(&mut db, stn("Z"), &config, None, &|| false).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].stations, vec![stn("Z")]);
    }

    #[test]
    fn top_k_caps_the_route_count_after_each_layer() {
        let mut db = InMemoryTradeDb::new();
        db.add_station(stn("A"), sys("SOL"), 100);
        db.add_station(stn("B"), sys("SOL"), 100);
        db.add_station(stn("C"), sys("SOL"), 100);
        db.set_offers(stn("A"), stn("B"), vec![offer("FOOD", 10, 50)]);
        db.set_offers(stn("A"), stn("C"), vec![offer("FOOD", 10, 5)]);
        db.set_destinations(
            stn("A"),
            vec![
                DestinationCandidate { system: sys("SOL"), station: stn("B"), distance_ly: 1.0, via: vec![sys("SOL")] },
                DestinationCandidate { system: sys("SOL"), station: stn("C"), distance_ly: 1.0, via: vec![sys("SOL")] },
            ],
        );

        let config = SearchConfig::builder().credits(10_000).capacity(10).hops(1).build();
        let routes = search(&mut db, stn("A"), &config, Some(1), &|| false).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].tail(), &stn("B"));
    }
}
