use crate::error::TradeError;
use crate::ids::{PlaceId, StationId};
use crate::station::{DestinationCandidate, Station};
use mockall::automock;

/// Read-only view of stations, their trade offers per destination, and
/// reachability. Implemented by the commodity/station database loader,
/// which is out of scope for this crate — the core only consumes this
/// contract.
///
/// Deliberately synchronous: the hop expander requires all relevant data
/// to already be materialized in memory before it runs, so there is no
/// `async_trait` here the way an HTTP-backed client trait would need one.
#[automock]
pub trait TradeDbAdapter {
    /// Look up a station by id. `Ok(None)` if it doesn't exist.
    fn station(&self, id: &StationId) -> Result<Option<Station>, TradeError>;

    /// Ensure the outgoing trade map is populated for each listed station.
    /// After this call, `station(id).trading_with` is `Some(_)` for every
    /// id passed in that exists.
    fn load_station_trades(&mut self, station_ids: &[StationId]) -> Result<(), TradeError>;

    /// Destinations reachable from `src` within `max_jumps` jumps, each
    /// individual jump <= `max_ly_per` lightyears, excluding `avoid_places`,
    /// and (when `trading` is true) restricted to stations with outgoing
    /// trades. Order is significant: the search traverses it in the
    /// order yielded here to stay deterministic.
    fn get_destinations(
        &self,
        src: &StationId,
        max_jumps: u32,
        max_ly_per: f64,
        avoid_places: &std::collections::HashSet<PlaceId>,
        trading: bool,
    ) -> Result<Vec<DestinationCandidate>, TradeError>;
}
