use crate::ids::{StationId, SystemId};
use crate::offer::Offer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A star system, identified by name, holding a set of stations.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct System {
    pub id: SystemId,
    pub stations: Vec<StationId>,
}

/// A trading station. `trading_with` is lazily populated: `None` means the
/// adapter has not been asked to load it yet (see
/// `TradeDbAdapter::load_station_trades`); `Some(map)` means it has been
/// loaded, even if the map turns out to be empty.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub system: SystemId,
    pub ls_from_star: u64,
    pub trading_with: Option<HashMap<StationId, Vec<Offer>>>,
}

impl Station {
    pub fn new(id: StationId, system: SystemId, ls_from_star: u64) -> Self {
        Self {
            id,
            system,
            ls_from_star,
            trading_with: None,
        }
    }

    pub fn trades_loaded(&self) -> bool {
        self.trading_with.is_some()
    }

    /// Offers to `dst`, sorted by `gain_cr` descending (ties by `cost_cr`
    /// ascending) as the adapter contract requires. Empty if the
    /// destination has no outgoing trades or the map isn't loaded yet.
    pub fn offers_to(&self, dst: &StationId) -> &[Offer] {
        self.trading_with
            .as_ref()
            .and_then(|map| map.get(dst))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the loaded trade map carries an entry for `dst` at all, as
    /// distinct from an entry present but empty. `false` on an unloaded
    /// map too, since no link has been confirmed yet.
    pub fn has_link_to(&self, dst: &StationId) -> bool {
        self.trading_with.as_ref().is_some_and(|map| map.contains_key(dst))
    }
}

/// A destination reachable from a source station, produced by the adapter.
/// `via` has length >= 1: the source system itself when in-system,
/// otherwise `[source, ...intermediate systems..., dest_system]`-shaped
/// jump path as the adapter records it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DestinationCandidate {
    pub system: SystemId,
    pub station: StationId,
    pub distance_ly: f64,
    pub via: Vec<SystemId>,
}
