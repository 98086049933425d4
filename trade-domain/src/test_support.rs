//! A small hand-built stand-in for the real trade database, used only
//! under `#[cfg(test)]` or the `test-utils` feature — mirrors the
//! teacher's `in_memory_universe` pattern of a fixture-backed adapter
//! implementation instead of mocking every call individually.

use crate::adapter::TradeDbAdapter;
use crate::error::TradeError;
use crate::ids::{PlaceId, StationId, SystemId};
use crate::offer::Offer;
use crate::station::{DestinationCandidate, Station};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default, Clone)]
pub struct InMemoryTradeDb {
    stations: HashMap<StationId, Station>,
    destinations: HashMap<StationId, Vec<DestinationCandidate>>,
}

impl InMemoryTradeDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&mut self, id: StationId, system: SystemId, ls_from_star: u64) -> &mut Self {
        self.stations
            .insert(id.clone(), Station::new(id, system, ls_from_star));
        self
    }

    /// Sets the sorted offers from `src` to `dst`; sorts by `gain_cr`
    /// descending, `cost_cr` ascending, exactly as the real adapter's
    /// contract requires so `trade-core` never has to re-sort.
    pub fn set_offers(&mut self, src: StationId, dst: StationId, mut offers: Vec<Offer>) -> &mut Self {
        offers.sort_by(|a, b| b.gain_cr.cmp(&a.gain_cr).then_with(|| a.cost_cr.cmp(&b.cost_cr)));
        let station = self
            .stations
            .get_mut(&src)
            .expect("station must be added before offers are set on it");
        station.trading_with.get_or_insert_with(HashMap::new).insert(dst, offers);
        self
    }

    /// Marks a station's trade map as loaded with zero destinations,
    /// without requiring `set_offers` to have been called.
    pub fn mark_loaded(&mut self, src: &StationId) -> &mut Self {
        let station = self.stations.get_mut(src).expect("station must be added first");
        station.trading_with.get_or_insert_with(HashMap::new);
        self
    }

    pub fn set_destinations(&mut self, src: StationId, destinations: Vec<DestinationCandidate>) -> &mut Self {
        self.destinations.insert(src, destinations);
        self
    }
}

impl TradeDbAdapter for InMemoryTradeDb {
    fn station(&self, id: &StationId) -> Result<Option<Station>, TradeError> {
        Ok(self.stations.get(id).cloned())
    }

    fn load_station_trades(&mut self, station_ids: &[StationId]) -> Result<(), TradeError> {
        for id in station_ids {
            if let Some(station) = self.stations.get_mut(id) {
                station.trading_with.get_or_insert_with(HashMap::new);
            }
        }
        Ok(())
    }

    fn get_destinations(
        &self,
        src: &StationId,
        max_jumps: u32,
        max_ly_per: f64,
        avoid_places: &HashSet<PlaceId>,
        trading: bool,
    ) -> Result<Vec<DestinationCandidate>, TradeError> {
        let candidates = self.destinations.get(src).cloned().unwrap_or_default();
        let jump_count = |via: &[SystemId]| via.len().saturating_sub(1) as u32;
        Ok(candidates
            .into_iter()
            .filter(|c| max_jumps == 0 || jump_count(&c.via) <= max_jumps)
            .filter(|c| c.distance_ly <= max_ly_per)
            .filter(|c| !avoid_places.contains(&PlaceId::Station(c.station.clone())) && !avoid_places.contains(&PlaceId::System(c.system.clone())))
            .filter(|c| {
                if !trading {
                    return true;
                }
                self.stations
                    .get(&c.station)
                    .and_then(|s| s.trading_with.as_ref())
                    .map(|m| !m.is_empty())
                    .unwrap_or(false)
            })
            .collect())
    }
}
