use crate::ids::{StationId, SystemId};
use crate::load::TradeLoad;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single segment between two stations: the cargo loaded, the jumps
/// taken, and the resulting gain/distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeHop {
    pub dst_system: SystemId,
    pub dst_station: StationId,
    pub load: TradeLoad,
    pub gain_cr: i64,
    pub jumps: Vec<SystemId>,
    pub ly: f64,
}

/// An immutable hop-chain from a single origin. `stations.len() ==
/// hops.len() + 1`; `stations[0]` is the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub stations: Vec<StationId>,
    pub hops: Vec<TradeHop>,
    pub jump_paths: Vec<Vec<SystemId>>,
    pub start_cr: i64,
    pub gain_cr: i64,
    pub score: f64,
}

/// The six numbers the original's `Route.summary()` prints, before the
/// excluded presentation layer turns them into text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub start_cr: i64,
    pub hops: usize,
    pub jumps: usize,
    pub gain_cr: i64,
    pub gain_per_hop: f64,
    pub final_cr: i64,
}

impl Route {
    /// A fresh single-station route with no hops and score 0.
    pub fn seed(origin: StationId, start_cr: i64) -> Self {
        Self {
            stations: vec![origin],
            hops: Vec::new(),
            jump_paths: Vec::new(),
            start_cr,
            gain_cr: 0,
            score: 0.0,
        }
    }

    pub fn tail(&self) -> &StationId {
        self.stations.last().expect("route always has >= 1 station")
    }

    pub fn jumps_taken(&self) -> usize {
        self.jump_paths.iter().map(Vec::len).sum()
    }

    pub fn visits(&self, station: &StationId) -> bool {
        self.stations.contains(station)
    }

    /// Returns a new route extended by one hop. `hop.gain_cr` and the
    /// given hop score are additive onto the route's running totals.
    pub fn extend(&self, dst: StationId, hop: TradeHop, jumps: Vec<SystemId>, hop_score: f64) -> Route {
        let mut stations = self.stations.clone();
        stations.push(dst);
        let mut hops = self.hops.clone();
        let gain_cr = self.gain_cr + hop.gain_cr;
        hops.push(hop);
        let mut jump_paths = self.jump_paths.clone();
        jump_paths.push(jumps);

        Route {
            stations,
            hops,
            jump_paths,
            start_cr: self.start_cr,
            gain_cr,
            score: self.score + hop_score,
        }
    }

    pub fn summary(&self) -> RouteSummary {
        let hops = self.hops.len();
        RouteSummary {
            start_cr: self.start_cr,
            hops,
            jumps: self.jumps_taken(),
            gain_cr: self.gain_cr,
            gain_per_hop: if hops == 0 { 0.0 } else { self.gain_cr as f64 / hops as f64 },
            final_cr: self.start_cr + self.gain_cr,
        }
    }
}

/// Higher score wins; on ties, longer jump count wins. Expressed as a
/// free function rather than `Ord`/`PartialOrd` impls on the domain type,
/// to keep comparison semantics visible at the call site instead of
/// baked into operator overloads.
pub fn compare_routes(a: &Route, b: &Route) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.jumps_taken().cmp(&a.jumps_taken()))
}

pub fn routes_equal(a: &Route, b: &Route) -> bool {
    a.score == b.score && a.jumps_taken() == b.jumps_taken()
}
