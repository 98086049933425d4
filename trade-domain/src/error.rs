use crate::ids::StationId;

/// Errors surfaced synchronously to the caller. Empty results (no feasible
/// load, no reachable destination) are never represented here — those are
/// the empty `TradeLoad` / empty `Vec<Route>` instead.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TradeError {
    #[error("capacity must be > 0")]
    ZeroCapacity,
    #[error("credits must be >= 0, got {0}")]
    NegativeCredits(i64),
    #[error("{src} has no outgoing link to {dst}")]
    NoLinkToDestination { src: StationId, dst: StationId },
    #[error("adapter error: {0}")]
    Adapter(String),
}
