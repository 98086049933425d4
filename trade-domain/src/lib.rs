pub mod adapter;
pub mod config;
pub mod error;
pub mod ids;
pub mod load;
pub mod offer;
pub mod route;
pub mod station;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;

pub use adapter::{MockTradeDbAdapter, TradeDbAdapter};
pub use config::{SearchConfig, SearchConfigBuilder};
pub use error::TradeError;
pub use ids::{ItemId, PlaceId, StationId, SystemId};
pub use load::TradeLoad;
pub use offer::{Offer, StockLevel};
pub use route::{compare_routes, routes_equal, Route, RouteSummary, TradeHop};
pub use station::{DestinationCandidate, Station, System};
