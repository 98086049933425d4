use crate::ids::{ItemId, PlaceId};
use std::collections::HashSet;

/// Explicit configuration record for a search, replacing dynamic
/// attribute lookup (`getattr(env, 'opt', default)`) with named fields set
/// once at construction. One field per row of the user search
/// configuration table.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub credits: i64,
    pub insurance: i64,
    pub capacity: u32,
    pub limit: u32,
    pub margin: f64,
    pub unique: bool,
    pub max_jumps_per: u32,
    pub max_ly_per: f64,
    pub max_age_days: Option<u32>,
    pub ls_penalty_percent: f64,
    pub avoid_items: HashSet<ItemId>,
    pub avoid_places: HashSet<PlaceId>,
    pub hops: u32,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    /// `limit` of 0 means "use capacity", per the option table.
    pub fn max_units(&self) -> u32 {
        if self.limit == 0 {
            self.capacity
        } else {
            self.limit
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            credits: 0,
            insurance: 0,
            capacity: 4,
            limit: 0,
            margin: 0.01,
            unique: false,
            max_jumps_per: 0,
            max_ly_per: f64::INFINITY,
            max_age_days: None,
            ls_penalty_percent: 0.0,
            avoid_items: HashSet::new(),
            avoid_places: HashSet::new(),
            hops: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn credits(mut self, credits: i64) -> Self {
        self.config.credits = credits;
        self
    }

    pub fn insurance(mut self, insurance: i64) -> Self {
        self.config.insurance = insurance;
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.config.capacity = capacity;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.config.limit = limit;
        self
    }

    pub fn margin(mut self, margin: f64) -> Self {
        self.config.margin = margin;
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.config.unique = unique;
        self
    }

    pub fn max_jumps_per(mut self, max_jumps_per: u32) -> Self {
        self.config.max_jumps_per = max_jumps_per;
        self
    }

    pub fn max_ly_per(mut self, max_ly_per: f64) -> Self {
        self.config.max_ly_per = max_ly_per;
        self
    }

    pub fn max_age_days(mut self, max_age_days: u32) -> Self {
        self.config.max_age_days = Some(max_age_days);
        self
    }

    pub fn ls_penalty_percent(mut self, percent: f64) -> Self {
        self.config.ls_penalty_percent = percent;
        self
    }

    pub fn avoid_items(mut self, items: HashSet<ItemId>) -> Self {
        self.config.avoid_items = items;
        self
    }

    pub fn avoid_places(mut self, places: HashSet<PlaceId>) -> Self {
        self.config.avoid_places = places;
        self
    }

    pub fn hops(mut self, hops: u32) -> Self {
        self.config.hops = hops;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}
