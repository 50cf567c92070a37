use crate::query::QueryParams;
use crate::tree::{Chain, RouteId};

use std::collections::BTreeMap;

pub type Params = BTreeMap<String, String>;

/// What the current location resolved to.
///
/// The router replaces the whole snapshot at once, so the chain and both
/// parameter maps always describe the same location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveState {
    pub(super) chain: Chain,
    pub(super) params: Params,
    pub(super) query: QueryParams,
}

impl ActiveState {
    /// Matched routes, top-level route first. Empty when nothing matched.
    pub fn chain(&self) -> &[RouteId] {
        &self.chain
    }

    /// The deepest matched route.
    pub fn leaf(&self) -> Option<RouteId> {
        self.chain.last().copied()
    }

    pub fn is_active(&self, route: RouteId) -> bool {
        self.chain.contains(&route)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }
}
