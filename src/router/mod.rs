mod core;
mod error;
mod listeners;
mod state;

pub use self::error::RouterError;
pub use self::listeners::Subscription;
pub use self::state::{ActiveState, Params};

use self::listeners::Listeners;
use crate::history::{History, MemoryHistory};
use crate::query::{QueryCodec, QueryParams, QueryValue};
use crate::tree::{RouteId, RouteTree};

/// Binds a [`RouteTree`] to a [`History`].
///
/// Top-level routes registered with [`add_route`](Self::add_route) are tried
/// in registration order against the current location. Every location change
/// reported through [`location_changed`](Self::location_changed), and every
/// [`navigate`](Self::navigate), recomputes the [`ActiveState`] and then
/// notifies the listeners.
#[derive(Debug)]
pub struct Router<H = MemoryHistory> {
    history: H,
    tree: RouteTree,
    routes: Vec<RouteId>,
    base_path: String,
    codec: QueryCodec,
    state: ActiveState,
    listeners: Listeners,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterConfig {
    /// Stripped from location paths and prepended to rendered ones.
    ///
    /// Stripping is textual, so `"/app/"` rather than `"/app"` keeps the
    /// first segment of `/app/users` equal to `users`.
    pub base_path: String,
    /// Joins multi-value query parameters; empty disables them.
    pub query_delimiter: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: "/".into(),
            query_delimiter: String::new(),
        }
    }
}

impl RouterConfig {
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn query_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.query_delimiter = delimiter.into();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub params: Params,
    pub query_params: QueryParams,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }

    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }
}

impl<H: History> Router<H> {
    pub fn new(history: H) -> Self {
        Self::with_config(history, RouterConfig::default())
    }

    pub fn with_config(history: H, config: RouterConfig) -> Self {
        Self::with_tree(history, config, RouteTree::new())
    }

    /// Adopts a prebuilt tree. Its routes still have to be registered with
    /// [`add_route`](Self::add_route).
    pub fn with_tree(history: H, config: RouterConfig, tree: RouteTree) -> Self {
        let mut router = Self {
            history,
            tree,
            routes: Vec::new(),
            base_path: config.base_path,
            codec: QueryCodec::new(config.query_delimiter),
            state: ActiveState::default(),
            listeners: Listeners::default(),
        };
        router.update_state();
        router
    }

    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut RouteTree {
        &mut self.tree
    }

    /// Registered top-level routes.
    pub fn routes(&self) -> &[RouteId] {
        &self.routes
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn query_delimiter(&self) -> &str {
        self.codec.delimiter()
    }

    /// Affects later parses and renders, not the current query parameters.
    pub fn set_query_delimiter(&mut self, delimiter: impl Into<String>) {
        self.codec = QueryCodec::new(delimiter);
    }

    pub fn state(&self) -> &ActiveState {
        &self.state
    }

    pub fn active_chain(&self) -> &[RouteId] {
        self.state.chain()
    }

    pub fn is_active(&self, route: RouteId) -> bool {
        self.state.is_active(route)
    }

    pub fn params(&self) -> Params {
        self.state.params.clone()
    }

    pub fn query_params(&self) -> QueryParams {
        self.state.query.clone()
    }

    /// Registers `f`, called after every recomputation caused by a location
    /// change.
    pub fn on_changes(&mut self, f: impl FnMut(&ActiveState) + 'static) -> Subscription {
        self.listeners.insert(Box::new(f))
    }

    /// Returns `false` if `sub` was already removed.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.listeners.remove(sub)
    }
}
