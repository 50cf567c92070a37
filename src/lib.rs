//! A hierarchical client-side router for single page applications.
//!
//! Routes form a tree. A location is matched segment by segment from a
//! top-level route down to the deepest route that consumes the whole path,
//! and `:name` segments bind path parameters along the way.
//!
//! ```
//! use nuclear_spa_router::{MemoryHistory, NavigateOptions, Router};
//!
//! let mut router = Router::new(MemoryHistory::new("/users/42"));
//! let users = router.tree_mut().root("/users", false);
//! let user = router.tree_mut().add_child(users, ":id", false);
//! router.add_route(users);
//!
//! assert!(router.is_active(user));
//! assert_eq!(router.state().param("id"), Some("42"));
//!
//! router.navigate(user, NavigateOptions::new().param("id", "7")).unwrap();
//! assert_eq!(router.history().current(), "/users/7");
//! ```

#![forbid(unsafe_code)]

mod segment;

pub mod history;
pub mod query;
pub mod router;
pub mod tree;

pub use crate::history::{History, MemoryHistory};
pub use crate::query::{QueryCodec, QueryParams, QueryValue};
pub use crate::router::{
    ActiveState, NavigateOptions, Params, Router, RouterConfig, RouterError, Subscription,
};
pub use crate::segment::{is_param, param_name};
pub use crate::tree::{Chain, Route, RouteId, RouteTree};

#[cfg(feature = "web")]
pub use crate::history::{BrowserHistory, PopStateListener};
