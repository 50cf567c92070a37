#[cfg(feature = "web")]
mod browser;
mod memory;

#[cfg(feature = "web")]
pub use self::browser::{BrowserHistory, PopStateListener};
pub use self::memory::MemoryHistory;

use crate::router::RouterError;

/// The navigation environment a [`Router`](crate::Router) reads the location
/// from and pushes new entries to.
pub trait History {
    /// Path part of the current location, e.g. `/users/42`.
    fn path(&self) -> String;

    /// Query part of the current location, with or without the leading `?`.
    fn query(&self) -> String;

    /// Appends a new entry for `url` and makes it current.
    fn push(&mut self, url: &str) -> Result<(), RouterError>;

    /// Replaces the current entry with `url`.
    fn replace(&mut self, url: &str) -> Result<(), RouterError>;
}

impl<H: History + ?Sized> History for Box<H> {
    fn path(&self) -> String {
        (**self).path()
    }

    fn query(&self) -> String {
        (**self).query()
    }

    fn push(&mut self, url: &str) -> Result<(), RouterError> {
        (**self).push(url)
    }

    fn replace(&mut self, url: &str) -> Result<(), RouterError> {
        (**self).replace(url)
    }
}
