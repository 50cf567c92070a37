use super::History;
use crate::router::RouterError;

/// An in-memory entry stack behaving like the browser session history.
///
/// Moving with [`back`](Self::back), [`forward`](Self::forward) or
/// [`go`](Self::go) does not notify anybody; call
/// [`Router::location_changed`](crate::Router::location_changed) afterwards,
/// as the browser would fire `popstate`.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            entries: vec![url.into()],
            index: 0,
        }
    }

    /// The current entry, including the query string.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries; out of range moves are ignored.
    pub fn go(&mut self, delta: isize) -> bool {
        let target = self.index as isize + delta;
        if delta == 0 || target < 0 || target as usize >= self.entries.len() {
            return false;
        }
        self.index = target as usize;
        true
    }

    fn split(&self) -> (&str, &str) {
        let url = self.current();
        let url = match url.find('#') {
            Some(i) => &url[..i],
            None => url,
        };
        match url.find('?') {
            Some(i) => (&url[..i], &url[i + 1..]),
            None => (url, ""),
        }
    }
}

impl History for MemoryHistory {
    fn path(&self) -> String {
        self.split().0.to_owned()
    }

    fn query(&self) -> String {
        self.split().1.to_owned()
    }

    fn push(&mut self, url: &str) -> Result<(), RouterError> {
        tracing::trace!(url, "memory history push");
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_owned());
        self.index += 1;
        Ok(())
    }

    fn replace(&mut self, url: &str) -> Result<(), RouterError> {
        tracing::trace!(url, "memory history replace");
        self.entries[self.index] = url.to_owned();
        Ok(())
    }
}
