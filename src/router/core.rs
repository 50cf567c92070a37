use super::state::{ActiveState, Params};
use super::{NavigateOptions, Router, RouterError};

use crate::history::History;
use crate::segment::{param_name, split_location, SLASH};
use crate::tree::{Chain, RouteId};

const UNDEFINED: &str = "undefined";

impl<H: History> Router<H> {
    /// Registers a top-level route.
    ///
    /// # Panics
    /// Panics if the route has a parent or was not created by
    /// [`tree_mut`](Self::tree_mut).
    pub fn add_route(&mut self, route: RouteId) -> &mut Self {
        if let Err(e) = self.try_add_route(route) {
            panic!("{}", e);
        }
        self
    }

    pub fn try_add_route(&mut self, route: RouteId) -> Result<&mut Self, RouterError> {
        if self.tree.try_get(route)?.has_parent() {
            return Err(RouterError::NotTopLevel(route));
        }
        self.routes.push(route);
        self.update_state();
        Ok(self)
    }

    /// Navigates to `route`.
    ///
    /// Abstract routes are not navigated to; a warning is logged and nothing
    /// changes. Listeners run before this returns.
    pub fn navigate(
        &mut self,
        route: RouteId,
        options: NavigateOptions,
    ) -> Result<(), RouterError> {
        if self.tree.try_get(route)?.is_abstract() {
            tracing::warn!(
                route = %self.tree.pattern(route),
                "can not navigate to abstract route, navigation aborted"
            );
            return Ok(());
        }
        let url = self.href(route, &options)?;
        if options.replace {
            self.history.replace(&url)?;
        } else {
            self.history.push(&url)?;
        }
        self.location_changed();
        Ok(())
    }

    /// Renders the url [`navigate`](Self::navigate) would push.
    ///
    /// A parameter missing from `options` is rendered as `undefined`.
    pub fn href(&self, route: RouteId, options: &NavigateOptions) -> Result<String, RouterError> {
        self.tree.try_get(route)?;

        let mut url = self.base_path.clone();
        for (i, segment) in self.tree.full_path(route).into_iter().enumerate() {
            if i > 0 {
                url.push(SLASH);
            }
            match param_name(segment) {
                None => url.push_str(segment),
                Some(name) => match options.params.get(name) {
                    Some(value) => url.push_str(value),
                    None => {
                        tracing::warn!(
                            param = name,
                            route = %self.tree.pattern(route),
                            "missing route parameter"
                        );
                        url.push_str(UNDEFINED)
                    }
                },
            }
        }

        let qs = self.codec.encode(&options.query_params);
        if !qs.is_empty() {
            url.push('?');
            url.push_str(&qs);
        }
        Ok(url)
    }

    /// Recomputes the active state from the history and notifies listeners.
    ///
    /// Hosts call this whenever the location changes outside of
    /// [`navigate`](Self::navigate), e.g. on `popstate`.
    pub fn location_changed(&mut self) {
        self.update_state();
        tracing::trace!(listeners = self.listeners.len(), "notifying listeners");
        self.listeners.notify(&self.state);
    }

    pub(super) fn update_state(&mut self) {
        let location = self.history.path();
        let path = location
            .strip_prefix(self.base_path.as_str())
            .unwrap_or(location.as_str());
        let parts = split_location(path);

        let chain = self
            .routes
            .iter()
            .find_map(|&route| self.tree.match_path(route, &parts))
            .unwrap_or_default();

        let params = self.bind_params(&chain, &parts);

        let query = self.history.query();
        let query = self.codec.decode(query.strip_prefix('?').unwrap_or(query.as_str()));

        match chain.last() {
            Some(&leaf) => tracing::debug!(
                path = %location,
                route = %self.tree.pattern(leaf),
                "location matched"
            ),
            None => tracing::debug!(path = %location, "no route matched"),
        }

        self.state = ActiveState {
            chain,
            params,
            query,
        };
    }

    fn bind_params(&self, chain: &Chain, parts: &[&str]) -> Params {
        let mut params = Params::new();
        let leaf: RouteId = match chain.last() {
            Some(&leaf) => leaf,
            None => return params,
        };
        for (i, segment) in self.tree.full_path(leaf).into_iter().enumerate() {
            if let (Some(name), Some(&value)) = (param_name(segment), parts.get(i)) {
                params.insert(name.to_owned(), value.to_owned());
            }
        }
        params
    }
}
