mod imp;

use crate::router::RouterError;

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use smallvec::SmallVec;

/// A chain of routes from a top-level route down to the deepest match.
pub type Chain = SmallVec<[RouteId; 8]>;

static NEXT_TREE_ID: AtomicU32 = AtomicU32::new(0);

/// Stable handle of a route inside the [`RouteTree`] that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId {
    tree: u32,
    index: u32,
}

/// A single route node.
#[derive(Debug)]
pub struct Route {
    segments: SmallVec<[Box<str>; 4]>,
    is_abstract: bool,
    parent: Option<u32>,
    children: Vec<u32>,
}

/// An append-only arena of routes.
///
/// Routes are created either as roots or as children of an existing route.
/// Parent and child links are plain indices, so a [`RouteId`] stays valid for
/// the whole lifetime of its tree.
#[derive(Debug)]
pub struct RouteTree {
    id: u32,
    nodes: Vec<Route>,
}

impl Route {
    fn new(path: &str, is_abstract: bool) -> Self {
        Self {
            segments: crate::segment::split_pattern(path)
                .into_iter()
                .map(Box::from)
                .collect(),
            is_abstract,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().map(|s| &**s)
    }

    pub fn segment_num(&self) -> usize {
        self.segments.len()
    }

    /// Abstract routes take part in matching but can not be navigated to.
    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }
}

impl Default for RouteTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTree {
    pub fn new() -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a route without parent.
    pub fn root(&mut self, path: &str, is_abstract: bool) -> RouteId {
        self.push(Route::new(path, is_abstract))
    }

    /// Creates a route under `parent` and returns it.
    ///
    /// # Panics
    /// Panics if `parent` was not issued by this tree.
    pub fn add_child(&mut self, parent: RouteId, path: &str, is_abstract: bool) -> RouteId {
        match self.try_add_child(parent, path, is_abstract) {
            Ok(id) => id,
            Err(e) => panic!("{}: path = {:?}", e, path),
        }
    }

    pub fn try_add_child(
        &mut self,
        parent: RouteId,
        path: &str,
        is_abstract: bool,
    ) -> Result<RouteId, RouterError> {
        self.check(parent)?;
        let child = self.push(Route::new(path, is_abstract));
        self.nodes[parent.index as usize].children.push(child.index);
        self.set_parent(child, parent)?;
        Ok(child)
    }

    /// Links `child` to `parent`.
    ///
    /// `parent` must already list `child` among its children, and a route
    /// gets its parent only once.
    pub(crate) fn set_parent(
        &mut self,
        child: RouteId,
        parent: RouteId,
    ) -> Result<(), RouterError> {
        self.check(child)?;
        if !self.has_child(parent, child)? {
            return Err(RouterError::MissingChild { parent, child });
        }
        let node = &mut self.nodes[child.index as usize];
        if node.parent.is_some() {
            return Err(RouterError::AlreadyParented(child));
        }
        node.parent = Some(parent.index);
        Ok(())
    }

    pub fn get(&self, id: RouteId) -> Option<&Route> {
        if id.tree != self.id {
            return None;
        }
        self.nodes.get(id.index as usize)
    }

    pub fn contains(&self, id: RouteId) -> bool {
        self.get(id).is_some()
    }

    pub fn parent(&self, id: RouteId) -> Option<RouteId> {
        self.get(id)?.parent.map(|index| self.id_of(index))
    }

    pub fn children(&self, id: RouteId) -> impl Iterator<Item = RouteId> + '_ {
        let children: &[u32] = match self.get(id) {
            Some(route) => &route.children,
            None => &[],
        };
        children.iter().map(move |&index| self.id_of(index))
    }

    pub fn has_child(&self, parent: RouteId, child: RouteId) -> Result<bool, RouterError> {
        let route = self.try_get(parent)?;
        Ok(child.tree == self.id && route.children.contains(&child.index))
    }

    pub fn is_abstract(&self, id: RouteId) -> bool {
        self.get(id).map_or(false, Route::is_abstract)
    }

    /// Segments of all ancestors and of the route itself, root first.
    pub fn full_path(&self, id: RouteId) -> Vec<&str> {
        let mut lineage: SmallVec<[&Route; 8]> = SmallVec::new();
        let mut cur = self.get(id);
        while let Some(route) = cur {
            lineage.push(route);
            cur = route.parent.map(|i| &self.nodes[i as usize]);
        }
        lineage.into_iter().rev().flat_map(Route::segments).collect()
    }

    /// The full path joined into a `/`-prefixed string.
    pub fn pattern(&self, id: RouteId) -> String {
        let mut s = String::new();
        for segment in self.full_path(id) {
            s.push('/');
            s.push_str(segment);
        }
        s
    }

    pub(crate) fn try_get(&self, id: RouteId) -> Result<&Route, RouterError> {
        self.get(id).ok_or(RouterError::ForeignRoute(id))
    }

    fn check(&self, id: RouteId) -> Result<(), RouterError> {
        self.try_get(id).map(|_| ())
    }

    fn push(&mut self, route: Route) -> RouteId {
        let index = self.nodes.len() as u32;
        self.nodes.push(route);
        self.id_of(index)
    }

    #[inline]
    fn id_of(&self, index: u32) -> RouteId {
        RouteId {
            tree: self.id,
            index,
        }
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.tree, self.index)
    }
}
