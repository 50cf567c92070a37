use super::{Chain, Route, RouteId, RouteTree};

use crate::segment::is_param;

impl Route {
    fn matches_locally(&self, parts: &[&str]) -> bool {
        self.segments.iter().enumerate().all(|(i, own)| match parts.get(i) {
            Some(&part) => is_param(own) || **own == *part,
            None => false,
        })
    }
}

impl RouteTree {
    /// Matches `parts` against the subtree rooted at `id`.
    ///
    /// The route consumes as many parts as it has segments. When nothing is
    /// left it is the terminal match, even if it has children. Otherwise the
    /// first child matching the remainder completes the chain; if no child
    /// does, the whole subtree does not match.
    pub fn match_path(&self, id: RouteId, parts: &[&str]) -> Option<Chain> {
        let route = self.get(id)?;
        let mut chain = Chain::new();
        if self.match_with_buf(route, id, parts, &mut chain) {
            Some(chain)
        } else {
            None
        }
    }

    fn match_with_buf(
        &self,
        route: &Route,
        id: RouteId,
        parts: &[&str],
        chain: &mut Chain,
    ) -> bool {
        if !route.matches_locally(parts) {
            return false;
        }

        chain.push(id);

        let rest = &parts[route.segment_num()..];
        if rest.is_empty() {
            return true;
        }

        for &index in &route.children {
            let child = &self.nodes[index as usize];
            if self.match_with_buf(child, self.id_of(index), rest, chain) {
                return true;
            }
        }

        chain.pop();
        false
    }
}
