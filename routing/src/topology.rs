//! Build the adjacency structure from undirected weighted links.

use crate::router::{Router, Routers};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// An undirected link between two routers with a symmetric cost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub a: String,
    pub b: String,
    pub cost: u32,
}

impl Link {
    /// Create a new link.
    pub fn new(a: impl Into<String>, b: impl Into<String>, cost: u32) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            cost,
        }
    }
}

/// The static view of the network: every router and the cost of each link it is attached to.
///
/// A topology is built once and never mutated afterward.
#[derive(Clone, Debug)]
pub struct Topology {
    routers: Routers,
    // Keyed by `Router`, so neighbors are always visited in identifier order.
    adjacency: Vec<BTreeMap<Router, u32>>,
}

impl Topology {
    /// Build the adjacency structure for `routers` from `links`.
    ///
    /// Each link sets the cost in both directions. When the same pair is declared more than
    /// once, the last declaration wins. Links naming a router outside of `routers` are
    /// skipped.
    pub fn build(routers: Routers, links: &[Link]) -> Self {
        let mut adjacency = vec![BTreeMap::new(); routers.len()];
        for link in links {
            let (Some(a), Some(b)) = (routers.lookup(&link.a), routers.lookup(&link.b)) else {
                warn!(a = %link.a, b = %link.b, "skipping link with unknown router");
                continue;
            };
            adjacency[a.index()].insert(b, link.cost);
            adjacency[b.index()].insert(a, link.cost);
        }
        debug!(routers = routers.len(), links = links.len(), "built topology");

        Self { routers, adjacency }
    }

    /// Returns the routers in this topology.
    pub fn routers(&self) -> &Routers {
        &self.routers
    }

    /// Returns the cost of the direct link from `from` to `to`, if one exists.
    pub fn cost(&self, from: Router, to: Router) -> Option<u32> {
        self.adjacency[from.index()].get(&to).copied()
    }

    /// Iterate over the neighbors of `router` (and the cost to reach each) in identifier order.
    pub fn neighbors(&self, router: Router) -> impl Iterator<Item = (Router, u32)> + '_ {
        self.adjacency[router.index()]
            .iter()
            .map(|(neighbor, cost)| (*neighbor, *cost))
    }
}
