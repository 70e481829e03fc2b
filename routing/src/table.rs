//! Distance tables and their initial state.

use crate::{router::Router, topology::Topology};
use std::fmt;

/// The cost of the best known path to a destination.
///
/// `Infinite` orders above every finite cost, so it never beats a known path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cost {
    Finite(u64),
    Infinite,
}

impl Cost {
    /// Returns the cost of first crossing a link of cost `link` and then following this path.
    ///
    /// An unreachable destination stays unreachable. A sum that does not fit is treated as
    /// unreachable as well.
    pub fn through(self, link: u32) -> Self {
        match self {
            Self::Finite(cost) => cost
                .checked_add(u64::from(link))
                .map_or(Self::Infinite, Self::Finite),
            Self::Infinite => Self::Infinite,
        }
    }

    /// Returns the finite value of this cost, if any.
    pub fn finite(self) -> Option<u64> {
        match self {
            Self::Finite(cost) => Some(cost),
            Self::Infinite => None,
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(cost) => write!(f, "{cost}"),
            Self::Infinite => f.write_str("INF"),
        }
    }
}

/// The best known route to one destination: its cost and the next hop to take.
///
/// A destination has a next hop exactly when its cost is finite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    cost: Cost,
    via: Option<Router>,
}

impl Entry {
    /// A destination with no known path.
    pub const UNREACHABLE: Self = Self {
        cost: Cost::Infinite,
        via: None,
    };

    /// A destination reached at `cost` by forwarding to `via`.
    pub fn reachable(cost: u64, via: Router) -> Self {
        Self {
            cost: Cost::Finite(cost),
            via: Some(via),
        }
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn via(&self) -> Option<Router> {
        self.via
    }

    pub fn is_reachable(&self) -> bool {
        self.via.is_some()
    }
}

/// The distance table held by a single router: one [Entry] per known router, itself included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Table {
    entries: Vec<Entry>,
}

impl Table {
    /// Returns the entry for `destination`.
    pub fn get(&self, destination: Router) -> Entry {
        self.entries[destination.index()]
    }

    pub(crate) fn set(&mut self, destination: Router, entry: Entry) {
        self.entries[destination.index()] = entry;
    }

    /// Number of entries (always the number of routers in the topology).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The distance tables of every router at one instant.
///
/// A set of tables is never updated in place once built: each round of relaxation reads one
/// set and produces the next.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tables {
    tables: Vec<Table>,
}

impl Tables {
    /// Derive the starting table of every router from the topology.
    ///
    /// A router reaches itself at cost zero, reaches its direct neighbors over the link
    /// between them, and knows no path to anything else.
    pub fn initialize(topology: &Topology) -> Self {
        let routers = topology.routers();
        let tables = routers
            .iter()
            .map(|router| {
                let entries = routers
                    .iter()
                    .map(|target| {
                        if target == router {
                            return Entry::reachable(0, router);
                        }
                        match topology.cost(router, target) {
                            Some(cost) => Entry::reachable(u64::from(cost), target),
                            None => Entry::UNREACHABLE,
                        }
                    })
                    .collect();
                Table { entries }
            })
            .collect();
        Self { tables }
    }

    /// Returns the table held by `router`.
    pub fn get(&self, router: Router) -> &Table {
        &self.tables[router.index()]
    }

    /// Number of tables (one per router).
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub(crate) fn from_tables(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{router::Routers, topology::Link};

    #[test]
    fn test_cost_ordering() {
        assert!(Cost::Finite(u64::MAX) < Cost::Infinite);
        assert!(Cost::Finite(1) < Cost::Finite(2));
        assert_eq!(Cost::Infinite.through(0), Cost::Infinite);
        assert_eq!(Cost::Finite(3).through(4), Cost::Finite(7));
        assert_eq!(Cost::Finite(u64::MAX).through(1), Cost::Infinite);
    }

    #[test]
    fn test_cost_display() {
        assert_eq!(Cost::Finite(12).to_string(), "12");
        assert_eq!(Cost::Infinite.to_string(), "INF");
    }

    #[test]
    fn test_initialize() {
        let routers = Routers::new(["A", "B", "C"]);
        let topology = Topology::build(routers, &[Link::new("A", "B", 4)]);
        let routers = topology.routers();
        let (a, b, c) = (
            routers.lookup("A").unwrap(),
            routers.lookup("B").unwrap(),
            routers.lookup("C").unwrap(),
        );

        let tables = Tables::initialize(&topology);
        assert_eq!(tables.len(), 3);

        // Self entries
        for router in routers.iter() {
            assert_eq!(tables.get(router).get(router), Entry::reachable(0, router));
        }

        // Direct neighbors
        assert_eq!(tables.get(a).get(b), Entry::reachable(4, b));
        assert_eq!(tables.get(b).get(a), Entry::reachable(4, a));

        // Everything else
        assert_eq!(tables.get(a).get(c), Entry::UNREACHABLE);
        assert_eq!(tables.get(c).get(a), Entry::UNREACHABLE);
        assert!(!tables.get(c).get(b).is_reachable());
    }

    #[test]
    fn test_initialize_empty() {
        let topology = Topology::build(Routers::default(), &[]);
        assert!(Tables::initialize(&topology).is_empty());
    }
}
