//! Converge synchronous distance-vector routing tables round by round.
//!
//! # Overview
//!
//! A fixed set of routers, connected by undirected weighted links, each keeps a distance
//! table: for every destination, the cost of the best known path and the neighbor to forward
//! to. In every round, all routers simultaneously learn their neighbors' tables from the
//! previous round and adopt any strictly cheaper path (classic synchronous Bellman-Ford).
//! Rounds continue until one produces no change.
//!
//! The pipeline is:
//!
//! 1. [Topology::build] turns routers and [Link]s into an adjacency structure.
//! 2. [Tables::initialize] derives each router's starting table.
//! 3. [step] computes one round from the previous round's tables.
//! 4. [rounds] yields a [Snapshot] per round, ending at the first stable one.
//!
//! Router labels are interned into [Router] handles ordered like the labels themselves. All
//! iteration (and so every tie between equal-cost paths) follows that order, which makes
//! every run reproducible.
//!
//! # Example
//!
//! ```rust
//! use distvec_routing::{converge, Cost, Link, Routers, Topology};
//!
//! let routers = Routers::new(["A", "B", "C"]);
//! let links = [Link::new("A", "B", 1), Link::new("B", "C", 1)];
//! let topology = Topology::build(routers, &links);
//!
//! let snapshot = converge(&topology);
//! let routers = topology.routers();
//! let a = routers.lookup("A").unwrap();
//! let b = routers.lookup("B").unwrap();
//! let c = routers.lookup("C").unwrap();
//!
//! let entry = snapshot.tables.get(a).get(c);
//! assert_eq!(entry.cost(), Cost::Finite(2));
//! assert_eq!(entry.via(), Some(b));
//! ```

mod convergence;
pub use convergence::{converge, rounds, Rounds, Snapshot};
mod relax;
pub use relax::{step, Step};
mod router;
pub use router::{Router, Routers};
mod table;
pub use table::{Cost, Entry, Table, Tables};
mod topology;
pub use topology::{Link, Topology};
