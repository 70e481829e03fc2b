//! One synchronous round of distance-vector relaxation.

use crate::{
    table::{Entry, Tables},
    topology::Topology,
};
use tracing::trace;

/// The outcome of a single round.
#[derive(Clone, Debug)]
pub struct Step {
    /// The tables after the round.
    pub tables: Tables,
    /// Whether any entry of any table differs from the previous round.
    pub changed: bool,
}

/// Compute one round of Bellman-Ford updates across every router.
///
/// Every router starts from its own table in `previous` and, for each neighbor (in identifier
/// order) and each other destination, adopts the path through that neighbor when it is
/// strictly cheaper than the best seen so far. Only `previous` is ever consulted for a
/// neighbor's costs: no router observes an update made earlier in the same round, including
/// its own. On equal cost the earlier neighbor is kept.
pub fn step(topology: &Topology, previous: &Tables) -> Step {
    let routers = topology.routers();
    let mut changed = false;
    let tables = routers
        .iter()
        .map(|router| {
            let mut table = previous.get(router).clone();
            for (neighbor, link) in topology.neighbors(router) {
                let advertised = previous.get(neighbor);
                for destination in routers.iter() {
                    if destination == router {
                        continue;
                    }
                    let candidate = advertised.get(destination).cost().through(link);
                    if candidate >= table.get(destination).cost() {
                        continue;
                    }

                    // A strictly smaller cost is never infinite
                    let Some(cost) = candidate.finite() else {
                        continue;
                    };
                    trace!(
                        router = routers.label(router),
                        destination = routers.label(destination),
                        via = routers.label(neighbor),
                        cost,
                        "relaxed"
                    );
                    table.set(destination, Entry::reachable(cost, neighbor));
                    changed = true;
                }
            }
            table
        })
        .collect();

    Step {
        tables: Tables::from_tables(tables),
        changed,
    }
}
