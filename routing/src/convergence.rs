//! Drive relaxation round by round until the tables stop changing.

use crate::{relax::step, table::Tables, topology::Topology};
use std::sync::Arc;
use tracing::debug;

/// The tables of every router at a given round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Logical round, starting at zero for the initial tables.
    pub round: u64,
    /// The tables of every router.
    pub tables: Arc<Tables>,
    /// Whether this round is the fixed point: relaxing it again changes nothing.
    ///
    /// Only the last snapshot of a sequence is stable.
    pub stable: bool,
}

/// A lazy sequence of [Snapshot]s, from the initial tables to the first round in which no
/// entry changed.
///
/// Each sequence starts over from the initial tables, so a topology may be run any number
/// of times.
pub struct Rounds<'a> {
    topology: &'a Topology,
    latest: Option<Arc<Tables>>,
    round: u64,
    done: bool,
}

impl<'a> Rounds<'a> {
    /// Create a new sequence over `topology`.
    pub fn new(topology: &'a Topology) -> Self {
        Self {
            topology,
            latest: None,
            round: 0,
            done: false,
        }
    }
}

impl Iterator for Rounds<'_> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let (tables, stable) = match self.latest.take() {
            None => {
                // With no routers there is nothing to relax
                let tables = Tables::initialize(self.topology);
                let stable = tables.is_empty();
                (Arc::new(tables), stable)
            }
            Some(previous) => {
                let result = step(self.topology, &previous);
                self.round += 1;
                (Arc::new(result.tables), !result.changed)
            }
        };
        debug!(round = self.round, stable, "completed round");

        self.done = stable;
        self.latest = Some(tables.clone());
        Some(Snapshot {
            round: self.round,
            tables,
            stable,
        })
    }
}

/// Returns the rounds of distance-vector updates over `topology`.
pub fn rounds(topology: &Topology) -> Rounds<'_> {
    Rounds::new(topology)
}

/// Run `topology` to convergence and return the stable snapshot.
pub fn converge(topology: &Topology) -> Snapshot {
    let mut last = None;
    for snapshot in rounds(topology) {
        last = Some(snapshot);
    }

    // The sequence always yields at least the initial round
    last.unwrap_or_else(|| Snapshot {
        round: 0,
        tables: Arc::new(Tables::initialize(topology)),
        stable: true,
    })
}
