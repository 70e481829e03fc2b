//! Write round snapshots as text or JSON lines.
//!
//! Routers and destinations are always written in identifier order and a router's entry for
//! itself is omitted.

use crate::Error;
use distvec_routing::{Routers, Snapshot};
use serde::Serialize;
use std::{collections::BTreeMap, io::Write};

/// Shown in place of both the cost and the next hop of an unreachable destination.
const UNREACHABLE: &str = "INF";

/// Write `snapshot` in the line-oriented text format:
///
/// ```text
/// Distance Tables at t=1
/// Distance Table of router A at t=1:
/// B 1 B
/// C 2 B
///
/// ...
/// ```
pub fn text<W: Write>(out: &mut W, routers: &Routers, snapshot: &Snapshot) -> Result<(), Error> {
    let round = snapshot.round;
    writeln!(out, "Distance Tables at t={round}")?;
    for router in routers.iter() {
        writeln!(
            out,
            "Distance Table of router {} at t={round}:",
            routers.label(router)
        )?;
        let table = snapshot.tables.get(router);
        for destination in routers.iter().filter(|destination| *destination != router) {
            let entry = table.get(destination);
            let via = entry.via().map_or(UNREACHABLE, |via| routers.label(via));
            writeln!(
                out,
                "{} {} {via}",
                routers.label(destination),
                entry.cost()
            )?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Round<'a> {
    round: u64,
    stable: bool,
    tables: BTreeMap<&'a str, BTreeMap<&'a str, Route<'a>>>,
}

#[derive(Serialize)]
struct Route<'a> {
    cost: Option<u64>,
    via: Option<&'a str>,
}

/// Write `snapshot` as a single line of JSON:
///
/// ```json
/// {"round":1,"stable":false,"tables":{"A":{"B":{"cost":1,"via":"B"}},"B":{"A":{"cost":1,"via":"A"}}}}
/// ```
///
/// Unreachable destinations have a `null` cost and next hop.
pub fn json<W: Write>(out: &mut W, routers: &Routers, snapshot: &Snapshot) -> Result<(), Error> {
    let tables: BTreeMap<_, _> = routers
        .iter()
        .map(|router| {
            let table = snapshot.tables.get(router);
            let routes: BTreeMap<_, _> = routers
                .iter()
                .filter(|destination| *destination != router)
                .map(|destination| {
                    let entry = table.get(destination);
                    let route = Route {
                        cost: entry.cost().finite(),
                        via: entry.via().map(|via| routers.label(via)),
                    };
                    (routers.label(destination), route)
                })
                .collect();
            (routers.label(router), routes)
        })
        .collect();
    let round = Round {
        round: snapshot.round,
        stable: snapshot.stable,
        tables,
    };
    serde_json::to_writer(&mut *out, &round)?;
    writeln!(out)?;
    Ok(())
}
