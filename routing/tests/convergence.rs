use distvec_routing::{
    converge, rounds, step, Cost, Entry, Link, Router, Routers, Snapshot, Topology,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn build(routers: &[&str], links: &[(&str, &str, u32)]) -> Topology {
    let links: Vec<Link> = links.iter().map(|(a, b, c)| Link::new(*a, *b, *c)).collect();
    Topology::build(Routers::new(routers.iter().copied()), &links)
}

fn id(topology: &Topology, label: &str) -> Router {
    topology.routers().lookup(label).unwrap()
}

fn random_topology(rng: &mut StdRng) -> Topology {
    let n = rng.gen_range(1..12);
    let labels: Vec<String> = (0..n).map(|i| format!("r{i:02}")).collect();
    let mut links = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(0.3) {
                links.push(Link::new(&labels[i], &labels[j], rng.gen_range(0..=20)));
            }
        }
    }
    Topology::build(Routers::new(labels), &links)
}

/// All-pairs shortest path costs computed independently of the round structure.
fn shortest_paths(topology: &Topology) -> Vec<Vec<Option<u64>>> {
    let routers = topology.routers();
    let n = routers.len();
    let mut dist = vec![vec![None; n]; n];
    for router in routers.iter() {
        dist[router.index()][router.index()] = Some(0);
        for (neighbor, cost) in topology.neighbors(router) {
            let current = dist[router.index()][neighbor.index()];
            let cost = u64::from(cost);
            if current.map_or(true, |c| cost < c) {
                dist[router.index()][neighbor.index()] = Some(cost);
            }
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(a), Some(b)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |c| a + b < c) {
                        dist[i][j] = Some(a + b);
                    }
                }
            }
        }
    }
    dist
}

#[test]
fn test_two_routers() {
    let topology = build(&["A", "B"], &[("A", "B", 5)]);
    let (a, b) = (id(&topology, "A"), id(&topology, "B"));

    let snapshots: Vec<Snapshot> = rounds(&topology).collect();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0].tables.get(a).get(b), Entry::reachable(5, b));
    assert_eq!(snapshots[0].tables.get(b).get(a), Entry::reachable(5, a));
    assert!(snapshots[1].stable);
    assert_eq!(snapshots[1].tables, snapshots[0].tables);
}

#[test]
fn test_line_learns_through_middle() {
    let topology = build(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 1)]);
    let (a, b, c) = (id(&topology, "A"), id(&topology, "B"), id(&topology, "C"));

    let snapshot = converge(&topology);
    assert!(snapshot.stable);
    assert_eq!(snapshot.tables.get(a).get(c), Entry::reachable(2, b));
    assert_eq!(snapshot.tables.get(c).get(a), Entry::reachable(2, b));
}

#[test]
fn test_isolated_router() {
    let topology = build(&["A", "B", "C"], &[("A", "B", 1)]);
    let (a, b, c) = (id(&topology, "A"), id(&topology, "B"), id(&topology, "C"));

    let snapshot = converge(&topology);
    assert_eq!(snapshot.tables.get(a).get(c), Entry::UNREACHABLE);
    assert_eq!(snapshot.tables.get(b).get(c), Entry::UNREACHABLE);
    assert_eq!(snapshot.tables.get(c).get(a), Entry::UNREACHABLE);
    assert_eq!(snapshot.tables.get(c).get(b), Entry::UNREACHABLE);
    assert_eq!(snapshot.tables.get(a).get(b), Entry::reachable(1, b));
}

#[test]
fn test_ring_tie_break() {
    // Opposite corners of an equal-weight ring are reachable two ways at the same cost. The
    // neighbor that sorts first wins.
    let topology = build(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)],
    );
    let (a, b, c, d) = (
        id(&topology, "A"),
        id(&topology, "B"),
        id(&topology, "C"),
        id(&topology, "D"),
    );

    let snapshot = converge(&topology);
    assert_eq!(snapshot.tables.get(a).get(c), Entry::reachable(2, b));
    assert_eq!(snapshot.tables.get(c).get(a), Entry::reachable(2, b));
    assert_eq!(snapshot.tables.get(b).get(d), Entry::reachable(2, a));
    assert_eq!(snapshot.tables.get(d).get(b), Entry::reachable(2, a));
}

#[test]
fn test_tie_break_ignores_declaration_order() {
    let forward = build(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)],
    );
    let backward = build(
        &["D", "C", "B", "A"],
        &[("A", "D", 1), ("D", "C", 1), ("C", "B", 1), ("B", "A", 1)],
    );
    assert_eq!(converge(&forward).tables, converge(&backward).tables);
}

#[test]
fn test_random_topologies() {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..200 {
        let topology = random_topology(&mut rng);
        let routers = topology.routers();
        let snapshots: Vec<Snapshot> = rounds(&topology).collect();

        // Symmetric adjacency
        for r in routers.iter() {
            for (n, cost) in topology.neighbors(r) {
                assert_eq!(topology.cost(n, r), Some(cost));
            }
        }

        // Bounded number of rounds, only the last stable
        assert!(snapshots.len() <= routers.len().max(2));
        let (last, rest) = snapshots.split_last().unwrap();
        assert!(last.stable);
        assert!(rest.iter().all(|s| !s.stable));

        for (i, snapshot) in snapshots.iter().enumerate() {
            assert_eq!(snapshot.round, i as u64);

            // Every router reaches itself for free
            for r in routers.iter() {
                assert_eq!(snapshot.tables.get(r).get(r), Entry::reachable(0, r));
            }
        }

        for pair in snapshots.windows(2) {
            let (prev, next) = (&pair[0].tables, &pair[1].tables);
            for r in routers.iter() {
                for d in routers.iter() {
                    // Costs never increase
                    assert!(next.get(r).get(d).cost() <= prev.get(r).get(d).cost());

                    // No neighbor offers a cheaper path than the one adopted
                    if d == r {
                        continue;
                    }
                    for (n, link) in topology.neighbors(r) {
                        assert!(next.get(r).get(d).cost() <= prev.get(n).get(d).cost().through(link));
                    }
                }
            }
        }

        // Relaxing the fixed point changes nothing
        let again = step(&topology, &last.tables);
        assert!(!again.changed);
        assert_eq!(again.tables, *last.tables);

        // Converged costs are the true shortest paths, and each next hop is consistent
        let expected = shortest_paths(&topology);
        for r in routers.iter() {
            for d in routers.iter() {
                let entry = last.tables.get(r).get(d);
                assert_eq!(entry.cost().finite(), expected[r.index()][d.index()]);
                assert_eq!(entry.is_reachable(), entry.cost() != Cost::Infinite);
                let Some(via) = entry.via() else {
                    continue;
                };
                if d == r {
                    assert_eq!(via, r);
                    continue;
                }
                let link = topology.cost(r, via).unwrap();
                assert_eq!(entry.cost(), last.tables.get(via).get(d).cost().through(link));
            }
        }
    }
}
