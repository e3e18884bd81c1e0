use fx_core::{PulseGraph, EDGE_PROBABILITY, NEURAL_LAYERS, NODES_PER_LAYER};

const DT: f32 = 1.0 / 60.0;

#[test]
fn full_probability_connects_every_adjacent_pair() {
    // 3 layers x 8 nodes, probability 1.0: every node in a non-final layer
    // reaches every node one layer ahead, nothing within a layer and nothing
    // skipping one.
    let g = PulseGraph::layered(1920.0, 1080.0, 3, 8, 1.0, 1);
    assert_eq!(g.nodes().len(), 24);
    assert_eq!(g.edges().len(), 2 * 8 * 8);
    for e in g.edges() {
        let from_layer = e.from / 8;
        let to_layer = e.to / 8;
        assert_eq!(to_layer, from_layer + 1, "edge {}->{}", e.from, e.to);
    }
}

#[test]
fn zero_probability_creates_no_edges() {
    let g = PulseGraph::layered(800.0, 600.0, 3, 8, 0.0, 1);
    assert_eq!(g.nodes().len(), 24);
    assert!(g.edges().is_empty());
}

#[test]
fn default_topology_is_feed_forward() {
    let g = PulseGraph::layered(
        1280.0,
        720.0,
        NEURAL_LAYERS,
        NODES_PER_LAYER,
        EDGE_PROBABILITY,
        77,
    );
    for e in g.edges() {
        assert_eq!(e.to / NODES_PER_LAYER, e.from / NODES_PER_LAYER + 1);
        assert!((0.0..=1.0).contains(&e.weight));
    }
}

#[test]
fn edge_activity_is_a_ping_pong_oscillator() {
    let mut g = PulseGraph::layered(800.0, 600.0, 3, 8, 1.0, 9);
    let mut prev: Vec<f32> = g.edges().iter().map(|e| e.activity).collect();
    let mut reversals = 0u32;
    let mut prev_dir: Vec<Option<bool>> = vec![None; prev.len()];
    for _ in 0..5_000 {
        g.step(DT);
        for (i, e) in g.edges().iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&e.activity),
                "edge activity escaped [0,1]: {}",
                e.activity
            );
            let delta = e.activity - prev[i];
            if delta != 0.0 {
                let dir = delta > 0.0;
                if let Some(pd) = prev_dir[i] {
                    if pd != dir {
                        // Direction may only flip at a bound.
                        assert!(
                            prev[i] == 0.0 || prev[i] == 1.0,
                            "reversed away from bounds at {}",
                            prev[i]
                        );
                        reversals += 1;
                    }
                }
                prev_dir[i] = Some(dir);
            }
            prev[i] = e.activity;
        }
    }
    assert!(reversals > 0, "oscillator never reversed");
}

#[test]
fn node_activity_stays_clamped_and_phase_is_monotone() {
    let mut g = PulseGraph::layered(800.0, 600.0, 3, 8, 0.6, 21);
    let mut phases: Vec<f32> = g.nodes().iter().map(|n| n.phase).collect();
    for _ in 0..5_000 {
        g.step(DT);
        for (i, n) in g.nodes().iter().enumerate() {
            assert!((0.0..=1.0).contains(&n.activity));
            assert!(n.phase > phases[i], "phase went backwards");
            phases[i] = n.phase;
        }
    }
}

#[test]
fn relayout_moves_grid_without_touching_topology() {
    let mut g = PulseGraph::layered(800.0, 600.0, 3, 8, 1.0, 4);
    let edges_before = g.edges().len();
    let activity_before: Vec<f32> = g.nodes().iter().map(|n| n.activity).collect();

    g.relayout(1600.0, 1200.0);

    assert_eq!(g.edges().len(), edges_before);
    let activity_after: Vec<f32> = g.nodes().iter().map(|n| n.activity).collect();
    assert_eq!(activity_before, activity_after);
    // First node of the middle layer lands on the doubled grid.
    let mid = g.nodes()[8].x;
    assert!((mid - 1600.0 / 4.0 * 2.0).abs() < 1e-3);
}

#[test]
fn node_and_edge_alpha_ranges() {
    let mut g = PulseGraph::layered(800.0, 600.0, 3, 8, 1.0, 13);
    for _ in 0..600 {
        g.step(DT);
    }
    for n in g.nodes() {
        let a = n.alpha();
        assert!((0.2..=1.0).contains(&a));
    }
    for e in g.edges() {
        let a = e.alpha();
        assert!((0.1..=0.6).contains(&a));
    }
}
