use fx_core::{connection_strength, Connection, ParticleField, CONNECT_DISTANCE, PARTICLE_COUNT};

const DT: f32 = 1.0 / 60.0;

#[test]
fn particles_stay_in_bounds_after_many_steps() {
    let mut field = ParticleField::new(1920.0, 1080.0, PARTICLE_COUNT, 7);
    for _ in 0..10_000 {
        field.step(DT);
    }
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 1920.0, "x out of bounds: {}", p.x);
        assert!(p.y >= 0.0 && p.y <= 1080.0, "y out of bounds: {}", p.y);
    }
}

#[test]
fn particles_stay_in_bounds_after_one_step_at_1080p() {
    // 150 particles on a 1920x1080 surface, single update step.
    let mut field = ParticleField::new(1920.0, 1080.0, 150, 42);
    field.step(DT);
    for p in field.particles() {
        assert!((0.0..=1920.0).contains(&p.x));
        assert!((0.0..=1080.0).contains(&p.y));
    }
}

#[test]
fn boundary_contact_reflects_velocity() {
    let mut field = ParticleField::new(100.0, 100.0, 50, 3);
    // Run until at least one particle has hit a wall, then verify clamping
    // kept everything inside on every intermediate step.
    for _ in 0..2_000 {
        field.step(DT);
        for p in field.particles() {
            assert!((0.0..=100.0).contains(&p.x));
            assert!((0.0..=100.0).contains(&p.y));
        }
    }
    // Motion never dies: no particle ends up with zero velocity.
    for p in field.particles() {
        assert!(p.vx != 0.0 || p.vy != 0.0);
    }
}

#[test]
fn resize_keeps_positions_and_applies_new_bounds() {
    let mut field = ParticleField::new(800.0, 600.0, 100, 11);
    let before: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

    field.resize(1600.0, 1200.0);
    assert_eq!(field.bounds().width, 1600.0);
    assert_eq!(field.bounds().height, 1200.0);
    // Growing the surface must not reposition anything.
    let after: Vec<(f32, f32)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(before, after);

    // Shrinking pulls strays back via the normal clamp, not a reset.
    field.resize(200.0, 150.0);
    field.step(DT);
    for p in field.particles() {
        assert!((0.0..=200.0).contains(&p.x));
        assert!((0.0..=150.0).contains(&p.y));
    }
}

#[test]
fn connections_match_distance_threshold() {
    let field = ParticleField::new(1920.0, 1080.0, 150, 5);
    let mut out = Vec::new();
    field.connections(&mut out);

    let ps = field.particles();
    let connected: std::collections::HashSet<(usize, usize)> =
        out.iter().map(|c| (c.a, c.b)).collect();
    for i in 0..ps.len() {
        for j in (i + 1)..ps.len() {
            let dist = ((ps[i].x - ps[j].x).powi(2) + (ps[i].y - ps[j].y).powi(2)).sqrt();
            assert_eq!(
                dist < CONNECT_DISTANCE,
                connected.contains(&(i, j)),
                "pair ({i}, {j}) at distance {dist}"
            );
        }
    }
    for Connection { strength, .. } in &out {
        assert!(*strength > 0.0 && *strength <= 1.0);
    }
}

#[test]
fn connection_strength_decreases_with_distance() {
    let mut prev = connection_strength(0.0);
    assert_eq!(prev, 1.0);
    let mut d = 1.0;
    while d < CONNECT_DISTANCE {
        let s = connection_strength(d);
        assert!(s < prev, "strength not decreasing at distance {d}");
        prev = s;
        d += 1.0;
    }
    assert_eq!(connection_strength(CONNECT_DISTANCE), 0.0);
    assert_eq!(connection_strength(CONNECT_DISTANCE * 2.0), 0.0);
}

#[test]
fn same_seed_same_field() {
    let a = ParticleField::new(640.0, 480.0, 20, 99);
    let b = ParticleField::new(640.0, 480.0, 20, 99);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!((pa.x, pa.y, pa.vx, pa.vy), (pb.x, pb.y, pb.vx, pb.vy));
    }
}
