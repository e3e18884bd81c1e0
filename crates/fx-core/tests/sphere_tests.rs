use fx_core::{displacement, fbm, SphereMesh, SPHERE_SLICES, SPHERE_STACKS};
use glam::Vec3;

#[test]
fn mesh_counts_match_subdivision() {
    let mesh = SphereMesh::build(SPHERE_STACKS, SPHERE_SLICES);
    let (stacks, slices) = (SPHERE_STACKS as usize, SPHERE_SLICES as usize);
    assert_eq!(mesh.vertices.len(), (stacks + 1) * (slices + 1));
    assert_eq!(mesh.indices.len(), stacks * slices * 6);
    assert_eq!(mesh.triangle_count(), 2 * stacks * slices);
}

#[test]
fn mesh_indices_are_in_range() {
    let mesh = SphereMesh::build(8, 12);
    let n = mesh.vertices.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n);
    }
}

#[test]
fn vertices_sit_on_unit_sphere_with_unit_normals() {
    let mesh = SphereMesh::build(16, 16);
    for v in &mesh.vertices {
        let p = Vec3::from(v.position);
        let n = Vec3::from(v.normal);
        assert!((p.length() - 1.0).abs() < 1e-5);
        assert!((n.length() - 1.0).abs() < 1e-5);
        // Radial normals on a unit sphere coincide with positions.
        assert!((p - n).length() < 1e-6);
    }
}

#[test]
fn uv_covers_the_unit_square() {
    let mesh = SphereMesh::build(4, 4);
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
    assert_eq!(mesh.vertices.first().map(|v| v.uv[1]), Some(0.0));
    assert_eq!(mesh.vertices.last().map(|v| v.uv[1]), Some(1.0));
}

#[test]
fn fbm_is_bounded_and_time_varying() {
    let p = Vec3::new(0.3, -0.7, 0.64);
    let mut samples = Vec::new();
    for k in 0..200 {
        let t = k as f32 * 0.05;
        let v = fbm(p, t, 3);
        assert!((-1.0..=1.0).contains(&v), "fbm out of range: {v}");
        samples.push(v);
    }
    let min = samples.iter().cloned().fold(f32::MAX, f32::min);
    let max = samples.iter().cloned().fold(f32::MIN, f32::max);
    assert!(max - min > 0.05, "surface motion collapsed");
}

#[test]
fn lower_octaves_dominate() {
    // Weights are 1, 1/2, 1/4 over a 1.75 total. The three-octave signal can
    // therefore deviate from the normalized octave-0 term by at most the
    // combined share of the two higher octaves.
    let p = Vec3::new(0.5, 0.2, -0.4);
    let high_octave_share = 0.75 / 1.75;
    for k in 0..50 {
        let t = k as f32 * 0.2;
        let one = fbm(p, t, 1);
        let three = fbm(p, t, 3);
        assert!((three - one / 1.75).abs() <= high_octave_share + 1e-5);
    }
}

#[test]
fn pointer_swells_displacement() {
    let p = Vec3::new(0.1, 0.9, -0.3);
    let idle = displacement(p, 2.0, 3, 0.0);
    let active = displacement(p, 2.0, 3, 1.0);
    assert!((active - idle * 2.0).abs() < 1e-6);
    // Displacement never exceeds the configured fraction of the radius
    // (doubled at full pointer deflection).
    assert!(idle.abs() <= 0.1 + 1e-6);
    assert!(active.abs() <= 0.2 + 1e-6);
}
