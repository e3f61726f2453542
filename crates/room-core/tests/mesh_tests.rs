use glam::Vec3;
use room_core::geometry::{Material, Part, Shape};
use room_core::mesh::{sort_back_to_front, MeshData};
use room_core::scene::build_room;

fn triangle_normals(mesh: &MeshData) -> Vec<(Vec3, Vec3)> {
    mesh.indices
        .chunks(3)
        .map(|tri| {
            let p = |i: u32| Vec3::from(mesh.vertices[i as usize].position);
            let (a, b, c) = (p(tri[0]), p(tri[1]), p(tri[2]));
            ((b - a).cross(c - a), (a + b + c) / 3.0)
        })
        .collect()
}

#[test]
fn cuboid_faces_wind_outwards() {
    let center = Vec3::new(1.0, 0.5, -1.0);
    let part = Part::cuboid(center, Vec3::new(1.0, 0.4, 2.0), Material::standard(0x808080));
    let mesh = MeshData::from_parts([&part]);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.indices.len(), 36);
    for (n, centroid) in triangle_normals(&mesh) {
        assert!(n.dot(centroid - center) > 0.0);
    }
}

#[test]
fn ring_faces_up_and_carries_opacity() {
    let part = Part {
        shape: Shape::Ring {
            center: Vec3::new(0.0, 0.02, 0.0),
            inner: 0.16,
            outer: 0.19,
            segments: 32,
        },
        material: Material::basic(0xffffff).with_opacity(0.35),
    };
    let mesh = MeshData::from_parts([&part]);
    assert_eq!(mesh.indices.len(), 32 * 6);
    for (n, _) in triangle_normals(&mesh) {
        assert!(n.y > 0.0);
    }
    assert!(mesh.vertices.iter().all(|v| v.color[3] == 0.35 && v.unlit == 1.0));
}

#[test]
fn room_shell_faces_the_interior() {
    let shell = build_room();
    let middle = Vec3::new(0.0, 1.3, 0.0);
    for part in shell.parts.iter().filter(|p| matches!(p.shape, Shape::Quad { .. })) {
        let mesh = MeshData::from_parts([part]);
        for (n, centroid) in triangle_normals(&mesh) {
            assert!(n.dot(middle - centroid) > 0.0, "{:?}", part.shape);
        }
    }
}

#[test]
fn back_to_front_orders_by_distance() {
    let glass = |z: f32| {
        Part::cuboid(
            Vec3::new(0.0, 0.0, z),
            Vec3::ONE,
            Material::standard(0x90caf9).with_opacity(0.5),
        )
    };
    let mut parts = vec![glass(-1.0), glass(-5.0), glass(-3.0)];
    sort_back_to_front(&mut parts, Vec3::new(0.0, 0.0, 2.0));
    let zs: Vec<f32> = parts.iter().map(|p| p.shape.center().z).collect();
    assert_eq!(zs, [-5.0, -3.0, -1.0]);
}

#[test]
fn clear_empties_the_buffers() {
    let part = Part::cuboid(Vec3::ZERO, Vec3::ONE, Material::standard(0));
    let mut mesh = MeshData::from_parts([&part]);
    assert!(!mesh.is_empty());
    mesh.clear();
    assert!(mesh.is_empty());
    assert!(mesh.vertices.is_empty());
}
