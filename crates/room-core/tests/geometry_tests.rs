// Ray intersection against the shapes used for picking.

use glam::Vec3;
use room_core::geometry::{Aabb, Annulus, Ray, Shape, Surface};

fn unit_box() -> Aabb {
    Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0))
}

#[test]
fn slab_hit_from_outside_returns_entry_distance() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z);
    let t = unit_box().intersect_ray(&ray).unwrap();
    assert!((t - 4.0).abs() < 1e-5, "t = {t}");
}

#[test]
fn slab_miss_when_ray_passes_beside_box() {
    let ray = Ray::new(Vec3::new(1.5, 0.0, 5.0), Vec3::NEG_Z);
    assert!(unit_box().intersect_ray(&ray).is_none());
}

#[test]
fn slab_ignores_boxes_behind_origin() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(unit_box().intersect_ray(&ray).is_none());
}

#[test]
fn slab_from_inside_returns_exit_distance() {
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    let t = unit_box().intersect_ray(&ray).unwrap();
    assert!((t - 1.0).abs() < 1e-5);
}

#[test]
fn slab_handles_axis_parallel_rays() {
    // Direction has zero x and y components; only the z slab constrains t.
    let inside = Ray::new(Vec3::new(0.5, -0.5, -3.0), Vec3::Z);
    assert!(unit_box().intersect_ray(&inside).is_some());
    let outside = Ray::new(Vec3::new(0.5, 1.5, -3.0), Vec3::Z);
    assert!(unit_box().intersect_ray(&outside).is_none());
}

#[test]
fn slab_oblique_hit() {
    let ray = Ray::new(Vec3::new(3.0, 3.0, 3.0), Vec3::new(-1.0, -1.0, -1.0));
    let t = unit_box().intersect_ray(&ray).unwrap();
    let p = ray.point_at(t);
    assert!((p - Vec3::ONE).length() < 1e-4, "entry at {p:?}");
}

fn ring() -> Annulus {
    Annulus {
        center: Vec3::new(1.0, 0.02, -1.0),
        inner: 0.16,
        outer: 0.19,
    }
}

#[test]
fn annulus_hit_inside_band() {
    let ray = Ray::new(Vec3::new(1.175, 2.0, -1.0), Vec3::NEG_Y);
    let t = ring().intersect_ray(&ray).unwrap();
    assert!((t - 1.98).abs() < 1e-5);
}

#[test]
fn annulus_miss_through_hole_and_outside() {
    let hole = Ray::new(Vec3::new(1.0, 2.0, -1.0), Vec3::NEG_Y);
    assert!(ring().intersect_ray(&hole).is_none());
    let outside = Ray::new(Vec3::new(1.3, 2.0, -1.0), Vec3::NEG_Y);
    assert!(ring().intersect_ray(&outside).is_none());
}

#[test]
fn annulus_miss_for_horizontal_or_receding_rays() {
    let flat = Ray::new(Vec3::new(0.0, 0.02, -1.0), Vec3::X);
    assert!(ring().intersect_ray(&flat).is_none());
    let up = Ray::new(Vec3::new(1.175, 2.0, -1.0), Vec3::Y);
    assert!(ring().intersect_ray(&up).is_none());
}

#[test]
fn shapes_translate_into_world_surfaces() {
    let cuboid = Shape::Cuboid {
        center: Vec3::new(0.0, 0.5, 0.0),
        size: Vec3::ONE,
    }
    .translated(Vec3::new(2.0, 0.0, 0.0));
    match cuboid.surface() {
        Surface::Box(b) => {
            assert_eq!(b.min, Vec3::new(1.5, 0.0, -0.5));
            assert_eq!(b.max, Vec3::new(2.5, 1.0, 0.5));
        }
        other => panic!("expected a box, got {other:?}"),
    }

    let ring = Shape::Ring {
        center: Vec3::new(0.0, 0.02, 0.0),
        inner: 0.16,
        outer: 0.19,
        segments: 32,
    }
    .translated(Vec3::new(-1.0, 0.0, 1.0));
    assert_eq!(ring.center(), Vec3::new(-1.0, 0.02, 1.0));
    assert!(matches!(ring.surface(), Surface::Ring(_)));
}
