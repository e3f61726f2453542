use glam::Vec3;
use room_core::constants::{DEFAULT_LABEL_HEIGHT, RING_OPACITY_IDLE};
use room_core::geometry::{Material, Model, Part, Ray, Shape};
use room_core::scene::furniture;
use room_core::{ItemSpec, Registry};
use std::collections::HashSet;

fn crate_model() -> Model {
    Model::new()
        .with(Part::cuboid(
            Vec3::new(0.0, 0.25, 0.0),
            Vec3::splat(0.5),
            Material::standard(0x808080),
        ))
        .with(Part::cuboid(
            Vec3::new(0.0, 0.75, 0.0),
            Vec3::splat(0.3),
            Material::standard(0x404040),
        ))
}

#[test]
fn furniture_registers_in_order_with_unique_keys() {
    let registry = Registry::with_items(furniture());
    let keys: Vec<&str> = registry.iter().map(|(_, it)| it.key.as_str()).collect();
    assert_eq!(keys, ["bed", "desk", "shelf", "tank"]);
    let unique: HashSet<&str> = keys.iter().copied().collect();
    assert_eq!(unique.len(), keys.len());
    for (id, item) in registry.iter() {
        assert_eq!(registry.find(&item.key), Some(id));
    }
    assert_eq!(registry.find("sofa"), None);
}

#[test]
fn every_item_has_one_ring_and_one_label() {
    let registry = Registry::with_items(furniture());
    for (id, item) in registry.iter() {
        let ring_surfaces = registry
            .surfaces()
            .filter(|(sid, s)| {
                registry.owner_of(*sid) == Some(id) && matches!(s, room_core::geometry::Surface::Ring(_))
            })
            .count();
        assert_eq!(ring_surfaces, 1, "{}", item.key);
        assert_eq!(item.ring.opacity, RING_OPACITY_IDLE);
        assert!(!item.is_highlighted());
        assert_eq!(
            item.label_anchor(),
            item.position + Vec3::new(0.0, DEFAULT_LABEL_HEIGHT, 0.0)
        );
    }
}

#[test]
fn ring_shares_the_item_transform() {
    let spec = ItemSpec::new("crate", "箱", "木箱", crate_model()).at(Vec3::new(1.0, 0.0, -2.0));
    let registry = Registry::with_items([spec]);
    let (_, item) = registry.iter().next().unwrap();
    match item.ring_part().shape {
        Shape::Ring { center, .. } => {
            assert_eq!(center.x, 1.0);
            assert_eq!(center.z, -2.0);
            assert!(center.y > 0.0);
        }
        other => panic!("unexpected ring shape {other:?}"),
    }
}

#[test]
fn every_sub_part_resolves_to_its_owner() {
    let a = ItemSpec::new("a", "A", "first", crate_model()).at(Vec3::new(-2.0, 0.0, 0.0));
    let b = ItemSpec::new("b", "B", "second", crate_model()).at(Vec3::new(2.0, 0.0, 0.0));
    let registry = Registry::with_items([a, b]);
    let a_id = registry.find("a").unwrap();
    let b_id = registry.find("b").unwrap();

    // two boxes and one ring per item
    assert_eq!(registry.surfaces().count(), 6);

    // hit the small upper box of `b` from above
    let ray = Ray::new(Vec3::new(2.0, 5.0, 0.0), Vec3::NEG_Y);
    let hits: Vec<_> = registry
        .surfaces()
        .filter(|(_, s)| s.intersect_ray(&ray).is_some())
        .map(|(sid, _)| registry.owner_of(sid))
        .collect();
    assert!(!hits.is_empty());
    assert!(hits.iter().all(|owner| *owner == Some(b_id)));
    assert_ne!(a_id, b_id);
}

#[test]
fn label_height_override_moves_anchor() {
    let spec = ItemSpec::new("tall", "高", "tall", crate_model()).with_label_height(1.2);
    let registry = Registry::with_items([spec]);
    let (_, item) = registry.iter().next().unwrap();
    assert_eq!(item.label_anchor(), Vec3::new(0.0, 1.2, 0.0));
}

#[test]
fn panel_content_mirrors_item_metadata() {
    let registry = Registry::with_items(furniture());
    let desk = registry.get(registry.find("desk").unwrap()).unwrap();
    let content = desk.panel_content();
    assert_eq!(content.title, "工作桌");
    assert_eq!(content.text, "120×60cm 工作區。");
    assert_eq!(content.link.as_deref(), Some("#desk"));

    let bed = registry.get(registry.find("bed").unwrap()).unwrap();
    assert_eq!(bed.panel_content().link, None);
}
