use glam::{Vec2, Vec3};
use proptest::prelude::*;
use room_core::geometry::{Material, Model, Part, Ray};
use room_core::picking::{pick, HoverState};
use room_core::{
    client_to_ndc, AppConfig, ClientRect, Cursor, ItemSpec, Registry, RoomApp, Viewport,
};

fn block(key: &str, x: f32) -> ItemSpec {
    let model = Model::new().with(Part::cuboid(
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::ONE,
        Material::standard(0x777777),
    ));
    ItemSpec::new(key, key.to_uppercase(), "", model).at(Vec3::new(x, 0.0, 0.0))
}

fn two_blocks() -> Registry {
    Registry::with_items([block("a", -2.0), block("b", 2.0)])
}

fn highlighted_count(registry: &Registry) -> usize {
    registry.highlighted().count()
}

#[test]
fn ndc_maps_corners_and_centre() {
    let rect = ClientRect {
        left: 10.0,
        top: 20.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(client_to_ndc(Vec2::new(10.0, 20.0), rect), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(Vec2::new(210.0, 120.0), rect), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(Vec2::new(110.0, 70.0), rect), Vec2::ZERO);
}

#[test]
fn ndc_clamps_outside_and_tolerates_empty_rect() {
    let rect = ClientRect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };
    assert_eq!(client_to_ndc(Vec2::new(-50.0, 500.0), rect), Vec2::new(-1.0, -1.0));
    assert_eq!(client_to_ndc(Vec2::new(30.0, 30.0), ClientRect::default()), Vec2::ZERO);
}

#[test]
fn nearest_item_wins() {
    let registry = two_blocks();
    // from the right, `b` is in front of `a`
    let ray = Ray::new(Vec3::new(10.0, 0.5, 0.0), Vec3::NEG_X);
    let hit = pick(&registry, &ray).unwrap();
    assert_eq!(hit.item, registry.find("b").unwrap());
    assert!((hit.distance - 7.5).abs() < 1e-5);

    let ray = Ray::new(Vec3::new(-10.0, 0.5, 0.0), Vec3::X);
    assert_eq!(pick(&registry, &ray).unwrap().item, registry.find("a").unwrap());
}

#[test]
fn empty_space_picks_nothing() {
    let registry = two_blocks();
    let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
    assert!(pick(&registry, &ray).is_none());
}

#[test]
fn unchanged_target_is_idempotent() {
    let mut registry = two_blocks();
    let a = registry.find("a");
    let mut hover = HoverState::default();
    assert!(hover.update(a, &mut registry).is_some());
    assert!(hover.update(a, &mut registry).is_none());
    assert!(hover.update(a, &mut registry).is_none());
    assert_eq!(highlighted_count(&registry), 1);
}

#[test]
fn direct_switch_keeps_a_single_highlight() {
    let mut registry = two_blocks();
    let a = registry.find("a");
    let b = registry.find("b");
    let mut hover = HoverState::default();

    let change = hover.update(a, &mut registry).unwrap();
    assert_eq!(change.previous, None);
    assert_eq!(change.current, a);
    assert_eq!(change.cursor, Cursor::Pointer);

    // A -> B in one step, with no empty frame in between
    let change = hover.update(b, &mut registry).unwrap();
    assert_eq!(change.previous, a);
    assert_eq!(change.current, b);
    assert_eq!(highlighted_count(&registry), 1);
    assert!(registry.get(b.unwrap()).unwrap().is_highlighted());
    assert!(!registry.get(a.unwrap()).unwrap().is_highlighted());
}

#[test]
fn leaving_restores_ring_and_cursor() {
    let mut registry = two_blocks();
    let a = registry.find("a");
    let idle = registry.get(a.unwrap()).unwrap().ring.opacity;
    let mut hover = HoverState::default();

    hover.update(a, &mut registry);
    assert!(registry.get(a.unwrap()).unwrap().ring.opacity > idle);

    let change = hover.update(None, &mut registry).unwrap();
    assert_eq!(change.cursor, Cursor::Grab);
    assert_eq!(change.cursor.as_css(), "grab");
    assert_eq!(registry.get(a.unwrap()).unwrap().ring.opacity, idle);
    assert_eq!(highlighted_count(&registry), 0);
    assert_eq!(hover.hovered(), None);
}

proptest! {
    #[test]
    fn at_most_one_item_is_ever_highlighted(
        moves in prop::collection::vec((-1.0f32..=1.0, -1.0f32..=1.0), 1..60)
    ) {
        let mut app = RoomApp::new(AppConfig::default(), Viewport::new(1280.0, 800.0));
        for (x, y) in moves {
            app.set_pointer_ndc(Vec2::new(x, y));
            app.frame();
            prop_assert!(app.registry().highlighted().count() <= 1);
            prop_assert_eq!(app.registry().highlighted().next(), app.hovered());
        }
    }
}
