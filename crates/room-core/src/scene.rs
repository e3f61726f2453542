//! Static room layout: shell geometry, lighting and the furniture list.
//!
//! Nothing here changes after startup; the registry owns the furniture once
//! `furniture()` has been registered.

use crate::constants::*;
use crate::geometry::{hex_to_linear, Material, Model, Part};
use crate::registry::ItemSpec;
use glam::Vec3;

/// Hemisphere + single directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lighting {
    pub sky: [f32; 3],
    pub ground: [f32; 3],
    pub hemi_intensity: f32,
    /// Unit vector pointing from the scene towards the light.
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            sky: hex_to_linear(HEMI_SKY_HEX),
            ground: hex_to_linear(HEMI_GROUND_HEX),
            hemi_intensity: HEMI_INTENSITY,
            sun_direction: SUN_POSITION.normalize(),
            sun_intensity: SUN_INTENSITY,
        }
    }
}

/// Non-interactive part of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomShell {
    pub background: [f32; 3],
    pub lighting: Lighting,
    pub parts: Vec<Part>,
}

/// Floor and walls are one-sided quads facing into the room, so the orbit
/// camera sees the interior from outside the shell.
pub fn build_room() -> RoomShell {
    let wall = Material::standard(WALL_HEX);
    let (hw, hd, hh) = (ROOM_W / 2.0, ROOM_D / 2.0, ROOM_H / 2.0);
    let up = Vec3::new(0.0, hh, 0.0);

    let mut parts = vec![Part::quad(
        Vec3::ZERO,
        Vec3::new(hw, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -hd),
        Material::standard(FLOOR_HEX),
    )];

    // back, front, left, right
    parts.push(Part::quad(Vec3::new(0.0, hh, -hd), Vec3::new(hw, 0.0, 0.0), up, wall));
    parts.push(Part::quad(Vec3::new(0.0, hh, hd), Vec3::new(-hw, 0.0, 0.0), up, wall));
    parts.push(Part::quad(Vec3::new(-hw, hh, 0.0), Vec3::new(0.0, 0.0, -hd), up, wall));
    parts.push(Part::quad(Vec3::new(hw, hh, 0.0), Vec3::new(0.0, 0.0, hd), up, wall));

    // window and air conditioner on the back wall
    parts.push(Part::cuboid(
        Vec3::new(-0.2, 1.3, -ROOM_D / 2.0 + 0.04),
        Vec3::new(1.6, 1.0, 0.08),
        Material::standard(WINDOW_HEX).with_emissive(WINDOW_EMISSIVE_HEX),
    ));
    parts.push(Part::cuboid(
        Vec3::new(-0.2, 2.0, -ROOM_D / 2.0 + 0.15),
        Vec3::new(0.8, 0.24, 0.22),
        Material::standard(AC_HEX),
    ));

    RoomShell {
        background: hex_to_linear(BACKGROUND_HEX),
        lighting: Lighting::default(),
        parts,
    }
}

pub fn make_bed() -> Model {
    Model::new().with(Part::cuboid(
        Vec3::new(0.0, BED_H / 2.0, 0.0),
        Vec3::new(BED_W, BED_H, BED_L),
        Material::standard(0xbfb7aa),
    ))
}

pub fn make_desk() -> Model {
    let leg = Material::standard(0xc8c2ba);
    let lx = DESK_W / 2.0 - 0.04;
    let lz = DESK_D / 2.0 - 0.04;
    let mut model = Model::new();
    for (x, z) in [(-lx, lz), (lx, lz), (-lx, -lz), (lx, -lz)] {
        model = model.with(Part::cuboid(
            Vec3::new(x, DESK_H / 2.0, z),
            Vec3::new(0.04, DESK_H, 0.04),
            leg,
        ));
    }
    model.with(Part::cuboid(
        Vec3::new(0.0, DESK_H, 0.0),
        Vec3::new(DESK_W, 0.04, DESK_D),
        Material::standard(0xdccfbf),
    ))
}

pub fn make_shelf() -> Model {
    let board = Material::standard(0x9a9a9a);
    let mut model = Model::new().with(Part::cuboid(
        Vec3::new(0.0, SHELF_H / 2.0, 0.0),
        Vec3::new(SHELF_W, SHELF_H, SHELF_D),
        Material::standard(0xa8a8a8),
    ));
    for h in [SHELF_H * 0.33, SHELF_H * 0.66] {
        model = model.with(Part::cuboid(
            Vec3::new(0.0, h, 0.0),
            Vec3::new(SHELF_W * 0.98, 0.02, SHELF_D * 0.98),
            board,
        ));
    }
    model
}

pub fn make_fish_tank() -> Model {
    Model::new()
        .with(Part::cuboid(
            Vec3::new(0.0, TANK_STAND_H / 2.0, 0.0),
            Vec3::new(TANK_W + 0.04, TANK_STAND_H, TANK_D + 0.04),
            Material::standard(0x6b6257),
        ))
        .with(Part::cuboid(
            Vec3::new(0.0, TANK_STAND_H + TANK_H / 2.0, 0.0),
            Vec3::new(TANK_W, TANK_H, TANK_D),
            Material::standard(0x90caf9).with_opacity(0.35),
        ))
}

/// The fixed furniture list, in registration order.
pub fn furniture() -> Vec<ItemSpec> {
    let m = WALL_MARGIN;
    vec![
        ItemSpec::new("bed", "雙人床", "150×190cm，靠右牆。", make_bed())
            .at(Vec3::new(ROOM_W / 2.0 - BED_W / 2.0 - m, 0.0, -0.2)),
        ItemSpec::new("desk", "工作桌", "120×60cm 工作區。", make_desk())
            .at(Vec3::new(ROOM_W / 2.0 - DESK_W / 2.0 - m, 0.0, 0.9))
            .with_link("#desk"),
        ItemSpec::new("shelf", "三層書櫃", "60×28×100cm 展示櫃。", make_shelf())
            .at(Vec3::new(ROOM_W / 2.0 - SHELF_W / 2.0 - m, 0.0, 1.35))
            .with_link("#shelf"),
        ItemSpec::new("tank", "水族缸 45×45×45", "後牆偏左、靠窗側。", make_fish_tank())
            .at(Vec3::new(-ROOM_W / 2.0 + 0.65, 0.0, -ROOM_D / 2.0 + 0.55))
            .with_link("#aquarium"),
    ]
}
