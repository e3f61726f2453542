use glam::Vec3;

// Shared layout/interaction tuning constants used by the web frontend.

// Room dimensions (metres)
pub const ROOM_W: f32 = 3.6;
pub const ROOM_D: f32 = 2.6;
pub const ROOM_H: f32 = 2.6;

// Furniture dimensions (metres)
pub const BED_W: f32 = 1.5;
pub const BED_L: f32 = 1.9;
pub const BED_H: f32 = 0.45;
pub const DESK_W: f32 = 1.2;
pub const DESK_D: f32 = 0.6;
pub const DESK_H: f32 = 0.74;
pub const SHELF_W: f32 = 0.6;
pub const SHELF_D: f32 = 0.28;
pub const SHELF_H: f32 = 1.0;
pub const TANK_W: f32 = 0.45;
pub const TANK_D: f32 = 0.45;
pub const TANK_H: f32 = 0.45;
pub const TANK_STAND_H: f32 = 0.6;

// Gap kept between furniture and the right wall
pub const WALL_MARGIN: f32 = 0.12;

// Palette (sRGB hex, converted to linear before shading)
pub const BACKGROUND_HEX: u32 = 0x0b0b0c;
pub const FLOOR_HEX: u32 = 0x141414;
pub const WALL_HEX: u32 = 0x1a1a1a;
pub const WINDOW_HEX: u32 = 0x333333;
pub const WINDOW_EMISSIVE_HEX: u32 = 0x111111;
pub const AC_HEX: u32 = 0xe8e8e8;
pub const RING_HEX: u32 = 0xffffff;

// Lighting
pub const HEMI_SKY_HEX: u32 = 0xffffff;
pub const HEMI_GROUND_HEX: u32 = 0x222233;
pub const HEMI_INTENSITY: f32 = 0.7;
pub const SUN_POSITION: Vec3 = Vec3::new(3.0, 5.0, 3.0);
pub const SUN_INTENSITY: f32 = 1.1;

// Ring marker
pub const RING_INNER_RADIUS: f32 = 0.16;
pub const RING_OUTER_RADIUS: f32 = 0.19;
pub const RING_SEGMENTS: u32 = 32;
pub const RING_LIFT: f32 = 0.02; // keeps the ring above the floor plane
pub const RING_OPACITY_IDLE: f32 = 0.35;
pub const RING_OPACITY_HOVER: f32 = 0.85;

// Floating label
pub const DEFAULT_LABEL_HEIGHT: f32 = 0.35;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 42.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const LOOK_AT: Vec3 = Vec3::new(0.0, 0.9, 0.0);
pub const COMPACT_BREAKPOINT_PX: f32 = 768.0; // inclusive, like `max-width: 768px`
pub const COMPACT_EYE: Vec3 = Vec3::new(4.2, 2.8, 5.2);
pub const WIDE_EYE: Vec3 = Vec3::new(3.6, 2.2, 4.2);
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.06;
pub const ORBIT_MIN_POLAR: f32 = std::f32::consts::FRAC_PI_3;
pub const ORBIT_MAX_POLAR: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_MIN_DISTANCE: f32 = 1.5;
pub const ORBIT_MAX_DISTANCE: f32 = 12.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // dolly factor per wheel notch
