use bevy::color::Color;
use bevy::math::Vec2;
use std::f32::consts::TAU;

/// Where the blades, the cage and the airflow are centred.
pub const HUB_CENTER: Vec2 = Vec2::new(450.0, 350.0);

pub const BLADE_COUNT: usize = 5;
pub const BLADE_ROOT_RADIUS: f32 = 10.0;
pub const BLADE_TIP_RADIUS: f32 = 60.0;
/// Half-width of a blade at its root, in degrees.
pub const BLADE_ROOT_HALF_WIDTH: f32 = 15.0;
/// Extra sweep of the leading edge between root and tip, in radians.
pub const BLADE_SWEEP: f32 = 0.2;
const BLADE_EDGE_SEGMENTS: usize = 10;

pub const BLADE_COLORS: [Color; BLADE_COUNT] = [
    Color::srgb(0.9, 0.2, 0.2), // red
    Color::srgb(0.2, 0.9, 0.2), // green
    Color::srgb(0.2, 0.2, 0.9), // blue
    Color::srgb(0.9, 0.9, 0.2), // yellow
    Color::srgb(0.9, 0.2, 0.9), // magenta
];

pub const CAGE_OUTER_RADIUS: f32 = 80.0;
pub const CAGE_INNER_RADIUS: f32 = 70.0;
pub const CAGE_SPOKES: usize = 12;
pub const CAGE_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 0.4);

pub const PARTICLE_RADIUS: f32 = 1.5;

const DESK_COLOR: Color = Color::srgb(0.55, 0.27, 0.07);
const DESK_EDGE_COLOR: Color = Color::srgb(0.44, 0.216, 0.056);
const FAN_COLOR: Color = Color::srgb(0.4, 0.4, 0.4);
const STAND_TOP_COLOR: Color = Color::srgb(0.28, 0.28, 0.28);
const BASE_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const MOTOR_FACE_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);
const HUB_COLOR: Color = Color::srgb(0.15, 0.15, 0.15);

/// Draw order of the static scene; blades sit between the motor and the hub cap.
pub const BLADE_LAYER: f32 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartShape {
    Rect { size: Vec2 },
    Circle { radius: f32 },
}

/// One static piece of the desk or fan body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePart {
    pub shape: PartShape,
    pub center: Vec2,
    pub color: Color,
    pub layer: f32,
}

impl ScenePart {
    const fn rect(min: Vec2, max: Vec2, color: Color, layer: f32) -> Self {
        Self {
            shape: PartShape::Rect {
                size: Vec2::new(max.x - min.x, max.y - min.y),
            },
            center: Vec2::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
            color,
            layer,
        }
    }

    const fn circle(center: Vec2, radius: f32, color: Color, layer: f32) -> Self {
        Self {
            shape: PartShape::Circle { radius },
            center,
            color,
            layer,
        }
    }
}

pub fn desk_parts() -> Vec<ScenePart> {
    let legs = [(120.0, 50.0), (660.0, 50.0), (120.0, 350.0), (660.0, 350.0)];

    let mut parts = vec![
        // edge strip behind the top gives it an outline
        ScenePart::rect(Vec2::new(98.0, 148.0), Vec2::new(702.0, 352.0), DESK_EDGE_COLOR, 0.0),
        ScenePart::rect(Vec2::new(100.0, 150.0), Vec2::new(700.0, 350.0), DESK_COLOR, 0.1),
    ];
    parts.extend(legs.iter().map(|&(x, y)| {
        ScenePart::rect(Vec2::new(x, y), Vec2::new(x + 20.0, y + 100.0), DESK_COLOR, 0.05)
    }));
    parts
}

pub fn fan_body_parts() -> Vec<ScenePart> {
    vec![
        ScenePart::circle(Vec2::new(400.0, 250.0), 40.0, BASE_COLOR, 1.0),
        // pole
        ScenePart::rect(Vec2::new(396.0, 250.0), Vec2::new(404.0, 350.0), FAN_COLOR, 1.1),
        ScenePart::circle(Vec2::new(400.0, 350.0), 15.0, STAND_TOP_COLOR, 1.2),
        ScenePart::circle(Vec2::new(400.0, 350.0), 20.0, FAN_COLOR, 1.3),
        // arm from motor to hub
        ScenePart::rect(Vec2::new(400.0, 347.0), HUB_CENTER + Vec2::new(0.0, 3.0), FAN_COLOR, 1.4),
        ScenePart::circle(Vec2::new(425.0, 350.0), 15.0, MOTOR_FACE_COLOR, 1.5),
        ScenePart::circle(HUB_CENTER, 12.0, HUB_COLOR, BLADE_LAYER + 1.0),
    ]
}

/// Resting heading of blade `index`, in radians.
pub fn blade_heading(index: usize) -> f32 {
    index as f32 * TAU / BLADE_COUNT as f32
}

/// Outline of a blade pointing along +x, starting at the hub centre so it can
/// be triangulated as a fan.
pub fn blade_outline() -> Vec<Vec2> {
    let mut outline = Vec::with_capacity(BLADE_EDGE_SEGMENTS + 3);
    outline.push(Vec2::ZERO);
    for i in 0..=BLADE_EDGE_SEGMENTS {
        let t = i as f32 / BLADE_EDGE_SEGMENTS as f32;
        let angle = t * BLADE_SWEEP;
        let radius = BLADE_ROOT_RADIUS + t * (BLADE_TIP_RADIUS - BLADE_ROOT_RADIUS);
        outline.push(Vec2::from_angle(angle) * radius);
    }
    outline.push(Vec2::from_angle(BLADE_ROOT_HALF_WIDTH.to_radians()) * BLADE_ROOT_RADIUS);
    outline
}

/// Outer end points of the cage spokes.
pub fn cage_spoke_ends() -> impl Iterator<Item = Vec2> {
    (0..CAGE_SPOKES)
        .map(|i| HUB_CENTER + Vec2::from_angle(i as f32 * TAU / CAGE_SPOKES as f32) * CAGE_OUTER_RADIUS)
}

/// Pale blue, at most 60% opaque.
pub fn particle_color(alpha: f32) -> Color {
    Color::srgba(0.7, 0.8, 1.0, alpha.clamp(0.0, 1.0) * 0.6)
}
