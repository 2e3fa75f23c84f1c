use bevy::color::Color;
use bevy::prelude::*;

/// A line of bevy_ui text.
#[derive(Bundle)]
pub struct LabelBundle {
    pub text: Text,
    pub font: TextFont,
    pub color: TextColor,
    pub node: Node,
}

impl LabelBundle {
    pub fn new(text: &str, font_size: f32, color: Color) -> Self {
        Self {
            text: Text::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(color),
            node: Node::default(),
        }
    }

    pub fn with_margin(mut self, margin: UiRect) -> Self {
        self.node.margin = margin;
        self
    }
}

/// A flat coloured rectangle placed in scene coordinates.
#[derive(Bundle)]
pub struct PanelRectBundle {
    pub sprite: Sprite,
    pub transform: Transform,
}

impl PanelRectBundle {
    pub fn new(rect: Rect, color: Color, layer: f32) -> Self {
        Self {
            sprite: Sprite::from_color(color, rect.size()),
            transform: Transform::from_translation(rect.center().extend(layer)),
        }
    }
}

/// Text placed in scene coordinates, centred on `position`.
#[derive(Bundle)]
pub struct SceneLabelBundle {
    pub text: Text2d,
    pub font: TextFont,
    pub color: TextColor,
    pub transform: Transform,
}

impl SceneLabelBundle {
    pub fn new(text: &str, font_size: f32, position: Vec2, layer: f32) -> Self {
        Self {
            text: Text2d::new(text),
            font: TextFont {
                font_size,
                ..default()
            },
            color: TextColor(Color::WHITE),
            transform: Transform::from_translation(position.extend(layer)),
        }
    }
}
