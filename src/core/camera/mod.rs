pub(crate) mod components;
pub(crate) mod systems;

use crate::core::camera::systems::*;
use bevy::prelude::*;

/// The scene is laid out in a fixed 800x600 space with the origin in the
/// bottom-left corner and y pointing up.
pub(crate) const SCENE_SIZE: Vec2 = Vec2::new(800.0, 600.0);

pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera);
    }
}
