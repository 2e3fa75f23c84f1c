use crate::core::camera::SCENE_SIZE;
use crate::core::camera::components::MainCamera;
use bevy::camera::ScalingMode;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub(crate) fn spawn_camera(mut commands: Commands) {
    let center = SCENE_SIZE / 2.0;
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: SCENE_SIZE.x,
                min_height: SCENE_SIZE.y,
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(center.x, center.y, 0.0),
        MainCamera,
    ));

    info!("Camera spawned");
}

/// Cursor position in scene coordinates, if the cursor is inside the window.
pub(crate) fn cursor_scene_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = cameras.single().ok()?;
    camera.viewport_to_world_2d(camera_transform, cursor).ok()
}
