use bevy::prelude::*;

/// Everything spawned for the desk and fan scene.
#[derive(Component)]
pub struct FanScene;

/// Parent of the blades; its rotation follows the simulated rotation angle.
#[derive(Component)]
pub struct BladeAssembly;

#[derive(Component)]
pub struct Blade;
