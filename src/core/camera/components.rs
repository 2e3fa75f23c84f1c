use bevy::prelude::*;

#[derive(Component)]
pub(crate) struct MainCamera;
