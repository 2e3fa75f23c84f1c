use crate::fan::components::*;
use crate::fan::events::{FanCommandEvent, ReloadConfigEvent};
use crate::fan::logic::*;
use crate::fan::resources::FanSim;
use crate::helpers::mesh::triangle_fan_mesh;
use bevy::prelude::*;

pub fn spawn_fan_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for part in desk_parts().into_iter().chain(fan_body_parts()) {
        let mesh = match part.shape {
            PartShape::Rect { size } => meshes.add(Rectangle::new(size.x, size.y)),
            PartShape::Circle { radius } => meshes.add(Circle::new(radius)),
        };
        commands.spawn((
            Mesh2d(mesh),
            MeshMaterial2d(materials.add(part.color)),
            Transform::from_translation(part.center.extend(part.layer)),
            FanScene,
        ));
    }

    let blade_mesh = meshes.add(triangle_fan_mesh(&blade_outline()));
    commands
        .spawn((
            Transform::from_translation(HUB_CENTER.extend(BLADE_LAYER)),
            Visibility::default(),
            BladeAssembly,
            FanScene,
        ))
        .with_children(|parent| {
            for (index, color) in BLADE_COLORS.iter().enumerate() {
                parent.spawn((
                    Mesh2d(blade_mesh.clone()),
                    MeshMaterial2d(materials.add(*color)),
                    Transform::from_rotation(Quat::from_rotation_z(blade_heading(index))),
                    Blade,
                ));
            }
        });

    info!("Fan scene spawned with {} blades", BLADE_COUNT);
}

/// Runs on the fixed clock, once per simulation tick.
pub fn tick_fan(mut fan: ResMut<FanSim>) {
    fan.tick();
}

pub fn apply_fan_commands(
    mut fan_commands: MessageReader<FanCommandEvent>,
    mut fan: ResMut<FanSim>,
) {
    for FanCommandEvent(command) in fan_commands.read() {
        fan.apply(*command);
    }
}

/// A config that fails to load leaves the running simulation untouched.
pub fn reload_fan_config(
    mut reloads: MessageReader<ReloadConfigEvent>,
    mut commands: Commands,
    mut fixed_time: ResMut<Time<Fixed>>,
) {
    if reloads.read().count() == 0 {
        return;
    }
    if let Err(err) = fansim::reload_config() {
        warn!("Keeping the current fan config: {err}");
        return;
    }

    let config = fansim::get_config();
    let seed: u64 = rand::random();
    info!(
        "Fan config reloaded, restarting at {} Hz, seed {}",
        config.clock.tick_hz, seed
    );
    fixed_time.set_timestep_hz(config.clock.tick_hz);
    commands.insert_resource(FanSim::new(config, seed));
}

pub fn sync_blade_rotation(
    fan: Res<FanSim>,
    mut assemblies: Query<&mut Transform, With<BladeAssembly>>,
) {
    let rotation = Quat::from_rotation_z(fan.state().rotation_angle().to_radians());
    for mut transform in assemblies.iter_mut() {
        transform.rotation = rotation;
    }
}

pub fn draw_safety_cage(mut gizmos: Gizmos) {
    gizmos
        .circle_2d(HUB_CENTER, CAGE_OUTER_RADIUS, CAGE_COLOR)
        .resolution(36);
    gizmos
        .circle_2d(HUB_CENTER, CAGE_INNER_RADIUS, CAGE_COLOR)
        .resolution(36);
    for end in cage_spoke_ends() {
        gizmos.line_2d(HUB_CENTER, end, CAGE_COLOR);
    }
}

/// Particles are only shown while the fan is powered; they stay frozen in
/// the simulation while it is off.
pub fn draw_airflow(fan: Res<FanSim>, mut gizmos: Gizmos) {
    if !fan.state().power_on() {
        return;
    }
    for view in fan.particle_views() {
        gizmos.circle_2d(
            HUB_CENTER + view.offset,
            PARTICLE_RADIUS,
            particle_color(view.alpha),
        );
    }
}
