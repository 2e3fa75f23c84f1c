use crate::controls::logic::{PANEL, POWER_BUTTON, SPEED_BUTTONS, speed_button};
use crate::fan::resources::FanSim;
use crate::ui::bundles::*;
use crate::ui::components::*;
use crate::ui::logic::*;
use bevy::prelude::*;
use fansim::prelude::SpeedLevel;

const PANEL_LAYER: f32 = 5.0;
const BUTTON_LAYER: f32 = 5.1;
const TEXT_LAYER: f32 = 5.2;
const STATUS_COLOR: Color = Color::BLACK;

pub fn spawn_control_panel(mut commands: Commands) {
    commands.spawn((
        PanelRectBundle::new(PANEL, PANEL_COLOR, PANEL_LAYER),
        ControlPanel,
    ));

    commands.spawn((
        PanelRectBundle::new(POWER_BUTTON, power_button_color(false), BUTTON_LAYER),
        PowerButton,
    ));
    commands.spawn((
        SceneLabelBundle::new(power_label(false), 14.0, POWER_BUTTON.center(), TEXT_LAYER),
        PowerButtonLabel,
    ));
    commands.spawn(SceneLabelBundle::new(
        "POWER",
        12.0,
        Vec2::new(POWER_BUTTON.center().x, POWER_BUTTON.min.y - 10.0),
        TEXT_LAYER,
    ));

    for index in 0..SPEED_BUTTONS {
        let rect = speed_button(index);
        commands.spawn((
            PanelRectBundle::new(rect, speed_button_color(index, SpeedLevel::OFF), BUTTON_LAYER),
            SpeedButton(index),
        ));
        commands.spawn(SceneLabelBundle::new(
            &(index + 1).to_string(),
            12.0,
            rect.center(),
            TEXT_LAYER,
        ));
    }

    info!("Control panel spawned");
}

pub fn spawn_status_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(30.0),
                top: Val::Px(20.0),
                column_gap: Val::Px(60.0),
                flex_direction: FlexDirection::Row,
                ..default()
            },
            StatusPanel,
        ))
        .with_children(|parent| {
            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn(
                        LabelBundle::new(TITLE, 18.0, STATUS_COLOR)
                            .with_margin(UiRect::bottom(Val::Px(4.0))),
                    );
                    for line in StatusLine::ALL {
                        column.spawn((LabelBundle::new("", 13.0, STATUS_COLOR), line));
                    }
                });

            parent
                .spawn(Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    margin: UiRect::top(Val::Px(24.0)),
                    ..default()
                })
                .with_children(|column| {
                    for help in HELP_LINES {
                        column.spawn(LabelBundle::new(help, 13.0, STATUS_COLOR));
                    }
                });
        });
}

pub fn update_control_panel(
    fan: Res<FanSim>,
    mut power_buttons: Query<&mut Sprite, (With<PowerButton>, Without<SpeedButton>)>,
    mut power_labels: Query<&mut Text2d, With<PowerButtonLabel>>,
    mut speed_buttons: Query<(&mut Sprite, &SpeedButton), Without<PowerButton>>,
) {
    let state = fan.state();

    for mut sprite in power_buttons.iter_mut() {
        sprite.color = power_button_color(state.power_on());
    }
    for mut label in power_labels.iter_mut() {
        label.0 = power_label(state.power_on()).to_string();
    }
    for (mut sprite, SpeedButton(index)) in speed_buttons.iter_mut() {
        sprite.color = speed_button_color(*index, state.speed_level());
    }
}

pub fn update_status_text(fan: Res<FanSim>, mut lines: Query<(&mut Text, &StatusLine)>) {
    for (mut text, line) in lines.iter_mut() {
        let updated = status_text(*line, fan.state());
        if text.0 != updated {
            text.0 = updated;
        }
    }
}
