use bevy::prelude::*;

#[derive(Component)]
pub struct ControlPanel;

#[derive(Component)]
pub struct PowerButton;

#[derive(Component)]
pub struct PowerButtonLabel;

/// Zero-based index; button `n` selects speed level `n + 1`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedButton(pub u8);

#[derive(Component)]
pub struct StatusPanel;

/// A status panel line that tracks the fan.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    Fan,
    Speed,
    Airflow,
    Motion,
}

impl StatusLine {
    pub const ALL: [StatusLine; 4] = [
        StatusLine::Fan,
        StatusLine::Speed,
        StatusLine::Airflow,
        StatusLine::Motion,
    ];
}
