use crate::ui::components::StatusLine;
use bevy::color::Color;
use fansim::prelude::{FanState, SpeedLevel};

pub const TITLE: &str = "DESK FAN CONTROL";

pub const HELP_LINES: [&str; 6] = [
    "CONTROLS:",
    "Click POWER to toggle ON/OFF",
    "Click SPEED 1-5 to set the speed",
    "O: On  F: Off  R: Reset  ESC: Exit",
    "1-5: Speed  +/-: Faster/Slower",
    "F5: Reload fansim_config.toml",
];

pub const PANEL_COLOR: Color = Color::srgb(0.2, 0.2, 0.2);
const POWER_ON_COLOR: Color = Color::srgb(0.2, 0.8, 0.2);
const POWER_OFF_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);
const SPEED_ACTIVE: [f32; 3] = [0.2, 0.6, 0.2];

pub fn status_text(line: StatusLine, state: &FanState) -> String {
    match line {
        StatusLine::Fan => {
            let status = if state.power_on() { "RUNNING" } else { "STOPPED" };
            format!("FAN: {status}")
        }
        StatusLine::Speed => format!("SPEED LEVEL: {}", state.speed_level()),
        StatusLine::Airflow => {
            let status = if state.power_on() { "ACTIVE" } else { "IDLE" };
            format!("AIR FLOW: {status}")
        }
        StatusLine::Motion => format!(
            "MOTION: {} ({:.2} deg/tick)",
            state.phase(),
            state.current_speed()
        ),
    }
}

pub fn power_button_color(power_on: bool) -> Color {
    if power_on {
        POWER_ON_COLOR
    } else {
        POWER_OFF_COLOR
    }
}

pub fn power_label(power_on: bool) -> &'static str {
    if power_on { "ON" } else { "OFF" }
}

/// Only the button matching the current level is lit; the rest are dimmed.
pub fn speed_button_color(index: u8, level: SpeedLevel) -> Color {
    let [r, g, b] = SPEED_ACTIVE;
    if u16::from(index) + 1 == u16::from(level.get()) {
        Color::srgb(r, g, b)
    } else {
        Color::srgb(r * 0.5, g * 0.5, b * 0.5)
    }
}
