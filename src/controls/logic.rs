use bevy::input::keyboard::KeyCode;
use bevy::math::{Rect, Vec2};
use fansim::prelude::FanCommand;

pub const SPEED_BUTTONS: u8 = 5;

/// Background of the control panel, in scene coordinates.
pub const PANEL: Rect = Rect {
    min: Vec2::new(650.0, 400.0),
    max: Vec2::new(770.0, 580.0),
};

pub const POWER_BUTTON: Rect = Rect {
    min: Vec2::new(670.0, 420.0),
    max: Vec2::new(750.0, 460.0),
};

const SPEED_BUTTON_BOTTOM: f32 = 470.0;
const SPEED_BUTTON_PITCH: f32 = 25.0;
const SPEED_BUTTON_HEIGHT: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    Fan(FanCommand),
    ReloadConfig,
    Exit,
}

/// Bounds of speed button `index` (0-based; button 0 selects level 1).
pub fn speed_button(index: u8) -> Rect {
    let bottom = SPEED_BUTTON_BOTTOM + SPEED_BUTTON_PITCH * f32::from(index);
    Rect {
        min: Vec2::new(POWER_BUTTON.min.x, bottom),
        max: Vec2::new(POWER_BUTTON.max.x, bottom + SPEED_BUTTON_HEIGHT),
    }
}

pub fn key_action(key: KeyCode) -> Option<ControlAction> {
    let command = match key {
        KeyCode::KeyO => FanCommand::PowerOn,
        KeyCode::KeyF => FanCommand::PowerOff,
        KeyCode::Digit1 | KeyCode::Numpad1 => FanCommand::SetLevel(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => FanCommand::SetLevel(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => FanCommand::SetLevel(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => FanCommand::SetLevel(4),
        KeyCode::Digit5 | KeyCode::Numpad5 => FanCommand::SetLevel(5),
        KeyCode::Equal | KeyCode::NumpadAdd => FanCommand::Increment,
        KeyCode::Minus | KeyCode::NumpadSubtract => FanCommand::Decrement,
        KeyCode::KeyR => FanCommand::Reset,
        KeyCode::F5 => return Some(ControlAction::ReloadConfig),
        KeyCode::Escape => return Some(ControlAction::Exit),
        _ => return None,
    };
    Some(ControlAction::Fan(command))
}

/// Maps a click in scene coordinates to the command of the button under it.
pub fn hit_test(point: Vec2) -> Option<FanCommand> {
    if POWER_BUTTON.contains(point) {
        return Some(FanCommand::TogglePower);
    }
    (0..SPEED_BUTTONS)
        .find(|&index| speed_button(index).contains(point))
        .map(|index| FanCommand::SetLevel(index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(710.0, 440.0), Some(FanCommand::TogglePower))]
    #[case(Vec2::new(670.0, 420.0), Some(FanCommand::TogglePower))]
    #[case(Vec2::new(750.0, 460.0), Some(FanCommand::TogglePower))]
    #[case(Vec2::new(700.0, 480.0), Some(FanCommand::SetLevel(1)))]
    #[case(Vec2::new(700.0, 505.0), Some(FanCommand::SetLevel(2)))]
    #[case(Vec2::new(700.0, 530.0), Some(FanCommand::SetLevel(3)))]
    #[case(Vec2::new(700.0, 555.0), Some(FanCommand::SetLevel(4)))]
    #[case(Vec2::new(700.0, 580.0), Some(FanCommand::SetLevel(5)))]
    #[case(Vec2::new(700.0, 465.0), None)]
    #[case(Vec2::new(700.0, 492.0), None)]
    #[case(Vec2::new(660.0, 440.0), None)]
    #[case(Vec2::new(450.0, 350.0), None)]
    fn test_hit_test(#[case] point: Vec2, #[case] expected: Option<FanCommand>) {
        assert_eq!(hit_test(point), expected);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let mut buttons: Vec<Rect> = (0..SPEED_BUTTONS).map(speed_button).collect();
        buttons.push(POWER_BUTTON);
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert!(a.intersect(*b).is_empty());
            }
        }
    }

    #[rstest]
    #[case(KeyCode::KeyO, Some(ControlAction::Fan(FanCommand::PowerOn)))]
    #[case(KeyCode::KeyF, Some(ControlAction::Fan(FanCommand::PowerOff)))]
    #[case(KeyCode::Digit3, Some(ControlAction::Fan(FanCommand::SetLevel(3))))]
    #[case(KeyCode::Numpad5, Some(ControlAction::Fan(FanCommand::SetLevel(5))))]
    #[case(KeyCode::Equal, Some(ControlAction::Fan(FanCommand::Increment)))]
    #[case(KeyCode::NumpadAdd, Some(ControlAction::Fan(FanCommand::Increment)))]
    #[case(KeyCode::Minus, Some(ControlAction::Fan(FanCommand::Decrement)))]
    #[case(KeyCode::KeyR, Some(ControlAction::Fan(FanCommand::Reset)))]
    #[case(KeyCode::F5, Some(ControlAction::ReloadConfig))]
    #[case(KeyCode::Escape, Some(ControlAction::Exit))]
    #[case(KeyCode::Digit0, None)]
    #[case(KeyCode::Space, None)]
    fn test_key_action(#[case] key: KeyCode, #[case] expected: Option<ControlAction>) {
        assert_eq!(key_action(key), expected);
    }
}
