use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{Button, KeyAction};

/// Window events the viewer cares about, stripped of winit types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { button: Button, action: KeyAction },
    MouseMove { x: f64, y: f64 },
    /// Cursor left the window; the next entry must not rotate the camera
    CursorLeft,
    FocusLost,
    /// Close button or Escape
    Quit,
}

/// Translate a winit `WindowEvent`; unrelated events map to `None`
pub fn translate(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(keycode) = event.physical_key else {
                return None;
            };
            let button = keycode_to_button(keycode)?;
            let action = key_action(event.state, event.repeat);

            if button == Button::Escape {
                return (action == KeyAction::Press).then_some(InputEvent::Quit);
            }
            Some(InputEvent::Key { button, action })
        }
        WindowEvent::CursorMoved { position, .. } => Some(InputEvent::MouseMove {
            x: position.x,
            y: position.y,
        }),
        WindowEvent::CursorLeft { .. } => Some(InputEvent::CursorLeft),
        WindowEvent::Focused(false) => Some(InputEvent::FocusLost),
        _ => None,
    }
}

/// Classify a key transition
pub fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

/// Map winit KeyCode to Button
pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
    match keycode {
        KeyCode::KeyW => Some(Button::KeyW),
        KeyCode::KeyA => Some(Button::KeyA),
        KeyCode::KeyS => Some(Button::KeyS),
        KeyCode::KeyD => Some(Button::KeyD),
        KeyCode::KeyQ => Some(Button::KeyQ),
        KeyCode::KeyE => Some(Button::KeyE),
        KeyCode::Space => Some(Button::Space),
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
        KeyCode::Escape => Some(Button::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // KeyEvent has private platform fields, so keyboard translation is
    // exercised through its building blocks.

    #[test]
    fn test_button_mapping() {
        assert_eq!(keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(keycode_to_button(KeyCode::KeyD), Some(Button::KeyD));
        assert_eq!(keycode_to_button(KeyCode::ShiftRight), Some(Button::Shift));
        assert_eq!(keycode_to_button(KeyCode::Escape), Some(Button::Escape));
        assert_eq!(keycode_to_button(KeyCode::KeyZ), None);
    }

    #[test]
    fn test_key_action_classification() {
        assert_eq!(key_action(ElementState::Pressed, false), KeyAction::Press);
        assert_eq!(key_action(ElementState::Pressed, true), KeyAction::Repeat);
        assert_eq!(key_action(ElementState::Released, false), KeyAction::Release);
        assert_eq!(key_action(ElementState::Released, true), KeyAction::Release);
    }

    #[test]
    fn test_close_requested_quits() {
        assert_eq!(translate(&WindowEvent::CloseRequested), Some(InputEvent::Quit));
    }

    #[test]
    fn test_focus_events() {
        assert_eq!(translate(&WindowEvent::Focused(false)), Some(InputEvent::FocusLost));
        assert_eq!(translate(&WindowEvent::Focused(true)), None);
    }
}
