/// Physical key identifier, independent of the windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    Escape,
}

/// Key transition reported by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press,
    Repeat,
    Release,
}

/// Logical movement the camera reacts to
///
/// The discriminant doubles as the index into [`InputState`]'s key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveAction {
    Forward,
    Left,
    Backward,
    Right,
}

impl MoveAction {
    pub const ALL: [MoveAction; 4] = [
        MoveAction::Forward,
        MoveAction::Left,
        MoveAction::Backward,
        MoveAction::Right,
    ];
}

/// Tracked key and whether it is currently held
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key {
    pub button: Button,
    pub pressed: bool,
}

impl Key {
    pub const fn new(button: Button) -> Self {
        Self {
            button,
            pressed: false,
        }
    }
}

/// Held-state of the movement keys
///
/// Written edge-triggered by key events, read level-triggered once per
/// frame. Several events between two frames collapse to the latest state.
#[derive(Debug, Clone)]
pub struct InputState {
    keys: [Key; 4],
}

impl InputState {
    /// WASD bindings
    pub fn new() -> Self {
        Self::with_bindings(Button::KeyW, Button::KeyA, Button::KeyS, Button::KeyD)
    }

    pub fn with_bindings(forward: Button, left: Button, backward: Button, right: Button) -> Self {
        Self {
            keys: [
                Key::new(forward),
                Key::new(left),
                Key::new(backward),
                Key::new(right),
            ],
        }
    }

    /// Apply a key event; returns false for keys that are not tracked
    pub fn on_key_event(&mut self, button: Button, action: KeyAction) -> bool {
        let pressed = !matches!(action, KeyAction::Release);
        let mut tracked = false;

        for key in self.keys.iter_mut().filter(|key| key.button == button) {
            key.pressed = pressed;
            tracked = true;
        }

        tracked
    }

    pub fn is_pressed(&self, action: MoveAction) -> bool {
        self.key(action).pressed
    }

    pub fn key(&self, action: MoveAction) -> Key {
        self.keys[action as usize]
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        for key in self.keys.iter_mut() {
            key.pressed = false;
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.keys.iter().any(|key| key.pressed)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_released() {
        let input = InputState::new();
        for action in MoveAction::ALL {
            assert!(!input.is_pressed(action));
        }
        assert!(!input.any_pressed());
    }

    #[test]
    fn press_and_repeat_hold_the_key() {
        let mut input = InputState::new();

        assert!(input.on_key_event(Button::KeyW, KeyAction::Press));
        assert!(input.is_pressed(MoveAction::Forward));

        assert!(input.on_key_event(Button::KeyW, KeyAction::Repeat));
        assert!(input.is_pressed(MoveAction::Forward));

        assert!(input.on_key_event(Button::KeyW, KeyAction::Release));
        assert!(!input.is_pressed(MoveAction::Forward));
    }

    #[test]
    fn untracked_keys_are_ignored() {
        let mut input = InputState::new();

        assert!(!input.on_key_event(Button::Escape, KeyAction::Press));
        assert!(!input.on_key_event(Button::Space, KeyAction::Press));
        assert!(!input.any_pressed());
    }

    #[test]
    fn events_between_frames_collapse_to_latest() {
        let mut input = InputState::new();

        input.on_key_event(Button::KeyD, KeyAction::Press);
        input.on_key_event(Button::KeyD, KeyAction::Release);
        input.on_key_event(Button::KeyD, KeyAction::Press);

        assert!(input.is_pressed(MoveAction::Right));
    }

    #[test]
    fn custom_bindings() {
        let mut input =
            InputState::with_bindings(Button::KeyE, Button::KeyS, Button::KeyD, Button::KeyQ);

        input.on_key_event(Button::KeyE, KeyAction::Press);
        assert!(input.is_pressed(MoveAction::Forward));
        assert_eq!(input.key(MoveAction::Right).button, Button::KeyQ);

        assert!(!input.on_key_event(Button::KeyW, KeyAction::Press));
    }

    #[test]
    fn release_all_clears_every_key() {
        let mut input = InputState::new();
        input.on_key_event(Button::KeyW, KeyAction::Press);
        input.on_key_event(Button::KeyA, KeyAction::Press);

        input.release_all();

        assert!(!input.any_pressed());
    }
}
