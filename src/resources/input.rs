//! Per-frame input resource.
//!
//! Captures the subset of keyboard and mouse state the demo cares about and
//! exposes it to systems via the [`InputState`] resource. The arrow keys
//! drive the sprite and camera; the left mouse button snaps the sprite to the
//! cursor.
//!
//! Input is level-triggered: a held key reads as active on every frame it is
//! sampled, and any combination of directions may be active at once.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is held this frame.
    pub active: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            key_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
        }
    }
}

/// Primary pointer state.
#[derive(Debug, Clone, Copy)]
pub struct PointerState {
    /// Whether the primary button is held this frame.
    pub primary: bool,
    /// The mouse button acting as the primary button.
    pub button_binding: MouseButton,
    /// Cursor x in window pixels, measured from the left edge.
    pub x: f32,
    /// Cursor y in window pixels, measured from the top edge.
    pub y: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            primary: false,
            button_binding: MouseButton::MOUSE_BUTTON_LEFT,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// Resource capturing the per-frame input relevant to the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound(KeyboardKey::KEY_UP),
            direction_down: BoolState::bound(KeyboardKey::KEY_DOWN),
            direction_left: BoolState::bound(KeyboardKey::KEY_LEFT),
            direction_right: BoolState::bound(KeyboardKey::KEY_RIGHT),
            pointer: PointerState::default(),
        }
    }
}

impl InputState {
    /// Net unit step for this frame's held directions.
    ///
    /// Each held key contributes one unit on its axis; opposite keys cancel.
    pub fn direction(&self) -> Vector2 {
        let mut step = Vector2 { x: 0.0, y: 0.0 };
        if self.direction_left.active {
            step.x -= 1.0;
        }
        if self.direction_right.active {
            step.x += 1.0;
        }
        if self.direction_down.active {
            step.y -= 1.0;
        }
        if self.direction_up.active {
            step.y += 1.0;
        }
        step
    }

    /// Whether any directional key is held.
    pub fn any_direction(&self) -> bool {
        self.direction_up.active
            || self.direction_down.active
            || self.direction_left.active
            || self.direction_right.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert_eq!(bs.key_binding, KeyboardKey::KEY_NULL);
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert!(!input.direction_up.active);
        assert!(!input.direction_down.active);
        assert!(!input.direction_left.active);
        assert!(!input.direction_right.active);
        assert!(!input.pointer.primary);
        assert!(!input.any_direction());
    }

    #[test]
    fn test_inputstate_default_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(
            input.pointer.button_binding,
            MouseButton::MOUSE_BUTTON_LEFT
        );
    }

    #[test]
    fn test_direction_single_keys() {
        let mut input = InputState::default();
        input.direction_left.active = true;
        let d = input.direction();
        assert_eq!((d.x, d.y), (-1.0, 0.0));

        let mut input = InputState::default();
        input.direction_up.active = true;
        let d = input.direction();
        assert_eq!((d.x, d.y), (0.0, 1.0));
    }

    #[test]
    fn test_direction_combined_keys_sum() {
        let mut input = InputState::default();
        input.direction_left.active = true;
        input.direction_up.active = true;
        let d = input.direction();
        assert_eq!((d.x, d.y), (-1.0, 1.0));
    }

    #[test]
    fn test_direction_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.direction_left.active = true;
        input.direction_right.active = true;
        input.direction_down.active = true;
        let d = input.direction();
        assert_eq!((d.x, d.y), (0.0, -1.0));
        assert!(input.any_direction());
    }
}
