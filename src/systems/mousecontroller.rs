use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::MouseControlled;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::viewport::Viewport;

/// Center each mouse-controlled sprite on the cursor while the primary button is held.
///
/// The cursor is reported from the top-left corner; positions are y-up, so
/// the cursor is flipped against the viewport height first. The placement is
/// absolute and must run after keyboard movement so it wins that frame.
pub fn mouse_controller(
    mut query: Query<(&Sprite, &mut ScreenPosition), With<MouseControlled>>,
    input: Res<InputState>,
    viewport: Res<Viewport>,
) {
    if !input.pointer.primary {
        return;
    }
    let cursor = viewport.window_to_surface(Vector2 {
        x: input.pointer.x,
        y: input.pointer.y,
    });
    for (sprite, mut position) in query.iter_mut() {
        let half = sprite.half_size();
        position.set_pos(Vector2 {
            x: cursor.x - half.x,
            y: cursor.y - half.y,
        });
        trace!("Pointer placed sprite at ({}, {})", position.pos.x, position.pos.y);
    }
}
