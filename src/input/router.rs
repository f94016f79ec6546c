use egui::PointerButton;

use super::InputEvent;
use crate::dialogs::Dialogs;
use crate::state::{EditorContext, EditorMode};

/// Routes a canvas event to the editor according to its current mode.
///
/// Gestures are click-click: the first primary click anchors, the pointer
/// is tracked in between, and the next primary click releases.
pub fn route_event(event: &InputEvent, editor: &mut EditorContext, dialogs: &mut dyn Dialogs) {
    match event {
        InputEvent::PointerDown {
            location,
            button: PointerButton::Primary,
        } if location.is_in_canvas => {
            let pos = location.position;
            match editor.mode() {
                EditorMode::Armed(_) => {
                    editor.begin_gesture(pos);
                }
                // Dropping the finished gesture lets its preview thread wind down
                EditorMode::Gesture(_) => {
                    editor.finish_gesture(pos, dialogs);
                }
                EditorMode::InsertingImage => editor.finish_image_insert(pos, dialogs),
                EditorMode::Idle => {}
            }
        }

        InputEvent::PointerMove {
            location,
            held_buttons,
        } => {
            editor.track(location.position);
            if location.is_in_canvas && held_buttons.contains(&PointerButton::Primary) {
                editor.draw_at(location.position);
            }
        }

        _ => {}
    }
}
