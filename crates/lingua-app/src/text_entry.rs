use bevy::{
    input::{ButtonState, keyboard::{Key, KeyboardInput}},
    prelude::*,
};

use crate::actions::{ActionQueue, PanelAction, SourceEdit};

/// Map one logical key press to an edit of the source text, if any.
#[must_use]
pub(crate) fn edit_for_key(key: &Key) -> Option<SourceEdit> {
    match key {
        Key::Character(text) => Some(SourceEdit::Insert(text.to_string())),
        Key::Space => Some(SourceEdit::Insert(" ".to_string())),
        Key::Enter => Some(SourceEdit::Insert("\n".to_string())),
        Key::Backspace => Some(SourceEdit::Backspace),
        _ => None,
    }
}

/// Feed keyboard input into the source text area.
///
/// The panel is the only text consumer in the window, so every press goes to
/// the source field; edits are routed through the action queue like every
/// other mutation. Typing stays possible while a request is in flight.
pub(crate) fn capture_source_text(
    mut keys: EventReader<KeyboardInput>,
    queue: Res<ActionQueue>,
) {
    for event in keys.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        if let Some(edit) = edit_for_key(&event.logical_key) {
            queue.push(PanelAction::EditSource(edit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_space_and_newline_insert() {
        assert_eq!(
            edit_for_key(&Key::Character("a".into())),
            Some(SourceEdit::Insert("a".to_string()))
        );
        assert_eq!(
            edit_for_key(&Key::Space),
            Some(SourceEdit::Insert(" ".to_string()))
        );
        assert_eq!(
            edit_for_key(&Key::Enter),
            Some(SourceEdit::Insert("\n".to_string()))
        );
    }

    #[test]
    fn backspace_deletes_and_other_keys_are_ignored() {
        assert_eq!(edit_for_key(&Key::Backspace), Some(SourceEdit::Backspace));
        assert_eq!(edit_for_key(&Key::Shift), None);
        assert_eq!(edit_for_key(&Key::ArrowLeft), None);
    }
}
