use crate::dialog::{ActionOutcome, ActionRegistry, ButtonKind, Dialog};
use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyUpdate {
    pub consume: bool,
    pub press: Option<ButtonKind>,
}

impl KeyUpdate {
    fn ignored() -> Self {
        Self {
            consume: false,
            press: None,
        }
    }

    fn consumed() -> Self {
        Self {
            consume: true,
            press: None,
        }
    }
}

/// Applies navigation keys to an open dialog and reports which button, if
/// any, the key pressed. An open dialog consumes every key.
pub fn handle_dialog_key(dialog: &mut Dialog, key: KeyCode) -> KeyUpdate {
    if !dialog.is_open() {
        return KeyUpdate::ignored();
    }
    let mut update = KeyUpdate::consumed();
    match key {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            dialog.cycle_focus();
        }
        KeyCode::Enter => update.press = Some(dialog.focused()),
        KeyCode::Esc => {
            if dialog.has_cancel() {
                update.press = Some(ButtonKind::Cancel);
            }
        }
        _ => {}
    }
    update
}

/// Runs [`handle_dialog_key`] and dispatches the resulting press. `None` means
/// no button was pressed.
pub fn dispatch_dialog_key<G>(
    dialog: &mut Dialog,
    registry: &mut ActionRegistry<G>,
    gui: Option<&mut G>,
    key: KeyCode,
) -> Option<ActionOutcome> {
    let kind = handle_dialog_key(dialog, key).press?;
    Some(dialog.press(kind, registry, gui))
}

#[cfg(test)]
mod tests {
    use super::{dispatch_dialog_key, handle_dialog_key};
    use crate::config::DialogProperties;
    use crate::dialog::{ActionOutcome, ActionRegistry, ButtonKind, Dialog};
    use crossterm::event::KeyCode;

    fn open_dialog(cancel_action: &str) -> Dialog {
        Dialog::new(DialogProperties {
            open: true,
            cancel_action: cancel_action.to_string(),
            ..DialogProperties::default()
        })
        .unwrap()
    }

    #[test]
    fn closed_dialog_ignores_keys() {
        let mut dialog = Dialog::default();
        let update = handle_dialog_key(&mut dialog, KeyCode::Enter);
        assert!(!update.consume);
        assert_eq!(update.press, None);
    }

    #[test]
    fn tab_moves_focus_between_buttons() {
        let mut dialog = open_dialog("cancel");
        assert_eq!(dialog.focused(), ButtonKind::Validate);
        handle_dialog_key(&mut dialog, KeyCode::Tab);
        assert_eq!(dialog.focused(), ButtonKind::Cancel);
        handle_dialog_key(&mut dialog, KeyCode::Left);
        assert_eq!(dialog.focused(), ButtonKind::Validate);
    }

    #[test]
    fn tab_with_single_button_keeps_validate_focused() {
        let mut dialog = open_dialog("");
        let update = handle_dialog_key(&mut dialog, KeyCode::Tab);
        assert!(update.consume);
        assert_eq!(dialog.focused(), ButtonKind::Validate);
    }

    #[test]
    fn enter_presses_focused_button() {
        let mut dialog = open_dialog("cancel");
        assert_eq!(
            handle_dialog_key(&mut dialog, KeyCode::Enter).press,
            Some(ButtonKind::Validate)
        );
        handle_dialog_key(&mut dialog, KeyCode::Tab);
        assert_eq!(
            handle_dialog_key(&mut dialog, KeyCode::Enter).press,
            Some(ButtonKind::Cancel)
        );
    }

    #[test]
    fn esc_presses_cancel_only_when_rendered() {
        let mut with_cancel = open_dialog("cancel");
        assert_eq!(
            handle_dialog_key(&mut with_cancel, KeyCode::Esc).press,
            Some(ButtonKind::Cancel)
        );

        let mut without_cancel = open_dialog("");
        let update = handle_dialog_key(&mut without_cancel, KeyCode::Esc);
        assert!(update.consume);
        assert_eq!(update.press, None);
    }

    #[test]
    fn other_keys_are_swallowed_while_open() {
        let mut dialog = open_dialog("cancel");
        let update = handle_dialog_key(&mut dialog, KeyCode::Char('x'));
        assert!(update.consume);
        assert_eq!(update.press, None);
    }

    #[test]
    fn dispatch_invokes_callback_for_pressed_button() {
        let mut dialog = open_dialog("on_cancel");
        let mut registry = ActionRegistry::<Vec<String>>::new().with("on_cancel", |ctx| {
            if let (Some(log), Some(action)) = (ctx.gui, ctx.action) {
                log.push(action.to_string());
            }
        });
        let mut log = Vec::new();

        let outcome = dispatch_dialog_key(&mut dialog, &mut registry, Some(&mut log), KeyCode::Esc);

        assert_eq!(
            outcome,
            Some(ActionOutcome::Invoked {
                action: "on_cancel".to_string()
            })
        );
        assert_eq!(log, vec!["on_cancel".to_string()]);
        assert_eq!(
            dispatch_dialog_key(&mut dialog, &mut registry, Some(&mut log), KeyCode::Tab),
            None
        );
    }
}
