use ratatui::layout::Rect;

use super::constants::{BUTTON_GAP, DIALOG_PADDING_X, MAX_DIALOG_WIDTH, MIN_DIALOG_WIDTH};
use super::text::{visual_width, wrap_line};
use super::{ButtonView, DialogView};

const BORDER: u16 = 1;

pub(super) fn button_text(button: &ButtonView) -> String {
    format!("[ {} ]", button.label)
}

pub(super) fn button_row_width(buttons: &[ButtonView]) -> usize {
    let labels: usize = buttons
        .iter()
        .map(|button| visual_width(&button_text(button)))
        .sum();
    labels + buttons.len().saturating_sub(1) * BUTTON_GAP as usize
}

pub(super) fn inner_width(width: u16) -> usize {
    width
        .saturating_sub(BORDER * 2)
        .saturating_sub(DIALOG_PADDING_X * 2) as usize
}

pub(super) fn wrapped_body(view: &DialogView, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in &view.body {
        if line.is_empty() {
            out.push(String::new());
        } else {
            out.extend(wrap_line(line, width.max(1)));
        }
    }
    out
}

fn desired_width(view: &DialogView) -> usize {
    let title = view
        .title
        .as_deref()
        .map(|title| visual_width(title) + 2)
        .unwrap_or(0);
    let body = view
        .body
        .iter()
        .map(|line| visual_width(line))
        .max()
        .unwrap_or(0);
    let chrome = (BORDER * 2 + DIALOG_PADDING_X * 2) as usize;
    title.max(body).max(button_row_width(&view.buttons)) + chrome
}

/// Centered rectangle the dialog occupies inside `area`.
pub fn dialog_area(area: Rect, view: &DialogView) -> Rect {
    let max_width = area.width.min(MAX_DIALOG_WIDTH);
    let width = (desired_width(view).min(u16::MAX as usize) as u16)
        .clamp(MIN_DIALOG_WIDTH.min(max_width), max_width);

    let body_lines = wrapped_body(view, inner_width(width))
        .len()
        .min(u16::MAX as usize) as u16;
    let spacer = u16::from(body_lines > 0);
    let desired_height = (BORDER * 2)
        .saturating_add(body_lines)
        .saturating_add(spacer)
        .saturating_add(1);
    let height = desired_height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::{button_row_width, dialog_area};
    use crate::dialog::ButtonKind;
    use crate::view::{ButtonView, DialogView};
    use ratatui::layout::Rect;

    fn view(body: &[&str], labels: &[&str]) -> DialogView {
        DialogView {
            title: None,
            body: body.iter().map(|line| line.to_string()).collect(),
            buttons: labels
                .iter()
                .map(|label| ButtonView {
                    kind: ButtonKind::Validate,
                    label: label.to_string(),
                    focused: false,
                })
                .collect(),
        }
    }

    #[test]
    fn button_row_counts_brackets_and_gap() {
        let view = view(&[], &["Cancel", "OK"]);
        // "[ Cancel ]" + gap + "[ OK ]"
        assert_eq!(button_row_width(&view.buttons), 10 + 2 + 6);
    }

    #[test]
    fn dialog_is_centered_and_sized_to_content() {
        let area = Rect::new(0, 0, 80, 20);
        let rect = dialog_area(area, &view(&["Hello"], &["OK"]));
        assert_eq!(rect.width, 24);
        // border + body + spacer + buttons + border
        assert_eq!(rect.height, 5);
        assert_eq!(rect.x, 28);
        assert_eq!(rect.y, 7);
    }

    #[test]
    fn dialog_without_body_skips_spacer() {
        let rect = dialog_area(Rect::new(0, 0, 80, 20), &view(&[], &["OK"]));
        assert_eq!(rect.height, 3);
    }

    #[test]
    fn long_body_wraps_within_max_width() {
        let long = "x".repeat(200);
        let rect = dialog_area(Rect::new(0, 0, 100, 40), &view(&[&long], &["OK"]));
        assert_eq!(rect.width, 72);
        // 68 columns of text per line -> 3 wrapped lines
        assert_eq!(rect.height, 2 + 3 + 1 + 1);
    }

    #[test]
    fn very_tall_body_is_clamped_to_area() {
        let lines = vec!["x"; 70_000];
        let area = Rect::new(0, 0, 40, 10);
        let rect = dialog_area(area, &view(&lines, &["OK"]));
        assert_eq!(rect.height, area.height);
        assert_eq!(rect.y, 0);
    }

    #[test]
    fn dialog_never_exceeds_small_area() {
        let area = Rect::new(2, 1, 10, 3);
        let rect = dialog_area(area, &view(&["a", "b", "c"], &["Validate"]));
        assert!(rect.width <= area.width);
        assert!(rect.height <= area.height);
        assert!(rect.x >= area.x && rect.y >= area.y);
    }
}
