use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use super::constants::{BUTTON_GAP, DIALOG_BG, DIALOG_BORDER_FG, DIALOG_PADDING_X};
use super::layout::{button_row_width, button_text, dialog_area, inner_width, wrapped_body};
use super::text::truncate_to_width;
use super::{ButtonView, DialogView};

/// Draws a [`DialogView`] as a centered overlay on top of whatever is
/// already in the buffer.
pub struct DialogWidget<'a> {
    view: &'a DialogView,
}

impl<'a> DialogWidget<'a> {
    pub fn new(view: &'a DialogView) -> Self {
        Self { view }
    }
}

fn button_style(button: &ButtonView) -> Style {
    let style = Style::default();
    if button.focused {
        style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        style
    }
}

fn button_line(buttons: &[ButtonView]) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (idx, button) in buttons.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
        }
        spans.push(Span::styled(button_text(button), button_style(button)));
    }
    Line::from(spans)
}

impl Widget for DialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let rect = dialog_area(area, self.view);
        Clear.render(rect, buf);

        let mut block = Block::bordered()
            .border_style(Style::default().fg(DIALOG_BORDER_FG))
            .style(Style::default().bg(DIALOG_BG));
        if let Some(title) = self.view.title.as_deref() {
            let title = truncate_to_width(title, rect.width.saturating_sub(2) as usize);
            block = block.title(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content = Rect {
            x: inner.x + DIALOG_PADDING_X.min(inner.width),
            y: inner.y,
            width: inner
                .width
                .saturating_sub(DIALOG_PADDING_X.saturating_mul(2)),
            height: inner.height,
        };
        let body = wrapped_body(self.view, inner_width(rect.width));
        let spacer = u16::from(!body.is_empty());
        let body_height = content.height.saturating_sub(1 + spacer);
        if body_height > 0 {
            let lines: Vec<Line> = body
                .into_iter()
                .take(body_height as usize)
                .map(Line::from)
                .collect();
            Paragraph::new(Text::from(lines)).render(
                Rect {
                    height: body_height,
                    ..content
                },
                buf,
            );
        }

        let button_area = Rect {
            y: content.y + content.height.saturating_sub(1),
            height: 1_u16.min(content.height),
            ..content
        };
        let alignment = if button_row_width(&self.view.buttons) <= button_area.width as usize {
            Alignment::Right
        } else {
            Alignment::Left
        };
        Paragraph::new(button_line(&self.view.buttons))
            .alignment(alignment)
            .render(button_area, buf);
    }
}
