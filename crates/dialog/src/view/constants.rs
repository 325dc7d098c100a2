use ratatui::style::Color;

pub(super) const DIALOG_BG: Color = Color::Rgb(40, 40, 40);
pub(super) const DIALOG_BORDER_FG: Color = Color::DarkGray;
pub(super) const DIALOG_PADDING_X: u16 = 1;
pub(super) const BUTTON_GAP: u16 = 2;
pub(super) const MIN_DIALOG_WIDTH: u16 = 24;
pub(super) const MAX_DIALOG_WIDTH: u16 = 72;
