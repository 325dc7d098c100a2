mod constants;
mod layout;
mod text;
mod widget;

use crate::dialog::{ButtonKind, Dialog, DialogContent, PageReference};
use std::collections::{BTreeMap, HashMap};

pub use layout::dialog_area;
pub use text::{sanitize_for_tui, truncate_to_width, visual_width, wrap_line};
pub use widget::DialogWidget;

/// Host seam for the page routing subsystem: turns a page id into lines.
pub trait PageSource {
    fn page_lines(&self, page: &PageReference) -> Option<Vec<String>>;
}

pub struct NoPages;

impl PageSource for NoPages {
    fn page_lines(&self, _page: &PageReference) -> Option<Vec<String>> {
        None
    }
}

impl PageSource for HashMap<String, String> {
    fn page_lines(&self, page: &PageReference) -> Option<Vec<String>> {
        self.get(page.as_str()).map(|body| split_lines(body))
    }
}

impl PageSource for BTreeMap<String, String> {
    fn page_lines(&self, page: &PageReference) -> Option<Vec<String>> {
        self.get(page.as_str()).map(|body| split_lines(body))
    }
}

fn split_lines(body: &str) -> Vec<String> {
    body.lines().map(sanitize_for_tui).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub kind: ButtonKind,
    pub label: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: Option<String>,
    pub body: Vec<String>,
    pub buttons: Vec<ButtonView>,
}

pub fn page_placeholder(page: &PageReference) -> String {
    format!("[page: {}]", page.as_str())
}

/// What an open dialog shows. Closed dialogs have no view.
pub fn build_dialog_view(dialog: &Dialog, pages: &dyn PageSource) -> Option<DialogView> {
    if !dialog.is_open() {
        return None;
    }
    let body = match dialog.resolve_content() {
        DialogContent::Partial(fragment) => fragment
            .lines()
            .iter()
            .map(|line| sanitize_for_tui(line))
            .collect(),
        DialogContent::Page(page) => pages
            .page_lines(page)
            .unwrap_or_else(|| vec![page_placeholder(page)]),
        DialogContent::Empty => Vec::new(),
    };
    let focused = dialog.focused();
    let buttons = dialog
        .buttons()
        .iter()
        .map(|button| ButtonView {
            kind: button.kind,
            label: button.label.clone(),
            focused: button.kind == focused,
        })
        .collect();
    Some(DialogView {
        title: dialog.title().map(str::to_string),
        body,
        buttons,
    })
}
