mod actions;
mod buttons;
mod content;

pub use actions::{ActionCallback, ActionContext, ActionOutcome, ActionRegistry};
pub use buttons::{Button, ButtonKind, DialogButtons};
pub use content::{ContentFragment, DialogContent, PageReference};

use crate::config::DialogProperties;
use crate::error::Result;

/// Modal dialog with a cancel/validate button pair.
///
/// The content source is resolved once when the dialog is built, so a
/// `Dialog` never holds both a Partial and a page reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    id: Option<String>,
    title: Option<String>,
    open: bool,
    cancel_action: String,
    cancel_label: String,
    validate_action: String,
    validate_label: String,
    content: DialogContent,
    focused: ButtonKind,
    render_version: u64,
}

impl Dialog {
    pub fn new(properties: DialogProperties) -> Result<Self> {
        let content = properties.resolve_content()?;
        Ok(Self {
            id: properties.id,
            title: properties.title,
            open: properties.open,
            cancel_action: properties.cancel_action,
            cancel_label: properties.cancel_label,
            validate_action: properties.validate_action,
            validate_label: properties.validate_label,
            content,
            focused: ButtonKind::Validate,
            render_version: 0,
        })
    }

    /// Current configuration as a snapshot, content folded back into
    /// `partial`/`page_id`.
    pub fn properties(&self) -> DialogProperties {
        let (partial, page_id) = match &self.content {
            DialogContent::Partial(fragment) => (Some(fragment.clone()), None),
            DialogContent::Page(page) => (None, Some(page.as_str().to_string())),
            DialogContent::Empty => (None, None),
        };
        DialogProperties {
            id: self.id.clone(),
            title: self.title.clone(),
            open: self.open,
            cancel_action: self.cancel_action.clone(),
            cancel_label: self.cancel_label.clone(),
            validate_action: self.validate_action.clone(),
            validate_label: self.validate_label.clone(),
            partial,
            page_id,
        }
    }

    /// Replaces the whole configuration. On a content conflict the dialog is
    /// left untouched.
    pub fn apply_properties(&mut self, properties: DialogProperties) -> Result<()> {
        let focused = self.focused;
        let render_version = self.render_version;
        *self = Self::new(properties)?;
        self.focused = focused;
        self.render_version = render_version;
        self.normalize_focus();
        self.mark_changed();
        Ok(())
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.set_open(true);
    }

    pub fn close(&mut self) {
        self.set_open(false);
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        tracing::debug!(dialog = ?self.id, open, "dialog visibility changed");
        self.mark_changed();
    }

    pub fn resolve_content(&self) -> &DialogContent {
        &self.content
    }

    pub fn cancel_action(&self) -> &str {
        &self.cancel_action
    }

    pub fn validate_action(&self) -> &str {
        &self.validate_action
    }

    pub fn buttons(&self) -> DialogButtons {
        let cancel = (!self.cancel_action.is_empty()).then(|| Button {
            kind: ButtonKind::Cancel,
            label: self.cancel_label.clone(),
            action: self.cancel_action.clone(),
        });
        DialogButtons {
            cancel,
            validate: Button {
                kind: ButtonKind::Validate,
                label: self.validate_label.clone(),
                action: self.validate_action.clone(),
            },
        }
    }

    pub fn has_cancel(&self) -> bool {
        !self.cancel_action.is_empty()
    }

    pub fn focused(&self) -> ButtonKind {
        self.focused
    }

    pub fn set_focus(&mut self, kind: ButtonKind) -> bool {
        if kind == ButtonKind::Cancel && !self.has_cancel() {
            return false;
        }
        if self.focused != kind {
            self.focused = kind;
            self.mark_changed();
        }
        true
    }

    /// Moves focus to the other button. With a single button focus stays put.
    pub fn cycle_focus(&mut self) {
        let next = match self.focused {
            ButtonKind::Cancel => ButtonKind::Validate,
            ButtonKind::Validate => ButtonKind::Cancel,
        };
        self.set_focus(next);
    }

    pub fn press_cancel<G>(
        &self,
        registry: &mut ActionRegistry<G>,
        gui: Option<&mut G>,
    ) -> ActionOutcome {
        if !self.has_cancel() {
            return ActionOutcome::NoButton;
        }
        self.dispatch(&self.cancel_action, registry, gui)
    }

    pub fn press_validate<G>(
        &self,
        registry: &mut ActionRegistry<G>,
        gui: Option<&mut G>,
    ) -> ActionOutcome {
        self.dispatch(&self.validate_action, registry, gui)
    }

    pub fn press<G>(
        &self,
        kind: ButtonKind,
        registry: &mut ActionRegistry<G>,
        gui: Option<&mut G>,
    ) -> ActionOutcome {
        match kind {
            ButtonKind::Cancel => self.press_cancel(registry, gui),
            ButtonKind::Validate => self.press_validate(registry, gui),
        }
    }

    pub fn render_version(&self) -> u64 {
        self.render_version
    }

    fn dispatch<G>(
        &self,
        action: &str,
        registry: &mut ActionRegistry<G>,
        gui: Option<&mut G>,
    ) -> ActionOutcome {
        let context = ActionContext {
            gui,
            id: self.id.as_deref(),
            action: Some(action),
        };
        match registry.invoke(action, context) {
            Ok(()) => {
                tracing::debug!(dialog = ?self.id, action, "dialog action invoked");
                ActionOutcome::Invoked {
                    action: action.to_string(),
                }
            }
            Err(error) => {
                tracing::warn!(dialog = ?self.id, %error, "dialog action ignored");
                ActionOutcome::Missing {
                    action: action.to_string(),
                }
            }
        }
    }

    pub(crate) fn normalize_focus(&mut self) {
        if self.focused == ButtonKind::Cancel && !self.has_cancel() {
            self.focused = ButtonKind::Validate;
        }
    }

    pub(crate) fn mark_changed(&mut self) {
        self.render_version = self.render_version.wrapping_add(1);
    }
}

impl Default for Dialog {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            open: false,
            cancel_action: String::new(),
            cancel_label: crate::config::DEFAULT_CANCEL_LABEL.to_string(),
            validate_action: crate::config::DEFAULT_VALIDATE_ACTION.to_string(),
            validate_label: crate::config::DEFAULT_VALIDATE_LABEL.to_string(),
            content: DialogContent::Empty,
            focused: ButtonKind::Validate,
            render_version: 0,
        }
    }
}
