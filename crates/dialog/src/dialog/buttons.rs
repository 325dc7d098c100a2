#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    Cancel,
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub kind: ButtonKind,
    pub label: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogButtons {
    pub cancel: Option<Button>,
    pub validate: Button,
}

impl DialogButtons {
    /// Buttons in display order, cancel first.
    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.cancel.iter().chain(std::iter::once(&self.validate))
    }

    pub fn get(&self, kind: ButtonKind) -> Option<&Button> {
        match kind {
            ButtonKind::Cancel => self.cancel.as_ref(),
            ButtonKind::Validate => Some(&self.validate),
        }
    }

    pub fn kinds(&self) -> Vec<ButtonKind> {
        self.iter().map(|button| button.kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, ButtonKind, DialogButtons};

    fn button(kind: ButtonKind, label: &str) -> Button {
        Button {
            kind,
            label: label.to_string(),
            action: String::new(),
        }
    }

    #[test]
    fn iter_lists_cancel_before_validate() {
        let buttons = DialogButtons {
            cancel: Some(button(ButtonKind::Cancel, "Nope")),
            validate: button(ButtonKind::Validate, "OK"),
        };
        let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Nope", "OK"]);
    }

    #[test]
    fn missing_cancel_is_skipped() {
        let buttons = DialogButtons {
            cancel: None,
            validate: button(ButtonKind::Validate, "OK"),
        };
        assert_eq!(buttons.kinds(), vec![ButtonKind::Validate]);
        assert!(buttons.get(ButtonKind::Cancel).is_none());
    }
}
