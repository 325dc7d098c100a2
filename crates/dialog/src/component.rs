use crate::config::DialogProperties;
use crate::dialog::{ContentFragment, Dialog};
use crate::error::{DialogError, Result};
use crate::view::{build_dialog_view, DialogWidget, PageSource};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Attribute binding: the host pushes named values into the component.
pub trait AttributeBound {
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<()>;
    fn attribute(&self, name: &str) -> Option<Value>;
}

pub trait Renderable {
    /// Changes whenever the next frame would look different.
    fn render_version(&self) -> u64;
    fn render(&self, area: Rect, buf: &mut Buffer, pages: &dyn PageSource);
}

const ATTRIBUTE_NAMES: [(&str, &str); 9] = [
    ("id", "id"),
    ("title", "title"),
    ("open", "open"),
    ("cancel_action", "cancelAction"),
    ("cancel_label", "cancelLabel"),
    ("validate_action", "validateAction"),
    ("validate_label", "validateLabel"),
    ("partial", "content"),
    ("page_id", "pageId"),
];

pub(crate) fn canonical_attribute_name(name: &str) -> Option<&'static str> {
    ATTRIBUTE_NAMES
        .iter()
        .find(|(canonical, alias)| *canonical == name || *alias == name)
        .map(|(canonical, _)| *canonical)
}

fn parse_value<T: DeserializeOwned>(name: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| DialogError::InvalidAttribute {
        name: name.to_string(),
        source,
    })
}

impl AttributeBound for Dialog {
    fn set_attribute(&mut self, name: &str, value: Value) -> Result<()> {
        let canonical = canonical_attribute_name(name)
            .ok_or_else(|| DialogError::UnknownAttribute(name.to_string()))?;
        if canonical == "open" {
            let open: bool = parse_value(canonical, value)?;
            self.set_open(open);
            return Ok(());
        }

        let mut props: DialogProperties = self.properties();
        match canonical {
            "id" => props.id = parse_value(canonical, value)?,
            "title" => props.title = parse_value(canonical, value)?,
            "cancel_action" => props.cancel_action = parse_value(canonical, value)?,
            "cancel_label" => props.cancel_label = parse_value(canonical, value)?,
            "validate_action" => props.validate_action = parse_value(canonical, value)?,
            "validate_label" => props.validate_label = parse_value(canonical, value)?,
            "partial" => props.partial = parse_value::<Option<ContentFragment>>(canonical, value)?,
            "page_id" => props.page_id = parse_value(canonical, value)?,
            _ => return Err(DialogError::UnknownAttribute(name.to_string())),
        }
        self.apply_properties(props)
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        let canonical = canonical_attribute_name(name)?;
        let snapshot = serde_json::to_value(self.properties()).ok()?;
        Some(snapshot.get(canonical).cloned().unwrap_or(Value::Null))
    }
}

impl Renderable for Dialog {
    fn render_version(&self) -> u64 {
        Dialog::render_version(self)
    }

    fn render(&self, area: Rect, buf: &mut Buffer, pages: &dyn PageSource) {
        if let Some(view) = build_dialog_view(self, pages) {
            DialogWidget::new(&view).render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{canonical_attribute_name, AttributeBound, Renderable};
    use crate::config::DialogProperties;
    use crate::dialog::{ContentFragment, Dialog, DialogContent, PageReference};
    use crate::error::DialogError;
    use crate::view::NoPages;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use serde_json::json;

    #[test]
    fn camel_case_names_map_to_canonical_names() {
        assert_eq!(canonical_attribute_name("cancelAction"), Some("cancel_action"));
        assert_eq!(canonical_attribute_name("content"), Some("partial"));
        assert_eq!(canonical_attribute_name("page_id"), Some("page_id"));
        assert_eq!(canonical_attribute_name("width"), None);
    }

    #[test]
    fn open_attribute_toggles_visibility() {
        let mut dialog = Dialog::default();
        dialog.set_attribute("open", json!(true)).unwrap();
        assert!(dialog.is_open());
        assert_eq!(dialog.attribute("open"), Some(json!(true)));
    }

    #[test]
    fn label_attributes_update_buttons() {
        let mut dialog = Dialog::default();
        dialog.set_attribute("cancelAction", json!("onCancel")).unwrap();
        dialog.set_attribute("cancel_label", json!("Nope")).unwrap();
        dialog.set_attribute("validateLabel", json!("OK")).unwrap();

        let buttons = dialog.buttons();
        assert_eq!(buttons.cancel.map(|b| b.label), Some("Nope".to_string()));
        assert_eq!(buttons.validate.label, "OK");
    }

    #[test]
    fn second_content_source_is_rejected() {
        let mut dialog = Dialog::new(DialogProperties {
            partial: Some(ContentFragment::new("F")),
            ..DialogProperties::default()
        })
        .unwrap();

        let error = dialog.set_attribute("pageId", json!("page1")).unwrap_err();

        assert!(matches!(error, DialogError::ConflictingContent { .. }));
        assert_eq!(
            dialog.resolve_content(),
            &DialogContent::Partial(ContentFragment::new("F"))
        );
    }

    #[test]
    fn clearing_partial_allows_switching_to_page() {
        let mut dialog = Dialog::new(DialogProperties {
            partial: Some(ContentFragment::new("F")),
            ..DialogProperties::default()
        })
        .unwrap();
        dialog.set_attribute("partial", json!(null)).unwrap();
        dialog.set_attribute("page_id", json!("page1")).unwrap();
        assert_eq!(
            dialog.resolve_content(),
            &DialogContent::Page(PageReference::new("page1"))
        );
        assert_eq!(dialog.attribute("partial"), Some(json!(null)));
        assert_eq!(dialog.attribute("pageId"), Some(json!("page1")));
    }

    #[test]
    fn bad_attribute_values_and_names_are_errors() {
        let mut dialog = Dialog::default();
        assert!(matches!(
            dialog.set_attribute("open", json!("yes")),
            Err(DialogError::InvalidAttribute { .. })
        ));
        assert!(matches!(
            dialog.set_attribute("width", json!(40)),
            Err(DialogError::UnknownAttribute(_))
        ));
        assert_eq!(dialog.attribute("width"), None);
    }

    #[test]
    fn attribute_changes_bump_render_version() {
        let mut dialog = Dialog::default();
        let before = Renderable::render_version(&dialog);
        dialog.set_attribute("validate_label", json!("OK")).unwrap();
        assert!(Renderable::render_version(&dialog) > before);
    }

    #[test]
    fn very_tall_partial_renders_within_area() {
        let dialog = Dialog::new(DialogProperties {
            open: true,
            partial: Some(ContentFragment::new(vec!["x"; 65_535].join("\n"))),
            ..DialogProperties::default()
        })
        .unwrap();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        dialog.render(area, &mut buf, &NoPages);

        assert_ne!(buf, Buffer::empty(area));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let dialog = Dialog::default();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        dialog.render(area, &mut buf, &NoPages);
        assert_eq!(buf, Buffer::empty(area));
    }
}
