use crate::dialog::{ContentFragment, DialogContent, PageReference};
use crate::error::{DialogError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CANCEL_LABEL: &str = "Cancel";
pub const DEFAULT_VALIDATE_ACTION: &str = "validate";
pub const DEFAULT_VALIDATE_LABEL: &str = "Validate";

/// Attribute snapshot a host uses to create a dialog.
///
/// Names follow the element attributes (`cancel_action`), and the camelCase
/// spellings (`cancelAction`) are accepted too. `content` is an alias of
/// `partial`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub open: bool,
    #[serde(alias = "cancelAction")]
    pub cancel_action: String,
    #[serde(alias = "cancelLabel")]
    pub cancel_label: String,
    #[serde(alias = "validateAction")]
    pub validate_action: String,
    #[serde(alias = "validateLabel")]
    pub validate_label: String,
    #[serde(alias = "content", skip_serializing_if = "Option::is_none")]
    pub partial: Option<ContentFragment>,
    #[serde(alias = "pageId", skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}

/// Reads a JSON config file. Hosts that wrap [`DialogProperties`] in a larger
/// config (e.g. with `#[serde(flatten)]`) load it through here as well.
pub fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| DialogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&source)?)
}

impl Default for DialogProperties {
    fn default() -> Self {
        Self {
            id: None,
            title: None,
            open: false,
            cancel_action: String::new(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            validate_action: DEFAULT_VALIDATE_ACTION.to_string(),
            validate_label: DEFAULT_VALIDATE_LABEL.to_string(),
            partial: None,
            page_id: None,
        }
    }
}

impl DialogProperties {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path)
    }

    /// Picks the single content source. Having both set is an error and is
    /// never settled by precedence.
    pub fn resolve_content(&self) -> Result<DialogContent> {
        match (&self.partial, &self.page_id) {
            (Some(_), Some(_)) => Err(DialogError::conflicting_content(self.id.as_deref())),
            (Some(fragment), None) => Ok(DialogContent::Partial(fragment.clone())),
            (None, Some(page_id)) => Ok(DialogContent::Page(PageReference::new(page_id.clone()))),
            (None, None) => Ok(DialogContent::Empty),
        }
    }
}
