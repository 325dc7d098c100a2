use serde::{Deserialize, Serialize};

/// A Partial: inline content owned by the dialog and rendered in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentFragment {
    #[serde(default)]
    pub body: String,
}

impl ContentFragment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn lines(&self) -> Vec<String> {
        self.body.lines().map(|line| line.to_string()).collect()
    }
}

/// Identifier of a page resolved by the host. The dialog never owns the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageReference(String);

impl PageReference {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self(page_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogContent {
    Partial(ContentFragment),
    Page(PageReference),
    #[default]
    Empty,
}

impl DialogContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, DialogContent::Empty)
    }

    pub fn partial(&self) -> Option<&ContentFragment> {
        match self {
            DialogContent::Partial(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn page(&self) -> Option<&PageReference> {
        match self {
            DialogContent::Page(page) => Some(page),
            _ => None,
        }
    }
}
