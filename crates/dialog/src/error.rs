use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DialogError {
    /// Both `partial` and `page_id` were configured on the same dialog.
    #[error("dialog {dialog}: `partial` and `page_id` are both set, only one content source may be defined")]
    ConflictingContent { dialog: String },

    #[error("no callback registered for action `{0}`")]
    UnknownAction(String),

    #[error("unknown dialog attribute `{0}`")]
    UnknownAttribute(String),

    #[error("invalid value for dialog attribute `{name}`: {source}")]
    InvalidAttribute {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read dialog config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dialog config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DialogError {
    pub(crate) fn conflicting_content(id: Option<&str>) -> Self {
        Self::ConflictingContent {
            dialog: id.unwrap_or("<unnamed>").to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DialogError>;
