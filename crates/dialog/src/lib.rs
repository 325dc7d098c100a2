//! A modal dialog component for terminal UIs.
//!
//! A [`Dialog`] shows one content source (an inline [`ContentFragment`] or a
//! [`PageReference`] the host resolves) above a cancel/validate button pair.
//! Button presses call host callbacks looked up by name in an
//! [`ActionRegistry`].

pub mod component;
pub mod config;
pub mod dialog;
pub mod error;
pub mod handlers;
pub mod view;

pub use component::{AttributeBound, Renderable};
pub use config::DialogProperties;
pub use dialog::{
    ActionCallback, ActionContext, ActionOutcome, ActionRegistry, Button, ButtonKind,
    ContentFragment, Dialog, DialogButtons, DialogContent, PageReference,
};
pub use error::{DialogError, Result};
pub use handlers::{dispatch_dialog_key, handle_dialog_key, KeyUpdate};
pub use view::{build_dialog_view, DialogView, DialogWidget, NoPages, PageSource};
