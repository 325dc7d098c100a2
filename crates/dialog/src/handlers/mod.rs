mod keys;

pub use keys::{dispatch_dialog_key, handle_dialog_key, KeyUpdate};
