pub mod charts;
pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod error;
pub mod layout;
