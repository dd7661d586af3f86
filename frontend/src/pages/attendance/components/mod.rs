pub mod history;
pub mod mark_form;
