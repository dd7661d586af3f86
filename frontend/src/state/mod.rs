pub mod fetch;
pub mod form;
