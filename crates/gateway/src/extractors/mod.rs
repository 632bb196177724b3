//! Request extractors.

mod json_form;

pub use json_form::JsonForm;
