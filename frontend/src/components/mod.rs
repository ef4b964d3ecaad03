pub mod fields;
pub mod form_page;
pub mod profile_form;
