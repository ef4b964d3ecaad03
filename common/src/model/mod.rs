pub mod profile;
pub mod status;
pub mod submission;
