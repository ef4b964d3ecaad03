//! Shared model and form logic for the profile editor.
//!
//! Nothing in this crate touches the DOM: the Yew frontend binds its controls
//! to a [`form::FormController`] and renders whatever state it reports.

pub mod form;
pub mod model;
