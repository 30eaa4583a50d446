//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field rendering utilities
//! - `register_form`: User registration form
//! - `property_form`: Property create form (admin panel)

pub mod field_renderer;
mod property_form;
mod register_form;

pub use property_form::draw_property_create;
pub use register_form::draw_register;
