//! Command handlers
//!
//! The CLI has a single action: validate one profile file.

pub mod validate;

pub use validate::handle_validate;
