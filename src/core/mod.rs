//! Core types shared across comet: the error taxonomy and its CLI rendering.

pub mod error;

pub use error::{CometError, ErrorContext, Result, user_friendly_error};
