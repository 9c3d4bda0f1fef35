//! Supporting utilities.

pub mod fs;

pub use fs::{atomic_write, read_text_file};
