//! Input acquisition for the CLI layer
//!
//! The core never performs I/O; everything here runs before it is invoked
//! and hands it a fully read string.

pub mod input;

pub use input::{is_likely_path, read_input};
