//! Image selection module
//!
//! This module handles:
//! - The selector state machine (selector.rs)
//! - Reading a selected file into a preview (reader.rs)

pub mod reader;
pub mod selector;

pub use selector::{ImageSelector, Ticket};
