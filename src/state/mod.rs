/// State management module
///
/// This module handles all form state, including:
/// - Shared data structures (data.rs)
/// - The pending submission and its Idle/Submitting lifecycle (form.rs)

pub mod data;
pub mod form;
