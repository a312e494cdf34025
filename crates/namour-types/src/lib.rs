//! Foundation types for the Namour terminal.
//!
//! This crate holds the platform-agnostic types shared by every Namour
//! crate: the error enum, input events, and the shell configuration.

pub mod config;
pub mod error;
pub mod input;
