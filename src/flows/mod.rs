//! Flows module - End-to-end operations
//!
//! Provides:
//! - bundle: list, filter, minify and write every tracked web source

pub mod bundle;
