//! Core module - Fundamental data structures and utilities
//!
//! This module provides:
//! - Fixed configuration (allow-list, denylist, output file)
//! - Error taxonomy
//! - Bundle model and rendering
//! - Tracked path helpers

pub mod config;
pub mod error;
pub mod model;
pub mod paths;
pub mod render;
