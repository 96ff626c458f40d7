//! Backends module - External tool integrations
//!
//! Provides:
//! - git: tracked file listing and repository root discovery

pub mod git;
