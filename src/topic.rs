//! Topic handling module
//!
//! This module provides components for validating MQTT topic names and
//! subscription filters and for matching topics against filters with
//! wildcard support.

// Submodules
pub mod error;
pub mod style_checker;
pub mod topic_matcher;
pub mod topic_validator;

#[cfg(test)]
mod topic_validator_tests;

// Re-export commonly used types for convenience
pub use error::{limits, ErrorKind, StyleViolation};
