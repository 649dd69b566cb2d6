//! Shared utilities for fmm.
//!
//! This crate provides cross-cutting concerns used by all other fmm crates:
//! the unified error type, home-directory path helpers, and terminal status
//! output.

pub mod errors;
pub mod fs;
pub mod progress;
