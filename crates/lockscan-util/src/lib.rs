//! Shared utilities for the lockscan scanner.
//!
//! This crate provides cross-cutting concerns used by the other lockscan
//! crates: error types and filesystem helpers for locating lock files.

pub mod errors;
pub mod fs;
