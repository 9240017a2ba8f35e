//! Core data types for the lockscan scanner.
//!
//! This crate defines the in-memory dependency tree built from a flat
//! lock-file record list: tree nodes and the arena that owns them, lenient
//! version parsing, the flat package record shape analyzers produce, the
//! two-pass tree assembler, and the analyzer seam that per-ecosystem lock
//! file parsers plug into.
//!
//! This crate is intentionally free of I/O and deserialization; those live
//! in the per-ecosystem analyzer crates.

pub mod analyzer;
pub mod assemble;
pub mod record;
pub mod tree;
pub mod version;
