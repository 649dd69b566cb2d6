//! Dependency resolution engine: a sorted snapshot of the local mods
//! directory, lazily read archive metadata, and the breadth-first transitive
//! closure that expands requested mods into everything they require.

pub mod cache;
pub mod index;
pub mod report;
pub mod resolver;
