//! Core data types for fmm.
//!
//! This crate defines the model shared by every other fmm crate: mod
//! versions and identities, dependency constraints and their matching rule,
//! the `info.json` and `mod-list.json` formats, the adapters that turn user
//! input into seed mods, and user configuration.
//!
//! This crate is intentionally free of network I/O.

pub mod config;
pub mod dependency;
pub mod ident;
pub mod info_json;
pub mod input;
pub mod mod_list;
pub mod version;
