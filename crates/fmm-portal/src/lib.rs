//! Mod portal access: the [`catalog::RemoteCatalog`] seam used by the
//! resolver, the release selection rule, and the HTTP client implementing it.

pub mod api;
pub mod catalog;
pub mod client;
