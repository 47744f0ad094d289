#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod fixtures;
