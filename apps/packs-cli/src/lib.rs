//! # packs-cli
//!
//! Console harness for packs-core: configuration, the built-in scenarios and
//! output formatting. The binary in `main.rs` wires them to clap.

pub mod config;
pub mod render;
pub mod scenarios;
