//! Rescat - aspect-ratio scoped resolution catalogs
//!
//! Rescat is a CLI tool and library for the ratio → resolution lookup tables
//! behind paired aspect-ratio/resolution dropdowns in node-based editors. It
//! loads a catalog (file, HTTP endpoint, or the built-in table), filters the
//! resolution choices by the selected ratio, and surfaces a human-readable
//! description for the selected resolution.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog types, queries, loading, and validation
//! - `cli`: Command-line interface layer (list/show/describe/check/init)
//! - `host`: Integration traits and per-node binding for host editors
//! - `issue`: Validation issue definitions
//! - `picker`: The ratio/resolution selection rule
//! - `resolution`: Parsed resolution and aspect-ratio tokens

pub mod catalog;
pub mod cli;
pub mod host;
pub mod issue;
pub mod picker;
pub mod resolution;
