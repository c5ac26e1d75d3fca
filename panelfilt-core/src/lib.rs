//! Core library for panelfilt: filtering trio variant reports against
//! gene panels.
//!
//! This crate holds the data model and the pure pieces of the pipeline:
//! the variant token grammar, the projection of a token onto a
//! half-open genomic interval, report parsing, and the report filters
//! (panel membership and de novo extraction). Everything that talks to
//! the external interval engine lives in `panelfilt-bedtools`.

pub mod consts;
pub mod errors;
pub mod filter;
pub mod models;
pub mod utils;
