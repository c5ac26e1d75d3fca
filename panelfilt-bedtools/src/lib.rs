//! Interval engine integration for panelfilt.
//!
//! This crate owns everything that touches the external sort/intersect
//! engine: the [IntervalEngine] capability trait, the [Bedtools]
//! implementation that shells out to the bedtools executable, the
//! [IntervalStore] that projects a report's variants into the engine's
//! four-column line format, and the overlap resolver that collapses
//! intersect hits back into a unique set of variant tokens.
//!
//! The engine is injected rather than assumed, so tests run the same
//! pipeline against an in-process implementation with identical
//! half-open overlap semantics.
//!
//! ```no_run
//! use std::path::PathBuf;
//!
//! use panelfilt_bedtools::{Bedtools, IntervalStore, unique_overlaps};
//! use panelfilt_core::filter::{apply_panel, panel_label};
//! use panelfilt_core::models::VariantReport;
//!
//! let report = VariantReport::try_from("trio_variant_report.txt").unwrap();
//! let panels = vec![PathBuf::from("Intellectual_disability_v2.510_green_pad20.bed")];
//!
//! let engine = Bedtools::default();
//! let store = IntervalStore::from_report(&report).unwrap();
//! let sorted = store.sorted_bed(&engine).unwrap();
//! let keep = unique_overlaps(&engine, sorted, &panels).unwrap();
//!
//! let out = apply_panel(&report, &panel_label(&panels), &keep).unwrap();
//! println!("Output:      {}", out.display());
//! ```

pub mod engine;
pub mod errors;
pub mod resolve;
pub mod store;

#[cfg(test)]
mod testutil;

// re-exports
pub use self::engine::{Bedtools, IntervalEngine};
pub use self::errors::EngineError;
pub use self::resolve::unique_overlaps;
pub use self::store::{IntervalStore, SortedBed};
