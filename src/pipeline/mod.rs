//! Variant lookup pipeline.
//!
//! Drives the per-variant flow: resolve the HGVS description to canonical
//! alleles, fetch the effect measurements for each allele, fetch and
//! classify against each measurement's score set, extract experiment
//! metadata, and emit one flattened record per scored measurement.
//!
//! Processing is strictly sequential and order-preserving: variants in
//! input order, alleles in resolver order, measurements in source order.
//! Records accumulate in memory and are written in one pass at the end, so
//! an aborted run leaves no partial output file.

mod io;
mod lookup;

pub use io::{read_variant_queries, write_records};
pub use lookup::VariantLookup;
