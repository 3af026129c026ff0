//! Mosaic orchestration
//!
//! Runs the whole pipeline for one photo:
//!
//! ```text
//! clear cache → clip → seed canvas → tile grid → row 0 → row 1 → … → encode
//! ```
//!
//! Rows are awaited one after another; tiles within a row are resolved
//! concurrently by the row renderer.

mod generate;
mod types;

pub use generate::MosaicGenerator;
pub use types::MosaicOutput;
