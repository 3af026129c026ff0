//! Row rendering.
//!
//! A row is the unit of progress: all glyphs of a row are resolved
//! concurrently and drawn together, so the canvas never shows a partially
//! drawn row.

mod row;

pub use row::render_row;
