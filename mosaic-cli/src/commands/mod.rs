//! CLI command implementations.
//!
//! - [`cache`] - Disk cache management (clear, stats)
//! - [`generate`] - Render a photo as a mosaic
//! - [`init`] - Write a default config file

pub mod cache;
pub mod common;
pub mod generate;
pub mod init;
