//! Result types for mosaic generation.

use crate::geometry::ClipRegion;
use crate::tile::TileGrid;
use std::time::Duration;

/// Outcome of a successful generation run.
#[derive(Debug, Clone)]
pub struct MosaicOutput {
    /// Finished mosaic as a `data:image/png;base64,...` URL
    pub rendered_image: String,
    /// Wall-clock time from start of the run to the encoded result
    pub execution_time: Duration,
    /// Average tile colors the mosaic was built from
    pub grid: TileGrid,
    /// Part of the source image the mosaic covers
    pub region: ClipRegion,
}

impl MosaicOutput {
    /// Execution time in (fractional) milliseconds.
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_secs_f64() * 1000.0
    }
}
