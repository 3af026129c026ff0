//! Generate command - render a photo as a glyph mosaic.

use mosaic::cache::GlyphCache;
use mosaic::canvas::Canvas;
use mosaic::geometry::TileSize;
use mosaic::orchestrator::{MosaicGenerator, MosaicOutput};
use mosaic::provider::{AsyncReqwestClient, ColorServiceProvider, GlyphProvider, LocalGlyphProvider};
use std::path::{Path, PathBuf};
use tracing::info;

use super::common::{resolve_cache_backend, resolve_service_url, resolve_tile_size, CacheChoice};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the generate command.
pub struct GenerateArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tile_width: Option<u32>,
    pub tile_height: Option<u32>,
    pub service_url: Option<String>,
    pub cache: Option<CacheChoice>,
    pub offline: bool,
    pub data_url: bool,
    pub debug: bool,
    pub verbose: bool,
}

/// Run the generate command.
pub async fn run(args: GenerateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.debug, args.verbose)?;
    runner.log_startup("generate");
    let config = runner.config();

    let tile = resolve_tile_size(args.tile_width, args.tile_height, config)?;
    let cache = runner.create_cache(resolve_cache_backend(args.cache, config))?;

    let photo = image::open(&args.input)
        .map_err(|error| CliError::ImageRead {
            path: args.input.clone(),
            error,
        })?
        .to_rgba8();

    println!("Generating mosaic for:");
    println!("  Input: {} ({}x{})", args.input.display(), photo.width(), photo.height());
    println!("  Tile:  {}", tile);

    let mut canvas = Canvas::default();
    let output = if args.offline {
        println!("  Glyphs: local (offline)");
        render(LocalGlyphProvider::new(tile), cache, &photo, &mut canvas, tile).await?
    } else {
        let url = resolve_service_url(args.service_url, config);
        println!("  Glyphs: {}", url);
        let client = AsyncReqwestClient::with_timeout(config.service.timeout)
            .map_err(CliError::HttpClient)?;
        render(ColorServiceProvider::new(client, url), cache, &photo, &mut canvas, tile).await?
    };
    println!();

    write_output(&args.output, &canvas, &output, args.data_url)?;

    println!(
        "Rendered {}x{} tiles in {:.1} ms",
        output.grid.column_count(),
        output.grid.row_count(),
        output.execution_time_ms()
    );
    println!("Saved: {}", args.output.display());
    Ok(())
}

async fn render<P: GlyphProvider>(
    provider: P,
    cache: Box<dyn GlyphCache>,
    photo: &image::RgbaImage,
    canvas: &mut Canvas,
    tile: TileSize,
) -> Result<MosaicOutput, CliError> {
    info!(provider = provider.name(), "Starting mosaic generation");
    let mut generator = MosaicGenerator::new(provider, cache);
    let output = generator.generate(photo, Some(canvas), tile).await?;

    let stats = generator.cache().stats();
    info!(
        hits = stats.hits,
        misses = stats.misses,
        write_failures = stats.write_failures,
        hit_rate = stats.hit_rate(),
        "Glyph cache usage"
    );
    Ok(output)
}

/// Write the mosaic as a PNG, or as data URL text when `data_url` is set.
fn write_output(
    path: &Path,
    canvas: &Canvas,
    output: &MosaicOutput,
    data_url: bool,
) -> Result<(), CliError> {
    let result = if data_url {
        std::fs::write(path, &output.rendered_image).map_err(|e| e.to_string())
    } else {
        canvas.save(path).map_err(|e| e.to_string())
    };
    result.map_err(|error| CliError::FileWrite {
        path: path.to_path_buf(),
        error,
    })
}
