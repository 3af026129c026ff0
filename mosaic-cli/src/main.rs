//! mosaic CLI - render photos as glyph mosaics.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use commands::cache::CacheAction;
use commands::common::CacheChoice;
use commands::generate::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(version = mosaic::VERSION)]
#[command(about = "Render photos as mosaics of color-matched glyphs", long_about = None)]
struct Cli {
    /// Enable debug-level logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    debug: bool,

    /// Mirror log output to stdout
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a photo as a mosaic
    Generate {
        /// Source photo (PNG or JPEG)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file: a PNG, or data URL text with --data-url
        #[arg(short, long)]
        output: PathBuf,

        /// Tile width in pixels (default from config, else 16)
        #[arg(long)]
        tile_width: Option<u32>,

        /// Tile height in pixels (default from config, else 16)
        #[arg(long)]
        tile_height: Option<u32>,

        /// Color service base URL
        #[arg(long, conflicts_with = "offline")]
        service_url: Option<String>,

        /// Glyph cache backend
        #[arg(long, value_enum)]
        cache: Option<CacheChoice>,

        /// Synthesize glyphs locally instead of calling the color service
        #[arg(long)]
        offline: bool,

        /// Write the mosaic as a data:image/png;base64 URL instead of a PNG
        #[arg(long)]
        data_url: bool,
    },

    /// Manage the disk glyph cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Write a default config file to ~/.mosaic/config.ini
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            tile_width,
            tile_height,
            service_url,
            cache,
            offline,
            data_url,
        } => {
            commands::generate::run(GenerateArgs {
                input,
                output,
                tile_width,
                tile_height,
                service_url,
                cache,
                offline,
                data_url,
                debug: cli.debug,
                verbose: cli.verbose,
            })
            .await
        }
        Commands::Cache { action } => commands::cache::run(action),
        Commands::Init { force } => commands::init::run(force),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::try_parse_from([
            "mosaic",
            "generate",
            "-i",
            "photo.jpg",
            "-o",
            "out.png",
            "--tile-width",
            "8",
            "--cache",
            "disk",
            "--offline",
        ])
        .unwrap();

        match cli.command {
            Commands::Generate {
                input,
                tile_width,
                tile_height,
                cache,
                offline,
                ..
            } => {
                assert_eq!(input, PathBuf::from("photo.jpg"));
                assert_eq!(tile_width, Some(8));
                assert_eq!(tile_height, None);
                assert_eq!(cache, Some(CacheChoice::Disk));
                assert!(offline);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_offline_conflicts_with_service_url() {
        let result = Cli::try_parse_from([
            "mosaic",
            "generate",
            "-i",
            "a.png",
            "-o",
            "b.png",
            "--offline",
            "--service-url",
            "http://x",
        ]);
        assert!(result.is_err());
    }
}
