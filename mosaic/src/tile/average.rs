//! Average color of a single tile.

use crate::color::ColorHex;
use crate::geometry::{ClipRegion, TileSize};
use image::RgbaImage;

/// Average RGB color of the tile at column `col`, row `row` of the clipped
/// region.
///
/// Sums each channel over every pixel of the tile (alpha is ignored) and
/// divides by the pixel count, truncating toward zero. Since each sum is at
/// most `255 × count`, the quotient always fits in a `u8`.
///
/// The caller guarantees the tile lies inside `image`; tiles produced from a
/// [`ClipRegion`] computed for this image always do.
pub fn average_tile(
    image: &RgbaImage,
    region: &ClipRegion,
    tile: TileSize,
    col: u32,
    row: u32,
) -> ColorHex {
    let origin_x = region.offset_x + col * tile.width();
    let origin_y = region.offset_y + row * tile.height();

    let mut sums = [0u64; 3];
    for y in origin_y..origin_y + tile.height() {
        for x in origin_x..origin_x + tile.width() {
            let pixel = image.get_pixel(x, y);
            sums[0] += pixel[0] as u64;
            sums[1] += pixel[1] as u64;
            sums[2] += pixel[2] as u64;
        }
    }

    let count = tile.pixel_count();
    ColorHex::new(
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::clip_region;
    use image::Rgba;

    fn uniform(w: u32, h: u32, rgb: [u8; 3]) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([rgb[0], rgb[1], rgb[2], 255]))
    }

    #[test]
    fn test_uniform_tile_any_size() {
        for (w, h) in [(1, 1), (3, 7), (10, 10), (16, 16), (33, 2)] {
            let tile = TileSize::new(w, h).unwrap();
            let image = uniform(w * 2, h * 2, [12, 34, 56]);
            let region = clip_region(image.width(), image.height(), tile).unwrap();

            let color = average_tile(&image, &region, tile, 1, 1);
            assert_eq!(color.to_string(), "0c2238", "tile {}x{}", w, h);
        }
    }

    #[test]
    fn test_average_truncates() {
        // Two pixels: 0 and 255 -> 127.5 truncates to 127
        let tile = TileSize::new(2, 1).unwrap();
        let mut image = uniform(2, 1, [0, 0, 0]);
        image.put_pixel(1, 0, Rgba([255, 1, 3, 255]));
        let region = clip_region(2, 1, tile).unwrap();

        let color = average_tile(&image, &region, tile, 0, 0);
        assert_eq!(color, ColorHex::new(127, 0, 1));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let tile = TileSize::new(2, 2).unwrap();
        let image = RgbaImage::from_pixel(2, 2, Rgba([100, 150, 200, 0]));
        let region = clip_region(2, 2, tile).unwrap();

        assert_eq!(
            average_tile(&image, &region, tile, 0, 0),
            ColorHex::new(100, 150, 200)
        );
    }

    #[test]
    fn test_traversal_order_does_not_matter() {
        let tile = TileSize::new(3, 3).unwrap();
        let values: Vec<u8> = (0..9).map(|i| (i * 27) as u8).collect();

        let forward = RgbaImage::from_fn(3, 3, |x, y| {
            let v = values[(y * 3 + x) as usize];
            Rgba([v, 255 - v, v / 2, 255])
        });
        let reversed = RgbaImage::from_fn(3, 3, |x, y| {
            let v = values[8 - (y * 3 + x) as usize];
            Rgba([v, 255 - v, v / 2, 255])
        });
        let region = clip_region(3, 3, tile).unwrap();

        assert_eq!(
            average_tile(&forward, &region, tile, 0, 0),
            average_tile(&reversed, &region, tile, 0, 0)
        );
    }

    #[test]
    fn test_reads_from_clip_offset() {
        // 12x10 image with 5x5 tiles: clipped to 10x10 at offset (1, 0).
        // Column 0 of the source is red and must not leak into the average.
        let tile = TileSize::new(5, 5).unwrap();
        let image = RgbaImage::from_fn(12, 10, |x, _| {
            if x == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        });
        let region = clip_region(12, 10, tile).unwrap();
        assert_eq!(region.offset_x, 1);

        assert_eq!(
            average_tile(&image, &region, tile, 0, 0),
            ColorHex::new(0, 0, 255)
        );
    }
}
