//! Icon file naming convention.
//!
//! Every raster icon is named `favicon-{size}.png`. The master image is
//! simply the 512px entry of that scheme, so a generator run re-encodes it
//! in place alongside the smaller sizes.

/// The master image the whole icon set is derived from.
pub const MASTER_FILENAME: &str = "favicon-512.png";

/// Multi-resolution container for legacy consumers.
pub const ICO_FILENAME: &str = "favicon.ico";

/// Vector icon referenced by the block template. Never generated — the SVG
/// is maintained by hand next to the master image.
pub const SVG_FILENAME: &str = "favicon.svg";

/// Name of the generated PNG at `size` pixels square.
pub fn png_filename(size: u32) -> String {
    format!("favicon-{size}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_filename_encodes_the_size() {
        assert_eq!(png_filename(16), "favicon-16.png");
        assert_eq!(png_filename(192), "favicon-192.png");
    }

    #[test]
    fn master_is_the_largest_png() {
        assert_eq!(png_filename(512), MASTER_FILENAME);
    }
}
