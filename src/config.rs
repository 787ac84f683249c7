//! Fixed configuration tables.
//!
//! favkit is configuration-free at runtime: the raster size lists, the page
//! registry, the block markers, and the block template are all compile-time
//! constants in this module. Changing the site layout means editing these
//! tables and rebuilding.
//!
//! ## Page Registry
//!
//! Pages live at a fixed set of paths relative to the site root. Pages in
//! subdirectories carry a path prefix so their asset hrefs still resolve to
//! the root-level icon files:
//!
//! ```text
//! index.html                       prefix ""
//! about.html                       prefix ""
//! ...
//! past-papers/past-papers.html     prefix "../"
//! ```
//!
//! ## Block Markers
//!
//! The favicon block in a page starts at the literal [`START_MARKER`]
//! comment and ends at the first [`END_MARKERS`] entry found after it.
//! Markers are tried in list order, not by position in the page.

/// Pixel sizes of the generated PNG set, in generation order.
pub const PNG_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 192, 256, 512];

/// Resolutions bundled into the ICO container.
pub const ICO_SIZES: [u32; 4] = [16, 32, 48, 64];

/// Literal comment that opens the favicon block in every page.
pub const START_MARKER: &str = "<!-- Favicon -->";

/// Comment that follows the favicon block on pages that load webfonts.
/// As an end marker it is matched at its exact position, not at line start.
pub const FONTS_MARKER: &str = "<!-- Fonts -->";

/// End-of-block markers in priority order. The first entry in this list
/// that occurs anywhere after the start marker wins, even if a later entry
/// occurs earlier in the page.
pub const END_MARKERS: &[&str] = &[
    FONTS_MARKER,
    "https://fonts.googleapis.com",
    "<link rel=\"stylesheet\" href=\"styles.css\"",
    "<script",
    "<style",
];

/// One entry of the page registry: a page path relative to the site root
/// and the prefix its asset hrefs need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub path: &'static str,
    pub prefix: &'static str,
}

/// Every page whose favicon block favkit maintains, in rewrite order.
pub const PAGES: &[PageEntry] = &[
    PageEntry { path: "index.html", prefix: "" },
    PageEntry { path: "about.html", prefix: "" },
    PageEntry { path: "browse.html", prefix: "" },
    PageEntry { path: "upload.html", prefix: "" },
    PageEntry { path: "signup.html", prefix: "" },
    PageEntry { path: "login.html", prefix: "" },
    PageEntry { path: "profile.html", prefix: "" },
    PageEntry { path: "upload-past-papers.html", prefix: "" },
    PageEntry { path: "test-auth.html", prefix: "" },
    PageEntry { path: "test_auth.html", prefix: "" },
    PageEntry { path: "test-auth-fixed.html", prefix: "" },
    PageEntry { path: "test-header-scrollbar.html", prefix: "" },
    PageEntry { path: "test-navigation.html", prefix: "" },
    PageEntry { path: "test-setup.html", prefix: "" },
    PageEntry { path: "test-connection.html", prefix: "" },
    PageEntry { path: "past-papers/past-papers.html", prefix: "../" },
];

/// One `<link>` tag of the favicon block template.
#[derive(Debug, Clone, Copy)]
pub struct IconRef {
    pub rel: &'static str,
    pub mime: Option<&'static str>,
    pub sizes: Option<&'static str>,
    pub file: &'static str,
}

/// The favicon block template in emission order: SVG first, PNGs from
/// largest to smallest, ICO references last. The apple-touch-icon entry is
/// served by the 192px PNG.
pub const BLOCK_LINKS: &[IconRef] = &[
    IconRef { rel: "icon", mime: Some("image/svg+xml"), sizes: None, file: "favicon.svg" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("512x512"), file: "favicon-512.png" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("192x192"), file: "favicon-192.png" },
    IconRef { rel: "apple-touch-icon", mime: None, sizes: Some("180x180"), file: "favicon-192.png" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("64x64"), file: "favicon-64.png" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("48x48"), file: "favicon-48.png" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("32x32"), file: "favicon-32.png" },
    IconRef { rel: "icon", mime: Some("image/png"), sizes: Some("16x16"), file: "favicon-16.png" },
    IconRef { rel: "icon", mime: Some("image/x-icon"), sizes: None, file: "favicon.ico" },
    IconRef { rel: "shortcut icon", mime: Some("image/x-icon"), sizes: None, file: "favicon.ico" },
];
