//! Shared test utilities for the favkit test suite.
//!
//! Provides page fixture builders and a whole-site setup used by the
//! rewriter tests. Fixtures deliberately carry a stale favicon link so
//! tests can assert it was replaced.

use std::fs;
use tempfile::TempDir;

use crate::config;

/// A page whose favicon block is directly followed by `after_block` markup.
pub fn page_with(after_block: &str) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    page.push_str("    <title>Past Papers</title>\n");
    page.push_str("    <!-- Favicon -->\n");
    page.push_str("    <link rel=\"icon\" type=\"image/png\" href=\"old-favicon.png\">\n");
    page.push_str(after_block);
    page.push_str("</head>\n<body>\n    <p>content</p>\n</body>\n</html>\n");
    page
}

/// Tail markup for a page that loads webfonts.
pub fn fonts_tail() -> &'static str {
    "    <!-- Fonts -->\n    <link href=\"https://fonts.googleapis.com/css2?family=Inter\" rel=\"stylesheet\">\n"
}

/// Tail markup for a page that goes straight to the local stylesheet.
pub fn stylesheet_tail() -> &'static str {
    "    <link rel=\"stylesheet\" href=\"styles.css\">\n"
}

/// Write every registered page into a temp directory with the given tail.
pub fn setup_site(tail: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for page in config::PAGES {
        let path = tmp.path().join(page.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, page_with(tail)).unwrap();
    }
    tmp
}
