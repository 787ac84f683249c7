//! Favicon block rewriting.
//!
//! Replaces the icon markup in every registered page with a freshly rendered
//! block, leaving the surrounding content untouched. Pages are processed
//! strictly sequentially in registry order; the first failure aborts the run
//! and pages rewritten before it stay rewritten.
//!
//! ## Block Anatomy
//!
//! ```text
//! <head>
//!     <title>…</title>
//!     <!-- Favicon -->                  ← start marker (kept, regenerated)
//!     <link rel="icon" …>               ← replaced wholesale
//!     …
//!                                       ← one blank line closes the block
//!     <!-- Fonts -->                    ← end boundary (first marker wins)
//!     <link href="https://fonts.goog…>
//! </head>
//! ```
//!
//! The end boundary is the highest-priority entry of
//! [`config::END_MARKERS`] occurring after the start marker. The Fonts
//! comment bounds the block at its exact match position; every other marker
//! bounds it at the start of the line containing the match, so that marker's
//! line survives intact.
//!
//! ## Idempotence
//!
//! The rendered block begins with the start marker at the splice point
//! itself, so the marker line keeps whatever indentation the page gave it
//! and a second run reproduces the file byte for byte.

use crate::config::{self, IconRef};
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why a favicon block could not be located in a page's text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    #[error("no favicon block")]
    MissingStart,
    #[error("unable to locate the end of the favicon block")]
    MissingEnd,
}

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no favicon block in {0}")]
    MissingStart(PathBuf),
    #[error("unable to locate the end of the favicon block in {0}")]
    MissingEnd(PathBuf),
}

impl BlockError {
    fn for_page(self, page: &str) -> RewriteError {
        let page = PathBuf::from(page);
        match self {
            BlockError::MissingStart => RewriteError::MissingStart(page),
            BlockError::MissingEnd => RewriteError::MissingEnd(page),
        }
    }
}

/// One page processed by [`rewrite_all`], for the output formatter.
#[derive(Debug)]
pub struct RewrittenPage {
    pub path: &'static str,
    pub prefix: &'static str,
    /// False when the write reproduced the previous contents exactly.
    pub changed: bool,
}

/// Byte offset of the start marker, if present.
pub fn find_block_start(text: &str) -> Option<usize> {
    text.find(config::START_MARKER)
}

/// Byte offset of the end boundary for a block starting at `start`.
///
/// Markers are tried in priority order, not by position: the first entry of
/// [`config::END_MARKERS`] found anywhere after `start` wins.
pub fn find_block_end(text: &str, start: usize) -> Option<usize> {
    for marker in config::END_MARKERS {
        if let Some(pos) = text[start..].find(marker) {
            let idx = start + pos;
            if *marker == config::FONTS_MARKER {
                return Some(idx);
            }
            // Reclaim the matched marker's line up to its first character.
            return Some(match text[start..idx].rfind('\n') {
                Some(nl) => start + nl + 1,
                None => idx,
            });
        }
    }
    None
}

/// Render one `<link>` tag of the block.
fn icon_link(icon: &IconRef, prefix: &str) -> Markup {
    html! {
        link rel=(icon.rel) type=[icon.mime] sizes=[icon.sizes] href={ (prefix) (icon.file) };
    }
}

/// Render the full favicon block for a page with the given path prefix.
///
/// The first line is the start marker itself; `<link>` lines carry a fixed
/// four-space head indentation.
pub fn render_block(prefix: &str) -> String {
    let mut block = String::from(config::START_MARKER);
    block.push('\n');
    for icon in config::BLOCK_LINKS {
        block.push_str("    ");
        block.push_str(&icon_link(icon, prefix).into_string());
        block.push('\n');
    }
    block
}

/// Rewrite the favicon block inside one page's text.
///
/// Content before the start marker and from the end boundary onward is
/// preserved byte for byte; the block in between is regenerated from the
/// template with exactly one blank line appended.
pub fn rewrite_page(text: &str, prefix: &str) -> Result<String, BlockError> {
    let start = find_block_start(text).ok_or(BlockError::MissingStart)?;
    let end = find_block_end(text, start).ok_or(BlockError::MissingEnd)?;

    let mut updated = String::with_capacity(text.len());
    updated.push_str(&text[..start]);
    updated.push_str(&render_block(prefix));
    updated.push('\n');
    updated.push_str(&text[end..]);
    Ok(updated)
}

/// Rewrite every registered page under `root`, in registry order.
///
/// Fail-fast with no rollback: an unlocatable block aborts the run and
/// leaves earlier pages rewritten on disk.
pub fn rewrite_all(root: &Path) -> Result<Vec<RewrittenPage>, RewriteError> {
    let mut rewritten = Vec::with_capacity(config::PAGES.len());
    for page in config::PAGES {
        let path = root.join(page.path);
        let text = fs::read_to_string(&path)?;
        let updated = rewrite_page(&text, page.prefix).map_err(|e| e.for_page(page.path))?;
        let changed = updated != text;
        fs::write(&path, &updated)?;
        rewritten.push(RewrittenPage {
            path: page.path,
            prefix: page.prefix,
            changed,
        });
    }
    Ok(rewritten)
}

/// Verify every registered page has a locatable favicon block.
///
/// Same detection as [`rewrite_all`], same fail-fast order, no writes.
pub fn validate_all(root: &Path) -> Result<(), RewriteError> {
    for page in config::PAGES {
        let text = fs::read_to_string(root.join(page.path))?;
        let start = find_block_start(&text)
            .ok_or_else(|| BlockError::MissingStart.for_page(page.path))?;
        find_block_end(&text, start).ok_or_else(|| BlockError::MissingEnd.for_page(page.path))?;
    }
    Ok(())
}
