//! CLI output formatting for both pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Icons
//!
//! ```text
//! Icons
//!     favicon-16.png (16x16)
//!     favicon-32.png (32x32)
//!     ...
//!     favicon.ico (16, 32, 48, 64)
//! ```
//!
//! ## Rewrite
//!
//! ```text
//! Pages
//!     index.html: rewritten
//!     about.html: unchanged
//!     past-papers/past-papers.html (prefix ../): rewritten
//! Rewrote 16 pages
//! ```

use crate::icons::IconSet;
use crate::rewrite::RewrittenPage;
use std::path::Path;

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Format the generator summary.
pub fn format_icons_output(set: &IconSet) -> Vec<String> {
    let mut lines = vec!["Icons".to_string()];
    for png in &set.pngs {
        lines.push(format!(
            "    {} ({}x{})",
            file_name(&png.path),
            png.size,
            png.size
        ));
    }
    let sizes = set
        .ico_sizes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("    {} ({})", file_name(&set.ico_path), sizes));
    lines
}

/// Format the rewriter summary.
pub fn format_rewrite_output(pages: &[RewrittenPage]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for page in pages {
        let status = if page.changed { "rewritten" } else { "unchanged" };
        if page.prefix.is_empty() {
            lines.push(format!("    {}: {}", page.path, status));
        } else {
            lines.push(format!(
                "    {} (prefix {}): {}",
                page.path, page.prefix, status
            ));
        }
    }
    lines.push(format!("Rewrote {} pages", pages.len()));
    lines
}

pub fn print_icons_output(set: &IconSet) {
    for line in format_icons_output(set) {
        println!("{line}");
    }
}

pub fn print_rewrite_output(pages: &[RewrittenPage]) {
    for line in format_rewrite_output(pages) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::GeneratedPng;

    #[test]
    fn icons_output_lists_every_file_with_its_size() {
        let set = IconSet {
            pngs: vec![
                GeneratedPng {
                    size: 16,
                    path: "site/favicon-16.png".into(),
                },
                GeneratedPng {
                    size: 32,
                    path: "site/favicon-32.png".into(),
                },
            ],
            ico_path: "site/favicon.ico".into(),
            ico_sizes: &[16, 32],
        };

        let lines = format_icons_output(&set);
        assert_eq!(
            lines,
            vec![
                "Icons",
                "    favicon-16.png (16x16)",
                "    favicon-32.png (32x32)",
                "    favicon.ico (16, 32)",
            ]
        );
    }

    #[test]
    fn rewrite_output_shows_prefix_and_status() {
        let pages = vec![
            RewrittenPage {
                path: "index.html",
                prefix: "",
                changed: true,
            },
            RewrittenPage {
                path: "past-papers/past-papers.html",
                prefix: "../",
                changed: false,
            },
        ];

        let lines = format_rewrite_output(&pages);
        assert_eq!(
            lines,
            vec![
                "Pages",
                "    index.html: rewritten",
                "    past-papers/past-papers.html (prefix ../): unchanged",
                "Rewrote 2 pages",
            ]
        );
    }
}
