//! # favkit
//!
//! Favicon asset pipeline for static sites. One master image is the source
//! of truth: favkit derives every raster favicon from it and rewrites the
//! `<head>` markup that references them across the site's pages.
//!
//! # Architecture: Two Independent Stages
//!
//! ```text
//! 1. Icons     favicon-512.png  →  favicon-{16..512}.png + favicon.ico
//! 2. Rewrite   page registry    →  pages rewritten in place
//! ```
//!
//! The stages share no state beyond the filesystem and can be run
//! separately (`favkit icons`, `favkit rewrite`) or back to back
//! (`favkit build`). Both are single-shot and fail-fast: any error aborts
//! the run with a single diagnostic line and a non-zero exit.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`icons`] | Stage 1 — derives the PNG set and the ICO container from the master image |
//! | [`rewrite`] | Stage 2 — regenerates the favicon block in every registered page |
//! | [`config`] | Fixed tables: size lists, page registry, block markers and template |
//! | [`naming`] | `favicon-{size}.png` filename convention |
//! | [`imaging`] | Backend trait + pure-Rust implementation (resize, ICO encode) |
//! | [`output`] | CLI output formatting — pure formatters with print wrappers |
//!
//! # Design Decisions
//!
//! ## Fixed Tables Over Configuration
//!
//! There is no config file and no discovery. The page registry, size lists,
//! and block template are constants in [`config`] — the tool is maintained
//! alongside the site it serves, so changing the site means changing the
//! tables and rebuilding. This keeps every run reproducible from the binary
//! alone.
//!
//! ## Maud Over String Templates
//!
//! The favicon block's `<link>` tags are rendered with
//! [Maud](https://maud.lambda.xyz/), a compile-time HTML macro system.
//! Malformed markup is a build error, interpolation is type-checked, and
//! the rendered bytes are deterministic — which the rewriter's idempotence
//! guarantee depends on.
//!
//! ## Pure-Rust Imaging (No ImageMagick)
//!
//! The [`imaging`] module uses the `image` crate (Lanczos3 resampling, PNG
//! encode) and the `ico` crate for the multi-resolution container — both
//! pure Rust. No system dependencies: the binary is fully self-contained
//! and behaves identically on any machine.
//!
//! ## Fail-Fast, No Rollback
//!
//! The rewriter processes pages in registry order and stops at the first
//! failure; pages already rewritten stay rewritten. Re-running after a fix
//! is safe because every rewrite is idempotent, so a buffered all-or-nothing
//! commit would buy nothing for this offline maintenance tool.

pub mod config;
pub mod icons;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod rewrite;

#[cfg(test)]
pub(crate) mod test_helpers;
