//! Image processing — pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize → PNG** | Lanczos3 + `image` PNG encoder |
//! | **ICO container** | `ico` crate multi-frame directory |
//!
//! The module is split into:
//! - **Backend**: [`IconBackend`] trait + parameter structs
//! - **Rust backend**: the production [`RustBackend`]

pub mod backend;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, IcoParams, IconBackend, ResizeParams};
pub use rust_backend::RustBackend;
