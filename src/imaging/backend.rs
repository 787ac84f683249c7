//! Imaging backend trait and shared types.
//!
//! The [`IconBackend`] trait defines the three operations the icon stage
//! needs: identify, resize, and write_ico. The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend) — pure Rust, statically
//! linked, no external binaries.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Imaging failed: {0}")]
    ImagingFailed(String),
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// A single resize: master image → square PNG at `size` pixels.
#[derive(Debug, Clone)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub size: u32,
}

/// A container write: master image → one ICO bundling a frame per size.
#[derive(Debug, Clone)]
pub struct IcoParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub sizes: Vec<u32>,
}

/// Trait for imaging backends.
///
/// Every backend must implement all three operations so the icon stage is
/// backend-agnostic. Operations take source paths, not decoded images — a
/// backend is free to cache, but callers must not assume it does.
pub trait IconBackend {
    /// Get image dimensions.
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError>;

    /// Execute a resize operation.
    fn resize(&self, params: &ResizeParams) -> Result<(), BackendError>;

    /// Execute a multi-resolution ICO write.
    fn write_ico(&self, params: &IcoParams) -> Result<(), BackendError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock backend that records operations without executing them.
    #[derive(Default)]
    pub struct MockBackend {
        pub identify_results: RefCell<Vec<Dimensions>>,
        pub operations: RefCell<Vec<RecordedOp>>,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum RecordedOp {
        Identify(String),
        Resize {
            source: String,
            output: String,
            size: u32,
        },
        WriteIco {
            source: String,
            output: String,
            sizes: Vec<u32>,
        },
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dimensions(dims: Vec<Dimensions>) -> Self {
            Self {
                identify_results: RefCell::new(dims),
                operations: RefCell::new(Vec::new()),
            }
        }

        pub fn get_operations(&self) -> Vec<RecordedOp> {
            self.operations.borrow().clone()
        }
    }

    impl IconBackend for MockBackend {
        fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
            self.operations
                .borrow_mut()
                .push(RecordedOp::Identify(path.to_string_lossy().to_string()));

            self.identify_results
                .borrow_mut()
                .pop()
                .ok_or_else(|| BackendError::ImagingFailed("No mock dimensions".to_string()))
        }

        fn resize(&self, params: &ResizeParams) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::Resize {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                size: params.size,
            });
            Ok(())
        }

        fn write_ico(&self, params: &IcoParams) -> Result<(), BackendError> {
            self.operations.borrow_mut().push(RecordedOp::WriteIco {
                source: params.source.to_string_lossy().to_string(),
                output: params.output.to_string_lossy().to_string(),
                sizes: params.sizes.clone(),
            });
            Ok(())
        }
    }

    #[test]
    fn mock_records_identify() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 512,
            height: 512,
        }]);

        let result = backend.identify(Path::new("/site/favicon-512.png")).unwrap();
        assert_eq!(result.width, 512);
        assert_eq!(result.height, 512);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Identify(p) if p == "/site/favicon-512.png"));
    }

    #[test]
    fn mock_records_resize() {
        let backend = MockBackend::new();

        backend
            .resize(&ResizeParams {
                source: "/site/favicon-512.png".into(),
                output: "/site/favicon-64.png".into(),
                size: 64,
            })
            .unwrap();

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 1);
        assert!(matches!(&ops[0], RecordedOp::Resize { size: 64, .. }));
    }

    #[test]
    fn mock_records_ico_sizes() {
        let backend = MockBackend::new();

        backend
            .write_ico(&IcoParams {
                source: "/site/favicon-512.png".into(),
                output: "/site/favicon.ico".into(),
                sizes: vec![16, 32],
            })
            .unwrap();

        let ops = backend.get_operations();
        assert!(matches!(
            &ops[0],
            RecordedOp::WriteIco { sizes, .. } if sizes == &[16, 32]
        ));
    }
}
