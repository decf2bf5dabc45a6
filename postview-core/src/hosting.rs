//! Hosting path configuration.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths.

use std::path::{Path, PathBuf};

/// Root paths of the hosting application.
///
/// The content root is always present; a dedicated web root is optional.
/// When a web root exists, relative views resolve against it in preference
/// to the content root.
pub trait HostingPaths: Send + Sync {
    /// Root of the application's content tree.
    fn content_root(&self) -> &Path;

    /// Dedicated web root, when the host exposes one.
    fn web_root(&self) -> Option<&Path> {
        None
    }
}

/// Plain value implementation of [`HostingPaths`].
#[derive(Debug, Clone)]
pub struct HostEnvironment {
    content_root: PathBuf,
    web_root: Option<PathBuf>,
}

impl HostEnvironment {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        HostEnvironment {
            content_root: content_root.into(),
            web_root: None,
        }
    }

    pub fn with_web_root(mut self, web_root: impl Into<PathBuf>) -> Self {
        self.web_root = Some(web_root.into());
        self
    }
}

impl HostingPaths for HostEnvironment {
    fn content_root(&self) -> &Path {
        &self.content_root
    }

    fn web_root(&self) -> Option<&Path> {
        self.web_root.as_deref()
    }
}
