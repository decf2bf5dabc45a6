//! The view-engine seam — [`ViewEngine`], [`View`] and [`ViewResolution`].
//!
//! The engine is an opaque collaborator: it locates views and executes them.
//! The renderer never looks inside a view handle; it only invokes it against
//! a [`RenderContext`].

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::context::{ActionContext, RenderContext};

/// Fault raised by an engine while executing a resolved view.
pub type EngineError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An invocable view handle produced by view resolution.
#[async_trait]
pub trait View: Send + Sync {
    /// The path or name the engine resolved this view under.
    fn path(&self) -> &str;

    /// Execute the view, appending output to the context's sink.
    async fn render(&self, ctx: &mut RenderContext) -> Result<(), EngineError>;
}

/// Result of asking an engine to locate a view.
pub enum ViewResolution {
    /// The view was located; the handle is owned by the engine.
    Found(Arc<dyn View>),
    /// The view was not located; `searched` lists every probed location in
    /// probe order.
    NotFound { searched: Vec<String> },
}

impl ViewResolution {
    pub fn found(view: Arc<dyn View>) -> Self {
        ViewResolution::Found(view)
    }

    pub fn not_found(searched: Vec<String>) -> Self {
        ViewResolution::NotFound { searched }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ViewResolution::Found(_))
    }
}

impl std::fmt::Debug for ViewResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewResolution::Found(view) => {
                f.debug_tuple("Found").field(&view.path()).finish()
            }
            ViewResolution::NotFound { searched } => f
                .debug_struct("NotFound")
                .field("searched", searched)
                .finish(),
        }
    }
}

/// A template engine that can locate and execute views.
///
/// Shared across concurrent render calls; implementations must be reentrant.
pub trait ViewEngine: Send + Sync {
    /// Locate a named view by probing the engine's configured search
    /// locations, using the synthesized action context.
    fn find_view(&self, action: &ActionContext, name: &str, is_main_page: bool) -> ViewResolution;

    /// Locate a view given as a path, resolved against `base_path`.
    fn get_view(&self, base_path: &Path, name: &str, is_main_page: bool) -> ViewResolution;
}
