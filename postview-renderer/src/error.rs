//! Error types for postview-renderer.

use postview_core::EngineError;
use thiserror::Error;

/// All errors a render call can report.
///
/// Resolution failures and engine failures are the two classified kinds a
/// caller is expected to branch on; `Context` is the escape hatch for faults
/// during context synthesis and carries no classification.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The view could not be located by either resolution strategy. The
    /// message enumerates every searched location, one per line, in the
    /// order the engine probed them.
    #[error(
        "failed to render template {view_name} because it was not found; \
         the following locations were searched:\n{}",
        .searched.join("\n")
    )]
    ViewNotFound {
        view_name: String,
        searched: Vec<String>,
    },

    /// The view was located but the engine faulted while producing output.
    #[error("failed to render template {view_name} due to an engine failure")]
    Engine {
        view_name: String,
        #[source]
        source: EngineError,
    },

    /// The view model could not be serialized while building the render
    /// context.
    #[error("failed to serialize view model: {0}")]
    Context(#[from] serde_json::Error),
}
