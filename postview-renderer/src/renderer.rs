//! The render pipeline — [`TemplateRenderer`].
//!
//! Each call synthesizes a fresh request/action context, resolves the
//! requested view, wires view data and temp data, and invokes the engine
//! against an in-memory sink. Calls are independent; the only shared state
//! is the injected collaborators, which must be reentrant.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, error, trace};

use postview_core::{
    ActionContext, HostingPaths, RenderContext, RequestShell, RouteData, ServiceResolver,
    TempDataProvider, ViewData, ViewEngine, ViewModel, ViewResolution,
};

use crate::error::RenderError;

/// File suffix that marks a view name as a direct template path.
pub const VIEW_EXTENSION: &str = ".tera";

/// Renders view templates to strings without a live HTTP request.
///
/// Stateless across calls. Collaborators are shared singletons; clone the
/// renderer freely or wrap it in an `Arc`.
#[derive(Clone)]
pub struct TemplateRenderer {
    engine: Arc<dyn ViewEngine>,
    services: Arc<dyn ServiceResolver>,
    temp_data: Arc<dyn TempDataProvider>,
    hosting: Arc<dyn HostingPaths>,
}

impl TemplateRenderer {
    pub fn new(
        engine: Arc<dyn ViewEngine>,
        services: Arc<dyn ServiceResolver>,
        temp_data: Arc<dyn TempDataProvider>,
        hosting: Arc<dyn HostingPaths>,
    ) -> Self {
        TemplateRenderer {
            engine,
            services,
            temp_data,
            hosting,
        }
    }

    /// Resolve `view_name` and render it against `view_model`, returning the
    /// captured output.
    ///
    /// `view_name` must be non-empty; classification reads its first
    /// character and suffix. Names starting with `~` or `/` resolve against
    /// the application root, names ending in [`VIEW_EXTENSION`]
    /// (case-insensitive) resolve as direct file paths, and anything else is
    /// searched through the engine's configured view locations. The prefix
    /// rule wins when both apply.
    ///
    /// `additional_data` is merged over the model's view data; on key
    /// collision the caller-supplied value wins.
    pub async fn render<T>(
        &self,
        route_data: &RouteData,
        view_name: &str,
        view_model: &T,
        additional_data: Option<ViewData>,
        is_main_page: bool,
    ) -> Result<String, RenderError>
    where
        T: ViewModel + Serialize,
    {
        debug_assert!(!view_name.is_empty(), "view_name must be non-empty");

        let mut request = RequestShell::new(self.services.clone());
        if let Some(path) = view_model.request_path() {
            debug!("view model carries a request path");
            trace!(host = %path.host, "overwriting request host");
            trace!(scheme = %path.scheme, "overwriting request scheme");
            trace!(path_base = %path.path_base, "overwriting request path base");
            request.host = path.host.clone();
            request.scheme = path.scheme.clone();
            request.path_base = path.path_base.clone();
        }
        let action = ActionContext::new(request, route_data.clone());

        let resolution = if is_application_relative(view_name) || is_extension_path(view_name) {
            let base = match self.hosting.web_root() {
                Some(web_root) => {
                    debug!(base = %web_root.display(), "resolving relative view against web root");
                    web_root
                }
                None => {
                    let content_root = self.hosting.content_root();
                    debug!(base = %content_root.display(), "resolving relative view against content root");
                    content_root
                }
            };
            self.engine.get_view(base, view_name, is_main_page)
        } else {
            debug!(view = view_name, "searching engine view locations");
            self.engine.find_view(&action, view_name, is_main_page)
        };

        let mut view_data = view_model.view_data().clone();
        if let Some(additional) = additional_data {
            debug!(count = additional.len(), "merging additional view data");
            for (key, value) in additional {
                view_data.insert(key, value);
            }
        }

        let temp_data = self.temp_data.load(&action.request);

        let view = match resolution {
            ViewResolution::Found(view) => view,
            ViewResolution::NotFound { searched } => {
                let err = RenderError::ViewNotFound {
                    view_name: view_name.to_string(),
                    searched,
                };
                error!("{err}");
                return Err(err);
            }
        };

        let model = serde_json::to_value(view_model)?;
        let mut ctx = RenderContext::new(action, model, view_data, temp_data);
        if let Err(source) = view.render(&mut ctx).await {
            error!(view = view_name, cause = %source, "template engine failure");
            return Err(RenderError::Engine {
                view_name: view_name.to_string(),
                source,
            });
        }

        Ok(ctx.into_output())
    }
}

/// A name rooted at the application base path: first char `~` or `/`.
fn is_application_relative(name: &str) -> bool {
    matches!(name.as_bytes().first(), Some(b'~') | Some(b'/'))
}

/// A name given as a direct file path: ends with the template suffix.
/// `./welcome.tera` looks like a searched name but the suffix makes it a
/// file path; the prefix check in the caller wins over this one.
fn is_extension_path(name: &str) -> bool {
    name.len() >= VIEW_EXTENSION.len()
        && name.as_bytes()[name.len() - VIEW_EXTENSION.len()..]
            .eq_ignore_ascii_case(VIEW_EXTENSION.as_bytes())
}
