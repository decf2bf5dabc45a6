//! Synthesized per-call request and render state.
//!
//! Nothing here survives a render call: one [`RequestShell`], one
//! [`ActionContext`] and one [`RenderContext`] are built per call and
//! dropped when it returns. None of it is pooled or shared.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::services::ServiceResolver;
use crate::tempdata::TempData;
use crate::types::{RouteData, ViewData};

/// Fabricated request standing in for the live HTTP request the engine
/// normally renders against.
#[derive(Clone)]
pub struct RequestShell {
    pub host: String,
    pub scheme: String,
    pub path_base: String,
    services: Arc<dyn ServiceResolver>,
}

impl RequestShell {
    /// Fresh shell with default host/scheme and an empty path base.
    pub fn new(services: Arc<dyn ServiceResolver>) -> Self {
        RequestShell {
            host: "localhost".to_string(),
            scheme: "http".to_string(),
            path_base: String::new(),
            services,
        }
    }

    /// The service-resolution handle bound to this request.
    pub fn services(&self) -> &Arc<dyn ServiceResolver> {
        &self.services
    }
}

impl fmt::Debug for RequestShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestShell")
            .field("host", &self.host)
            .field("scheme", &self.scheme)
            .field("path_base", &self.path_base)
            .finish_non_exhaustive()
    }
}

/// Fabricated action descriptor; its route-value map is a stringified copy
/// of the caller's route data.
#[derive(Debug, Clone, Default)]
pub struct ActionDescriptor {
    pub route_values: IndexMap<String, String>,
}

impl ActionDescriptor {
    pub fn from_route_data(route_data: &RouteData) -> Self {
        ActionDescriptor {
            route_values: route_data.to_display_strings(),
        }
    }
}

/// Everything the engine may read while locating a named view.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub request: RequestShell,
    pub route_data: RouteData,
    pub descriptor: ActionDescriptor,
}

impl ActionContext {
    pub fn new(request: RequestShell, route_data: RouteData) -> Self {
        let descriptor = ActionDescriptor::from_route_data(&route_data);
        ActionContext {
            request,
            route_data,
            descriptor,
        }
    }
}

/// Everything the resolved view renders against, plus the in-memory sink
/// that captures its output.
#[derive(Debug)]
pub struct RenderContext {
    pub action: ActionContext,
    /// The serialized view model.
    pub model: Value,
    /// View data merged from the model and caller-supplied overrides.
    pub view_data: ViewData,
    pub temp_data: TempData,
    sink: String,
}

impl RenderContext {
    pub fn new(
        action: ActionContext,
        model: Value,
        view_data: ViewData,
        temp_data: TempData,
    ) -> Self {
        RenderContext {
            action,
            model,
            view_data,
            temp_data,
            sink: String::new(),
        }
    }

    /// The output sink. Views append rendered text here.
    pub fn sink_mut(&mut self) -> &mut String {
        &mut self.sink
    }

    /// Consume the context, yielding the captured output.
    pub fn into_output(self) -> String {
        self.sink
    }
}
