//! Temp-data: a short-lived, request-scoped key/value store templates may
//! read during rendering.

use indexmap::IndexMap;
use serde_json::Value;

use crate::context::RequestShell;

/// One render call's temp-data container.
pub type TempData = IndexMap<String, Value>;

/// Builds the temp-data container for a synthesized request.
///
/// Shared across concurrent render calls; implementations must be reentrant.
pub trait TempDataProvider: Send + Sync {
    fn load(&self, request: &RequestShell) -> TempData;
}

/// Provider that always yields an empty container.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTempData;

impl TempDataProvider for NoTempData {
    fn load(&self, _request: &RequestShell) -> TempData {
        TempData::new()
    }
}
