//! Service resolution handle threaded through the synthesized request.

use std::any::{Any, TypeId};
use std::sync::Arc;

/// Opaque handle to the application's service container.
///
/// The renderer never resolves anything itself; it only binds the handle to
/// the synthesized request shell so the engine (and templates that reach
/// back into it) can resolve what they need.
pub trait ServiceResolver: Send + Sync {
    fn resolve(&self, id: TypeId) -> Option<Arc<dyn Any + Send + Sync>>;
}

impl dyn ServiceResolver {
    /// Typed convenience over [`ServiceResolver::resolve`].
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.resolve(TypeId::of::<T>())
            .and_then(|svc| svc.downcast::<T>().ok())
    }
}

/// Resolver that holds no services. Suitable for templates that never reach
/// back into the container.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoServices;

impl ServiceResolver for NoServices {
    fn resolve(&self, _id: TypeId) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }
}
