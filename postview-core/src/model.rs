//! The view-model capability.

use crate::types::{RequestPath, ViewData};

/// Capability a concrete view model must expose to the renderer.
///
/// A view model is the data bound to a template. The renderer reads exactly
/// two things from it: the optional request metadata used to synthesize the
/// request shell, and the embedded view-data map merged into the render
/// context. Concrete models also implement [`serde::Serialize`] so the
/// engine can bind their fields.
///
/// The renderer never mutates a view model.
pub trait ViewModel {
    /// Request metadata to stamp onto the synthesized request shell, if any.
    fn request_path(&self) -> Option<&RequestPath>;

    /// The model's embedded view-data map.
    fn view_data(&self) -> &ViewData;
}

impl<T: ViewModel + ?Sized> ViewModel for &T {
    fn request_path(&self) -> Option<&RequestPath> {
        (**self).request_path()
    }

    fn view_data(&self) -> &ViewData {
        (**self).view_data()
    }
}
