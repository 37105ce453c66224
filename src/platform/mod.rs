//! Browser capabilities the behaviors depend on.
//!
//! Controllers are generic over these traits; [`web`] implements them with
//! `web-sys` and the test tree implements them in memory.

use futures::future::LocalBoxFuture;
use crate::error::BehaviorError;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Handle to a single DOM element. Clones refer to the same node.
pub trait Element: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn set_style(&self, property: &str, value: &str);
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    /// Top edge relative to the viewport, in CSS pixels.
    fn viewport_top(&self) -> f64;
    fn find_all(&self, selector: &str) -> Vec<Self>;

    fn find(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }
}

pub trait Document: Clone + 'static {
    type Element: Element;

    /// The `<html>` element.
    fn root(&self) -> Option<Self::Element>;
    /// `None` both when nothing matches and when the selector is rejected.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;
}

pub trait Viewport: 'static {
    fn inner_width(&self) -> f64;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);
}

/// Per-origin key-value store holding the theme preference.
pub trait PreferenceStore: 'static {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), BehaviorError>;
}

pub trait ColorScheme: 'static {
    /// `None` when the host cannot answer the media query.
    fn prefers_dark(&self) -> Option<bool>;
}

pub trait Clipboard: 'static {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), BehaviorError>>;
    /// Select-and-copy through a temporary text field.
    fn legacy_copy(&self, text: &str) -> Result<(), BehaviorError>;
}

pub trait Scheduler: 'static {
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
    fn cancel(&self, handle: Self::Handle);
}
