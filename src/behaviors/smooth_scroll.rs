use crate::platform::{ Document, Element, Viewport };

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorClick {
    pub prevent_default: bool,
    /// Absolute scroll position requested, if the target resolved.
    pub scrolled_to: Option<f64>,
}

pub struct SmoothScroll<D, V> {
    document: D,
    viewport: V,
    header_offset: f64,
}

impl<D: Document, V: Viewport> SmoothScroll<D, V> {
    pub fn new(document: D, viewport: V, header_offset: f64) -> Self {
        Self { document, viewport, header_offset }
    }

    pub fn intercepts(href: &str) -> bool {
        href.starts_with('#')
    }

    pub fn target_position(&self, target: &D::Element) -> f64 {
        target.viewport_top() + self.viewport.scroll_y() - self.header_offset
    }

    /// An unresolvable target still suppresses the jump and is not reported.
    pub fn on_anchor_click(&self, href: &str) -> AnchorClick {
        if !Self::intercepts(href) {
            return AnchorClick { prevent_default: false, scrolled_to: None };
        }
        let scrolled_to = self.document.query(href).map(|target| {
            let top = self.target_position(&target);
            self.viewport.smooth_scroll_to(top);
            top
        });
        AnchorClick { prevent_default: true, scrolled_to }
    }
}
