use crate::configs::NavigationConfig;
use crate::platform::{ Document, Element, Viewport };

/// Inline styles for the three hamburger bars, closed then open.
const BAR_STYLES: [(&str, &str, &str); 3] = [
    ("transform", "none", "rotate(45deg) translate(5px, 5px)"),
    ("opacity", "1", "0"),
    ("transform", "none", "rotate(-45deg) translate(7px, -6px)"),
];

/// Mobile menu: open/closed lives only in the nav's `active` class.
pub struct NavigationController<E, V> {
    nav: E,
    toggle: Option<E>,
    viewport: V,
    config: NavigationConfig,
}

impl<E: Element, V: Viewport> NavigationController<E, V> {
    /// `None` when the page has no nav container.
    pub fn attach<D>(document: &D, viewport: V, config: NavigationConfig) -> Option<Self>
        where D: Document<Element = E>
    {
        let nav = document.query(&config.nav_selector)?;
        let toggle = document.query(&config.toggle_selector);
        if toggle.is_none() {
            log::debug!("{} not found, menu toggle disabled", config.toggle_selector);
        }
        Some(Self { nav, toggle, viewport, config })
    }

    pub fn toggle_button(&self) -> Option<&E> {
        self.toggle.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.nav.has_class(&self.config.active_class)
    }

    /// Returns the new open state.
    pub fn toggle(&self) -> bool {
        let open = self.nav.toggle_class(&self.config.active_class);
        self.render_icon(open);
        open
    }

    /// Closes the menu on mobile widths. Returns whether the width qualified.
    pub fn on_link_click(&self) -> bool {
        if self.viewport.inner_width() > self.config.mobile_breakpoint {
            return false;
        }
        self.nav.remove_class(&self.config.active_class);
        self.render_icon(false);
        true
    }

    fn render_icon(&self, open: bool) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let bars = toggle.find_all(&self.config.bar_selector);
        for (bar, (property, closed, opened)) in bars.iter().zip(BAR_STYLES) {
            bar.set_style(property, if open { opened } else { closed });
        }
    }
}
