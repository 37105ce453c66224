use crate::configs::HeaderConfig;
use crate::platform::{ Document, Element, Viewport };

pub fn shadow_for(scroll_y: f64, config: &HeaderConfig) -> &str {
    if scroll_y > config.threshold { config.raised_shadow.as_str() } else { config.resting_shadow.as_str() }
}

pub struct HeaderShadow<E, V> {
    header: E,
    viewport: V,
    config: HeaderConfig,
}

impl<E: Element, V: Viewport> HeaderShadow<E, V> {
    pub fn attach<D>(document: &D, viewport: V, config: HeaderConfig) -> Option<Self>
        where D: Document<Element = E>
    {
        let header = document.query(&config.selector)?;
        Some(Self { header, viewport, config })
    }

    pub fn on_scroll(&self) {
        let shadow = shadow_for(self.viewport.scroll_y(), &self.config);
        self.header.set_style("box-shadow", shadow);
    }
}
