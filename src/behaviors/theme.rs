use std::cell::RefCell;
use std::rc::Rc;

use crate::configs::ThemeConfig;
use crate::platform::{ ColorScheme, Document, Element, PreferenceStore };
use crate::utils::Theme;

/// Resolves, applies and persists the light/dark theme.
///
/// Resolution order is stored preference, then the OS color scheme, then
/// `ThemeConfig::default_theme`. The OS-derived value is never persisted;
/// only [`ThemeController::toggle`] writes to the store.
pub struct ThemeController<D, P, C> {
    document: D,
    store: P,
    scheme: C,
    config: ThemeConfig,
}

impl<D, P, C> ThemeController<D, P, C>
    where D: Document, P: PreferenceStore, C: ColorScheme
{
    pub fn new(document: D, store: P, scheme: C, config: ThemeConfig) -> Self {
        Self { document, store, scheme, config }
    }

    /// Explicit user choice, if one was stored and is valid.
    pub fn stored(&self) -> Option<Theme> {
        let value = self.store.load(&self.config.storage_key)?;
        match value.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme preference: {}", e);
                None
            }
        }
    }

    pub fn resolve_initial(&self) -> Theme {
        self.stored()
            .or_else(|| self.scheme.prefers_dark().map(Theme::from_prefers_dark))
            .unwrap_or(self.config.default_theme)
    }

    pub fn init(&self) -> Theme {
        let theme = self.resolve_initial();
        log::debug!("Initial theme: {}", theme.as_str());
        self.apply(theme);
        theme
    }

    /// Theme currently on the root element.
    pub fn current(&self) -> Theme {
        self.document
            .root()
            .and_then(|root| root.attribute(&self.config.attribute))
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| self.resolve_initial())
    }

    pub fn apply(&self, theme: Theme) {
        match self.document.root() {
            Some(root) => root.set_attribute(&self.config.attribute, theme.as_str()),
            None => log::warn!("Document has no root element, theme not applied"),
        }
        self.sync_icon(theme);
    }

    /// Returns false when the icon is not in the document (yet).
    pub fn sync_icon(&self, theme: Theme) -> bool {
        match self.document.query(&self.config.icon_selector) {
            Some(icon) => {
                icon.set_attribute("class", theme.icon_class());
                true
            }
            None => false,
        }
    }

    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        if let Err(e) = self.store.save(&self.config.storage_key, next.as_str()) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
        log::info!("Theme switched to {}", next.as_str());
        next
    }

    /// Follows an OS color-scheme change unless the user chose explicitly.
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        if self.stored().is_some() {
            log::debug!("OS color scheme changed, keeping stored preference");
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.apply(theme);
        Some(theme)
    }
}

thread_local! {
    static MOUNTED_TOGGLE: RefCell<Option<Rc<dyn Fn() -> Theme>>> = RefCell::new(None);
}

/// Makes `toggle` reachable from the page-level `toggleTheme()` export.
pub fn register_theme_toggle(toggle: Rc<dyn Fn() -> Theme>) {
    MOUNTED_TOGGLE.with(|slot| {
        *slot.borrow_mut() = Some(toggle);
    });
}

/// Runs the registered toggle; `None` until one is registered.
pub fn toggle_registered_theme() -> Option<Theme> {
    let toggle = MOUNTED_TOGGLE.with(|slot| slot.borrow().clone())?;
    Some(toggle())
}
