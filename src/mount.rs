use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::{ wasm_bindgen, Closure };
use wasm_bindgen::{ JsCast, JsValue };
use web_sys::{
    Event,
    EventTarget,
    IntersectionObserver,
    IntersectionObserverEntry,
    IntersectionObserverInit,
    MediaQueryListEvent,
};

use crate::behaviors::{
    register_theme_toggle,
    toggle_registered_theme,
    CopyButton,
    FadeIn,
    HeaderShadow,
    NavigationController,
    SmoothScroll,
    ThemeController,
};
use crate::configs::{ self, SiteConfig };
use crate::error::BehaviorError;
use crate::platform::web::{
    WebClipboard,
    WebColorScheme,
    WebDocument,
    WebElement,
    WebScheduler,
    WebStorage,
    WebViewport,
};
use crate::platform::{ Document, Element };

type WebTheme = ThemeController<WebDocument, WebStorage, WebColorScheme>;

/// Listeners live as long as the page, so their closures are leaked.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        log::error!("Failed to listen for {}: {:?}", event, e);
        return;
    }
    callback.forget();
}

fn when_ready(document: &WebDocument, task: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        task();
        return;
    }
    let callback: Closure<dyn FnMut()> = Closure::once(task);
    if let Err(e) = document.0.add_event_listener_with_callback(
        "DOMContentLoaded",
        callback.as_ref().unchecked_ref()
    ) {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
        return;
    }
    callback.forget();
}

/// Applies the theme immediately and wires every other behavior once the DOM is ready.
pub fn mount() -> Result<(), BehaviorError> {
    let window = web_sys::window().ok_or_else(|| BehaviorError::Dom("no window".to_string()))?;
    let document = window.document().ok_or_else(|| BehaviorError::Dom("no document".to_string()))?;
    let dom = WebDocument(document.clone());

    let config = configs::load(&dom);
    log::set_max_level(config.log_level().to_level_filter());

    let scheme = WebColorScheme::new(&window, &config.theme.dark_media_query);
    let theme = Rc::new(
        ThemeController::new(dom.clone(), WebStorage(window.clone()), scheme.clone(), config.theme.clone())
    );
    theme.init();
    watch_color_scheme(&scheme, theme.clone());
    let toggle = theme.clone();
    register_theme_toggle(Rc::new(move || toggle.toggle()));

    let ready_dom = dom.clone();
    when_ready(&dom, move || {
        theme.sync_icon(theme.current());
        wire_theme_toggle(&ready_dom, &config, theme);
        wire_navigation(&ready_dom, &window, &config);
        wire_smooth_scroll(&ready_dom, &window, &config);
        wire_header_shadow(&ready_dom, &window, &config);
        if let Err(e) = wire_fade_in(&ready_dom, &config) {
            log::warn!("Fade-in disabled: {}", e);
        }
        wire_copy_buttons(&ready_dom, &window, &config);
        log::info!("Site behaviors mounted");
    });
    Ok(())
}

fn watch_color_scheme(scheme: &WebColorScheme, theme: Rc<WebTheme>) {
    let Some(query) = scheme.media_query_list() else {
        log::debug!("matchMedia unavailable, not following OS color scheme");
        return;
    };
    listen(query, "change", move |event| {
        if let Some(event) = event.dyn_ref::<MediaQueryListEvent>() {
            theme.on_system_change(event.matches());
        }
    });
}

/// Page-level entry for markup that calls `toggleTheme()` from an inline handler.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() {
    if toggle_registered_theme().is_none() {
        log::warn!("toggleTheme called before the site behaviors were mounted");
    }
}

fn wire_theme_toggle(dom: &WebDocument, config: &SiteConfig, theme: Rc<WebTheme>) {
    for trigger in dom.query_all(&config.theme.toggle_selector) {
        let theme = theme.clone();
        listen(&trigger.0, "click", move |_| {
            theme.toggle();
        });
    }
}

fn wire_navigation(dom: &WebDocument, window: &web_sys::Window, config: &SiteConfig) {
    let Some(nav) = NavigationController::attach(
        dom,
        WebViewport(window.clone()),
        config.navigation.clone()
    ) else {
        log::debug!("{} not found, navigation not wired", config.navigation.nav_selector);
        return;
    };
    let nav = Rc::new(nav);

    if let Some(toggle) = nav.toggle_button() {
        let nav = nav.clone();
        listen(&toggle.0, "click", move |_| {
            nav.toggle();
        });
    }
    for link in dom.query_all(&config.navigation.link_selector) {
        let nav = nav.clone();
        listen(&link.0, "click", move |_| {
            nav.on_link_click();
        });
    }
}

fn wire_smooth_scroll(dom: &WebDocument, window: &web_sys::Window, config: &SiteConfig) {
    let scroll = Rc::new(
        SmoothScroll::new(dom.clone(), WebViewport(window.clone()), config.scroll.header_offset)
    );
    for anchor in dom.query_all(&config.scroll.anchor_selector) {
        let scroll = scroll.clone();
        let href_source = anchor.clone();
        listen(&anchor.0, "click", move |event| {
            let href = href_source.attribute("href").unwrap_or_default();
            if scroll.on_anchor_click(&href).prevent_default {
                event.prevent_default();
            }
        });
    }
}

fn wire_header_shadow(dom: &WebDocument, window: &web_sys::Window, config: &SiteConfig) {
    let Some(header) = HeaderShadow::attach(dom, WebViewport(window.clone()), config.header.clone()) else {
        log::debug!("{} not found, header shadow not wired", config.header.selector);
        return;
    };
    header.on_scroll();
    listen(window, "scroll", move |_| header.on_scroll());
}

fn wire_fade_in(dom: &WebDocument, config: &SiteConfig) -> Result<(), BehaviorError> {
    let fade_in = Rc::new(FadeIn::new(config.fade_in.clone()));

    let handler = fade_in.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            handler.on_intersection(
                entries.iter().map(|entry| {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    (WebElement(entry.target()), entry.is_intersecting())
                })
            );
        }
    );

    // Cards are only hidden once an observer exists to reveal them.
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(fade_in.config().threshold));
    options.set_root_margin(&fade_in.config().root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let cards = fade_in.prepare(dom);
    if cards.is_empty() {
        observer.disconnect();
        return Ok(());
    }
    callback.forget();
    for card in &cards {
        observer.observe(&card.0);
    }
    Ok(())
}

fn wire_copy_buttons(dom: &WebDocument, window: &web_sys::Window, config: &SiteConfig) {
    let clipboard = Rc::new(WebClipboard::new(window.clone(), dom.0.clone()));
    let scheduler = Rc::new(WebScheduler(window.clone()));
    for button in CopyButton::attach_all(dom, clipboard, scheduler, config.copy.clone()) {
        let target = button.button().0.clone();
        listen(&target, "click", move |_| {
            let button = button.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // Failures are already logged by the button.
                let _ = button.copy().await;
            });
        });
    }
}
