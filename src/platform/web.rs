use futures::future::LocalBoxFuture;
use js_sys::{ Function, Promise, Reflect };
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{ JsCast, JsValue };
use wasm_bindgen_futures::JsFuture;
use web_sys::{ HtmlDocument, HtmlElement, HtmlTextAreaElement, ScrollBehavior, ScrollToOptions };

use crate::error::BehaviorError;
use crate::platform::{ Clipboard, ColorScheme, Document, Element, PreferenceStore, Scheduler, Viewport };

#[derive(Clone, Debug)]
pub struct WebElement(pub web_sys::Element);

impl Element for WebElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or_else(|_| self.has_class(class))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.0.set_attribute(name, value) {
            log::warn!("Failed to set attribute {}: {:?}", name, e);
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        if let Some(html) = self.0.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property(property, value);
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn viewport_top(&self) -> f64 {
        self.0.get_bounding_client_rect().top()
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        self.0
            .query_selector_all(selector)
            .map(|list| collect_elements(&list))
            .unwrap_or_default()
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(WebElement)
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<WebElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(WebElement)
        .collect()
}

#[derive(Clone, Debug)]
pub struct WebDocument(pub web_sys::Document);

impl WebDocument {
    /// `document.readyState`, read reflectively.
    pub fn ready_state(&self) -> String {
        Reflect::get(&self.0, &"readyState".into())
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn root(&self) -> Option<WebElement> {
        self.0.document_element().map(WebElement)
    }

    fn query(&self, selector: &str) -> Option<WebElement> {
        self.0.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn query_all(&self, selector: &str) -> Vec<WebElement> {
        self.0
            .query_selector_all(selector)
            .map(|list| collect_elements(&list))
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug)]
pub struct WebViewport(pub web_sys::Window);

impl Viewport for WebViewport {
    fn inner_width(&self) -> f64 {
        self.0
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_y(&self) -> f64 {
        self.0.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Clone, Debug)]
pub struct WebStorage(pub web_sys::Window);

impl WebStorage {
    fn storage(&self) -> Result<web_sys::Storage, BehaviorError> {
        self.0
            .local_storage()
            .map_err(|e| BehaviorError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| BehaviorError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for WebStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.storage().ok()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), BehaviorError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| BehaviorError::Storage(format!("{:?}", e)))
    }
}

#[derive(Clone, Debug)]
pub struct WebColorScheme {
    query: Option<web_sys::MediaQueryList>,
}

impl WebColorScheme {
    pub fn new(window: &web_sys::Window, media_query: &str) -> Self {
        Self {
            query: window.match_media(media_query).ok().flatten(),
        }
    }

    pub fn media_query_list(&self) -> Option<&web_sys::MediaQueryList> {
        self.query.as_ref()
    }
}

impl ColorScheme for WebColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(|query| query.matches())
    }
}

/// `navigator.clipboard` is feature-detected since it is missing outside secure contexts.
#[derive(Clone, Debug)]
pub struct WebClipboard {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebClipboard {
    pub fn new(window: web_sys::Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }

    fn write_text_promise(&self, text: &str) -> Result<Promise, BehaviorError> {
        let navigator = Reflect::get(&self.window, &"navigator".into())?;
        let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(BehaviorError::Clipboard("navigator.clipboard unavailable".to_string()));
        }
        let write_text = Reflect::get(&clipboard, &"writeText".into())?
            .dyn_into::<Function>()
            .map_err(|_| BehaviorError::Clipboard("writeText is not a function".to_string()))?;
        let promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))?
            .dyn_into::<Promise>()
            .map_err(|_| BehaviorError::Clipboard("writeText did not return a promise".to_string()))?;
        Ok(promise)
    }

    fn copy_through_text_field(&self, text: &str) -> Result<(), BehaviorError> {
        let body = self.document
            .body()
            .ok_or_else(|| BehaviorError::LegacyCopy("document has no body".to_string()))?;
        let field = self.document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| BehaviorError::LegacyCopy("textarea cast failed".to_string()))?;
        field.set_value(text);
        let style = field.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-9999px");
        body.append_child(&field)?;
        field.select();

        let copied = self.document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| BehaviorError::LegacyCopy("not an HTML document".to_string()))
            .and_then(|doc| doc.exec_command("copy").map_err(BehaviorError::from));
        field.remove();

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(BehaviorError::LegacyCopy("execCommand('copy') returned false".to_string())),
            Err(e) => Err(BehaviorError::LegacyCopy(e.to_string())),
        }
    }
}

impl Clipboard for WebClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), BehaviorError>> {
        Box::pin(async move {
            let promise = self.write_text_promise(text)?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| BehaviorError::Clipboard(format!("{:?}", e)))
        })
    }

    fn legacy_copy(&self, text: &str) -> Result<(), BehaviorError> {
        self.copy_through_text_field(text)
    }
}

/// Pending `setTimeout`; keeps its callback alive until fired or cancelled.
pub struct TimeoutHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

#[derive(Clone, Debug)]
pub struct WebScheduler(pub web_sys::Window);

impl Scheduler for WebScheduler {
    type Handle = Option<TimeoutHandle>;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        let callback: Closure<dyn FnMut()> = Closure::once(task);
        match
            self.0.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX)
            )
        {
            Ok(id) => Some(TimeoutHandle { id, _callback: callback }),
            Err(e) => {
                log::error!("Failed to schedule timeout: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            self.0.clear_timeout_with_handle(handle.id);
        }
    }
}
