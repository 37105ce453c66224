use std::cell::{ Cell, RefCell };
use std::collections::{ BTreeSet, HashMap };
use std::rc::Rc;

use futures::future::{ self, FutureExt, LocalBoxFuture };

use crate::error::BehaviorError;
use crate::platform::{ Clipboard, ColorScheme, Document, Element, PreferenceStore, Scheduler, Viewport };

#[derive(Default)]
struct Node {
    selectors: Vec<String>,
    classes: BTreeSet<String>,
    attributes: HashMap<String, String>,
    styles: HashMap<String, String>,
    text: String,
    top: f64,
    children: Vec<FakeElement>,
}

/// In-memory element. Selectors are matched literally against the ones it was tagged with.
#[derive(Clone, Default)]
pub struct FakeElement(Rc<RefCell<Node>>);

impl FakeElement {
    pub fn new(selector: &str) -> Self {
        Self::default().matching(selector)
    }

    pub fn matching(self, selector: &str) -> Self {
        self.0.borrow_mut().selectors.push(selector.to_string());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.0.borrow_mut().text = text.to_string();
        self
    }

    pub fn with_top(self, top: f64) -> Self {
        self.0.borrow_mut().top = top;
        self
    }

    pub fn with_child(self, child: FakeElement) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.0.borrow().styles.get(property).cloned()
    }

    fn matches(&self, selector: &str) -> bool {
        self.0.borrow().selectors.iter().any(|s| s == selector)
    }
}

impl Element for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.borrow_mut().classes.insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.remove(class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        let mut node = self.0.borrow_mut();
        if node.classes.remove(class) {
            false
        } else {
            node.classes.insert(class.to_string());
            true
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attributes.insert(name.to_string(), value.to_string());
    }

    fn set_style(&self, property: &str, value: &str) {
        self.0.borrow_mut().styles.insert(property.to_string(), value.to_string());
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn viewport_top(&self) -> f64 {
        self.0.borrow().top
    }

    fn find_all(&self, selector: &str) -> Vec<Self> {
        self.0
            .borrow()
            .children.iter()
            .filter(|child| child.matches(selector))
            .cloned()
            .collect()
    }
}

#[derive(Clone)]
pub struct FakeDocument {
    root: Option<FakeElement>,
    elements: Rc<RefCell<Vec<FakeElement>>>,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self {
            root: Some(FakeElement::new("html")),
            elements: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn without_root() -> Self {
        Self { root: None, ..Self::new() }
    }

    /// Registers an element and hands back a handle to it.
    pub fn add(&self, element: FakeElement) -> FakeElement {
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn html(&self) -> FakeElement {
        self.root.clone().expect("fake document has a root")
    }
}

impl Document for FakeDocument {
    type Element = FakeElement;

    fn root(&self) -> Option<FakeElement> {
        self.root.clone()
    }

    fn query(&self, selector: &str) -> Option<FakeElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<FakeElement> {
        self.elements
            .borrow()
            .iter()
            .filter(|element| element.matches(selector))
            .cloned()
            .collect()
    }
}

#[derive(Clone, Default)]
pub struct FakeViewport {
    width: Rc<Cell<f64>>,
    scroll_y: Rc<Cell<f64>>,
    scrolls: Rc<RefCell<Vec<f64>>>,
}

impl FakeViewport {
    pub fn new(width: f64) -> Self {
        let viewport = Self::default();
        viewport.width.set(width);
        viewport
    }

    pub fn set_width(&self, width: f64) {
        self.width.set(width);
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.scroll_y.set(scroll_y);
    }

    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn inner_width(&self) -> f64 {
        self.width.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }
}

#[derive(Clone, Default)]
pub struct FakeStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl FakeStorage {
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn fail_writes(&self) {
        self.fail_writes.set(true);
    }
}

impl PreferenceStore for FakeStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), BehaviorError> {
        if self.fail_writes.get() {
            return Err(BehaviorError::Storage("quota exceeded".to_string()));
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct FakeColorScheme(Rc<Cell<Option<bool>>>);

impl FakeColorScheme {
    pub fn prefers(dark: bool) -> Self {
        Self(Rc::new(Cell::new(Some(dark))))
    }

    pub fn unsupported() -> Self {
        Self::default()
    }
}

impl ColorScheme for FakeColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0.get()
    }
}

pub struct FakeClipboard {
    api_works: bool,
    legacy_works: bool,
    pub written: RefCell<Vec<String>>,
    pub legacy_written: RefCell<Vec<String>>,
}

impl FakeClipboard {
    pub fn new(api_works: bool, legacy_works: bool) -> Rc<Self> {
        Rc::new(Self {
            api_works,
            legacy_works,
            written: RefCell::new(Vec::new()),
            legacy_written: RefCell::new(Vec::new()),
        })
    }
}

impl Clipboard for FakeClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), BehaviorError>> {
        let result = if self.api_works {
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        } else {
            Err(BehaviorError::Clipboard("NotAllowedError".to_string()))
        };
        future::ready(result).boxed_local()
    }

    fn legacy_copy(&self, text: &str) -> Result<(), BehaviorError> {
        if !self.legacy_works {
            return Err(BehaviorError::LegacyCopy("execCommand('copy') returned false".to_string()));
        }
        self.legacy_written.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct Timer {
    id: u32,
    due: u32,
    task: Box<dyn FnOnce()>,
}

/// Manual clock: tasks run only when [`FakeScheduler::advance`] passes their deadline.
#[derive(Default)]
pub struct FakeScheduler {
    now: Cell<u32>,
    next_id: Cell<u32>,
    timers: RefCell<Vec<Timer>>,
}

impl FakeScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn advance(&self, ms: u32) {
        let now = self.now.get() + ms;
        self.now.set(now);
        let (mut due, pending): (Vec<_>, Vec<_>) = self.timers
            .borrow_mut()
            .drain(..)
            .partition(|timer| timer.due <= now);
        *self.timers.borrow_mut() = pending;
        due.sort_by_key(|timer| timer.due);
        for timer in due {
            (timer.task)();
        }
    }

    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }
}

impl Scheduler for FakeScheduler {
    type Handle = u32;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.timers.borrow_mut().push(Timer { id, due: self.now.get() + delay_ms, task });
        id
    }

    fn cancel(&self, handle: u32) {
        self.timers.borrow_mut().retain(|timer| timer.id != handle);
    }
}
