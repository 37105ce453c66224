use std::cell::RefCell;
use std::rc::Rc;

use crate::configs::CopyConfig;
use crate::error::BehaviorError;
use crate::platform::{ Clipboard, Document, Element, Scheduler };

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyMethod {
    Clipboard,
    Legacy,
}

/// A `.copy-btn` that copies the contact email and flashes a "copied" state.
///
/// The button owns its pending revert: feedback from a new click cancels the
/// previous timer, and the label always reverts to the text captured when the
/// button was attached.
pub struct CopyButton<E, C, S: Scheduler> {
    button: E,
    label: Option<E>,
    original_label: String,
    clipboard: Rc<C>,
    scheduler: Rc<S>,
    pending_revert: RefCell<Option<S::Handle>>,
    config: Rc<CopyConfig>,
}

impl<E, C, S> CopyButton<E, C, S> where E: Element, C: Clipboard, S: Scheduler {
    pub fn attach_all<D>(
        document: &D,
        clipboard: Rc<C>,
        scheduler: Rc<S>,
        config: CopyConfig
    ) -> Vec<Rc<Self>>
        where D: Document<Element = E>
    {
        let config = Rc::new(config);
        document
            .query_all(&config.button_selector)
            .into_iter()
            .map(|button| {
                let label = button.find(&config.label_selector);
                if label.is_none() {
                    log::debug!("Copy button without {}", config.label_selector);
                }
                let original_label = label
                    .as_ref()
                    .map(|label| label.text())
                    .unwrap_or_default();
                Rc::new(Self {
                    button,
                    label,
                    original_label,
                    clipboard: clipboard.clone(),
                    scheduler: scheduler.clone(),
                    pending_revert: RefCell::new(None),
                    config: config.clone(),
                })
            })
            .collect()
    }

    pub fn button(&self) -> &E {
        &self.button
    }

    /// Copies the email, falling back to the legacy path when the Clipboard API fails.
    pub async fn copy(&self) -> Result<CopyMethod, BehaviorError> {
        let email = self.config.email.as_str();
        let method = match self.clipboard.write_text(email).await {
            Ok(()) => CopyMethod::Clipboard,
            Err(e) => {
                log::warn!("Clipboard write failed, using fallback: {}", e);
                if let Err(e) = self.clipboard.legacy_copy(email) {
                    log::error!("Failed to copy email: {}", e);
                    return Err(e);
                }
                CopyMethod::Legacy
            }
        };
        self.show_feedback();
        Ok(method)
    }

    fn show_feedback(&self) {
        if let Some(previous) = self.pending_revert.borrow_mut().take() {
            // Stale handles from already-fired timers are harmless to cancel.
            self.scheduler.cancel(previous);
        }

        self.button.add_class(&self.config.copied_class);
        if let Some(label) = &self.label {
            label.set_text(&self.config.copied_label);
        }

        let button = self.button.clone();
        let label = self.label.clone();
        let original = self.original_label.clone();
        let config = self.config.clone();
        let handle = self.scheduler.schedule(
            self.config.feedback_ms,
            Box::new(move || {
                button.remove_class(&config.copied_class);
                if let Some(label) = label {
                    label.set_text(&original);
                }
            })
        );
        *self.pending_revert.borrow_mut() = Some(handle);
    }
}
