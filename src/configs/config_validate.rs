use crate::configs::SiteConfig;
use crate::error::BehaviorError;
use crate::platform::{ Document, Element };

/// Id of the optional `<script type="application/json">` carrying overrides.
pub const CONFIG_ELEMENT_SELECTOR: &str = "#site-config";

/// Largest delay `setTimeout` honours; longer ones overflow and fire at once.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// CSS margin shorthand as IntersectionObserver accepts it: 1 to 4 `px` or `%` lengths.
fn is_valid_root_margin(margin: &str) -> bool {
    let tokens: Vec<&str> = margin.split_whitespace().collect();
    (1..=4).contains(&tokens.len()) &&
        tokens.iter().all(|token| {
            let number = token
                .strip_suffix("px")
                .or_else(|| token.strip_suffix('%'));
            number.map_or(false, |n| n.parse::<f64>().is_ok())
        })
}

impl SiteConfig {
    pub fn validate(&self) -> Result<(), BehaviorError> {
        if self.navigation.mobile_breakpoint <= 0.0 {
            return Err(BehaviorError::Config("navigation.mobile_breakpoint must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.fade_in.threshold) {
            return Err(
                BehaviorError::Config(
                    format!("fade_in.threshold {} is outside 0..=1", self.fade_in.threshold)
                )
            );
        }
        if !is_valid_root_margin(&self.fade_in.root_margin) {
            return Err(
                BehaviorError::Config(
                    format!("fade_in.root_margin '{}' is not a px/% margin", self.fade_in.root_margin)
                )
            );
        }
        if self.copy.feedback_ms == 0 || self.copy.feedback_ms > MAX_TIMEOUT_MS {
            return Err(
                BehaviorError::Config(format!("copy.feedback_ms must be within 1..={}", MAX_TIMEOUT_MS))
            );
        }
        if self.copy.email.trim().is_empty() {
            return Err(BehaviorError::Config("copy.email is empty".into()));
        }
        if self.theme.storage_key.is_empty() {
            return Err(BehaviorError::Config("theme.storage_key is empty".into()));
        }
        Ok(())
    }
}

/// Read overrides from the page, falling back to defaults when absent or invalid.
pub fn load<D: Document>(document: &D) -> SiteConfig {
    let Some(element) = document.query(CONFIG_ELEMENT_SELECTOR) else {
        log::debug!("{} not present, using default config", CONFIG_ELEMENT_SELECTOR);
        return SiteConfig::default();
    };

    match SiteConfig::from_json(&element.text()) {
        Ok(config) => {
            log::info!("Loaded site config from {}", CONFIG_ELEMENT_SELECTOR);
            config
        }
        Err(e) => {
            log::warn!("Ignoring {}: {}, using default config", CONFIG_ELEMENT_SELECTOR, e);
            SiteConfig::default()
        }
    }
}
