use serde::{ Deserialize, Serialize };
use crate::error::BehaviorError;
use crate::utils::Theme;

/// Every selector, constant and literal the behaviors depend on.
///
/// Each section is `#[serde(default)]`, so a JSON override only needs the
/// fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: String,
    pub theme: ThemeConfig,
    pub navigation: NavigationConfig,
    pub scroll: ScrollConfig,
    pub header: HeaderConfig,
    pub fade_in: FadeInConfig,
    pub copy: CopyConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme: ThemeConfig::default(),
            navigation: NavigationConfig::default(),
            scroll: ScrollConfig::default(),
            header: HeaderConfig::default(),
            fade_in: FadeInConfig::default(),
            copy: CopyConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, BehaviorError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub icon_selector: String,
    pub toggle_selector: String,
    pub dark_media_query: String,
    pub default_theme: Theme,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            attribute: "data-theme".to_string(),
            icon_selector: "#theme-icon".to_string(),
            toggle_selector: ".theme-toggle".to_string(),
            dark_media_query: "(prefers-color-scheme: dark)".to_string(),
            default_theme: Theme::Light,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub toggle_selector: String,
    pub nav_selector: String,
    pub link_selector: String,
    pub bar_selector: String,
    pub active_class: String,
    pub mobile_breakpoint: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            toggle_selector: ".mobile-menu-toggle".to_string(),
            nav_selector: ".nav".to_string(),
            link_selector: ".nav a".to_string(),
            bar_selector: "span".to_string(),
            active_class: "active".to_string(),
            mobile_breakpoint: 768.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    pub anchor_selector: String,
    /// Height of the fixed header; must match the stylesheet.
    pub header_offset: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            anchor_selector: "a[href^=\"#\"]".to_string(),
            header_offset: 80.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub selector: String,
    pub threshold: f64,
    pub raised_shadow: String,
    pub resting_shadow: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            selector: ".header".to_string(),
            threshold: 100.0,
            raised_shadow: "0 4px 12px rgba(0, 0, 0, 0.15)".to_string(),
            resting_shadow: "0 2px 4px rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeInConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub root_margin: String,
    pub offset_px: f64,
    pub duration_secs: f64,
}

impl Default for FadeInConfig {
    fn default() -> Self {
        Self {
            selectors: vec![
                ".solucao-card".to_string(),
                ".membro-card".to_string(),
                ".info-item".to_string()
            ],
            threshold: 0.1,
            root_margin: "0px 0px -100px 0px".to_string(),
            offset_px: 20.0,
            duration_secs: 0.6,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub button_selector: String,
    pub label_selector: String,
    pub email: String,
    pub copied_class: String,
    pub copied_label: String,
    pub feedback_ms: u32,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            button_selector: ".copy-btn".to_string(),
            label_selector: ".copy-text".to_string(),
            email: "contato@empresa.com.br".to_string(),
            copied_class: "copied".to_string(),
            copied_label: "Copiado!".to_string(),
            feedback_ms: 2000,
        }
    }
}
