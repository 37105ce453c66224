mod config_validate;
mod site_config;

pub use config_validate::{ load, MAX_TIMEOUT_MS };
pub use site_config::{
    CopyConfig,
    FadeInConfig,
    HeaderConfig,
    NavigationConfig,
    ScrollConfig,
    SiteConfig,
    ThemeConfig,
};
