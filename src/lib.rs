//! Interactive behaviors for the static marketing site: theme toggle,
//! mobile navigation, smooth anchor scrolling, header shadow, card fade-in
//! and the copy-email button.

pub mod behaviors;
pub mod configs;
pub mod error;
pub mod platform;
pub mod utils;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(test)]
mod tests;

pub use crate::configs::SiteConfig;
pub use crate::error::BehaviorError;
pub use crate::utils::Theme;
#[cfg(target_arch = "wasm32")]
pub use crate::mount::{ mount, toggle_theme };
