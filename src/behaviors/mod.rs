mod clipboard_copy;
mod fade_in;
mod header_shadow;
mod navigation;
mod smooth_scroll;
mod theme;

pub use clipboard_copy::{ CopyButton, CopyMethod };
pub use fade_in::FadeIn;
pub use header_shadow::{ shadow_for, HeaderShadow };
pub use navigation::NavigationController;
pub use smooth_scroll::{ AnchorClick, SmoothScroll };
pub use theme::{ register_theme_toggle, toggle_registered_theme, ThemeController };
