pub mod application;
pub mod components;
pub mod contracts;
pub mod icon;
pub mod id;
pub mod loader;
pub mod motion;
pub mod prelude;
pub mod provider;
pub mod theme;
pub mod tokens;
pub mod widgets;

pub use application::MellowApplication;
pub use loader::ImageLoaderConfig;
pub use provider::{MellowProvider, ThemeMode};
pub use theme::{LocalTheme, Theme};

#[cfg(test)]
mod test_public_api;
