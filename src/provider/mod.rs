use std::sync::Arc;

use gpui::SharedString;

use crate::loader::ImageLoaderConfig;
use crate::theme::{Appearance, Theme};

/// How the provider picks the color scheme at install time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Sample the host's appearance once per activation.
    #[default]
    System,
}

impl ThemeMode {
    pub fn resolve(self, system: Appearance) -> Appearance {
        match self {
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
            Self::System => system,
        }
    }
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<Theme>,
    loader: ImageLoaderConfig,
    font_family: Option<SharedString>,
}

impl gpui::Global for ProviderGlobal {}

/// Installs the ambient theme scope. Built once, installed into the `App`;
/// descendants read it through `LocalTheme` or the static accessors. A second
/// `install` replaces the previous configuration (full rebuild, the only way
/// the active theme ever changes).
#[derive(Clone, Default)]
pub struct MellowProvider {
    mode: ThemeMode,
    explicit_theme: Option<Theme>,
    font_family: Option<SharedString>,
    loader: Option<ImageLoaderConfig>,
}

impl MellowProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: ThemeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use an exact theme instead of resolving one from the mode.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.explicit_theme = Some(theme);
        self
    }

    /// Font family applied across the whole type scale.
    pub fn font_family(mut self, family: impl Into<SharedString>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn image_loader(mut self, config: ImageLoaderConfig) -> Self {
        self.loader = Some(config);
        self
    }

    fn resolve_theme(&self, cx: &gpui::App) -> Theme {
        let mut theme = match &self.explicit_theme {
            Some(theme) => theme.clone(),
            None => Theme::for_appearance(self.mode.resolve(system_appearance(cx))),
        };
        if let Some(family) = &self.font_family {
            theme = theme.with_font_family(family.clone());
        }
        theme
    }

    pub fn install(self, cx: &mut gpui::App) {
        let theme = Arc::new(self.resolve_theme(cx));
        let loader = self.loader.unwrap_or_default();
        cx.set_global(ProviderGlobal {
            theme,
            loader,
            font_family: self.font_family,
        });
    }

    pub fn is_installed(cx: &gpui::App) -> bool {
        cx.has_global::<ProviderGlobal>()
    }

    /// Active theme, or the unspecified sentinel outside any provider scope.
    pub fn theme_arc(cx: &gpui::App) -> Arc<Theme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| Arc::new(Theme::unspecified()))
    }

    pub fn loader_config(cx: &gpui::App) -> ImageLoaderConfig {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.loader.clone())
            .unwrap_or_default()
    }

    /// Rebuild the installed theme for a new appearance, keeping the themed
    /// font family and loader policy. No-op outside a provider scope.
    pub fn set_appearance(cx: &mut gpui::App, appearance: Appearance) {
        if !cx.has_global::<ProviderGlobal>() {
            return;
        }
        let global = cx.global_mut::<ProviderGlobal>();
        let mut theme = Theme::for_appearance(appearance);
        if let Some(family) = &global.font_family {
            theme = theme.with_font_family(family.clone());
        }
        global.theme = Arc::new(theme);
    }

    /// Re-sample the host appearance after a system change notification.
    pub fn refresh_system_appearance(cx: &mut gpui::App) {
        let appearance = system_appearance(cx);
        Self::set_appearance(cx, appearance);
    }
}

fn system_appearance(cx: &gpui::App) -> Appearance {
    match cx.window_appearance() {
        gpui::WindowAppearance::Light | gpui::WindowAppearance::VibrantLight => Appearance::Light,
        gpui::WindowAppearance::Dark | gpui::WindowAppearance::VibrantDark => Appearance::Dark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_resolution_only_defers_for_system() {
        assert_eq!(
            ThemeMode::Light.resolve(Appearance::Dark),
            Appearance::Light
        );
        assert_eq!(ThemeMode::Dark.resolve(Appearance::Light), Appearance::Dark);
        assert_eq!(
            ThemeMode::System.resolve(Appearance::Dark),
            Appearance::Dark
        );
        assert_eq!(
            ThemeMode::System.resolve(Appearance::Light),
            Appearance::Light
        );
    }

    #[test]
    fn default_mode_follows_the_system() {
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
