use gpui::SharedString;

use crate::loader::ImageLoaderConfig;
use crate::provider::{MellowProvider, ThemeMode};
use crate::theme::Theme;

type LaunchHook = Box<dyn FnOnce(&mut gpui::App, &MellowProvider) + 'static>;

/// Application entry point that installs the theme provider before the first
/// frame, so every component renders inside an active theme scope.
pub struct MellowApplication {
    application: gpui::Application,
    provider: MellowProvider,
    launch_hooks: Vec<LaunchHook>,
}

impl Default for MellowApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl MellowApplication {
    pub fn new() -> Self {
        Self::from_application(gpui::Application::new())
    }

    pub fn headless() -> Self {
        Self::from_application(gpui::Application::headless())
    }

    pub fn from_application(application: gpui::Application) -> Self {
        Self {
            application,
            provider: MellowProvider::new(),
            launch_hooks: Vec::new(),
        }
    }

    pub fn application(&self) -> &gpui::Application {
        &self.application
    }

    pub fn with_assets(mut self, asset_source: impl gpui::AssetSource) -> Self {
        self.application = self.application.with_assets(asset_source);
        self
    }

    pub fn with_provider(mut self, provider: MellowProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn theme_mode(mut self, mode: ThemeMode) -> Self {
        self.provider = self.provider.mode(mode);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.provider = self.provider.theme(theme);
        self
    }

    pub fn font_family(mut self, family: impl Into<SharedString>) -> Self {
        self.provider = self.provider.font_family(family);
        self
    }

    pub fn image_loader(mut self, config: ImageLoaderConfig) -> Self {
        self.provider = self.provider.image_loader(config);
        self
    }

    pub fn before_launch(
        mut self,
        hook: impl FnOnce(&mut gpui::App, &MellowProvider) + 'static,
    ) -> Self {
        self.launch_hooks.push(Box::new(hook));
        self
    }

    pub fn run<F>(self, on_finish_launching: F)
    where
        F: 'static + FnOnce(&mut gpui::App),
    {
        let provider = self.provider;
        let launch_hooks = self.launch_hooks;
        self.application.run(move |cx| {
            provider.clone().install(cx);

            for hook in launch_hooks {
                hook(cx, &provider);
            }

            on_finish_launching(cx);
        });
    }
}
