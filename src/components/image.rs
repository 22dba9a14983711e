use gpui::{
    AnyElement, Hsla, InteractiveElement, IntoElement, ObjectFit, ParentElement, Pixels,
    Refineable as _, RenderOnce, SharedString, SharedUri, Styled, StyledImage, Window, div, img,
    svg,
};

use crate::icon::IconRegistry;
use crate::id::{slot_id, stable_auto_id};
use crate::motion::FadeProfile;
use crate::provider::MellowProvider;
use crate::theme::LocalTheme;

use super::transition::FadeExt;

/// What a media component should display.
///
/// `Asset` names a glyph bundled with the binary and resolved through the
/// icon registry. `Remote` is fetched by URL and may carry a bundled asset
/// shown while the fetch is pending or failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageReference {
    Asset(SharedString),
    Remote {
        url: SharedString,
        fallback: Option<SharedString>,
    },
}

impl ImageReference {
    pub fn asset(name: impl Into<SharedString>) -> Self {
        Self::Asset(name.into())
    }

    pub fn remote(url: impl Into<SharedString>) -> Self {
        Self::Remote {
            url: url.into(),
            fallback: None,
        }
    }

    pub fn remote_with_fallback(
        url: impl Into<SharedString>,
        fallback: impl Into<SharedString>,
    ) -> Self {
        Self::Remote {
            url: url.into(),
            fallback: Some(fallback.into()),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }

    pub fn fallback(&self) -> Option<&SharedString> {
        match self {
            Self::Asset(_) => None,
            Self::Remote { fallback, .. } => fallback.as_ref(),
        }
    }
}

/// How remote content is scaled into its bounds. Vector assets always fill
/// their bounds and ignore this setting.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ImageFit {
    #[default]
    Fit,
    Crop,
    Fill,
    Inside,
}

impl ImageFit {
    fn object_fit(self) -> ObjectFit {
        match self {
            Self::Fit => ObjectFit::Contain,
            Self::Crop => ObjectFit::Cover,
            Self::Fill => ObjectFit::Fill,
            Self::Inside => ObjectFit::ScaleDown,
        }
    }
}

/// Displays an [`ImageReference`] with an optional tint and a crossfade on
/// first appearance.
///
/// The accessibility label is required at construction. A remote reference
/// keeps its fallback asset layered underneath the fetched bitmap, so the
/// fallback shows while the fetch is pending and stays up if it fails.
#[derive(IntoElement)]
pub struct Image {
    id: SharedString,
    reference: ImageReference,
    accessibility_label: SharedString,
    fit: ImageFit,
    tint: Option<Hsla>,
    size: Option<Pixels>,
    crossfade: Option<bool>,
    registry: IconRegistry,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
}

impl Image {
    #[track_caller]
    pub fn new(reference: ImageReference, accessibility_label: impl Into<SharedString>) -> Self {
        Self {
            id: stable_auto_id("image"),
            reference,
            accessibility_label: accessibility_label.into(),
            fit: ImageFit::default(),
            tint: None,
            size: None,
            crossfade: None,
            registry: IconRegistry::new(),
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn fit(mut self, fit: ImageFit) -> Self {
        self.fit = fit;
        self
    }

    /// Exact recolor for vector assets. Raster content is washed with the
    /// color at its own alpha instead: the wash sits over the bitmap, so a
    /// fully opaque tint hides it completely. Keep the alpha below 1.0 when
    /// tinting remote images.
    pub fn tint(mut self, tint: Hsla) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Convenience square sizing for glyph-like uses.
    pub fn size(mut self, size: Pixels) -> Self {
        self.size = Some(size);
        self
    }

    /// Overrides the provider-level crossfade setting for this instance.
    pub fn crossfade(mut self, enabled: bool) -> Self {
        self.crossfade = Some(enabled);
        self
    }

    pub fn registry(mut self, registry: IconRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn accessibility_label(&self) -> &SharedString {
        &self.accessibility_label
    }

    fn asset_element(&self, name: &SharedString, verbose: bool) -> AnyElement {
        match self.registry.resolve(name) {
            Some(path) => {
                let mut vector = svg()
                    .external_path(path.to_string_lossy().to_string())
                    .w_full()
                    .h_full();
                if let Some(tint) = self.tint {
                    vector = vector.text_color(tint);
                }
                vector.into_any_element()
            }
            None => {
                log::warn!(
                    "image asset {:?} ({:?}) is not in the registry",
                    name,
                    self.accessibility_label
                );
                if verbose {
                    log::debug!("rendering empty slot for {:?}", name);
                }
                div().w_full().h_full().into_any_element()
            }
        }
    }
}

impl Styled for Image {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Image {
    fn render(mut self, _window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let loader = MellowProvider::loader_config(cx);
        let crossfade = self.crossfade.unwrap_or(loader.crossfade_enabled());
        let verbose = loader.verbose_logging_enabled();

        let mut root = div().id(self.id.clone()).overflow_hidden();
        if let Some(size) = self.size {
            root = root.w(size).h(size);
        }

        root = match &self.reference {
            ImageReference::Asset(name) => root.child(self.asset_element(name, verbose)),
            ImageReference::Remote { url, fallback } => {
                if verbose {
                    log::debug!(
                        "requesting remote image {:?} ({:?})",
                        url,
                        self.accessibility_label
                    );
                }

                let mut layered = root.relative();
                if let Some(fallback) = fallback.clone() {
                    layered = layered.child(
                        div()
                            .absolute()
                            .inset_0()
                            .child(self.asset_element(&fallback, verbose)),
                    );
                }

                let bitmap = img(SharedUri::from(url.to_string()))
                    .w_full()
                    .h_full()
                    .object_fit(self.fit.object_fit());
                layered = if crossfade {
                    layered.child(
                        bitmap.with_fade_in(slot_id(&self.id, "fade"), FadeProfile::crossfade()),
                    )
                } else {
                    layered.child(bitmap)
                };

                if let Some(tint) = self.tint {
                    layered = layered.child(div().absolute().inset_0().bg(tint));
                }
                layered
            }
        };

        root.style().refine(&self.style);
        root
    }
}
