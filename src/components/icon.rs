use gpui::{
    Hsla, InteractiveElement, IntoElement, ParentElement, Pixels, Refineable as _, RenderOnce,
    SharedString, Styled, div, px, svg,
};

use crate::icon::IconRegistry;
use crate::id::stable_auto_id;
use crate::theme::LocalTheme;

/// A tintable SVG glyph resolved by name from the icon registry.
///
/// Without an explicit color the glyph inherits the surrounding text color.
#[derive(IntoElement)]
pub struct Icon {
    id: SharedString,
    name: SharedString,
    size: Pixels,
    color: Option<Hsla>,
    registry: IconRegistry,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
}

impl Icon {
    #[track_caller]
    pub fn named(name: impl Into<SharedString>) -> Self {
        Self {
            id: stable_auto_id("icon"),
            name: name.into(),
            size: px(24.0),
            color: None,
            registry: IconRegistry::new(),
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn size(mut self, size: Pixels) -> Self {
        self.size = px(f32::from(size).max(8.0));
        self
    }

    pub fn color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }

    pub fn registry(mut self, registry: IconRegistry) -> Self {
        self.registry = registry;
        self
    }
}

impl Styled for Icon {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Icon {
    fn render(mut self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);

        if let Some(path) = self.registry.resolve(&self.name) {
            let mut icon = svg()
                .external_path(path.to_string_lossy().to_string())
                .w(self.size)
                .h(self.size)
                .id(self.id);
            if let Some(color) = self.color {
                icon = icon.text_color(color);
            }
            icon.style().refine(&self.style);
            return icon.into_any_element();
        }

        log::warn!("icon {:?} is not in the registry", self.name);
        let mut missing = div().id(self.id).w(self.size).h(self.size).child("?");
        if let Some(color) = self.color {
            missing = missing.text_color(color);
        }
        missing.style().refine(&self.style);
        missing.into_any_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyph_size_is_24() {
        let icon = Icon::named("check");
        assert_eq!(icon.size, px(24.0));
    }

    #[test]
    fn size_never_drops_below_the_legibility_floor() {
        let icon = Icon::named("check").size(px(2.0));
        assert_eq!(icon.size, px(8.0));
    }

    #[test]
    fn explicit_ids_replace_the_callsite_id() {
        let icon = Icon::named("check").with_id("toolbar-check");
        assert_eq!(&*icon.id, "toolbar-check");
    }
}
