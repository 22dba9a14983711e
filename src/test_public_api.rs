use gpui::IntoElement;

fn into_any(element: impl IntoElement) -> gpui::AnyElement {
    element.into_any_element()
}

fn assert_render_once<T: gpui::RenderOnce>() {}

#[test]
fn widgets_facade_exports_render_components() {
    assert_render_once::<crate::widgets::display::Text>();
    assert_render_once::<crate::widgets::display::Title>();
    assert_render_once::<crate::widgets::display::Icon>();
    assert_render_once::<crate::widgets::form::Button>();
    assert_render_once::<crate::widgets::media::Image>();
}

#[test]
fn prelude_smoke_builds_core_widgets() {
    use crate::prelude::*;

    let _ = into_any(Button::new("button").variant(ButtonVariant::Secondary));
    let _ = into_any(Button::icon(ImageReference::asset("plus"), "Add"));
    let _ = into_any(Text::new("text").align(TextAlignment::Left));
    let _ = into_any(Title::new("title").order(2));
    let _ = into_any(Icon::named("settings"));
    let _ = into_any(Image::new(
        ImageReference::remote_with_fallback("https://example.com/a.png", "photo-off"),
        "cover art",
    ));
}

#[test]
fn theme_types_are_reachable_from_the_prelude() {
    use crate::prelude::*;

    let theme = Theme::light();
    assert_eq!(theme.appearance, Appearance::Light);
    let _ = Theme::dark();
    let _ = ThemeMode::System;
    let _ = Elevation::Level2;
    let _ = TextStyleToken::TitleLarge;
    let _ = FadeProfile::crossfade();
    let _ = ImageLoaderConfig::default();
    let _ = LocalTheme::default();
}
