use super::*;
use gpui::{AnyElement, IntoElement, px};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

#[test]
fn smoke_display_components_render_into_any_element() {
    let _ = into_any(Text::new("body copy"));
    let _ = into_any(
        Text::new("left body")
            .align(TextAlignment::Left)
            .color(gpui::red())
            .max_lines(2),
    );
    let _ = into_any(Title::new("Section"));
    let _ = into_any(Title::new("Subsection").order(3).align(TextAlignment::Center));
    let _ = into_any(Icon::named("check"));
    let _ = into_any(Icon::named("builtin:star-filled").size(px(16.0)).color(gpui::red()));
    let _ = into_any(Icon::named("not-a-real-glyph"));
}

#[test]
fn smoke_button_forms_render_into_any_element() {
    let _ = into_any(Button::new("Continue"));
    let _ = into_any(Button::new("Cancel").variant(ButtonVariant::Secondary));
    let _ = into_any(
        Button::new("Skip")
            .variant(ButtonVariant::Tertiary)
            .padding_adjustment(PaddingAdjustment::AdjustRight),
    );
    let _ = into_any(Button::new("Back").padding_adjustment(PaddingAdjustment::AdjustLeft));
    let _ = into_any(Button::new("Submit").on_click(|_, _, _| {}));
    let _ = into_any(Button::icon(ImageReference::asset("heart"), "Like"));
    let _ = into_any(
        Button::icon(ImageReference::asset("search"), "Search")
            .variant(ButtonVariant::Elevated),
    );
}

#[test]
fn smoke_media_components_render_into_any_element() {
    let _ = into_any(Image::new(ImageReference::asset("photo"), "Bundled photo"));
    let _ = into_any(Image::new(
        ImageReference::remote("https://example.com/cover.png"),
        "Album cover",
    ));
    let _ = into_any(
        Image::new(
            ImageReference::remote_with_fallback("https://example.com/cover.png", "photo-off"),
            "Album cover",
        )
        .fit(ImageFit::Crop)
        .tint(gpui::black().opacity(0.2))
        .size(px(96.0))
        .crossfade(false),
    );
}
