use super::*;
use crate::contracts::Disableable;
use gpui::{AnyElement, IntoElement};

fn into_any(element: impl IntoElement) -> AnyElement {
    element.into_any_element()
}

fn all_variants() -> [ButtonVariant; 5] {
    [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Tertiary,
        ButtonVariant::TertiaryTinted(gpui::red()),
        ButtonVariant::Elevated,
    ]
}

fn exercise_disableable<T, F>(mut make: F)
where
    T: Disableable + IntoElement,
    F: FnMut() -> T,
{
    let _ = into_any(make().disabled(false));
    let _ = into_any(make().disabled(true));
}

#[test]
fn behavior_matrix_covers_every_variant_and_content_kind() {
    for variant in all_variants() {
        for disabled in [false, true] {
            let _ = into_any(
                Button::new("label")
                    .variant(variant)
                    .disabled(disabled)
                    .on_click(|_, _, _| {}),
            );
            let _ = into_any(
                Button::icon(ImageReference::asset("star"), "Favorite")
                    .variant(variant)
                    .disabled(disabled)
                    .on_click(|_, _, _| {}),
            );
        }
    }
}

#[test]
fn behavior_matrix_covers_every_padding_adjustment() {
    for adjustment in [
        PaddingAdjustment::Default,
        PaddingAdjustment::AdjustLeft,
        PaddingAdjustment::AdjustRight,
    ] {
        for variant in all_variants() {
            let _ = into_any(
                Button::new("label")
                    .variant(variant)
                    .padding_adjustment(adjustment),
            );
        }
    }
}

#[test]
fn behavior_matrix_covers_image_reference_shapes() {
    let references = [
        ImageReference::asset("photo"),
        ImageReference::remote("https://example.com/a.png"),
        ImageReference::remote_with_fallback("https://example.com/a.png", "photo-off"),
    ];
    for reference in references {
        for fit in [
            ImageFit::Fit,
            ImageFit::Crop,
            ImageFit::Fill,
            ImageFit::Inside,
        ] {
            let _ = into_any(Image::new(reference.clone(), "Matrix image").fit(fit));
        }
        let _ = into_any(
            Image::new(reference.clone(), "Tinted image").tint(gpui::black().opacity(0.3)),
        );
        let _ = into_any(Image::new(reference, "Steady image").crossfade(false));
    }
}

#[test]
fn disable_contract_flips_both_ways() {
    exercise_disableable(|| Button::new("toggle me"));
    exercise_disableable(|| Button::icon(ImageReference::asset("x"), "Close"));
    let _ = into_any(Button::new("still on").enabled(true));
    let _ = into_any(Button::new("switched off").enabled(false));
}
