use std::rc::Rc;

use gpui::{
    ClickEvent, Hsla, InteractiveElement, IntoElement, ParentElement, Pixels, Refineable as _,
    RenderOnce, SharedString, StatefulInteractiveElement as _, Styled, Window, div, px,
};

use crate::contracts::impl_disableable;
use crate::id::stable_auto_id;
use crate::theme::{Elevation, LocalTheme, Theme};

use super::image::{Image, ImageReference};
use super::text::{Text, TextAlignment};
use super::utils::{
    PressHandler, apply_interaction_styles, apply_shape, pressable_surface_styles,
    quantized_stroke_px,
};

/// The closed set of visual treatments a button can take.
///
/// Each variant is a total mapping to container color, content color, border
/// and elevation, for both the enabled and the disabled state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Tertiary,
    TertiaryTinted(Hsla),
    Elevated,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonBorder {
    pub width: Pixels,
    pub color: Hsla,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    pub container: Hsla,
    pub content: Hsla,
    pub border: Option<ButtonBorder>,
    pub elevation: Elevation,
}

impl ButtonVariant {
    /// Resolves the variant against a theme. Total over variants and both
    /// enabled states; Elevated keeps its depth even when disabled.
    pub fn resolve(&self, theme: &Theme, enabled: bool) -> ButtonStyle {
        let colors = &theme.colors;
        let transparent = gpui::transparent_black();
        let content_or_disabled = |color: Hsla| if enabled { color } else { colors.on_disabled };

        match self {
            Self::Primary => ButtonStyle {
                container: if enabled { colors.primary } else { colors.disabled },
                content: if enabled {
                    colors.on_primary
                } else {
                    colors.on_disabled
                },
                border: None,
                elevation: Elevation::None,
            },
            Self::Secondary => ButtonStyle {
                container: if enabled {
                    transparent
                } else {
                    colors.disabled_variant
                },
                content: content_or_disabled(colors.primary),
                border: Some(ButtonBorder {
                    width: theme.borders.width1,
                    color: if enabled { colors.primary } else { colors.disabled },
                }),
                elevation: Elevation::None,
            },
            Self::Tertiary => ButtonStyle {
                container: transparent,
                content: content_or_disabled(colors.primary),
                border: None,
                elevation: Elevation::None,
            },
            Self::TertiaryTinted(color) => ButtonStyle {
                container: transparent,
                content: content_or_disabled(*color),
                border: None,
                elevation: Elevation::None,
            },
            Self::Elevated => ButtonStyle {
                container: transparent,
                content: content_or_disabled(colors.primary),
                border: None,
                elevation: Elevation::Level2,
            },
        }
    }

    /// Tint override for icon content. `None` leaves the glyph's own color.
    pub fn icon_tint(&self, theme: &Theme, enabled: bool) -> Option<Hsla> {
        if !enabled {
            return Some(theme.colors.on_disabled);
        }
        match self {
            Self::TertiaryTinted(color) => Some(*color),
            Self::Primary | Self::Secondary | Self::Tertiary | Self::Elevated => None,
        }
    }
}

/// Edge-biased padding for buttons sitting flush against a container edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PaddingAdjustment {
    #[default]
    Default,
    AdjustLeft,
    AdjustRight,
}

impl PaddingAdjustment {
    /// Leading and trailing padding given the standard horizontal unit.
    /// The zeroed edge's padding moves to the opposite side.
    pub fn horizontal(self, base: Pixels) -> (Pixels, Pixels) {
        match self {
            Self::Default => (base, base),
            Self::AdjustLeft => (px(0.0), base * 2.0),
            Self::AdjustRight => (base * 2.0, px(0.0)),
        }
    }

    pub fn alignment(self) -> TextAlignment {
        match self {
            Self::Default => TextAlignment::Center,
            Self::AdjustLeft => TextAlignment::Left,
            Self::AdjustRight => TextAlignment::Right,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ButtonContent {
    Label(SharedString),
    Icon {
        reference: ImageReference,
        accessibility_label: SharedString,
    },
}

/// An activatable control with labeled and icon-only forms.
///
/// Icon buttons render a circular 40-unit container around a 24-unit glyph;
/// the Secondary variant keeps its outline there and Elevated keeps its
/// shadow under the circular clip.
#[derive(IntoElement)]
pub struct Button {
    id: SharedString,
    content: ButtonContent,
    variant: ButtonVariant,
    padding: PaddingAdjustment,
    disabled: bool,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
    on_click: Option<PressHandler>,
}

impl Button {
    #[track_caller]
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self::with_content(ButtonContent::Label(label.into()))
    }

    #[track_caller]
    pub fn icon(
        reference: ImageReference,
        accessibility_label: impl Into<SharedString>,
    ) -> Self {
        Self::with_content(ButtonContent::Icon {
            reference,
            accessibility_label: accessibility_label.into(),
        })
    }

    #[track_caller]
    pub fn with_content(content: ButtonContent) -> Self {
        Self {
            id: stable_auto_id("button"),
            content,
            variant: ButtonVariant::Primary,
            padding: PaddingAdjustment::default(),
            disabled: false,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
            on_click: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn padding_adjustment(mut self, padding: PaddingAdjustment) -> Self {
        self.padding = padding;
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut gpui::App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }
}

impl_disableable!(Button);

impl Styled for Button {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Button {
    fn render(mut self, window: &mut Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let enabled = !self.disabled;
        let resolved = self.variant.resolve(&self.theme, enabled);

        let mut root = match self.content.clone() {
            ButtonContent::Label(label) => {
                let (pad_left, pad_right) = self.padding.horizontal(self.theme.spacing.space_6);
                let pad_vertical = self.theme.spacing.space_2;
                let alignment = self.padding.alignment();

                let mut root = div()
                    .id(self.id.clone())
                    .flex()
                    .flex_row()
                    .items_center()
                    .pl(pad_left)
                    .pr(pad_right)
                    .pt(pad_vertical)
                    .pb(pad_vertical)
                    .bg(resolved.container)
                    .text_color(resolved.content);
                root = match alignment {
                    TextAlignment::Left => root.justify_start(),
                    TextAlignment::Center => root.justify_center(),
                    TextAlignment::Right => root.justify_end(),
                };
                root = apply_shape(root, self.theme.shapes.small);
                root.child(
                    Text::new(label)
                        .with_id(crate::id::slot_id(&self.id, "label"))
                        .color(resolved.content)
                        .align(alignment),
                )
            }
            ButtonContent::Icon {
                reference,
                accessibility_label,
            } => {
                let glyph_size = self.theme.spacing.space_6;
                let container_size = glyph_size + self.theme.spacing.space_2 * 2.0;

                let mut glyph = Image::new(reference, accessibility_label)
                    .with_id(crate::id::slot_id(&self.id, "glyph"))
                    .size(glyph_size);
                if let Some(tint) = self.variant.icon_tint(&self.theme, enabled) {
                    glyph = glyph.tint(tint);
                }

                let root = div()
                    .id(self.id.clone())
                    .flex()
                    .items_center()
                    .justify_center()
                    .w(container_size)
                    .h(container_size)
                    .bg(resolved.container);
                apply_shape(root, self.theme.shapes.full).child(glyph)
            }
        };

        if let Some(border) = resolved.border {
            root = root
                .border(quantized_stroke_px(window, f32::from(border.width)))
                .border_color(border.color);
        }
        if resolved.elevation != Elevation::None {
            root = root.shadow(self.theme.elevation.shadow(resolved.elevation));
        }

        if self.disabled {
            root = root.cursor_default();
        } else {
            root = apply_interaction_styles(root, pressable_surface_styles(resolved.container));
            if let Some(handler) = self.on_click.clone() {
                root = root
                    .cursor_pointer()
                    .on_click(move |event, window, cx| handler(event, window, cx));
            }
        }

        root.style().refine(&self.style);
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn light() -> Theme {
        Theme::light()
    }

    #[test]
    fn primary_fills_with_the_primary_pair() {
        let theme = light();
        let enabled = ButtonVariant::Primary.resolve(&theme, true);
        assert_eq!(enabled.container, theme.colors.primary);
        assert_eq!(enabled.content, theme.colors.on_primary);
        assert_eq!(enabled.border, None);
        assert_eq!(enabled.elevation, Elevation::None);

        let disabled = ButtonVariant::Primary.resolve(&theme, false);
        assert_eq!(disabled.container, theme.colors.disabled);
        assert_eq!(disabled.content, theme.colors.on_disabled);
    }

    #[test]
    fn secondary_is_outlined_and_transparent_until_disabled() {
        let theme = light();
        let enabled = ButtonVariant::Secondary.resolve(&theme, true);
        assert_eq!(enabled.container, gpui::transparent_black());
        assert_eq!(enabled.content, theme.colors.primary);
        let border = enabled.border.expect("secondary carries a border");
        assert_eq!(border.width, theme.borders.width1);
        assert_eq!(border.color, theme.colors.primary);

        let disabled = ButtonVariant::Secondary.resolve(&theme, false);
        assert_eq!(disabled.container, theme.colors.disabled_variant);
        let border = disabled.border.expect("secondary border survives disable");
        assert_eq!(border.color, theme.colors.disabled);
        assert_eq!(disabled.content, theme.colors.on_disabled);
    }

    #[test]
    fn resolved_tuples_match_the_variant_table_in_both_states() {
        let theme = light();
        let transparent = gpui::transparent_black();
        let accent = gpui::red();
        let outline = |color| {
            Some(ButtonBorder {
                width: theme.borders.width1,
                color,
            })
        };

        let table = [
            (
                ButtonVariant::Primary,
                ButtonStyle {
                    container: theme.colors.primary,
                    content: theme.colors.on_primary,
                    border: None,
                    elevation: Elevation::None,
                },
                ButtonStyle {
                    container: theme.colors.disabled,
                    content: theme.colors.on_disabled,
                    border: None,
                    elevation: Elevation::None,
                },
            ),
            (
                ButtonVariant::Secondary,
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.primary,
                    border: outline(theme.colors.primary),
                    elevation: Elevation::None,
                },
                ButtonStyle {
                    container: theme.colors.disabled_variant,
                    content: theme.colors.on_disabled,
                    border: outline(theme.colors.disabled),
                    elevation: Elevation::None,
                },
            ),
            (
                ButtonVariant::Tertiary,
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.primary,
                    border: None,
                    elevation: Elevation::None,
                },
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.on_disabled,
                    border: None,
                    elevation: Elevation::None,
                },
            ),
            (
                ButtonVariant::TertiaryTinted(accent),
                ButtonStyle {
                    container: transparent,
                    content: accent,
                    border: None,
                    elevation: Elevation::None,
                },
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.on_disabled,
                    border: None,
                    elevation: Elevation::None,
                },
            ),
            (
                ButtonVariant::Elevated,
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.primary,
                    border: None,
                    elevation: Elevation::Level2,
                },
                ButtonStyle {
                    container: transparent,
                    content: theme.colors.on_disabled,
                    border: None,
                    elevation: Elevation::Level2,
                },
            ),
        ];

        for (variant, when_enabled, when_disabled) in table {
            assert_eq!(variant.resolve(&theme, true), when_enabled);
            assert_eq!(variant.resolve(&theme, false), when_disabled);
        }
    }

    #[test]
    fn tertiary_variants_are_borderless_and_flat() {
        let theme = light();
        for variant in [ButtonVariant::Tertiary, ButtonVariant::Elevated] {
            let style = variant.resolve(&theme, true);
            assert_eq!(style.container, gpui::transparent_black());
            assert_eq!(style.content, theme.colors.primary);
            assert_eq!(style.border, None);
        }
        assert_eq!(
            ButtonVariant::Tertiary.resolve(&theme, true).elevation,
            Elevation::None
        );
    }

    #[test]
    fn elevated_keeps_its_depth_in_both_states() {
        let theme = light();
        assert_eq!(
            ButtonVariant::Elevated.resolve(&theme, true).elevation,
            Elevation::Level2
        );
        assert_eq!(
            ButtonVariant::Elevated.resolve(&theme, false).elevation,
            Elevation::Level2
        );
    }

    #[test]
    fn tinted_content_follows_the_supplied_color_until_disabled() {
        let theme = light();
        let accent = gpui::red();
        let enabled = ButtonVariant::TertiaryTinted(accent).resolve(&theme, true);
        assert_eq!(enabled.content, accent);

        let disabled = ButtonVariant::TertiaryTinted(accent).resolve(&theme, false);
        assert_eq!(disabled.content, theme.colors.on_disabled);
    }

    #[test]
    fn icon_tint_matches_the_content_rules() {
        let theme = light();
        let accent = gpui::blue();
        assert_eq!(ButtonVariant::Primary.icon_tint(&theme, true), None);
        assert_eq!(ButtonVariant::Secondary.icon_tint(&theme, true), None);
        assert_eq!(
            ButtonVariant::TertiaryTinted(accent).icon_tint(&theme, true),
            Some(accent)
        );
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::TertiaryTinted(accent),
            ButtonVariant::Elevated,
        ] {
            assert_eq!(
                variant.icon_tint(&theme, false),
                Some(theme.colors.on_disabled)
            );
        }
    }

    #[test]
    fn edge_adjustments_zero_one_side_and_double_the_other() {
        let base = px(24.0);
        assert_eq!(
            PaddingAdjustment::Default.horizontal(base),
            (px(24.0), px(24.0))
        );
        assert_eq!(
            PaddingAdjustment::AdjustLeft.horizontal(base),
            (px(0.0), px(48.0))
        );
        assert_eq!(
            PaddingAdjustment::AdjustRight.horizontal(base),
            (px(48.0), px(0.0))
        );
    }

    #[test]
    fn label_alignment_follows_the_padding_adjustment() {
        assert_eq!(
            PaddingAdjustment::Default.alignment(),
            TextAlignment::Center
        );
        assert_eq!(
            PaddingAdjustment::AdjustLeft.alignment(),
            TextAlignment::Left
        );
        assert_eq!(
            PaddingAdjustment::AdjustRight.alignment(),
            TextAlignment::Right
        );
    }
}
