use std::sync::{Arc, OnceLock};

use gpui::{BoxShadow, FontWeight, Hsla, Pixels, Rgba, SharedString, point, px};
use smallvec::{SmallVec, smallvec};

use crate::tokens::{self, SchemeSpec, TypeStyleSpec};

/// Light or dark rendering of the color scheme. Selected once per provider
/// activation; a system change re-resolves and re-installs the whole theme.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

/// Ten named lengths, strictly increasing from `space_half` to `space_24`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingScale {
    pub space_half: Pixels,
    pub space_1: Pixels,
    pub space_2: Pixels,
    pub space_3: Pixels,
    pub space_4: Pixels,
    pub space_6: Pixels,
    pub space_8: Pixels,
    pub space_12: Pixels,
    pub space_16: Pixels,
    pub space_24: Pixels,
}

impl SpacingScale {
    fn standard() -> Self {
        let [half, one, two, three, four, six, eight, twelve, sixteen, twenty_four] =
            tokens::SPACING_PX.map(px);
        Self {
            space_half: half,
            space_1: one,
            space_2: two,
            space_3: three,
            space_4: four,
            space_6: six,
            space_8: eight,
            space_12: twelve,
            space_16: sixteen,
            space_24: twenty_four,
        }
    }

    fn unspecified() -> Self {
        Self {
            space_half: px(0.),
            space_1: px(0.),
            space_2: px(0.),
            space_3: px(0.),
            space_4: px(0.),
            space_6: px(0.),
            space_8: px(0.),
            space_12: px(0.),
            space_16: px(0.),
            space_24: px(0.),
        }
    }

    pub fn steps(&self) -> [Pixels; tokens::SPACING_STEPS] {
        [
            self.space_half,
            self.space_1,
            self.space_2,
            self.space_3,
            self.space_4,
            self.space_6,
            self.space_8,
            self.space_12,
            self.space_16,
            self.space_24,
        ]
    }
}

/// Depth level a component can sit at. `Level2` is the resting depth for
/// raised controls.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Elevation {
    #[default]
    None,
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
}

/// Six named depths, monotonically non-decreasing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationScale {
    pub none: Pixels,
    pub level1: Pixels,
    pub level2: Pixels,
    pub level3: Pixels,
    pub level4: Pixels,
    pub level5: Pixels,
}

impl ElevationScale {
    fn standard() -> Self {
        let [none, level1, level2, level3, level4, level5] = tokens::ELEVATION_PX.map(px);
        Self {
            none,
            level1,
            level2,
            level3,
            level4,
            level5,
        }
    }

    fn unspecified() -> Self {
        Self {
            none: px(0.),
            level1: px(0.),
            level2: px(0.),
            level3: px(0.),
            level4: px(0.),
            level5: px(0.),
        }
    }

    pub fn depth(&self, level: Elevation) -> Pixels {
        match level {
            Elevation::None => self.none,
            Elevation::Level1 => self.level1,
            Elevation::Level2 => self.level2,
            Elevation::Level3 => self.level3,
            Elevation::Level4 => self.level4,
            Elevation::Level5 => self.level5,
        }
    }

    /// Key and ambient drop shadows for a depth. Zero depth means no shadow.
    pub fn shadow(&self, level: Elevation) -> SmallVec<[BoxShadow; 2]> {
        let depth = f32::from(self.depth(level));
        if depth <= 0.0 {
            return SmallVec::new();
        }

        smallvec![
            BoxShadow {
                color: gpui::black().opacity(0.14),
                offset: point(px(0.), px(depth)),
                blur_radius: px(depth * 2.0),
                spread_radius: px(0.),
            },
            BoxShadow {
                color: gpui::black().opacity(0.08),
                offset: point(px(0.), px(depth * 0.5)),
                blur_radius: px(depth),
                spread_radius: px(0.),
            },
        ]
    }

    pub fn steps(&self) -> [Pixels; tokens::ELEVATION_STEPS] {
        [
            self.none,
            self.level1,
            self.level2,
            self.level3,
            self.level4,
            self.level5,
        ]
    }
}

/// Six named stroke widths, monotonically non-decreasing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderScale {
    pub none: Pixels,
    pub width1: Pixels,
    pub width2: Pixels,
    pub width3: Pixels,
    pub width4: Pixels,
    pub width5: Pixels,
}

impl BorderScale {
    fn standard() -> Self {
        let [none, width1, width2, width3, width4, width5] = tokens::BORDER_PX.map(px);
        Self {
            none,
            width1,
            width2,
            width3,
            width4,
            width5,
        }
    }

    fn unspecified() -> Self {
        Self {
            none: px(0.),
            width1: px(0.),
            width2: px(0.),
            width3: px(0.),
            width4: px(0.),
            width5: px(0.),
        }
    }

    pub fn steps(&self) -> [Pixels; tokens::BORDER_STEPS] {
        [
            self.none,
            self.width1,
            self.width2,
            self.width3,
            self.width4,
            self.width5,
        ]
    }
}

/// A corner treatment: a fixed radius, or perfectly round (pill/circle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rounded(Pixels),
    Round,
}

impl Shape {
    pub fn is_round(&self) -> bool {
        matches!(self, Self::Round)
    }

    pub fn corner_radius(&self) -> Option<Pixels> {
        match self {
            Self::Rounded(radius) => Some(*radius),
            Self::Round => None,
        }
    }
}

/// Seven named corner treatments. `full` is always `Shape::Round`, no matter
/// what the radius steps are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeScale {
    pub none: Shape,
    pub extra_small: Shape,
    pub small: Shape,
    pub medium: Shape,
    pub large: Shape,
    pub extra_large: Shape,
    pub full: Shape,
}

impl ShapeScale {
    fn standard() -> Self {
        let [none, extra_small, small, medium, large, extra_large] =
            tokens::CORNER_PX.map(|value| Shape::Rounded(px(value)));
        Self {
            none,
            extra_small,
            small,
            medium,
            large,
            extra_large,
            full: Shape::Round,
        }
    }

    fn unspecified() -> Self {
        Self {
            none: Shape::Rounded(px(0.)),
            extra_small: Shape::Rounded(px(0.)),
            small: Shape::Rounded(px(0.)),
            medium: Shape::Rounded(px(0.)),
            large: Shape::Rounded(px(0.)),
            extra_large: Shape::Rounded(px(0.)),
            full: Shape::Round,
        }
    }
}

/// Role colors for one appearance. The `on_x` member of each pair is the
/// legible content color for the `x` background; legibility is a palette
/// contract, not something the code checks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub primary: Hsla,
    pub on_primary: Hsla,
    pub primary_container: Hsla,
    pub on_primary_container: Hsla,
    pub secondary: Hsla,
    pub on_secondary: Hsla,
    pub secondary_container: Hsla,
    pub on_secondary_container: Hsla,
    pub tertiary: Hsla,
    pub on_tertiary: Hsla,
    pub tertiary_container: Hsla,
    pub on_tertiary_container: Hsla,
    pub disabled: Hsla,
    pub disabled_variant: Hsla,
    pub on_disabled: Hsla,
    pub error: Hsla,
    pub on_error: Hsla,
    pub error_container: Hsla,
    pub on_error_container: Hsla,
    pub surface: Hsla,
    pub surface_container: Hsla,
    pub on_surface: Hsla,
    pub outline: Hsla,
}

pub(crate) fn hsla_from_hex(value: &str) -> Hsla {
    Rgba::try_from(value)
        .map(Into::into)
        .unwrap_or_else(|_| gpui::black())
}

impl ColorScheme {
    fn from_spec(spec: &SchemeSpec) -> Self {
        Self {
            primary: hsla_from_hex(spec.primary),
            on_primary: hsla_from_hex(spec.on_primary),
            primary_container: hsla_from_hex(spec.primary_container),
            on_primary_container: hsla_from_hex(spec.on_primary_container),
            secondary: hsla_from_hex(spec.secondary),
            on_secondary: hsla_from_hex(spec.on_secondary),
            secondary_container: hsla_from_hex(spec.secondary_container),
            on_secondary_container: hsla_from_hex(spec.on_secondary_container),
            tertiary: hsla_from_hex(spec.tertiary),
            on_tertiary: hsla_from_hex(spec.on_tertiary),
            tertiary_container: hsla_from_hex(spec.tertiary_container),
            on_tertiary_container: hsla_from_hex(spec.on_tertiary_container),
            disabled: hsla_from_hex(spec.disabled),
            disabled_variant: hsla_from_hex(spec.disabled_variant),
            on_disabled: hsla_from_hex(spec.on_disabled),
            error: hsla_from_hex(spec.error),
            on_error: hsla_from_hex(spec.on_error),
            error_container: hsla_from_hex(spec.error_container),
            on_error_container: hsla_from_hex(spec.on_error_container),
            surface: hsla_from_hex(spec.surface),
            surface_container: hsla_from_hex(spec.surface_container),
            on_surface: hsla_from_hex(spec.on_surface),
            outline: hsla_from_hex(spec.outline),
        }
    }

    pub fn light() -> Self {
        Self::from_spec(&tokens::LIGHT_SCHEME)
    }

    pub fn dark() -> Self {
        Self::from_spec(&tokens::DARK_SCHEME)
    }

    fn unspecified() -> Self {
        let clear = gpui::transparent_black();
        Self {
            primary: clear,
            on_primary: clear,
            primary_container: clear,
            on_primary_container: clear,
            secondary: clear,
            on_secondary: clear,
            secondary_container: clear,
            on_secondary_container: clear,
            tertiary: clear,
            on_tertiary: clear,
            tertiary_container: clear,
            on_tertiary_container: clear,
            disabled: clear,
            disabled_variant: clear,
            on_disabled: clear,
            error: clear,
            on_error: clear,
            error_container: clear,
            on_error_container: clear,
            surface: clear,
            surface_container: clear,
            on_surface: clear,
            outline: clear,
        }
    }
}

/// Size, line height, and weight for one slot of the type scale. The font
/// family lives on [`TypographyScale`] so a single themed family covers
/// every style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeStyle {
    pub font_size: Pixels,
    pub line_height: Pixels,
    pub weight: FontWeight,
}

impl TypeStyle {
    fn from_spec(spec: &TypeStyleSpec) -> Self {
        Self {
            font_size: px(spec.font_px),
            line_height: px(spec.line_px),
            weight: FontWeight(spec.weight as f32),
        }
    }

    fn unspecified() -> Self {
        Self {
            font_size: px(0.),
            line_height: px(0.),
            weight: FontWeight::NORMAL,
        }
    }
}

/// Picks one of the fifteen type-scale slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextStyleToken {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
}

pub const TEXT_STYLE_TOKENS: [TextStyleToken; tokens::TYPE_STYLES] = [
    TextStyleToken::DisplayLarge,
    TextStyleToken::DisplayMedium,
    TextStyleToken::DisplaySmall,
    TextStyleToken::HeadlineLarge,
    TextStyleToken::HeadlineMedium,
    TextStyleToken::HeadlineSmall,
    TextStyleToken::TitleLarge,
    TextStyleToken::TitleMedium,
    TextStyleToken::TitleSmall,
    TextStyleToken::BodyLarge,
    TextStyleToken::BodyMedium,
    TextStyleToken::BodySmall,
    TextStyleToken::LabelLarge,
    TextStyleToken::LabelMedium,
    TextStyleToken::LabelSmall,
];

/// The full type ramp plus the optional shared family.
#[derive(Clone, Debug, PartialEq)]
pub struct TypographyScale {
    pub family: Option<SharedString>,
    pub display_large: TypeStyle,
    pub display_medium: TypeStyle,
    pub display_small: TypeStyle,
    pub headline_large: TypeStyle,
    pub headline_medium: TypeStyle,
    pub headline_small: TypeStyle,
    pub title_large: TypeStyle,
    pub title_medium: TypeStyle,
    pub title_small: TypeStyle,
    pub body_large: TypeStyle,
    pub body_medium: TypeStyle,
    pub body_small: TypeStyle,
    pub label_large: TypeStyle,
    pub label_medium: TypeStyle,
    pub label_small: TypeStyle,
}

impl TypographyScale {
    fn standard() -> Self {
        let [
            display_large,
            display_medium,
            display_small,
            headline_large,
            headline_medium,
            headline_small,
            title_large,
            title_medium,
            title_small,
            body_large,
            body_medium,
            body_small,
            label_large,
            label_medium,
            label_small,
        ] = tokens::TYPE_SCALE;
        Self {
            family: None,
            display_large: TypeStyle::from_spec(&display_large),
            display_medium: TypeStyle::from_spec(&display_medium),
            display_small: TypeStyle::from_spec(&display_small),
            headline_large: TypeStyle::from_spec(&headline_large),
            headline_medium: TypeStyle::from_spec(&headline_medium),
            headline_small: TypeStyle::from_spec(&headline_small),
            title_large: TypeStyle::from_spec(&title_large),
            title_medium: TypeStyle::from_spec(&title_medium),
            title_small: TypeStyle::from_spec(&title_small),
            body_large: TypeStyle::from_spec(&body_large),
            body_medium: TypeStyle::from_spec(&body_medium),
            body_small: TypeStyle::from_spec(&body_small),
            label_large: TypeStyle::from_spec(&label_large),
            label_medium: TypeStyle::from_spec(&label_medium),
            label_small: TypeStyle::from_spec(&label_small),
        }
    }

    fn unspecified() -> Self {
        let blank = TypeStyle::unspecified();
        Self {
            family: None,
            display_large: blank,
            display_medium: blank,
            display_small: blank,
            headline_large: blank,
            headline_medium: blank,
            headline_small: blank,
            title_large: blank,
            title_medium: blank,
            title_small: blank,
            body_large: blank,
            body_medium: blank,
            body_small: blank,
            label_large: blank,
            label_medium: blank,
            label_small: blank,
        }
    }

    pub fn style(&self, token: TextStyleToken) -> &TypeStyle {
        match token {
            TextStyleToken::DisplayLarge => &self.display_large,
            TextStyleToken::DisplayMedium => &self.display_medium,
            TextStyleToken::DisplaySmall => &self.display_small,
            TextStyleToken::HeadlineLarge => &self.headline_large,
            TextStyleToken::HeadlineMedium => &self.headline_medium,
            TextStyleToken::HeadlineSmall => &self.headline_small,
            TextStyleToken::TitleLarge => &self.title_large,
            TextStyleToken::TitleMedium => &self.title_medium,
            TextStyleToken::TitleSmall => &self.title_small,
            TextStyleToken::BodyLarge => &self.body_large,
            TextStyleToken::BodyMedium => &self.body_medium,
            TextStyleToken::BodySmall => &self.body_small,
            TextStyleToken::LabelLarge => &self.label_large,
            TextStyleToken::LabelMedium => &self.label_medium,
            TextStyleToken::LabelSmall => &self.label_small,
        }
    }
}

/// The six token sets for one appearance. Built once, shared as
/// `Arc<Theme>`, and never mutated after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub appearance: Appearance,
    pub spacing: SpacingScale,
    pub elevation: ElevationScale,
    pub borders: BorderScale,
    pub shapes: ShapeScale,
    pub colors: ColorScheme,
    pub typography: TypographyScale,
    specified: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self::for_appearance(Appearance::Light)
    }

    pub fn dark() -> Self {
        Self::for_appearance(Appearance::Dark)
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        let colors = match appearance {
            Appearance::Light => ColorScheme::light(),
            Appearance::Dark => ColorScheme::dark(),
        };
        Self {
            appearance,
            spacing: SpacingScale::standard(),
            elevation: ElevationScale::standard(),
            borders: BorderScale::standard(),
            shapes: ShapeScale::standard(),
            colors,
            typography: TypographyScale::standard(),
            specified: true,
        }
    }

    /// Sentinel theme handed out when no provider scope is active: zero
    /// lengths, transparent colors. Reading tokens through it is harmless
    /// and visibly wrong on screen, which beats panicking.
    pub fn unspecified() -> Self {
        Self {
            appearance: Appearance::Light,
            spacing: SpacingScale::unspecified(),
            elevation: ElevationScale::unspecified(),
            borders: BorderScale::unspecified(),
            shapes: ShapeScale::unspecified(),
            colors: ColorScheme::unspecified(),
            typography: TypographyScale::unspecified(),
            specified: false,
        }
    }

    pub fn is_specified(&self) -> bool {
        self.specified
    }

    pub fn with_font_family(mut self, family: impl Into<SharedString>) -> Self {
        self.typography.family = Some(family.into());
        self
    }

    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }
}

/// Per-component handle onto the ambient theme. Components sync it from the
/// provider at render time; outside any provider scope it dereferences to
/// the unspecified sentinel.
#[derive(Clone, Debug, Default)]
pub struct LocalTheme {
    resolved: Option<Arc<Theme>>,
}

impl LocalTheme {
    pub fn sync_from_provider(&mut self, cx: &gpui::App) {
        self.resolved = Some(crate::provider::MellowProvider::theme_arc(cx));
    }

    fn fallback_theme() -> &'static Theme {
        static FALLBACK: OnceLock<Theme> = OnceLock::new();
        FALLBACK.get_or_init(Theme::unspecified)
    }
}

impl std::ops::Deref for LocalTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        if let Some(resolved) = self.resolved.as_deref() {
            resolved
        } else {
            Self::fallback_theme()
        }
    }
}
