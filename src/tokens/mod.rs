//! Raw design-token data: plain numbers and hex strings, no toolkit types.
//! The `theme` module turns these into `Pixels`/`Hsla` token sets.

pub const SPACING_STEPS: usize = 10;
pub const ELEVATION_STEPS: usize = 6;
pub const BORDER_STEPS: usize = 6;
pub const CORNER_STEPS: usize = 7;
pub const TYPE_STYLES: usize = 15;

/// Spacing steps in logical pixels, smallest to largest.
/// Strictly increasing; the theme tests hold this invariant.
pub const SPACING_PX: [f32; SPACING_STEPS] =
    [2.0, 4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0, 96.0];

/// Elevation depths in logical pixels, `none` through `level5`.
pub const ELEVATION_PX: [f32; ELEVATION_STEPS] = [0.0, 1.0, 3.0, 6.0, 8.0, 12.0];

/// Border widths in logical pixels, `none` through `width5`.
pub const BORDER_PX: [f32; BORDER_STEPS] = [0.0, 1.0, 2.0, 4.0, 8.0, 16.0];

/// Corner radii in logical pixels for the rounded shapes. The seventh shape
/// (`full`) has no radius entry because it is always perfectly round.
pub const CORNER_PX: [f32; CORNER_STEPS - 1] = [0.0, 4.0, 8.0, 12.0, 16.0, 28.0];

/// One row of the type scale: font size and line height in logical pixels
/// plus a weight in the 100..=900 convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeStyleSpec {
    pub name: &'static str,
    pub font_px: f32,
    pub line_px: f32,
    pub weight: u16,
}

const fn style(name: &'static str, font_px: f32, line_px: f32, weight: u16) -> TypeStyleSpec {
    TypeStyleSpec {
        name,
        font_px,
        line_px,
        weight,
    }
}

/// The full type scale, display down to label. Sizes follow the common
/// display/headline/title/body/label ramp.
pub const TYPE_SCALE: [TypeStyleSpec; TYPE_STYLES] = [
    style("display-large", 57.0, 64.0, 400),
    style("display-medium", 45.0, 52.0, 400),
    style("display-small", 36.0, 44.0, 400),
    style("headline-large", 32.0, 40.0, 400),
    style("headline-medium", 28.0, 36.0, 400),
    style("headline-small", 24.0, 32.0, 400),
    style("title-large", 22.0, 28.0, 400),
    style("title-medium", 16.0, 24.0, 500),
    style("title-small", 14.0, 20.0, 500),
    style("body-large", 16.0, 24.0, 400),
    style("body-medium", 14.0, 20.0, 400),
    style("body-small", 12.0, 16.0, 400),
    style("label-large", 14.0, 20.0, 500),
    style("label-medium", 12.0, 16.0, 500),
    style("label-small", 11.0, 16.0, 500),
];

/// Role colors for one scheme, as hex strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SchemeSpec {
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub primary_container: &'static str,
    pub on_primary_container: &'static str,
    pub secondary: &'static str,
    pub on_secondary: &'static str,
    pub secondary_container: &'static str,
    pub on_secondary_container: &'static str,
    pub tertiary: &'static str,
    pub on_tertiary: &'static str,
    pub tertiary_container: &'static str,
    pub on_tertiary_container: &'static str,
    pub disabled: &'static str,
    pub disabled_variant: &'static str,
    pub on_disabled: &'static str,
    pub error: &'static str,
    pub on_error: &'static str,
    pub error_container: &'static str,
    pub on_error_container: &'static str,
    pub surface: &'static str,
    pub surface_container: &'static str,
    pub on_surface: &'static str,
    pub outline: &'static str,
}

pub const LIGHT_SCHEME: SchemeSpec = SchemeSpec {
    primary: "#475d92",
    on_primary: "#ffffff",
    primary_container: "#d9e2ff",
    on_primary_container: "#001945",
    secondary: "#575e71",
    on_secondary: "#ffffff",
    secondary_container: "#dbe2f9",
    on_secondary_container: "#141b2c",
    tertiary: "#725572",
    on_tertiary: "#ffffff",
    tertiary_container: "#fdd7fa",
    on_tertiary_container: "#2a132c",
    disabled: "#e3e2e6",
    disabled_variant: "#c6c6ca",
    on_disabled: "#90909a",
    error: "#ba1a1a",
    on_error: "#ffffff",
    error_container: "#ffdad6",
    on_error_container: "#410002",
    surface: "#faf9fd",
    surface_container: "#eeedf1",
    on_surface: "#1b1b1f",
    outline: "#757780",
};

pub const DARK_SCHEME: SchemeSpec = SchemeSpec {
    primary: "#b0c6ff",
    on_primary: "#152e60",
    primary_container: "#2f4578",
    on_primary_container: "#d9e2ff",
    secondary: "#bfc6dc",
    on_secondary: "#293041",
    secondary_container: "#3f4759",
    on_secondary_container: "#dbe2f9",
    tertiary: "#dfbbdd",
    on_tertiary: "#412743",
    tertiary_container: "#593d5a",
    on_tertiary_container: "#fdd7fa",
    disabled: "#2a2a2e",
    disabled_variant: "#44444a",
    on_disabled: "#77777f",
    error: "#ffb4ab",
    on_error: "#690005",
    error_container: "#93000a",
    on_error_container: "#ffdad6",
    surface: "#121316",
    surface_container: "#1f1f23",
    on_surface: "#e3e2e6",
    outline: "#8f9099",
};

/// Crossfade duration for image loads, in milliseconds.
pub const CROSSFADE_MS: u16 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_steps_strictly_increase() {
        assert!(SPACING_PX.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn elevation_and_border_steps_never_decrease() {
        assert!(ELEVATION_PX.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(BORDER_PX.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn type_scale_names_are_unique() {
        let mut names: Vec<_> = TYPE_SCALE.iter().map(|spec| spec.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TYPE_STYLES);
    }

    #[test]
    fn schemes_disagree_on_core_roles() {
        assert_ne!(LIGHT_SCHEME.primary, DARK_SCHEME.primary);
        assert_ne!(LIGHT_SCHEME.surface, DARK_SCHEME.surface);
        assert_ne!(LIGHT_SCHEME.on_surface, DARK_SCHEME.on_surface);
    }
}
