pub use crate::application::MellowApplication;
pub use crate::contracts::Disableable;
pub use crate::loader::ImageLoaderConfig;
pub use crate::motion::{Easing, FadeProfile};
pub use crate::provider::{MellowProvider, ThemeMode};
pub use crate::theme::{
    Appearance, BorderScale, ColorScheme, Elevation, ElevationScale, LocalTheme, Shape,
    ShapeScale, SpacingScale, TextStyleToken, Theme, TypeStyle, TypographyScale,
};
pub use crate::widgets::{
    Button, ButtonBorder, ButtonContent, ButtonStyle, ButtonVariant, Icon, Image, ImageFit,
    ImageReference, PaddingAdjustment, Text, TextAlignment, Title,
};
