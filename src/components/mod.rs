mod button;
mod icon;
mod image;
mod text;
mod title;
mod transition;
pub(crate) mod utils;

pub use button::{
    Button, ButtonBorder, ButtonContent, ButtonStyle, ButtonVariant, PaddingAdjustment,
};
pub use icon::Icon;
pub use image::{Image, ImageFit, ImageReference};
pub use text::{Text, TextAlignment};
pub use title::Title;
pub use transition::FadeExt;

#[cfg(test)]
mod test_behavior_matrix;
#[cfg(test)]
mod test_component_smoke;
