pub mod display {
    pub use crate::components::{Icon, Text, TextAlignment, Title};
}

pub mod form {
    pub use crate::components::{
        Button, ButtonBorder, ButtonContent, ButtonStyle, ButtonVariant, PaddingAdjustment,
    };
}

pub mod media {
    pub use crate::components::{Image, ImageFit, ImageReference};
}

pub use display::*;
pub use form::*;
pub use media::*;
