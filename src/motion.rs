use crate::tokens::CROSSFADE_MS;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    QuintOut,
}

/// Opacity ramp applied when a piece of content first appears.
///
/// A zero duration means the content is shown immediately, with no animation
/// frame scheduled at all.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FadeProfile {
    pub duration_ms: u16,
    pub start_opacity_pct: u8,
    pub easing: Easing,
}

impl Default for FadeProfile {
    fn default() -> Self {
        Self::crossfade()
    }
}

impl FadeProfile {
    /// The standard crossfade used when media content resolves.
    pub fn crossfade() -> Self {
        Self {
            duration_ms: CROSSFADE_MS,
            start_opacity_pct: 0,
            easing: Easing::EaseInOut,
        }
    }

    /// Shows content immediately without a ramp.
    pub fn none() -> Self {
        Self {
            duration_ms: 0,
            start_opacity_pct: 100,
            easing: Easing::Linear,
        }
    }

    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn start_opacity_pct(mut self, start_opacity_pct: u8) -> Self {
        self.start_opacity_pct = start_opacity_pct.min(100);
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}
