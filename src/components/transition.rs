use std::time::Duration;

use gpui::{Animation, AnimationElement, AnimationExt, ElementId, Styled};

use crate::motion::{Easing, FadeProfile};

/// Attaches a fade-in ramp to any styleable element.
pub trait FadeExt: Sized + AnimationExt + Styled + 'static {
    fn with_fade_in(self, id: impl Into<ElementId>, profile: FadeProfile) -> AnimationElement<Self> {
        if profile.is_instant() {
            // A one-frame identity animation keeps the return type uniform
            // without scheduling a visible ramp.
            return self
                .with_animation(id, Animation::new(Duration::from_millis(1)), |this, _| this);
        }

        let easing = easing_fn(profile.easing);
        let animation =
            Animation::new(Duration::from_millis(profile.duration_ms as u64)).with_easing(easing);

        self.with_animation(id, animation, move |this, delta| {
            this.opacity(faded_opacity(profile, delta))
        })
    }
}

impl<E> FadeExt for E where E: Sized + AnimationExt + Styled + 'static {}

fn easing_fn(easing: Easing) -> impl Fn(f32) -> f32 {
    move |delta| match easing {
        Easing::Linear => gpui::linear(delta),
        Easing::EaseIn => gpui::quadratic(delta),
        Easing::EaseOut => gpui::ease_out_quint()(delta),
        Easing::EaseInOut => gpui::ease_in_out(delta),
        Easing::QuintOut => gpui::ease_out_quint()(delta),
    }
}

fn faded_opacity(profile: FadeProfile, progress: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    let start = (profile.start_opacity_pct as f32 / 100.0).clamp(0.0, 1.0);
    start + (1.0 - start) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_starts_at_the_profile_opacity_and_ends_opaque() {
        let profile = FadeProfile::crossfade();
        assert_eq!(faded_opacity(profile, 0.0), 0.0);
        assert_eq!(faded_opacity(profile, 1.0), 1.0);

        let half = faded_opacity(profile, 0.5);
        assert!(half > 0.0 && half < 1.0);
    }

    #[test]
    fn fade_progress_is_clamped() {
        let profile = FadeProfile::crossfade().start_opacity_pct(40);
        assert_eq!(faded_opacity(profile, -1.0), 0.4);
        assert_eq!(faded_opacity(profile, 2.0), 1.0);
    }
}
