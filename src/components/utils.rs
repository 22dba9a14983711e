use std::rc::Rc;

use gpui::{ClickEvent, Hsla, Pixels, StatefulInteractiveElement, Styled, Window, px};

use crate::theme::Shape;

pub type PressHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut gpui::App)>;

#[derive(Clone, Default)]
pub struct InteractionStyles {
    pub hover: Option<gpui::StyleRefinement>,
    pub active: Option<gpui::StyleRefinement>,
}

impl InteractionStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hover(mut self, value: gpui::StyleRefinement) -> Self {
        self.hover = Some(value);
        self
    }

    pub fn active(mut self, value: gpui::StyleRefinement) -> Self {
        self.active = Some(value);
        self
    }
}

pub fn interaction_style(
    apply: impl FnOnce(gpui::StyleRefinement) -> gpui::StyleRefinement,
) -> gpui::StyleRefinement {
    apply(gpui::StyleRefinement::default())
}

pub fn apply_interaction_styles<T>(mut node: T, styles: InteractionStyles) -> T
where
    T: StatefulInteractiveElement,
{
    if let Some(hover_style) = styles.hover {
        node = node.hover(move |_| hover_style);
    }

    if let Some(active_style) = styles.active {
        node = node.active(move |_| active_style);
    }

    node
}

/// Hover shifts the container toward white, press toward black, so the same
/// treatment reads on both light and dark surfaces.
pub fn pressable_surface_styles(bg: Hsla) -> InteractionStyles {
    let hover_bg = bg.blend(gpui::white().opacity(0.06));
    let active_bg = bg.blend(gpui::black().opacity(0.12));

    InteractionStyles::new()
        .hover(interaction_style(move |style| style.bg(hover_bg)))
        .active(interaction_style(move |style| style.bg(active_bg)))
}

/// Applies a corner token, either a finite radius or a full stadium clip.
pub fn apply_shape<T: Styled>(node: T, shape: Shape) -> T {
    match shape {
        Shape::Rounded(radius) => node.rounded(radius),
        Shape::Round => node.rounded_full(),
    }
}

fn scale_factor(window: &Window) -> f32 {
    window.scale_factor().max(f32::EPSILON)
}

pub fn snap_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() {
        return px(0.0);
    }
    let scale = scale_factor(window);
    px((logical_px * scale).round() / scale)
}

pub fn hairline_px(window: &Window) -> Pixels {
    px(1.0 / scale_factor(window))
}

/// Snaps a border width to the device pixel grid, never thinner than one
/// device pixel for a positive request.
pub fn quantized_stroke_px(window: &Window, logical_px: f32) -> Pixels {
    if !logical_px.is_finite() || logical_px <= 0.0 {
        return px(0.0);
    }
    let snapped = snap_px(window, logical_px);
    if f32::from(snapped) > 0.0 {
        snapped
    } else {
        hairline_px(window)
    }
}
