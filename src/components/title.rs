use gpui::{
    FontWeight, Hsla, InteractiveElement, IntoElement, ParentElement, Refineable as _,
    RenderOnce, SharedString, Styled, div,
};

use crate::id::{slot_id, stable_auto_id};
use crate::theme::{LocalTheme, TextStyleToken};

use super::text::TextAlignment;

/// A heading. Bold `title-large`, left aligned, with a heading order baked
/// into the element id so tooling can tell an `h1` from an `h3`.
#[derive(IntoElement)]
pub struct Title {
    id: SharedString,
    content: SharedString,
    color: Option<Hsla>,
    token: TextStyleToken,
    weight: Option<FontWeight>,
    alignment: TextAlignment,
    order: u8,
    max_lines: Option<usize>,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
}

impl Title {
    #[track_caller]
    pub fn new(content: impl Into<SharedString>) -> Self {
        Self {
            id: stable_auto_id("title"),
            content: content.into(),
            color: None,
            token: TextStyleToken::TitleLarge,
            weight: None,
            alignment: TextAlignment::Left,
            order: 1,
            max_lines: None,
            theme: LocalTheme::default(),
            style: gpui::StyleRefinement::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<SharedString>) -> Self {
        self.id = id.into();
        self
    }

    pub fn color(mut self, color: Hsla) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text_style(mut self, token: TextStyleToken) -> Self {
        self.token = token;
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn align(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Heading order, clamped to `1..=6`.
    pub fn order(mut self, order: u8) -> Self {
        self.order = order.clamp(1, 6);
        self
    }

    pub fn max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines.max(1));
        self
    }
}

impl Styled for Title {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Title {
    fn render(mut self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let type_style = self.theme.typography.style(self.token);
        let color = self.color.unwrap_or(self.theme.colors.on_surface);
        let weight = self.weight.unwrap_or(FontWeight::BOLD);
        let heading_id = slot_id(&self.id, &format!("h{}", self.order));

        let mut node = div()
            .id(heading_id)
            .text_size(type_style.font_size)
            .line_height(type_style.line_height)
            .font_weight(weight)
            .text_color(color);

        if let Some(family) = self.theme.typography.family.clone() {
            node = node.font_family(family);
        }

        node = match self.alignment {
            TextAlignment::Left => node.text_left(),
            TextAlignment::Center => node.text_center(),
            TextAlignment::Right => node.text_right(),
        };

        if let Some(lines) = self.max_lines {
            node = node.line_clamp(lines);
        }

        node.style().refine(&self.style);
        node.child(self.content)
    }
}
