use gpui::{
    Hsla, InteractiveElement, IntoElement, ParentElement, Refineable as _, RenderOnce,
    SharedString, Styled, div,
};

use crate::id::stable_auto_id;
use crate::theme::{LocalTheme, TextStyleToken};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Body copy styled through the typography scale.
///
/// Defaults to the `body-small` style, centered, in the on-surface color of
/// the active theme. Every default can be overridden per instance.
#[derive(IntoElement)]
pub struct Text {
    id: SharedString,
    content: SharedString,
    color: Option<Hsla>,
    token: TextStyleToken,
    alignment: TextAlignment,
    max_lines: Option<usize>,
    theme: LocalTheme,
    style: gpui::StyleRefinement,
}

impl Text {
    #[track_caller]
    pub fn new(content: impl Into<SharedString>) -> Self {
        Self {
            id: stable_auto_id("text"),
            content: content.into(),
            color: None,
            token: TextStyleToken::BodySmall,
            alignment: TextAlignment::default(),
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

    pub fn align(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Clamps the content to `lines` lines, ending with an ellipsis.
    pub fn max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines.max(1));
        self
    }
}

impl Styled for Text {
    fn style(&mut self) -> &mut gpui::StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for Text {
    fn render(mut self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        self.theme.sync_from_provider(cx);
        let type_style = self.theme.typography.style(self.token);
        let color = self.color.unwrap_or(self.theme.colors.on_surface);

        let mut node = div()
            .id(self.id.clone())
            .text_size(type_style.font_size)
            .line_height(type_style.line_height)
            .font_weight(type_style.weight)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_centered_body_small_in_the_surface_color() {
        let text = Text::new("hello");
        assert_eq!(text.token, TextStyleToken::BodySmall);
        assert_eq!(text.alignment, TextAlignment::Center);
        assert!(text.color.is_none());
        assert!(text.max_lines.is_none());
    }

    #[test]
    fn builders_override_each_default_independently() {
        let text = Text::new("hello")
            .text_style(TextStyleToken::HeadlineMedium)
            .align(TextAlignment::Right)
            .color(gpui::red());
        assert_eq!(text.token, TextStyleToken::HeadlineMedium);
        assert_eq!(text.alignment, TextAlignment::Right);
        assert_eq!(text.color, Some(gpui::red()));
    }

    #[test]
    fn max_lines_has_a_floor_of_one() {
        let text = Text::new("hello").max_lines(0);
        assert_eq!(text.max_lines, Some(1));
    }
}
