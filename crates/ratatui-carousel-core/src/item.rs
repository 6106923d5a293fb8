use crate::a11y::AccessibleNode;
use crate::render;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;

/// How much of the viewport one slide takes along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SlideBasis {
    #[default]
    Full,
    Cells(u16),
    /// Percentage of the viewport, clamped to `1..=100`.
    Percent(u16),
}

impl SlideBasis {
    /// Fixed slide length for a viewport of `viewport_len` cells. Never zero for a non-empty
    /// viewport; slides neither grow to fill leftover space nor shrink to fit.
    pub fn resolve(self, viewport_len: u16) -> u16 {
        let len = match self {
            Self::Full => viewport_len,
            Self::Cells(n) => n,
            Self::Percent(p) => {
                let p = p.clamp(1, 100) as u32;
                (viewport_len as u32 * p / 100) as u16
            }
        };
        if viewport_len == 0 { 0 } else { len.max(1) }
    }
}

/// One slide. Purely structural: content and size, no state.
#[derive(Clone, Debug, Default)]
pub struct CarouselItem {
    pub content: Text<'static>,
    pub basis: SlideBasis,
    pub style: Style,
}

impl CarouselItem {
    pub const ROLE: &'static str = "group";
    pub const ROLE_DESCRIPTION: &'static str = "slide";

    pub fn new(content: impl Into<Text<'static>>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_basis(mut self, basis: SlideBasis) -> Self {
        self.basis = basis;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, base: Style) {
        let style = base.patch(self.style);
        buf.set_style(area, style);
        render::render_text_centered(area, buf, &self.content, style);
    }

    pub fn accessible_node(&self) -> AccessibleNode {
        AccessibleNode::new(Self::ROLE).with_role_description(Self::ROLE_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_fixed_and_never_zero() {
        assert_eq!(SlideBasis::Full.resolve(20), 20);
        assert_eq!(SlideBasis::Cells(7).resolve(20), 7);
        assert_eq!(SlideBasis::Cells(30).resolve(20), 30);
        assert_eq!(SlideBasis::Percent(50).resolve(20), 10);
        assert_eq!(SlideBasis::Percent(1).resolve(20), 1);
        assert_eq!(SlideBasis::Cells(0).resolve(20), 1);
        assert_eq!(SlideBasis::Full.resolve(0), 0);
    }

    #[test]
    fn slide_is_announced_as_group() {
        let node = CarouselItem::new("a").accessible_node();
        assert_eq!(node.role, "group");
        assert_eq!(node.role_description, Some("slide"));
    }
}
