use crate::a11y::AccessibleNode;
use crate::context::CarouselContext;
use crate::context::Orientation;
use crate::context::RenderScope;
use crate::context::use_carousel;
use crate::error::Result;
use crate::input::EventFlow;
use crate::input::InputEvent;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDirection {
    Previous,
    Next,
}

impl NavDirection {
    pub fn label(self) -> &'static str {
        match self {
            Self::Previous => "Previous slide",
            Self::Next => "Next slide",
        }
    }

    /// Chevron pointing along the scroll axis.
    pub fn glyph(self, orientation: Orientation) -> &'static str {
        match (self, orientation) {
            (Self::Previous, Orientation::Horizontal) => "‹",
            (Self::Next, Orientation::Horizontal) => "›",
            (Self::Previous, Orientation::Vertical) => "˄",
            (Self::Next, Orientation::Vertical) => "˅",
        }
    }

    fn component(self) -> &'static str {
        match self {
            Self::Previous => "CarouselPrevious",
            Self::Next => "CarouselNext",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ButtonOptions {
    /// Replaces the default chevron.
    pub glyph: Option<String>,
    pub style: Style,
    pub disabled_style: Style,
}

/// Previous/next control. Disabled whenever the carousel cannot move in its direction.
#[derive(Clone, Debug)]
pub struct CarouselButton {
    direction: NavDirection,
    options: ButtonOptions,
    area: Option<Rect>,
}

impl CarouselButton {
    pub fn new(direction: NavDirection) -> Self {
        Self {
            direction,
            options: ButtonOptions::default(),
            area: None,
        }
    }

    pub fn previous() -> Self {
        Self::new(NavDirection::Previous)
    }

    pub fn next() -> Self {
        Self::new(NavDirection::Next)
    }

    pub fn with_options(mut self, options: ButtonOptions) -> Self {
        self.options = options;
        self
    }

    pub fn direction(&self) -> NavDirection {
        self.direction
    }

    /// Area of the last render, used for hit testing.
    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    pub fn is_enabled(&self, scope: &RenderScope) -> Result<bool> {
        let ctx = self.context(scope)?;
        Ok(self.enabled_in(ctx))
    }

    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        scope: &RenderScope,
        theme: &Theme,
    ) -> Result<()> {
        let ctx = self.context(scope)?;
        let enabled = self.enabled_in(ctx);
        let orientation = ctx.orientation();
        self.area = Some(area);
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }

        let style = if enabled {
            theme.control.patch(self.options.style)
        } else {
            theme.control_disabled.patch(self.options.disabled_style)
        };
        let glyph = self
            .options
            .glyph
            .clone()
            .unwrap_or_else(|| self.direction.glyph(orientation).to_string());
        render::render_text_centered(area, buf, &Text::from(glyph), style);
        Ok(())
    }

    /// Activates the control as if it were clicked. Returns whether a scroll was requested.
    pub fn press(&self, scope: &RenderScope) -> Result<bool> {
        let ctx = self.context(scope)?;
        if !self.enabled_in(ctx) {
            return Ok(false);
        }
        match self.direction {
            NavDirection::Previous => ctx.scroll_prev(),
            NavDirection::Next => ctx.scroll_next(),
        }
        Ok(true)
    }

    /// Left clicks on the last rendered area press the control. Clicks on a disabled control
    /// are swallowed without effect.
    pub fn handle_event(&self, event: &InputEvent, scope: &RenderScope) -> Result<EventFlow> {
        let ctx = self.context(scope)?;
        let InputEvent::Mouse(m) = event else {
            return Ok(EventFlow::Propagate);
        };
        let hit = m.is_left_down() && self.area.is_some_and(|area| m.is_inside(area));
        if !hit {
            return Ok(EventFlow::Propagate);
        }
        if self.enabled_in(ctx) {
            self.press(scope)?;
        }
        Ok(EventFlow::Consumed)
    }

    pub fn accessible_node(&self, scope: &RenderScope) -> Result<AccessibleNode> {
        let ctx = self.context(scope)?;
        Ok(AccessibleNode::new("button")
            .with_label(self.direction.label())
            .with_disabled(!self.enabled_in(ctx)))
    }

    fn context<'a>(&self, scope: &'a RenderScope) -> Result<&'a CarouselContext> {
        use_carousel(scope, self.direction.component())
    }

    fn enabled_in(&self, ctx: &CarouselContext) -> bool {
        match self.direction {
            NavDirection::Previous => ctx.can_scroll_prev(),
            NavDirection::Next => ctx.can_scroll_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::carousel::CarouselConfig;
    use crate::container::ContainerBinding;
    use crate::engine::CarouselApi;
    use crate::engine::EngineConfig;
    use crate::error::CarouselError;

    fn never_ready(_: &ContainerBinding, _: &EngineConfig) -> CarouselApi {
        unreachable!("container is never bound in these tests")
    }

    #[test]
    fn outside_a_carousel_every_entry_point_fails() {
        let scope = RenderScope::detached();
        let mut prev = CarouselButton::previous();
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));

        let err = prev
            .render(buf.area, &mut buf, &scope, &Theme::default())
            .unwrap_err();
        assert_eq!(err, CarouselError::context_missing("CarouselPrevious"));
        assert!(prev.press(&scope).is_err());
        assert!(
            CarouselButton::next()
                .handle_event(&InputEvent::click(0, 0), &scope)
                .is_err()
        );
    }

    #[test]
    fn controls_are_disabled_before_the_engine_exists() {
        let carousel = Carousel::new(CarouselConfig::new(), never_ready);
        let scope = carousel.scope();
        let mut prev = CarouselButton::previous();
        let mut next = CarouselButton::next();
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 1));
        prev.render(Rect::new(0, 0, 3, 1), &mut buf, &scope, &Theme::default())
            .unwrap();
        next.render(Rect::new(3, 0, 3, 1), &mut buf, &scope, &Theme::default())
            .unwrap();

        assert!(!prev.is_enabled(&scope).unwrap());
        assert!(!next.is_enabled(&scope).unwrap());
        assert!(next.accessible_node(&scope).unwrap().disabled);
        assert!(!next.press(&scope).unwrap());
        assert_eq!(buf[(1, 0)].symbol(), "‹");
        assert_eq!(buf[(4, 0)].symbol(), "›");
        assert_eq!(buf[(4, 0)].style().fg, Theme::default().control_disabled.fg);
    }

    #[test]
    fn labels_are_announced() {
        let carousel = Carousel::new(CarouselConfig::new(), never_ready);
        let scope = carousel.scope();
        let node = CarouselButton::previous().accessible_node(&scope).unwrap();
        assert_eq!(node.role, "button");
        assert_eq!(node.label.as_deref(), Some("Previous slide"));
        assert_eq!(
            CarouselButton::next()
                .accessible_node(&scope)
                .unwrap()
                .label
                .as_deref(),
            Some("Next slide")
        );
    }

    #[test]
    fn vertical_controls_point_along_the_column() {
        let carousel = Carousel::new(
            CarouselConfig::new().with_orientation(Orientation::Vertical),
            never_ready,
        );
        let scope = carousel.scope();
        let mut next = CarouselButton::next();
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 1));
        next.render(buf.area, &mut buf, &scope, &Theme::default())
            .unwrap();
        assert_eq!(buf[(1, 0)].symbol(), "˅");
        assert_eq!(scope.carousel().unwrap().orientation(), Orientation::Vertical);
    }
}
