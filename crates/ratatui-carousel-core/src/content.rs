use crate::container::ContainerLayout;
use crate::context::RenderScope;
use crate::context::use_carousel;
use crate::engine::Axis;
use crate::error::Result;
use crate::item::CarouselItem;
use crate::render;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Direction;
use ratatui::layout::Rect;
use ratatui::style::Style;

const COMPONENT: &str = "CarouselContent";

#[derive(Clone, Copy, Debug)]
pub struct ContentOptions {
    /// Cells between neighbouring slides.
    pub gap: u16,
    pub style: Style,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            gap: 1,
            style: Style::default(),
        }
    }
}

/// The clipping viewport the engine scrolls.
///
/// Every render re-measures the slides and binds the result to the carousel's container, which
/// is what lets the root create the engine and the engine react to resizes.
#[derive(Clone, Debug, Default)]
pub struct CarouselContent {
    options: ContentOptions,
}

impl CarouselContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ContentOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ContentOptions {
        &self.options
    }

    /// Row for horizontal carousels, column for vertical ones.
    pub fn direction(&self, scope: &RenderScope) -> Result<Direction> {
        let ctx = use_carousel(scope, COMPONENT)?;
        Ok(match ctx.orientation().axis() {
            Axis::X => Direction::Horizontal,
            Axis::Y => Direction::Vertical,
        })
    }

    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        scope: &RenderScope,
        items: &[CarouselItem],
        theme: &Theme,
    ) -> Result<()> {
        let ctx = use_carousel(scope, COMPONENT)?;
        let axis = ctx.orientation().axis();
        let gap = self.options.gap;
        let viewport_len = match axis {
            Axis::X => area.width,
            Axis::Y => area.height,
        };
        let sizes: Vec<u16> = items
            .iter()
            .map(|item| item.basis.resolve(viewport_len))
            .collect();

        // An empty area leaves the last measured layout in place; no engine is built for it.
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }
        ctx.container().bind(ContainerLayout {
            viewport: area,
            axis,
            slide_sizes: sizes.clone(),
            gap,
        });

        let base = theme.text_primary.patch(self.options.style);
        buf.set_style(area, base);

        let offset = ctx.scroll_offset() as i64;
        let mut start = 0i64;
        for (item, &len) in items.iter().zip(&sizes) {
            let rel = start - offset;
            start += len as i64 + gap as i64;
            if rel + len as i64 <= 0 {
                continue;
            }
            if rel >= viewport_len as i64 {
                break;
            }

            let (w, h, ox, oy) = match axis {
                Axis::X => (len, area.height, area.x as i64 + rel, area.y as i64),
                Axis::Y => (area.width, len, area.x as i64, area.y as i64 + rel),
            };
            if w == 0 || h == 0 {
                continue;
            }
            let mut scratch = Buffer::empty(Rect::new(0, 0, w, h));
            item.render(scratch.area, &mut scratch, base);
            render::blit_clipped(&scratch, ox as i32, oy as i32, area, buf);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::carousel::CarouselConfig;
    use crate::container::ContainerBinding;
    use crate::context::Orientation;
    use crate::engine::CarouselApi;
    use crate::engine::EngineConfig;
    use crate::error::CarouselError;
    use crate::item::SlideBasis;

    fn never_ready(_: &ContainerBinding, _: &EngineConfig) -> CarouselApi {
        unreachable!("engine is not created in these tests")
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    fn slides() -> Vec<CarouselItem> {
        ["A", "B", "C"]
            .into_iter()
            .map(|s| CarouselItem::new(s).with_basis(SlideBasis::Cells(3)))
            .collect()
    }

    #[test]
    fn rendering_outside_a_carousel_fails() {
        let content = CarouselContent::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 3));
        let err = content
            .render(buf.area, &mut buf, &RenderScope::detached(), &slides(), &Theme::default())
            .unwrap_err();
        assert_eq!(err, CarouselError::context_missing("CarouselContent"));
        assert!(content.direction(&RenderScope::detached()).is_err());
    }

    #[test]
    fn horizontal_slides_form_a_row_with_gaps() {
        let carousel = Carousel::new(CarouselConfig::new(), never_ready);
        let scope = carousel.scope();
        let content = CarouselContent::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 11, 1));
        content
            .render(buf.area, &mut buf, &scope, &slides(), &Theme::default())
            .unwrap();

        assert_eq!(content.direction(&scope).unwrap(), Direction::Horizontal);
        assert_eq!(row(&buf, 0), " A   B   C ");

        let bound = carousel.container().layout().unwrap();
        assert_eq!(bound.slide_sizes, vec![3, 3, 3]);
        assert_eq!(bound.gap, 1);
        assert_eq!(bound.axis, Axis::X);
    }

    #[test]
    fn vertical_slides_form_a_column() {
        let carousel = Carousel::new(
            CarouselConfig::new().with_orientation(Orientation::Vertical),
            never_ready,
        );
        let scope = carousel.scope();
        let content = CarouselContent::with_options(ContentOptions {
            gap: 0,
            ..Default::default()
        });
        let items: Vec<CarouselItem> = ["A", "B"]
            .into_iter()
            .map(|s| CarouselItem::new(s).with_basis(SlideBasis::Cells(1)))
            .collect();
        let mut buf = Buffer::empty(Rect::new(0, 0, 3, 3));
        content
            .render(buf.area, &mut buf, &scope, &items, &Theme::default())
            .unwrap();

        assert_eq!(content.direction(&scope).unwrap(), Direction::Vertical);
        assert_eq!(row(&buf, 0), " A ");
        assert_eq!(row(&buf, 1), " B ");
        assert_eq!(row(&buf, 2), "   ");
    }

    #[test]
    fn slides_past_the_viewport_are_clipped() {
        let carousel = Carousel::new(CarouselConfig::new(), never_ready);
        let scope = carousel.scope();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        CarouselContent::new()
            .render(buf.area, &mut buf, &scope, &slides(), &Theme::default())
            .unwrap();
        assert_eq!(row(&buf, 0), " A   ");
    }

    #[test]
    fn empty_area_does_not_bind_the_container() {
        let mut carousel = Carousel::new(CarouselConfig::new(), never_ready);
        let scope = carousel.scope();
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 1));
        CarouselContent::new()
            .render(Rect::new(0, 0, 0, 1), &mut buf, &scope, &slides(), &Theme::default())
            .unwrap();

        assert!(!carousel.container().is_bound());
        carousel.sync();
        assert!(!carousel.is_ready());
    }
}
