use crate::container::ContainerBinding;
use crate::engine::Axis;
use crate::engine::CarouselApi;
use crate::engine::EngineOptions;
use crate::error::CarouselError;
use crate::error::Result;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn axis(self) -> Axis {
        match self {
            Self::Horizontal => Axis::X,
            Self::Vertical => Axis::Y,
        }
    }

    pub fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::Y => Self::Vertical,
            Axis::X => Self::Horizontal,
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

/// Read-only view of a carousel, handed to every descendant.
///
/// It is a snapshot taken by [`Carousel::context`](crate::carousel::Carousel::context): flags
/// reflect the root at that moment, while `scroll_prev`/`scroll_next` forward to the live engine.
#[derive(Clone)]
pub struct CarouselContext {
    pub(crate) container: ContainerBinding,
    pub(crate) api: Option<CarouselApi>,
    pub(crate) opts: EngineOptions,
    pub(crate) orientation: Orientation,
    pub(crate) can_scroll_prev: bool,
    pub(crate) can_scroll_next: bool,
}

impl fmt::Debug for CarouselContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselContext")
            .field("ready", &self.api.is_some())
            .field("orientation", &self.orientation)
            .field("can_scroll_prev", &self.can_scroll_prev)
            .field("can_scroll_next", &self.can_scroll_next)
            .finish()
    }
}

impl CarouselContext {
    pub fn container(&self) -> &ContainerBinding {
        &self.container
    }

    pub fn api(&self) -> Option<&CarouselApi> {
        self.api.as_ref()
    }

    pub fn opts(&self) -> &EngineOptions {
        &self.opts
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.can_scroll_prev
    }

    pub fn can_scroll_next(&self) -> bool {
        self.can_scroll_next
    }

    pub fn scroll_prev(&self) {
        if let Some(api) = &self.api {
            api.scroll_prev();
        }
    }

    pub fn scroll_next(&self) {
        if let Some(api) = &self.api {
            api.scroll_next();
        }
    }

    pub fn scroll_offset(&self) -> u32 {
        self.api.as_ref().map_or(0, |api| api.scroll_offset())
    }
}

/// The ancestry a component is rendered under.
///
/// Only a [`Carousel`](crate::carousel::Carousel) can produce a scope that carries a context;
/// [`RenderScope::detached`] models rendering outside of one.
#[derive(Clone, Debug, Default)]
pub struct RenderScope {
    carousel: Option<CarouselContext>,
}

impl RenderScope {
    pub fn detached() -> Self {
        Self::default()
    }

    pub(crate) fn within(context: CarouselContext) -> Self {
        Self {
            carousel: Some(context),
        }
    }

    pub fn carousel(&self) -> Option<&CarouselContext> {
        self.carousel.as_ref()
    }
}

/// Looks up the enclosing carousel, failing loudly when there is none.
pub fn use_carousel<'a>(
    scope: &'a RenderScope,
    component: &'static str,
) -> Result<&'a CarouselContext> {
    scope
        .carousel()
        .ok_or(CarouselError::context_missing(component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_scope_has_no_carousel() {
        let scope = RenderScope::detached();
        assert_eq!(
            use_carousel(&scope, "CarouselButton").unwrap_err(),
            CarouselError::context_missing("CarouselButton")
        );
    }

    #[test]
    fn orientation_maps_to_axis_both_ways() {
        assert_eq!(Orientation::Vertical.axis(), Axis::Y);
        assert_eq!(Orientation::from_axis(Axis::X), Orientation::Horizontal);
        assert_eq!(Orientation::from_axis(Axis::Y), Orientation::Vertical);
    }

    #[test]
    fn callbacks_without_engine_are_no_ops() {
        let ctx = CarouselContext {
            container: ContainerBinding::new(),
            api: None,
            opts: EngineOptions::default(),
            orientation: Orientation::Horizontal,
            can_scroll_prev: false,
            can_scroll_next: false,
        };
        ctx.scroll_prev();
        ctx.scroll_next();
        assert_eq!(ctx.scroll_offset(), 0);
    }
}
