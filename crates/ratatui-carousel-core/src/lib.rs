//! `ratatui-carousel-core` provides the pieces of a navigable, multi-slide carousel for terminal
//! UIs.
//!
//! The crate does not scroll anything on its own. Scrolling, snapping and measuring belong to a
//! [`engine::ScrollEngine`]; the components here coordinate around one:
//!
//! - [`carousel::Carousel`]: the root. Owns the engine, mirrors its `can_scroll_prev` /
//!   `can_scroll_next` state and turns `←`/`→` into navigation for the whole region.
//! - [`content::CarouselContent`]: the viewport. Binds the container the engine measures and lays
//!   slides out in a row or column.
//! - [`item::CarouselItem`]: one slide.
//! - [`nav::CarouselButton`]: previous/next controls that disable themselves at the ends.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: you drive input + rendering from your app.
//! - Single-threaded: the engine handle is an `Rc`, listeners are plain closures.
//! - Explicit context: descendants receive a [`context::RenderScope`] from the root and fail with
//!   [`error::CarouselError::ContextMissing`] when rendered without one.
//!
//! ## Frame loop
//!
//! ```no_run
//! # use ratatui::buffer::Buffer;
//! # use ratatui::layout::Rect;
//! # use ratatui_carousel_core::carousel::{Carousel, CarouselConfig, CarouselLayout};
//! # use ratatui_carousel_core::content::CarouselContent;
//! # use ratatui_carousel_core::item::CarouselItem;
//! # use ratatui_carousel_core::nav::CarouselButton;
//! # use ratatui_carousel_core::theme::Theme;
//! # use ratatui_carousel_core::virtualizer_engine::VirtualizerEngineFactory;
//! # fn frame(area: Rect, buf: &mut Buffer) -> ratatui_carousel_core::error::Result<()> {
//! let theme = Theme::default();
//! let items = vec![CarouselItem::new("one"), CarouselItem::new("two")];
//! let mut carousel = Carousel::new(CarouselConfig::new(), VirtualizerEngineFactory);
//! let (content, mut prev, mut next) =
//!     (CarouselContent::new(), CarouselButton::previous(), CarouselButton::next());
//!
//! let inner = carousel.render(area, buf, &theme);
//! let layout = CarouselLayout::split(inner, carousel.orientation());
//! let scope = carousel.scope();
//! content.render(layout.content, buf, &scope, &items, &theme)?;
//! prev.render(layout.prev, buf, &scope, &theme)?;
//! next.render(layout.next, buf, &scope, &theme)?;
//! carousel.sync();
//! # Ok(())
//! # }
//! ```
pub mod a11y;
pub mod theme;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
pub mod render;

pub mod container;
pub mod context;
pub mod engine;
pub mod error;

#[cfg(feature = "virtualizer")]
pub mod virtualizer_engine;

pub mod carousel;
pub mod content;
pub mod item;
pub mod nav;
