//! `ratatui-carousel` is the batteries-included entry point for the carousel components.
//!
//! Everything lives in [`ratatui_carousel_core`]; this crate re-exports it under stable paths and
//! wires up the optional integrations through features:
//!
//! - `virtualizer` (default): [`virtualizer_engine::VirtualizerEngineFactory`], a ready-made
//!   scrolling engine.
//! - `crossterm`: [`crossterm_input`] conversions for crossterm events.
pub use ratatui_carousel_core::a11y;
pub use ratatui_carousel_core::carousel;
pub use ratatui_carousel_core::container;
pub use ratatui_carousel_core::content;
pub use ratatui_carousel_core::context;
pub use ratatui_carousel_core::engine;
pub use ratatui_carousel_core::error;
pub use ratatui_carousel_core::input;
pub use ratatui_carousel_core::item;
pub use ratatui_carousel_core::keymap;
pub use ratatui_carousel_core::nav;
pub use ratatui_carousel_core::render;
pub use ratatui_carousel_core::theme;

#[cfg(feature = "crossterm")]
pub use ratatui_carousel_core::crossterm_input;

#[cfg(feature = "virtualizer")]
pub use ratatui_carousel_core::virtualizer_engine;

/// The types most apps need to put a carousel on screen.
pub mod prelude {
    pub use crate::carousel::Carousel;
    pub use crate::carousel::CarouselAction;
    pub use crate::carousel::CarouselConfig;
    pub use crate::carousel::CarouselLayout;
    pub use crate::carousel::CarouselOptions;
    pub use crate::content::CarouselContent;
    pub use crate::content::ContentOptions;
    pub use crate::context::Orientation;
    pub use crate::engine::CarouselApi;
    pub use crate::engine::EngineOptions;
    pub use crate::error::CarouselError;
    pub use crate::input::EventFlow;
    pub use crate::input::InputEvent;
    pub use crate::item::CarouselItem;
    pub use crate::item::SlideBasis;
    pub use crate::nav::CarouselButton;
    pub use crate::theme::Theme;

    #[cfg(feature = "virtualizer")]
    pub use crate::virtualizer_engine::VirtualizerEngineFactory;
}
