//! The carousel root: owns the engine, republishes its capabilities and intercepts navigation
//! keys for the whole region.
use crate::a11y::AccessibleNode;
use crate::container::ContainerBinding;
use crate::context::CarouselContext;
use crate::context::Orientation;
use crate::context::RenderScope;
use crate::engine::Axis;
use crate::engine::CarouselApi;
use crate::engine::EngineConfig;
use crate::engine::EngineEvent;
use crate::engine::EngineFactory;
use crate::engine::EngineOptions;
use crate::engine::Listener;
use crate::engine::ListenerId;
use crate::engine::PluginHandle;
use crate::engine::ScrollEngine;
use crate::input::EventFlow;
use crate::input::InputEvent;
use crate::keymap::CarouselBindings;
use crate::nav::NavDirection;
use crate::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Widget;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;
use tracing::trace;

/// What the engine is built from. Swapping in a different config rebuilds the engine.
#[derive(Clone, Debug, Default)]
pub struct CarouselConfig {
    /// Explicit orientation. When absent, it is inferred from `opts.axis`.
    pub orientation: Option<Orientation>,
    pub opts: EngineOptions,
    pub plugins: Vec<PluginHandle>,
}

impl PartialEq for CarouselConfig {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.opts == other.opts
            && self.plugins.len() == other.plugins.len()
            && self
                .plugins
                .iter()
                .zip(&other.plugins)
                .all(|(a, b)| Rc::ptr_eq(a, b))
    }
}

impl CarouselConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_opts(mut self, opts: EngineOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn with_plugin(mut self, plugin: PluginHandle) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// The axis handed to the engine: an explicit orientation wins over `opts.axis`.
    pub fn axis(&self) -> Axis {
        match self.orientation {
            Some(o) => o.axis(),
            None => self.opts.axis.unwrap_or_default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
            .unwrap_or_else(|| Orientation::from_axis(self.opts.axis.unwrap_or_default()))
    }

    pub fn engine_config(&self) -> EngineConfig {
        let axis = self.axis();
        let mut options = self.opts.clone();
        options.axis = Some(axis);
        EngineConfig {
            axis,
            options,
            plugins: self.plugins.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CarouselOptions {
    pub bindings: CarouselBindings,
    pub show_border: bool,
    pub title: Option<String>,
    pub style: Style,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            bindings: CarouselBindings::default(),
            show_border: true,
            title: None,
            style: Style::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    None,
    Redraw,
}

#[derive(Debug, Default)]
struct Capabilities {
    prev: Cell<bool>,
    next: Cell<bool>,
    revision: Cell<u64>,
}

impl Capabilities {
    fn on_select(&self, engine: Option<&dyn ScrollEngine>) {
        let Some(engine) = engine else {
            return;
        };
        self.set(engine.can_scroll_prev(), engine.can_scroll_next());
    }

    fn reset(&self) {
        self.set(false, false);
    }

    fn set(&self, prev: bool, next: bool) {
        if self.prev.get() == prev && self.next.get() == next {
            return;
        }
        self.prev.set(prev);
        self.next.set(next);
        self.revision.set(self.revision.get() + 1);
        trace!(
            can_scroll_prev = prev,
            can_scroll_next = next,
            "carousel capabilities changed"
        );
    }
}

/// Keeps `on_select` attached to both engine events; detaches both on drop.
struct Subscription {
    api: CarouselApi,
    ids: [(EngineEvent, ListenerId); 2],
}

impl Subscription {
    fn attach(api: &CarouselApi, caps: &Rc<Capabilities>) -> Self {
        let weak = Rc::downgrade(caps);
        let listener: Listener = Rc::new(move |engine: &dyn ScrollEngine| {
            if let Some(caps) = weak.upgrade() {
                caps.on_select(Some(engine));
            }
        });
        let ids = EngineEvent::ALL.map(|event| (event, api.on(event, listener.clone())));
        Self {
            api: api.clone(),
            ids,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for (event, id) in self.ids {
            self.api.off(event, id);
        }
        debug!("carousel engine listeners detached");
    }
}

enum EngineState {
    Uninitialized,
    Ready {
        api: CarouselApi,
        _subscription: Subscription,
    },
}

/// Root of a carousel.
///
/// Rendering is driven by the host:
///
/// 1. [`Carousel::render`] paints the region and returns its inner area.
/// 2. Descendants (content, buttons) render against [`Carousel::scope`].
/// 3. [`Carousel::sync`] creates the engine once the content region has bound its container and
///    reports whether anything observable changed.
///
/// Input goes to [`Carousel::handle_event`] first; only events it returns as
/// [`EventFlow::Propagate`] should reach the descendants.
pub struct Carousel {
    config: CarouselConfig,
    options: CarouselOptions,
    factory: Box<dyn EngineFactory>,
    container: ContainerBinding,
    engine: EngineState,
    caps: Rc<Capabilities>,
    set_api: Option<Box<dyn FnMut(CarouselApi)>>,
    focused: bool,
    area: Option<Rect>,
    seen_ready: bool,
    seen_revision: u64,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("ready", &self.is_ready())
            .field("can_scroll_prev", &self.can_scroll_prev())
            .field("can_scroll_next", &self.can_scroll_next())
            .field("focused", &self.focused)
            .finish()
    }
}

impl Carousel {
    pub const ROLE: &'static str = "region";
    pub const ROLE_DESCRIPTION: &'static str = "carousel";

    pub fn new(config: CarouselConfig, factory: impl EngineFactory + 'static) -> Self {
        Self::with_options(config, factory, CarouselOptions::default())
    }

    pub fn with_options(
        config: CarouselConfig,
        factory: impl EngineFactory + 'static,
        options: CarouselOptions,
    ) -> Self {
        Self {
            config,
            options,
            factory: Box::new(factory),
            container: ContainerBinding::new(),
            engine: EngineState::Uninitialized,
            caps: Rc::new(Capabilities::default()),
            set_api: None,
            focused: false,
            area: None,
            seen_ready: false,
            seen_revision: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration. A config that compares unequal tears the engine down; it is
    /// rebuilt on the next [`Carousel::sync`].
    pub fn set_config(&mut self, config: CarouselConfig) {
        if config == self.config {
            return;
        }
        debug!(axis = ?config.axis(), "carousel config changed");
        self.config = config;
        self.teardown();
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options;
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation()
    }

    /// Registers the host's API sink. It is called right away if the engine already exists, and
    /// again for every engine created later.
    pub fn set_api(&mut self, sink: impl FnMut(CarouselApi) + 'static) {
        self.set_api = Some(Box::new(sink));
        self.notify_api();
    }

    pub fn clear_api_sink(&mut self) {
        self.set_api = None;
    }

    pub fn api(&self) -> Option<&CarouselApi> {
        match &self.engine {
            EngineState::Ready { api, .. } => Some(api),
            EngineState::Uninitialized => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.engine, EngineState::Ready { .. })
    }

    pub fn container(&self) -> &ContainerBinding {
        &self.container
    }

    pub fn can_scroll_prev(&self) -> bool {
        self.caps.prev.get()
    }

    pub fn can_scroll_next(&self) -> bool {
        self.caps.next.get()
    }

    /// Bumped every time either capability flag changes.
    pub fn revision(&self) -> u64 {
        self.caps.revision.get()
    }

    pub fn scroll_prev(&self) {
        if let Some(api) = self.api() {
            api.scroll_prev();
        }
    }

    pub fn scroll_next(&self) {
        if let Some(api) = self.api() {
            api.scroll_next();
        }
    }

    pub fn scroll(&self, direction: NavDirection) {
        match direction {
            NavDirection::Previous => self.scroll_prev(),
            NavDirection::Next => self.scroll_next(),
        }
    }

    pub fn context(&self) -> CarouselContext {
        CarouselContext {
            container: self.container.clone(),
            api: self.api().cloned(),
            opts: self.config.opts.clone(),
            orientation: self.orientation(),
            can_scroll_prev: self.can_scroll_prev(),
            can_scroll_next: self.can_scroll_next(),
        }
    }

    pub fn scope(&self) -> RenderScope {
        RenderScope::within(self.context())
    }

    /// Brings the engine up once the container is bound and reports whether the host should
    /// redraw.
    pub fn sync(&mut self) -> CarouselAction {
        if !self.is_ready() && self.container.is_bound() {
            self.mount_engine();
        }

        let ready = self.is_ready();
        let revision = self.revision();
        if ready == self.seen_ready && revision == self.seen_revision {
            return CarouselAction::None;
        }
        self.seen_ready = ready;
        self.seen_revision = revision;
        CarouselAction::Redraw
    }

    /// Releases the engine and its listeners. The carousel can be mounted again by rendering its
    /// content and calling [`Carousel::sync`].
    pub fn unmount(&mut self) {
        self.teardown();
        self.container.unbind();
        self.area = None;
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Capture-phase handler for the whole region.
    ///
    /// Navigation keys are consumed while the region is focused, whichever descendant the host
    /// routes input to afterwards. Left clicks move focus into or out of the last rendered area
    /// and always propagate so the descendants still see them.
    pub fn handle_event(&mut self, event: &InputEvent) -> EventFlow {
        match event {
            InputEvent::FocusGained => {
                self.focused = true;
                EventFlow::Propagate
            }
            InputEvent::FocusLost => {
                self.focused = false;
                EventFlow::Propagate
            }
            InputEvent::Mouse(m) => {
                if m.is_left_down() {
                    self.focused = self.area.is_some_and(|area| m.is_inside(area));
                }
                EventFlow::Propagate
            }
            InputEvent::Key(key) => {
                if !self.focused {
                    return EventFlow::Propagate;
                }
                match self.options.bindings.action_for(key) {
                    Some(direction) => {
                        trace!(?direction, ready = self.is_ready(), "carousel key");
                        self.scroll(direction);
                        EventFlow::Consumed
                    }
                    None => EventFlow::Propagate,
                }
            }
        }
    }

    /// Paints the region frame and returns the area left for descendants.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) -> Rect {
        self.area = Some(area);
        if area.width == 0 || area.height == 0 {
            return area;
        }

        let style = theme.text_primary.patch(self.options.style);
        if !self.options.show_border {
            buf.set_style(area, style);
            return area;
        }

        let border_style = if self.focused {
            theme.border_focused
        } else {
            theme.border
        };
        let mut block = Block::bordered().style(style).border_style(border_style);
        if let Some(title) = &self.options.title {
            block = block.title(title.as_str());
        }
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    }

    pub fn accessible_node(&self) -> AccessibleNode {
        let node = AccessibleNode::new(Self::ROLE).with_role_description(Self::ROLE_DESCRIPTION);
        match &self.options.title {
            Some(title) => node.with_label(title.clone()),
            None => node,
        }
    }

    fn mount_engine(&mut self) {
        let config = self.config.engine_config();
        let api = self.factory.create(&self.container, &config);
        debug!(
            axis = ?config.axis,
            plugins = config.plugins.len(),
            "carousel engine ready"
        );

        let subscription = Subscription::attach(&api, &self.caps);
        self.caps.on_select(Some(api.as_ref()));
        self.engine = EngineState::Ready {
            api,
            _subscription: subscription,
        };
        self.notify_api();
    }

    fn teardown(&mut self) {
        let previous = std::mem::replace(&mut self.engine, EngineState::Uninitialized);
        if matches!(previous, EngineState::Ready { .. }) {
            debug!("carousel engine released");
        }
        drop(previous);
        self.caps.reset();
    }

    fn notify_api(&mut self) {
        let EngineState::Ready { api, .. } = &self.engine else {
            return;
        };
        if let Some(sink) = self.set_api.as_mut() {
            sink(api.clone());
        }
    }
}

/// Where the region's parts go: controls sit on the leading and trailing edge of the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselLayout {
    pub prev: Rect,
    pub content: Rect,
    pub next: Rect,
}

impl CarouselLayout {
    pub const CONTROL_WIDTH: u16 = 3;
    pub const CONTROL_HEIGHT: u16 = 1;

    pub fn split(area: Rect, orientation: Orientation) -> Self {
        let [prev, content, next] = match orientation {
            Orientation::Horizontal => Layout::horizontal([
                Constraint::Length(Self::CONTROL_WIDTH),
                Constraint::Min(0),
                Constraint::Length(Self::CONTROL_WIDTH),
            ])
            .areas(area),
            Orientation::Vertical => Layout::vertical([
                Constraint::Length(Self::CONTROL_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(Self::CONTROL_HEIGHT),
            ])
            .areas(area),
        };
        Self {
            prev,
            content,
            next,
        }
    }
}
