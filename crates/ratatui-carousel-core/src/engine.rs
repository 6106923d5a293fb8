//! The seam between the carousel components and the scrolling engine that actually moves slides.
//!
//! The carousel never scrolls anything itself. An engine is created by an [`EngineFactory`] once
//! the content region has measured its container, and from then on the carousel only talks to it
//! through [`ScrollEngine`]: two navigation calls, two capability queries, the current offset for
//! painting, and `on`/`off` notifications.
use crate::container::ContainerBinding;
use std::cell::Cell;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineEvent {
    /// The selected snap changed.
    Select,
    /// The engine re-measured its container and rebuilt its snaps.
    ReInit,
}

impl EngineEvent {
    pub const ALL: [EngineEvent; 2] = [EngineEvent::Select, EngineEvent::ReInit];

    pub fn name(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::ReInit => "reInit",
        }
    }
}

/// Engine options, passed through to the engine as-is apart from `axis`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub axis: Option<Axis>,
    pub values: BTreeMap<String, String>,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = Some(axis);
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// An opaque engine extension (autoplay, wheel gestures, ...).
///
/// The carousel only carries plugins from its configuration to the engine; what `init` does is
/// up to the engine and the plugin.
pub trait EnginePlugin: fmt::Debug {
    fn name(&self) -> &str;

    fn init(&self, _engine: &dyn ScrollEngine) {}
}

pub type PluginHandle = Rc<dyn EnginePlugin>;

/// Everything an engine is created from.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub axis: Axis,
    pub options: EngineOptions,
    pub plugins: Vec<PluginHandle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

pub type Listener = Rc<dyn Fn(&dyn ScrollEngine)>;

/// A running scrolling engine.
///
/// Methods take `&self`: the engine is shared between the carousel, its listeners and the host,
/// so implementations keep their mutable state behind `Cell`/`RefCell`. They must release those
/// borrows before invoking listeners, because listeners call straight back into
/// `can_scroll_prev`/`can_scroll_next`.
pub trait ScrollEngine {
    fn scroll_prev(&self);

    fn scroll_next(&self);

    fn can_scroll_prev(&self) -> bool;

    fn can_scroll_next(&self) -> bool;

    /// Current translation of the slide track along the scroll axis, in cells.
    fn scroll_offset(&self) -> u32 {
        0
    }

    fn selected_snap(&self) -> usize {
        0
    }

    fn on(&self, event: EngineEvent, listener: Listener) -> ListenerId;

    fn off(&self, event: EngineEvent, id: ListenerId);
}

/// The handle hosts receive through `set_api`.
pub type CarouselApi = Rc<dyn ScrollEngine>;

pub trait EngineFactory {
    fn create(&self, container: &ContainerBinding, config: &EngineConfig) -> CarouselApi;
}

impl<F> EngineFactory for F
where
    F: Fn(&ContainerBinding, &EngineConfig) -> CarouselApi,
{
    fn create(&self, container: &ContainerBinding, config: &EngineConfig) -> CarouselApi {
        self(container, config)
    }
}

/// Listener bookkeeping for engine implementations.
///
/// `emit` snapshots the listener list before calling out, so listeners may subscribe or
/// unsubscribe while being notified.
#[derive(Default)]
pub struct ListenerSet {
    entries: RefCell<Vec<(EngineEvent, ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.entries.borrow().len())
            .finish()
    }
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, event: EngineEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.entries.borrow_mut().push((event, id, listener));
        id
    }

    pub fn remove(&self, event: EngineEvent, id: ListenerId) {
        self.entries
            .borrow_mut()
            .retain(|(e, i, _)| !(*e == event && *i == id));
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn count(&self, event: EngineEvent) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(e, _, _)| *e == event)
            .count()
    }

    pub fn emit(&self, event: EngineEvent, engine: &dyn ScrollEngine) {
        let targets: Vec<Listener> = self
            .entries
            .borrow()
            .iter()
            .filter(|(e, _, _)| *e == event)
            .map(|(_, _, l)| l.clone())
            .collect();
        for listener in targets {
            listener(engine);
        }
    }
}
