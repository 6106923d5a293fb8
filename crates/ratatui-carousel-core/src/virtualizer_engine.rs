//! Reference [`ScrollEngine`] backed by the `virtualizer` crate.
//!
//! Slides snap one at a time to the start of the viewport and the track never scrolls past its
//! end. Per-slide offsets and the total track size come from [`Virtualizer`]; this module only
//! translates between it and the carousel's engine seam.
use crate::container::ContainerBinding;
use crate::container::ContainerLayout;
use crate::container::WatchId;
use crate::engine::CarouselApi;
use crate::engine::EngineConfig;
use crate::engine::EngineEvent;
use crate::engine::EngineFactory;
use crate::engine::Listener;
use crate::engine::ListenerId;
use crate::engine::ListenerSet;
use crate::engine::ScrollEngine;
use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use virtualizer::Align;
use virtualizer::Virtualizer;
use virtualizer::VirtualizerOptions;

/// Option key for the slide selected when the engine starts.
pub const START_INDEX: &str = "start_index";

struct Track {
    virtualizer: Virtualizer,
    /// Leading edge of each slide along the track.
    starts: Vec<u64>,
    max_offset: u64,
    selected: usize,
}

impl Track {
    fn build(layout: Option<&ContainerLayout>, selected: usize) -> Self {
        let (sizes, gap, viewport) = match layout {
            Some(l) => (
                l.slide_sizes.iter().map(|&s| s as u32).collect::<Vec<u32>>(),
                l.gap as u32,
                l.viewport_len() as u32,
            ),
            None => (Vec::new(), 0, 0),
        };
        let count = sizes.len();
        let starts = sizes
            .iter()
            .scan(0u64, |next, &size| {
                let start = *next;
                *next += size as u64 + gap as u64;
                Some(start)
            })
            .collect();

        let mut opts = VirtualizerOptions::new(count, move |i| sizes.get(i).copied().unwrap_or(1));
        opts.overscan = 0;
        let mut virtualizer = Virtualizer::new(opts);
        virtualizer.set_viewport_size(viewport);
        virtualizer.set_gap(gap);
        let max_offset = virtualizer.total_size().saturating_sub(viewport as u64);

        let mut track = Self {
            virtualizer,
            starts,
            max_offset,
            selected: 0,
        };
        track.select(selected);
        track
    }

    fn offset(&self) -> u64 {
        self.virtualizer.scroll_offset()
    }

    fn can_prev(&self) -> bool {
        self.offset() > 0
    }

    fn can_next(&self) -> bool {
        self.offset() < self.max_offset
    }

    fn count(&self) -> usize {
        self.starts.len()
    }

    fn select(&mut self, index: usize) {
        if self.starts.is_empty() {
            self.virtualizer.set_scroll_offset(0);
            self.selected = 0;
            return;
        }

        let index = index.min(self.count() - 1);
        self.virtualizer.scroll_to_index(index, Align::Start);
        let offset = self.virtualizer.scroll_offset().min(self.max_offset);
        self.virtualizer.set_scroll_offset(offset);
        self.selected = index;

        // Every slide starting at or past the end of the scroll range rests at the same offset.
        // The first of them stays selected so a step back lands on the slide before it.
        if offset == self.max_offset {
            if let Some(first) = self.starts.iter().position(|&s| s >= self.max_offset) {
                self.selected = first.min(index);
            }
        }
    }
}

pub struct VirtualizerEngine {
    container: ContainerBinding,
    track: RefCell<Track>,
    listeners: ListenerSet,
    watch: Cell<Option<WatchId>>,
}

impl VirtualizerEngine {
    fn new(container: ContainerBinding, config: &EngineConfig) -> Self {
        let start_index = config
            .options
            .get(START_INDEX)
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(0);
        let track = Track::build(container.layout().as_ref(), start_index);
        Self {
            container,
            track: RefCell::new(track),
            listeners: ListenerSet::new(),
            watch: Cell::new(None),
        }
    }

    pub fn slide_count(&self) -> usize {
        self.track.borrow().count()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn reinit(&self, layout: &ContainerLayout) {
        {
            let mut track = self.track.borrow_mut();
            let selected = track.selected;
            *track = Track::build(Some(layout), selected);
        }
        debug!(
            slides = layout.slide_count(),
            viewport = layout.viewport_len(),
            "virtualizer engine re-measured"
        );
        self.listeners.emit(EngineEvent::ReInit, self);
    }

    fn step(&self, forward: bool) {
        let moved = {
            let mut track = self.track.borrow_mut();
            if forward && track.can_next() {
                let target = track.selected + 1;
                track.select(target);
                true
            } else if !forward && track.can_prev() {
                let target = track.selected.saturating_sub(1);
                track.select(target);
                true
            } else {
                false
            }
        };
        if moved {
            self.listeners.emit(EngineEvent::Select, self);
        }
    }
}

impl ScrollEngine for VirtualizerEngine {
    fn scroll_prev(&self) {
        self.step(false);
    }

    fn scroll_next(&self) {
        self.step(true);
    }

    fn can_scroll_prev(&self) -> bool {
        self.track.borrow().can_prev()
    }

    fn can_scroll_next(&self) -> bool {
        self.track.borrow().can_next()
    }

    fn scroll_offset(&self) -> u32 {
        self.track.borrow().offset().min(u32::MAX as u64) as u32
    }

    fn selected_snap(&self) -> usize {
        self.track.borrow().selected
    }

    fn on(&self, event: EngineEvent, listener: Listener) -> ListenerId {
        self.listeners.add(event, listener)
    }

    fn off(&self, event: EngineEvent, id: ListenerId) {
        self.listeners.remove(event, id);
    }
}

impl Drop for VirtualizerEngine {
    fn drop(&mut self) {
        if let Some(id) = self.watch.take() {
            self.container.unwatch(id);
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct VirtualizerEngineFactory;

impl EngineFactory for VirtualizerEngineFactory {
    fn create(&self, container: &ContainerBinding, config: &EngineConfig) -> CarouselApi {
        let engine = Rc::new(VirtualizerEngine::new(container.clone(), config));
        let weak = Rc::downgrade(&engine);
        let id = container.watch(move |layout| {
            if let Some(engine) = weak.upgrade() {
                engine.reinit(layout);
            }
        });
        engine.watch.set(Some(id));

        for plugin in &config.plugins {
            debug!(plugin = plugin.name(), "initialising engine plugin");
            plugin.init(engine.as_ref());
        }
        engine
    }
}
