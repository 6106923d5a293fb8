use crate::engine::Axis;
use ratatui::layout::Rect;
use std::cell::Cell;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// What the content region measured on its last render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerLayout {
    /// The clipping viewport the slides scroll inside.
    pub viewport: Rect,
    pub axis: Axis,
    /// Slide sizes along `axis`, in cells.
    pub slide_sizes: Vec<u16>,
    pub gap: u16,
}

impl ContainerLayout {
    pub fn viewport_len(&self) -> u16 {
        match self.axis {
            Axis::X => self.viewport.width,
            Axis::Y => self.viewport.height,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slide_sizes.len()
    }

    /// Length of the whole slide track, gaps included.
    pub fn track_len(&self) -> u32 {
        let slides: u32 = self.slide_sizes.iter().map(|&s| s as u32).sum();
        let gaps = self.slide_sizes.len().saturating_sub(1) as u32 * self.gap as u32;
        slides + gaps
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

type Watcher = Rc<dyn Fn(&ContainerLayout)>;

#[derive(Default)]
struct BindingInner {
    layout: RefCell<Option<ContainerLayout>>,
    watchers: RefCell<Vec<(WatchId, Watcher)>>,
    next_id: Cell<u64>,
}

/// Shared handle to the element the engine scrolls.
///
/// The carousel root creates the binding, the content region fills it in while rendering and the
/// engine reads it (and watches it for resizes). Clones share the same slot.
#[derive(Clone, Default)]
pub struct ContainerBinding {
    inner: Rc<BindingInner>,
}

impl fmt::Debug for ContainerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerBinding")
            .field("layout", &self.inner.layout.borrow())
            .field("watchers", &self.inner.watchers.borrow().len())
            .finish()
    }
}

impl ContainerBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_bound(&self) -> bool {
        self.inner.layout.borrow().is_some()
    }

    pub fn layout(&self) -> Option<ContainerLayout> {
        self.inner.layout.borrow().clone()
    }

    /// Stores a freshly measured layout. Watchers are notified only when it differs from the
    /// previous measurement; returns whether it did.
    pub fn bind(&self, layout: ContainerLayout) -> bool {
        {
            let mut slot = self.inner.layout.borrow_mut();
            if slot.as_ref() == Some(&layout) {
                return false;
            }
            *slot = Some(layout.clone());
        }

        let watchers: Vec<Watcher> = self
            .inner
            .watchers
            .borrow()
            .iter()
            .map(|(_, w)| w.clone())
            .collect();
        for w in watchers {
            w(&layout);
        }
        true
    }

    pub fn unbind(&self) {
        self.inner.layout.borrow_mut().take();
    }

    pub fn watch(&self, f: impl Fn(&ContainerLayout) + 'static) -> WatchId {
        let id = WatchId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.watchers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    pub fn unwatch(&self, id: WatchId) {
        self.inner.watchers.borrow_mut().retain(|(w, _)| *w != id);
    }

    pub fn watcher_count(&self) -> usize {
        self.inner.watchers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: u16) -> ContainerLayout {
        ContainerLayout {
            viewport: Rect::new(0, 0, width, 3),
            axis: Axis::X,
            slide_sizes: vec![width; 3],
            gap: 1,
        }
    }

    #[test]
    fn watchers_fire_only_on_change() {
        let binding = ContainerBinding::new();
        let hits = Rc::new(Cell::new(0));
        let seen = hits.clone();
        let id = binding.watch(move |_| seen.set(seen.get() + 1));

        assert!(binding.bind(layout(10)));
        assert!(!binding.bind(layout(10)));
        assert!(binding.bind(layout(12)));
        assert_eq!(hits.get(), 2);

        binding.unwatch(id);
        binding.bind(layout(14));
        assert_eq!(hits.get(), 2);
        assert_eq!(binding.watcher_count(), 0);
    }

    #[test]
    fn track_len_counts_gaps_between_slides() {
        assert_eq!(layout(10).track_len(), 32);
        assert_eq!(layout(10).viewport_len(), 10);
    }
}
